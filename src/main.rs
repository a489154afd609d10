use std::process;

use clap::{Parser, ValueEnum};
use log::{debug, info};

use quicksort_comp::unstable::{hoare_crawl, hoare_crawl_stack};
use quicksort_comp::{reference_sort, SortRange};

const DEMO_VALUES: [i64; 11] = [8, 5, 5, 3, 8, 7, -13, 5345, 4, 6, 4];

/// Sorts a list of integers in place and prints it before and after.
#[derive(Parser)]
#[command(name = "quicksort-demo")]
#[command(version, about)]
struct Cli {
    /// Values to sort. Without any, the built-in demonstration array is used.
    #[arg(allow_negative_numbers = true)]
    values: Vec<i64>,

    /// First index of the inclusive range to sort
    #[arg(long, default_value_t = 0)]
    left: usize,

    /// Last index of the inclusive range to sort [default: last element]
    #[arg(long)]
    right: Option<usize>,

    /// How pending sub-slices are scheduled
    #[arg(long, value_enum, default_value_t = Driver::Recursive)]
    driver: Driver,

    /// Also run the reference sort and fail if the results differ
    #[arg(long)]
    check: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Driver {
    Recursive,
    Stack,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut values = if cli.values.is_empty() {
        DEMO_VALUES.to_vec()
    } else {
        cli.values
    };

    // An empty input has no last index, any right bound is a no-op then.
    let right = cli
        .right
        .unwrap_or_else(|| SortRange::full(values.len()).map_or(0, |full| full.right));
    debug!("sorting [{}, {right}] with the {:?} driver", cli.left, cli.driver);

    let original = values.clone();
    println!("a {:?}", values);

    let res = match cli.driver {
        Driver::Recursive => hoare_crawl::sort_in_place(&mut values, cli.left, right),
        Driver::Stack => hoare_crawl_stack::sort_in_place(&mut values, cli.left, right),
    };

    if let Err(err) = res {
        eprintln!("error: {err}");
        process::exit(2);
    }

    println!("a {:?}", values);

    if cli.check {
        let mut expected = original.clone();
        // The range was accepted above, so resolving it again can't fail.
        if let Ok(Some(range)) = SortRange::new(cli.left, right).resolve(expected.len()) {
            let sorted = reference_sort(&original[range.clone()]);
            expected[range].clone_from_slice(&sorted);
        }

        if expected != values {
            eprintln!("error: reference sort disagrees: {:?}", expected);
            process::exit(1);
        }

        info!("reference sort agrees");
    }
}
