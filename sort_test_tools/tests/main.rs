use sort_test_tools::instantiate_sort_tests;
use sort_test_tools::Sort;

// Control run of the shared suite against the standard library.
struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "rust_std_unstable".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord,
    {
        arr.sort_unstable();
    }
}

instantiate_sort_tests!(SortImpl);
