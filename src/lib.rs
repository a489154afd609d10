//! In-place first-element pivot quicksorts and a functional reference sort used as their oracle.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }
        }
    };
}

pub mod error;
pub mod range;
pub mod reference;
pub mod unstable;

pub use error::{Result, SortError};
pub use range::SortRange;
pub use reference::reference_sort;
pub use unstable::hoare_crawl::sort_in_place;
