//! Recursive quicksort, first element as pivot, crawling two-cursor partition.
//!
//! *O*(*n*^2) worst-case time on presorted and all-equal inputs, but the recursion always descends
//! into the shorter side, so the call depth stays below log2(*n*).

use log::trace;

use crate::error::Result;
use crate::range::SortRange;
use crate::unstable::partition::crawl_partition;

sort_impl!("hoare_crawl_unstable");

/// Sorts the whole slice ascending. Not stable.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b));
}

/// Sorts the inclusive range `[left, right]` of `v` ascending, in place. Elements outside the
/// range are not touched.
///
/// Empty slices, `left > right` and `left == right` are no-ops. A non-empty range reaching past
/// the end of `v` is rejected before anything is moved.
pub fn sort_in_place<T>(v: &mut [T], left: usize, right: usize) -> Result<()>
where
    T: Ord,
{
    if let Some(range) = SortRange::new(left, right).resolve(v.len())? {
        sort(&mut v[range]);
    }

    Ok(())
}

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    loop {
        if v.len() < 2 {
            return;
        }

        let mid = crawl_partition(v, is_less);
        trace!("partitioned len {} at {mid}", v.len());

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(mid);
        let right = &mut right[1..];

        // Recurse into the shorter side, continue with the longer one.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}
