//! Non-recursive variant of [`hoare_crawl`](super::hoare_crawl), pending sub-slices live on a
//! fixed-size explicit stack.
//!
//! Uses the same partition step, so both produce identical output for the same input.

use core::ops::Range;

use log::trace;

use crate::error::Result;
use crate::range::SortRange;
use crate::unstable::partition::crawl_partition;

sort_impl!("hoare_crawl_stack_unstable");

/// Sorts the whole slice ascending. Not stable.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b));
}

/// Sorts the inclusive range `[left, right]` of `v` ascending, in place.
///
/// Same contract as [`hoare_crawl::sort_in_place`](super::hoare_crawl::sort_in_place).
pub fn sort_in_place<T>(v: &mut [T], left: usize, right: usize) -> Result<()>
where
    T: Ord,
{
    if let Some(range) = SortRange::new(left, right).resolve(v.len())? {
        sort(&mut v[range]);
    }

    Ok(())
}

fn quicksort<T, F>(v_full: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Only the longer side of a split is ever deferred. The parent of each stack entry is less
    // than half the size of the parent of the entry below it, so there are at most log2(len)
    // entries.
    const MAX_DEPTH: usize = usize::BITS as usize;
    let mut stack = [(0usize, 0usize); MAX_DEPTH];
    let mut stack_len = 0;

    let mut current: Range<usize> = 0..v_full.len();

    loop {
        if current.len() < 2 {
            if stack_len == 0 {
                return;
            }

            stack_len -= 1;
            let (begin, end) = stack[stack_len];
            current = begin..end;
            continue;
        }

        let mid = current.start + crawl_partition(&mut v_full[current.clone()], is_less);
        trace!("partitioned {current:?} at {mid}");

        let left = current.start..mid;
        let right = (mid + 1)..current.end;

        let (shorter, longer) = if left.len() < right.len() {
            (left, right)
        } else {
            (right, left)
        };

        if longer.len() >= 2 {
            stack[stack_len] = (longer.start, longer.end);
            stack_len += 1;
        }

        current = shorter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unstable::hoare_crawl;

    #[test]
    fn demonstration_input() {
        let mut v = [8, 5, 5, 3, 8, 7, -13, 5345, 4, 6, 4];
        sort_in_place(&mut v, 0, 10).unwrap();
        assert_eq!(v, [-13, 3, 4, 4, 5, 5, 6, 7, 8, 8, 5345]);
    }

    #[test]
    fn matches_recursive_driver() {
        let inputs: [&[i32]; 5] = [
            &[],
            &[1],
            &[2, 2, 2, 2],
            &[5, 9, 1, 7, 5, 5, 0, -3, 9],
            &[15, -1, 3, -1, -3, -1, 7],
        ];

        for input in inputs {
            let mut a = input.to_vec();
            let mut b = input.to_vec();
            sort(&mut a);
            hoare_crawl::sort(&mut b);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn deep_presorted_input() {
        let mut all_equal = vec![7u8; 20_000];
        sort(&mut all_equal);
        assert!(all_equal.iter().all(|&x| x == 7));

        let mut descending = (0..20_000).rev().collect::<Vec<i64>>();
        sort(&mut descending);
        assert!(descending.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn sub_range() {
        let mut v = [9, 7, 5, 3, 1, 0];
        sort_in_place(&mut v, 0, 2).unwrap();
        assert_eq!(v, [5, 7, 9, 3, 1, 0]);
        assert!(sort_in_place(&mut v, 4, 6).is_err());
    }
}
