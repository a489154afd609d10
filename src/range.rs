use core::ops::Range;

use log::debug;

use crate::error::{Result, SortError};

/// Inclusive `[left, right]` index pair selecting the part of a slice to sort.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SortRange {
    pub left: usize,
    pub right: usize,
}

impl SortRange {
    pub fn new(left: usize, right: usize) -> Self {
        Self { left, right }
    }

    /// The range covering all of a slice of length `len`, `None` if the slice is empty.
    pub fn full(len: usize) -> Option<Self> {
        len.checked_sub(1).map(|right| Self::new(0, right))
    }

    /// Resolves the range against a slice of length `len`.
    ///
    /// Returns `Ok(None)` when there is nothing to sort: the slice is empty, `left > right`, or
    /// the range holds a single in-bounds element. Otherwise returns the equivalent half-open
    /// range, which always holds at least two elements.
    ///
    /// A non-empty range with `right >= len` is rejected with [`SortError::IndexOutOfRange`].
    pub fn resolve(self, len: usize) -> Result<Option<Range<usize>>> {
        let Self { left, right } = self;

        if len == 0 || left > right {
            debug!("nothing to sort in [{left}, {right}] of len {len}");
            return Ok(None);
        }

        if right >= len {
            debug!("rejecting [{left}, {right}] for len {len}");
            return Err(SortError::IndexOutOfRange { index: right, len });
        }

        if left == right {
            return Ok(None);
        }

        Ok(Some(left..right + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_range() {
        assert_eq!(SortRange::full(0), None);
        assert_eq!(SortRange::full(1), Some(SortRange::new(0, 0)));
        assert_eq!(SortRange::full(11), Some(SortRange::new(0, 10)));
    }

    #[test]
    fn base_cases_resolve_to_nothing() {
        // Empty slices accept any range.
        assert_eq!(SortRange::new(0, 0).resolve(0), Ok(None));
        assert_eq!(SortRange::new(3, 9).resolve(0), Ok(None));
        assert_eq!(SortRange::new(2, 2).resolve(4), Ok(None));
        assert_eq!(SortRange::new(3, 1).resolve(4), Ok(None));
        assert_eq!(SortRange::new(100, 1).resolve(4), Ok(None));
    }

    #[test]
    fn in_bounds() {
        assert_eq!(SortRange::new(0, 10).resolve(11), Ok(Some(0..11)));
        assert_eq!(SortRange::new(2, 5).resolve(11), Ok(Some(2..6)));
    }

    #[test]
    fn out_of_bounds() {
        assert_eq!(
            SortRange::new(0, 11).resolve(11),
            Err(SortError::IndexOutOfRange { index: 11, len: 11 })
        );
        assert_eq!(
            SortRange::new(5, 5).resolve(4),
            Err(SortError::IndexOutOfRange { index: 5, len: 4 })
        );
        assert_eq!(
            SortRange::new(0, usize::MAX).resolve(4),
            Err(SortError::IndexOutOfRange {
                index: usize::MAX,
                len: 4
            })
        );
    }
}
