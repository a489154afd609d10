/// Partitions `v` around its first element with two cursors crawling towards each other.
///
/// The left cursor skips elements for which `is_less(elem, pivot)` holds, the right cursor skips
/// the rest, and each pair they stop at is swapped. The pivot itself stays at `v[0]` during the
/// crawl and is swapped into the split point at the end. Comparisons always happen on the
/// elements inside `v`, never on copies.
///
/// Returns the final index `mid` of the pivot. When the call returns, all elements in `v[..mid]`
/// are less than the pivot and all elements in `v[mid + 1..]` are not, so elements equal to the
/// pivot end up on the right side.
///
/// If `is_less` does not implement a total order the split is unspecified, but `mid` is always
/// in-bounds for a non-empty `v` and `v` stays a permutation of its input. Same is true if
/// `is_less` panics.
pub(crate) fn crawl_partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if v.is_empty() {
        return 0;
    }

    let (pivot, rest) = v.split_at_mut(1);
    let pivot = &pivot[0];

    // `rest[..lo]` is known to be less than the pivot, `rest[hi..]` is known to be not less.
    let mut lo = 0;
    let mut hi = rest.len();

    while lo < hi {
        while lo < hi && is_less(&rest[lo], pivot) {
            lo += 1;
        }

        while lo < hi && !is_less(&rest[hi - 1], pivot) {
            hi -= 1;
        }

        if lo < hi {
            // rest[lo] is not less than the pivot, rest[hi - 1] is.
            hi -= 1;
            rest.swap(lo, hi);
            lo += 1;
        }
    }

    // rest[i] lives at v[i + 1], so v[1..=lo] holds the lesser elements and v[lo] is the last of
    // them, or the pivot itself if there are none.
    v.swap(0, lo);

    lo
}
