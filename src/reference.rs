//! Functional partition sort, used as the oracle the in-place sorts are checked against.
//!
//! Takes the head as pivot, sorts everything `<=` head and everything `>` head separately and
//! concatenates `sorted(<=) + [head] + sorted(>)`. Equal elements are routed to the left, the
//! opposite of the in-place sorts; the sorted output is the same.

/// Returns a sorted copy of `v`, `v` itself is left as is.
pub fn reference_sort<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    sorted(v.to_vec())
}

/// Consumes `v` and returns its elements in ascending order.
pub fn sorted<T>(v: Vec<T>) -> Vec<T>
where
    T: Ord,
{
    // Work list instead of recursion, the naive version needs a call depth of len on sorted
    // input. Popped in LIFO order, so the pieces of one split are pushed right to left.
    enum Pending<T> {
        Unsorted(Vec<T>),
        Placed(T),
    }

    let mut out = Vec::with_capacity(v.len());
    let mut pending = vec![Pending::Unsorted(v)];

    while let Some(next) = pending.pop() {
        match next {
            Pending::Placed(elem) => out.push(elem),
            Pending::Unsorted(items) => {
                let mut items = items.into_iter();
                let Some(head) = items.next() else {
                    continue;
                };

                let (le, gt): (Vec<T>, Vec<T>) = items.partition(|elem| *elem <= head);

                if !gt.is_empty() {
                    pending.push(Pending::Unsorted(gt));
                }
                pending.push(Pending::Placed(head));
                if !le.is_empty() {
                    pending.push(Pending::Unsorted(le));
                }
            }
        }
    }

    out
}
