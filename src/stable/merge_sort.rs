//! Stable bottom-up merge sort.
//!
//! Width-1 blocks are sorted by definition; every pass merges adjacent block
//! pairs and doubles the width until one block spans the input. This is the
//! doubling-sweep realization of the usual recursive halving and produces
//! the identical stable result in O(n log n) comparisons.

use crate::comparator::Comparator;

sort_impl!("merge_sort_stable");

#[inline]
pub fn sorted<T>(input: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    sorted_by(input, &crate::comparator::Natural)
}

pub fn sorted_by<T, C>(input: &[T], cmp: &C) -> Vec<T>
where
    T: Clone,
    C: Comparator<T>,
{
    let n = input.len();

    // Decorate each element with its key once. The sweep only ever moves
    // (key, element) entries afterwards, so keys are extracted exactly n
    // times no matter how many passes run.
    let mut entries: Vec<(C::Key, T)> = input
        .iter()
        .map(|item| (cmp.key(item), item.clone()))
        .collect();

    let mut width = 1;
    while width < n {
        entries = merge_pass(entries, width, cmp);
        width *= 2;
    }

    entries.into_iter().map(|(_, item)| item).collect()
}

/// One sweep: merge every adjacent pair of `width`-sized blocks. The final
/// block of a pass may be shorter than `width`, or have no right partner at
/// all, in which case it is carried over unchanged.
fn merge_pass<T, C>(entries: Vec<(C::Key, T)>, width: usize, cmp: &C) -> Vec<(C::Key, T)>
where
    C: Comparator<T>,
{
    let n = entries.len();
    let mut out = Vec::with_capacity(n);

    let mut iter = entries.into_iter();
    let mut remaining = n;
    while remaining > 0 {
        let left: Vec<_> = iter.by_ref().take(width.min(remaining)).collect();
        remaining -= left.len();
        let right: Vec<_> = iter.by_ref().take(width.min(remaining)).collect();
        remaining -= right.len();

        merge_into(&mut out, left, right, cmp);
    }

    out
}

/// Two-way merge of sorted blocks, left block appearing earlier in the input.
fn merge_into<T, C>(
    out: &mut Vec<(C::Key, T)>,
    left: Vec<(C::Key, T)>,
    right: Vec<(C::Key, T)>,
    cmp: &C,
) where
    C: Comparator<T>,
{
    let mut left = left.into_iter();
    let mut right = right.into_iter();

    let mut l_head = left.next();
    let mut r_head = right.next();

    loop {
        match (l_head, r_head) {
            (Some(l), Some(r)) => {
                // The right head is emitted only when strictly less. On equal
                // keys the left side wins, which keeps equal-key elements in
                // input order: that single rule is the stability guarantee.
                if cmp.less(&r.0, &l.0) {
                    out.push(r);
                    l_head = Some(l);
                    r_head = right.next();
                } else {
                    out.push(l);
                    l_head = left.next();
                    r_head = Some(r);
                }
            }
            // One side exhausted: the rest of the other is already sorted
            // and everything in it belongs after what was emitted.
            (Some(l), None) => {
                out.push(l);
                out.extend(left);
                break;
            }
            (None, Some(r)) => {
                out.push(r);
                out.extend(right);
                break;
            }
            (None, None) => break,
        }
    }
}
