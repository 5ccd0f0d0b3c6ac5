//! Head-pivot quicksort, swept iteratively.
//!
//! The textbook recursion `sort(lower) ++ [pivot] ++ sort(higher)` is
//! realized as repeated grading passes over a worklist of segments: every
//! pass partitions each still-open segment in place in the worklist, so the
//! worklist stays in global output order throughout. Adversarial inputs
//! (already sorted, head pivot) degrade to O(n^2) comparisons but never to
//! O(n) call-stack depth.
//!
//! Elements equal to the pivot are routed to the higher side in traversal
//! order. That preserves their order relative to each other, but not
//! relative to the pivot, so the strategy makes no stability claim.

use crate::comparator::Comparator;

sort_impl!("quick_sort_unstable");

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
    let entries: Vec<(C::Key, T)> = input
        .iter()
        .map(|item| (cmp.key(item), item.clone()))
        .collect();

    let mut worklist: Vec<Segment<C::Key, T>> = Vec::new();
    if !entries.is_empty() {
        worklist.push(open_or_settled(entries));
    }

    // Each pass settles at least the pivot of every open segment, so the
    // sweep terminates after at most n passes.
    loop {
        let mut any_open = false;
        let mut next = Vec::with_capacity(worklist.len());

        for segment in worklist {
            match segment {
                Segment::Settled(entry) => next.push(Segment::Settled(entry)),
                Segment::Open(segment) => {
                    any_open = true;

                    let mut rest = segment.into_iter();
                    if let Some(pivot) = rest.next() {
                        let mut lower = Vec::new();
                        let mut higher = Vec::new();
                        for entry in rest {
                            if cmp.less(&entry.0, &pivot.0) {
                                lower.push(entry);
                            } else {
                                higher.push(entry);
                            }
                        }

                        if !lower.is_empty() {
                            next.push(open_or_settled(lower));
                        }
                        next.push(Segment::Settled(pivot));
                        if !higher.is_empty() {
                            next.push(open_or_settled(higher));
                        }
                    }
                }
            }
        }

        worklist = next;
        if !any_open {
            break;
        }
    }

    let mut out = Vec::with_capacity(n);
    for segment in worklist {
        match segment {
            Segment::Settled((_, item)) => out.push(item),
            Segment::Open(segment) => out.extend(segment.into_iter().map(|(_, item)| item)),
        }
    }
    out
}

/// One partition step: the head is the pivot, the tail is traversed in order
/// and routed to `lower` when strictly less than the pivot, to `higher`
/// otherwise. Returns `None` for an empty sequence.
pub fn partition<T, C>(seq: &[T], cmp: &C) -> Option<(Vec<T>, T, Vec<T>)>
where
    T: Clone,
    C: Comparator<T>,
{
    let (pivot, rest) = seq.split_first()?;

    let mut lower = Vec::new();
    let mut higher = Vec::new();
    for item in rest {
        if cmp.less_items(item, pivot) {
            lower.push(item.clone());
        } else {
            higher.push(item.clone());
        }
    }

    Some((lower, pivot.clone(), higher))
}

enum Segment<K, T> {
    /// In final position; one entry.
    Settled((K, T)),
    /// Still needs grading; at least two entries.
    Open(Vec<(K, T)>),
}

fn open_or_settled<K, T>(mut segment: Vec<(K, T)>) -> Segment<K, T> {
    if segment.len() == 1 {
        match segment.pop() {
            Some(entry) => Segment::Settled(entry),
            None => Segment::Open(segment),
        }
    } else {
        Segment::Open(segment)
    }
}
