//! Stable rank-based sort.
//!
//! Every element's output position is computed directly, by counting how many
//! other elements must precede it. No divide-and-conquer, no intermediate
//! order, just O(n^2) comparator evaluations and a single scatter.

use crate::comparator::Comparator;

sort_impl!("rank_sort_stable");

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
    let keys: Vec<C::Key> = input.iter().map(|item| cmp.key(item)).collect();

    // rank(p) = |{q : key_q < key_p}| + |{q < p : key_q == key_p}|
    //
    // The first term orders distinct keys, the second breaks ties by input
    // position. For a valid strict weak order this makes every rank unique
    // and in [0, n), and the tie-break term is exactly what makes the sort
    // stable.
    let mut slots: Vec<Option<T>> = vec![None; n];
    let mut spill: Vec<T> = Vec::new();

    for (p, item) in input.iter().enumerate() {
        let key_p = &keys[p];

        let mut rank = 0;
        for (q, key_q) in keys.iter().enumerate() {
            if q == p {
                continue;
            }
            if cmp.less(key_q, key_p) {
                rank += 1;
            } else if q < p && !cmp.less(key_p, key_q) {
                rank += 1;
            }
        }

        if slots[rank].is_none() {
            slots[rank] = Some(item.clone());
        } else {
            // Colliding ranks only happen when the comparator is not a
            // strict weak order. The contract still promises a permutation,
            // so hold on to the loser and fill it into a free slot below.
            spill.push(item.clone());
        }
    }

    let mut out = Vec::with_capacity(n);
    let mut spill = spill.into_iter();
    for slot in slots {
        match slot {
            Some(item) => out.push(item),
            None => out.extend(spill.next()),
        }
    }
    out.extend(spill);

    out
}
