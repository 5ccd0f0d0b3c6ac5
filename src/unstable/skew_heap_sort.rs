//! Heapsort over a self-adjusting skew heap.
//!
//! The heap is an owned binary tree with the heap property (a node's key is
//! not greater than either child's key) and no balance bookkeeping at all.
//! Every merge walks right spines and swaps the surviving node's children,
//! which is what keeps merges amortized logarithmic.
//!
//! The merge rule gives no guarantee about the relative order of equal keys,
//! so the strategy makes no stability claim.

use crate::comparator::Comparator;

sort_impl!("skew_heap_sort_unstable");

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
    let less = |a: &C::Key, b: &C::Key| cmp.less(a, b);

    let mut heap = SkewHeap::heapify(
        input.iter().map(|item| (cmp.key(item), item.clone())),
        &less,
    );

    let mut out = Vec::with_capacity(input.len());
    while let Some(((_key, item), rest)) = heap.pop_min(&less) {
        out.push(item);
        heap = rest;
    }
    out
}

/// Heap-ordered binary tree; the empty tree is a valid, distinguished value.
pub enum SkewHeap<K, V> {
    Empty,
    Node(Box<Node<K, V>>),
}

pub struct Node<K, V> {
    key: K,
    value: V,
    left: SkewHeap<K, V>,
    right: SkewHeap<K, V>,
}

impl<K, V> SkewHeap<K, V> {
    pub fn singleton(key: K, value: V) -> Self {
        SkewHeap::Node(Box::new(Node {
            key,
            value,
            left: SkewHeap::Empty,
            right: SkewHeap::Empty,
        }))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SkewHeap::Empty)
    }

    /// Root key and value, the minimum of the heap.
    pub fn top(&self) -> Option<(&K, &V)> {
        match self {
            SkewHeap::Empty => None,
            SkewHeap::Node(node) => Some((&node.key, &node.value)),
        }
    }

    /// Merges two heaps. The root that is *not* smaller recursively merges
    /// its right subtree with the other heap, and the surviving node's
    /// former children swap sides (the skew step).
    pub fn merge<L>(h1: Self, h2: Self, less: &L) -> Self
    where
        L: Fn(&K, &K) -> bool,
    {
        match (h1, h2) {
            (SkewHeap::Empty, other) | (other, SkewHeap::Empty) => other,
            (SkewHeap::Node(a), SkewHeap::Node(b)) => {
                if less(&b.key, &a.key) {
                    let Node {
                        key,
                        value,
                        left,
                        right,
                    } = *b;
                    SkewHeap::Node(Box::new(Node {
                        key,
                        value,
                        left: Self::merge(SkewHeap::Node(a), right, less),
                        right: left,
                    }))
                } else {
                    let Node {
                        key,
                        value,
                        left,
                        right,
                    } = *a;
                    SkewHeap::Node(Box::new(Node {
                        key,
                        value,
                        left: Self::merge(right, SkewHeap::Node(b), less),
                        right: left,
                    }))
                }
            }
        }
    }

    pub fn push<L>(self, key: K, value: V, less: &L) -> Self
    where
        L: Fn(&K, &K) -> bool,
    {
        Self::merge(self, Self::singleton(key, value), less)
    }

    /// Removes the minimum: the root is split off and its children merged.
    pub fn pop_min<L>(self, less: &L) -> Option<((K, V), Self)>
    where
        L: Fn(&K, &K) -> bool,
    {
        match self {
            SkewHeap::Empty => None,
            SkewHeap::Node(node) => {
                let Node {
                    key,
                    value,
                    left,
                    right,
                } = *node;
                Some(((key, value), Self::merge(left, right, less)))
            }
        }
    }

    /// Folds `push` over the entries in order.
    pub fn heapify<I, L>(entries: I, less: &L) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        L: Fn(&K, &K) -> bool,
    {
        let mut heap = SkewHeap::Empty;
        for (key, value) in entries {
            heap = heap.push(key, value, less);
        }
        heap
    }
}
