//! Ordering policies.
//!
//! A sort strategy never compares elements directly. It extracts a key per
//! element via [`Comparator::key`] and orders keys via [`Comparator::less`],
//! which must be a strict weak order: irreflexive, transitive, asymmetric,
//! with transitive incomparability. Two keys are equal when neither is less
//! than the other.
//!
//! A comparator violating these axioms is a caller contract violation. It is
//! not detected; the strategies still return a permutation of the input, but
//! the result may be neither sorted nor stable.

use std::cell::Cell;

pub trait Comparator<T> {
    type Key;

    fn key(&self, item: &T) -> Self::Key;

    fn less(&self, a: &Self::Key, b: &Self::Key) -> bool;

    /// Shorthand for comparing two elements through their keys.
    #[inline]
    fn less_items(&self, a: &T, b: &T) -> bool {
        self.less(&self.key(a), &self.key(b))
    }
}

/// Orders elements by their own `Ord` implementation.
pub struct Natural;

impl<T: Ord + Clone> Comparator<T> for Natural {
    type Key = T;

    #[inline]
    fn key(&self, item: &T) -> T {
        item.clone()
    }

    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Orders elements by an extracted key's `Ord` implementation.
pub struct KeyOrder<F> {
    key_fn: F,
}

pub fn key_order<T, K, F>(key_fn: F) -> KeyOrder<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    KeyOrder { key_fn }
}

impl<T, K, F> Comparator<T> for KeyOrder<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    type Key = K;

    #[inline]
    fn key(&self, item: &T) -> K {
        (self.key_fn)(item)
    }

    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        a < b
    }
}

/// Orders elements by an extracted key and an explicit strict-less predicate.
pub struct KeyOrderBy<F, L> {
    key_fn: F,
    less_fn: L,
}

pub fn key_order_by<T, K, F, L>(key_fn: F, less_fn: L) -> KeyOrderBy<F, L>
where
    F: Fn(&T) -> K,
    L: Fn(&K, &K) -> bool,
{
    KeyOrderBy { key_fn, less_fn }
}

impl<T, K, F, L> Comparator<T> for KeyOrderBy<F, L>
where
    F: Fn(&T) -> K,
    L: Fn(&K, &K) -> bool,
{
    type Key = K;

    #[inline]
    fn key(&self, item: &T) -> K {
        (self.key_fn)(item)
    }

    #[inline]
    fn less(&self, a: &K, b: &K) -> bool {
        (self.less_fn)(a, b)
    }
}

/// Reverses the order of the wrapped comparator.
pub struct Rev<C>(pub C);

impl<T, C> Comparator<T> for Rev<C>
where
    C: Comparator<T>,
{
    type Key = C::Key;

    #[inline]
    fn key(&self, item: &T) -> C::Key {
        self.0.key(item)
    }

    #[inline]
    fn less(&self, a: &C::Key, b: &C::Key) -> bool {
        self.0.less(b, a)
    }
}

/// Counts `less` evaluations of the wrapped comparator through a shared cell.
///
/// Key extraction is not counted; the complexity claims of the strategies are
/// stated in comparator evaluations.
pub struct Counting<'a, C> {
    inner: C,
    count: &'a Cell<u64>,
}

impl<'a, C> Counting<'a, C> {
    pub fn new(inner: C, count: &'a Cell<u64>) -> Self {
        Self { inner, count }
    }
}

impl<'a, T, C> Comparator<T> for Counting<'a, C>
where
    C: Comparator<T>,
{
    type Key = C::Key;

    #[inline]
    fn key(&self, item: &T) -> C::Key {
        self.inner.key(item)
    }

    #[inline]
    fn less(&self, a: &C::Key, b: &C::Key) -> bool {
        self.count.set(self.count.get() + 1);
        self.inner.less(a, b)
    }
}
