use crate::comparator::Comparator;

/// Common contract implemented by every sorting strategy in this crate.
///
/// All strategies are pure: the input slice is left untouched and the result
/// is a freshly allocated permutation of it, non-decreasing per the supplied
/// comparator. Strategies whose `name()` ends in `_stable` additionally keep
/// equal-key elements in their original relative order.
pub trait Sort {
    fn name() -> String;

    fn sorted<T>(input: &[T]) -> Vec<T>
    where
        T: Ord + Clone;

    fn sorted_by<T, C>(input: &[T], cmp: &C) -> Vec<T>
    where
        T: Clone,
        C: Comparator<T>;
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sorted<T>(input: &[T]) -> Vec<T>
            where
                T: Ord + Clone,
            {
                sorted_by(input, &crate::comparator::Natural)
            }

            #[inline]
            fn sorted_by<T, C>(input: &[T], cmp: &C) -> Vec<T>
            where
                T: Clone,
                C: crate::comparator::Comparator<T>,
            {
                sorted_by(input, cmp)
            }
        }
    };
}

pub mod comparator;
pub mod layout;
pub mod patterns;
pub mod stable;
pub mod unstable;
