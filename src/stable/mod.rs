pub mod merge_sort;
pub mod rank_sort;
