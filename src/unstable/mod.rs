pub mod quick_sort;
pub mod skew_heap_sort;
