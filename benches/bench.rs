use std::cell::Cell;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use pure_sort::comparator::{Counting, Natural};
use pure_sort::patterns;
use pure_sort::stable::{merge_sort, rank_sort};
use pure_sort::unstable::{quick_sort, skew_heap_sort};
use pure_sort::Sort;

fn bench_sort<S: Sort>(
    c: &mut Criterion,
    test_size: usize,
    pattern_name: &str,
    pattern_provider: fn(usize) -> Vec<i32>,
) {
    let batch_size = if test_size > 30 {
        BatchSize::LargeInput
    } else {
        BatchSize::SmallInput
    };

    c.bench_function(&format!("{}-{pattern_name}-{test_size}", S::name()), |b| {
        b.iter_batched(
            || pattern_provider(test_size),
            |test_data| black_box(<S as Sort>::sorted(black_box(test_data.as_slice()))),
            batch_size,
        )
    });
}

fn print_comparison_count<S: Sort>(input: &[i32]) {
    let count = Cell::new(0u64);
    let cmp = Counting::new(Natural, &count);

    black_box(<S as Sort>::sorted_by(input, &cmp));

    println!("{:>26} {:>8} {:>12}", S::name(), input.len(), count.get());
}

/// Wall time hides comparator cost for expensive keys, so the comparison
/// counts are printed once up front and can be tracked alongside.
fn comparison_count_table(sizes: &[usize]) {
    println!("\ncomparisons on random input:");
    println!("{:>26} {:>8} {:>12}", "strategy", "size", "comparisons");

    for &size in sizes {
        let input = patterns::random(size);

        print_comparison_count::<rank_sort::SortImpl>(&input);
        print_comparison_count::<merge_sort::SortImpl>(&input);
        print_comparison_count::<quick_sort::SortImpl>(&input);
        print_comparison_count::<skew_heap_sort::SortImpl>(&input);
    }

    println!();
}

fn criterion_benchmark(c: &mut Criterion) {
    // Fresh values on every batch; repeatability matters less than not
    // benchmarking one lucky input over and over.
    patterns::disable_fixed_seed();

    comparison_count_table(&[100, 1_000]);

    let test_sizes = [20, 100, 1_000, 2_048];

    let pattern_providers: [(&str, fn(usize) -> Vec<i32>); 6] = [
        ("random", patterns::random),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("all_equal", patterns::all_equal),
        ("saw_mixed", |size| {
            patterns::saw_mixed(size, (size as f64).log2().round() as usize)
        }),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for &test_size in &test_sizes {
        for &(pattern_name, pattern_provider) in &pattern_providers {
            bench_sort::<rank_sort::SortImpl>(c, test_size, pattern_name, pattern_provider);
            bench_sort::<merge_sort::SortImpl>(c, test_size, pattern_name, pattern_provider);
            bench_sort::<quick_sort::SortImpl>(c, test_size, pattern_name, pattern_provider);
            bench_sort::<skew_heap_sort::SortImpl>(c, test_size, pattern_name, pattern_provider);
        }
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
