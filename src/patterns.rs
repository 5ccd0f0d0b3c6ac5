//! Input distributions for testing and benchmarking the strategies.
//! Currently limited to i32 values.

use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::prelude::*;

// --- Public ---

pub fn random(size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    random_vec(size)
}

pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::
    let mut rng = new_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_random_size(max_size: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::
    // < size > is random from call to call, with max_size as maximum size.

    let random_size = random_uniform(1, 0..=(max_size as i32));
    random(random_size[0] as usize)
}

/// Few distinct values, so equal keys are everywhere. The interesting input
/// for stability and tie-break behavior.
pub fn few_distinct(size: usize, distinct: usize) -> Vec<i32> {
    random_uniform(size, 0..=(distinct.max(1) as i32 - 1))
}

pub fn all_equal(size: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..size).map(|_| 66).collect()
}

pub fn ascending(size: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..size as i32).collect()
}

pub fn descending(size: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..size as i32).rev().collect()
}

pub fn ascending_saw(size: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saw(size, saw_count, |chunk| chunk.sort())
}

pub fn descending_saw(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saw(size, saw_count, |chunk| {
        chunk.sort_by_key(|&e| std::cmp::Reverse(e))
    })
}

pub fn saw_mixed(size: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(size);
    let chunk_size = (size / saw_count.max(1)).max(1);
    let directions = random_uniform((size / chunk_size) + 1, 0..=1);

    for (i, chunk) in vals.chunks_mut(chunk_size).enumerate() {
        if directions[i] == 0 {
            chunk.sort();
        } else {
            chunk.sort_by_key(|&e| std::cmp::Reverse(e));
        }
    }

    vals
}

pub fn pipe_organ(size: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut vals = random_vec(size);

    let (first_half, second_half) = vals.split_at_mut(size / 2);
    first_half.sort();
    second_half.sort_by_key(|&e| std::cmp::Reverse(e));

    vals
}

/// By default every pattern call within a process derives from one fixed
/// seed, so a failing test can be re-run. Benchmarks want fresh values each
/// call instead.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        static SEED: OnceCell<u64> = OnceCell::new();
        *SEED.get_or_init(|| thread_rng().gen())
    } else {
        thread_rng().gen()
    }
}

// --- Private ---

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);

fn new_rng() -> StdRng {
    rand::SeedableRng::seed_from_u64(random_init_seed())
}

fn random_vec(size: usize) -> Vec<i32> {
    let mut rng = new_rng();

    (0..size).map(|_| rng.gen::<i32>()).collect()
}

fn saw(size: usize, saw_count: usize, sort_chunk: impl Fn(&mut [i32])) -> Vec<i32> {
    if size == 0 {
        return Vec::new();
    }

    let mut vals = random_vec(size);
    let chunk_size = (size / saw_count.max(1)).max(1);

    for chunk in vals.chunks_mut(chunk_size) {
        sort_chunk(chunk);
    }

    vals
}
