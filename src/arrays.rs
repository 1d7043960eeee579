//! Test-array constructors for exercising and benchmarking the sorter.
//!
//! The shapes here are the ones worth measuring an adjacent-swap sort
//! against: uniform random, already sorted (best case), reverse sorted
//! (worst case), and nearly sorted.

use rand::Rng;

/// Uniform random values in `min..=max`.
///
/// # Panics
///
/// Panics if `min > max`.
pub fn random_array(len: usize, min: i32, max: i32) -> Vec<i32> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random_range(min..=max)).collect()
}

/// `1..=len`, ascending.
pub fn sorted_array(len: usize) -> Vec<i32> {
    (1..=len as i32).collect()
}

/// `len..=1`, descending.
pub fn reverse_sorted_array(len: usize) -> Vec<i32> {
    (1..=len as i32).rev().collect()
}

/// A sorted base with `swap_count` random position swaps applied.
///
/// Swap positions are drawn independently, so the result may contain fewer
/// than `swap_count` displaced elements when positions coincide.
pub fn nearly_sorted_array(len: usize, swap_count: usize) -> Vec<i32> {
    let mut data = sorted_array(len);
    if len < 2 {
        return data;
    }

    let mut rng = rand::rng();
    for _ in 0..swap_count {
        let i = rng.random_range(0..len);
        let j = rng.random_range(0..len);
        data.swap(i, j);
    }
    data
}
