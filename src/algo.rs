//! Adjacent-swap sorting algorithms and the public entry points.
//!
//! Three traversal strategies share one comparison/swap primitive:
//! - **Standard**: fixed shrinking passes with an early exit once a pass
//!   performs no swap.
//! - **Optimized**: the scan boundary drops to the last position where the
//!   previous pass swapped, skipping trailing runs that are already sorted.
//! - **Bidirectional**: cocktail sort, alternating forward and backward
//!   passes so small elements stranded near the end travel one slot per
//!   cycle instead of one slot per full pass.
//!
//! The main entry points are [`sort`] and [`sort_mut`].

use crate::core::{Metrics, SortError, SortResult, Strategy};
use cuneiform::cuneiform;
use std::time::Instant;

// Cache-aligned counters, bumped on every comparison in the inner loops.
#[cuneiform]
struct Counters {
    comparisons: u64,
    swaps: u64,
}

/// Sorts a copy of `input` with the given strategy.
///
/// The caller's sequence is never mutated: the input is cloned on entry and
/// the sorted copy is returned inside the [`SortResult`] together with the
/// comparison/swap counts and elapsed time for this call. Inputs of length
/// 0 or 1 come back unchanged with both counters at zero.
///
/// # Examples
///
/// ```
/// use foamsort::{Strategy, sort};
///
/// let data = vec![64, 34, 25, 12, 22, 11, 90];
/// let result = sort(&data, Strategy::Optimized);
///
/// assert_eq!(result.sorted, vec![11, 12, 22, 25, 34, 64, 90]);
/// assert_eq!(data, vec![64, 34, 25, 12, 22, 11, 90]);
/// ```
pub fn sort<T: Ord + Clone>(input: &[T], strategy: Strategy) -> SortResult<T> {
    let mut sorted = input.to_vec();
    let metrics = sort_mut(&mut sorted, strategy);
    SortResult {
        sorted,
        strategy,
        metrics,
    }
}

/// Sorts a slice in-place with the given strategy.
///
/// This is the allocation-free variant of [`sort`] for callers that own
/// their data and do not need the original ordering back. Returns the
/// [`Metrics`] for the call; timing covers the algorithm only, not any
/// caller-side setup.
///
/// # Examples
///
/// ```
/// use foamsort::{Strategy, sort_mut};
///
/// let mut data = vec![5, 2, 4, 6, 1, 3];
/// let metrics = sort_mut(&mut data, Strategy::Bidirectional);
///
/// assert_eq!(data, vec![1, 2, 3, 4, 5, 6]);
/// assert_eq!(metrics.swaps, 9); // one swap per inversion
/// ```
pub fn sort_mut<T: Ord>(data: &mut [T], strategy: Strategy) -> Metrics {
    let mut counters = Counters {
        comparisons: 0,
        swaps: 0,
    };

    let start = Instant::now();
    match strategy {
        Strategy::Standard => bubble_standard(data, &mut counters),
        Strategy::Optimized => bubble_last_swap(data, &mut counters),
        Strategy::Bidirectional => bubble_cocktail(data, &mut counters),
    }

    Metrics {
        comparisons: counters.comparisons,
        swaps: counters.swaps,
        elapsed: start.elapsed(),
    }
}

/// Sorts a copy of `input` under a strategy selected by name.
///
/// This is the fallible boundary for textual selectors: an unknown name
/// fails with [`SortError::UnsupportedStrategy`] before any sorting work
/// happens. Known names are the lowercase strategy names accepted by
/// [`Strategy`]'s `FromStr` implementation.
///
/// # Errors
///
/// Returns [`SortError::UnsupportedStrategy`] when `name` matches none of
/// the known strategies.
pub fn sort_by_name<T: Ord + Clone>(
    input: &[T],
    name: &str,
) -> Result<SortResult<T>, SortError> {
    let strategy: Strategy = name.parse()?;
    Ok(sort(input, strategy))
}

/// Runs every known strategy once against the same input.
///
/// Each strategy sorts its own copy; the caller's sequence is never
/// mutated. Returns one `(Strategy, Metrics)` row per [`Strategy::ALL`]
/// entry, in that order.
///
/// # Examples
///
/// ```
/// use foamsort::benchmark;
///
/// let data = vec![9, 1, 5, 3, 7];
/// let rows = benchmark(&data);
///
/// assert_eq!(rows.len(), 3);
/// // Swap counts agree across strategies; comparison counts need not.
/// assert!(rows.iter().all(|(_, m)| m.swaps == rows[0].1.swaps));
/// ```
pub fn benchmark<T: Ord + Clone>(input: &[T]) -> Vec<(Strategy, Metrics)> {
    Strategy::ALL
        .iter()
        .map(|&strategy| (strategy, sort(input, strategy).metrics))
        .collect()
}

/// Compares the adjacent pair at `j`, swapping when out of order.
///
/// Equal elements never swap, which is what keeps every strategy stable.
/// Returns whether a swap happened.
#[inline(always)]
fn compare_and_swap<T: Ord>(data: &mut [T], j: usize, counters: &mut Counters) -> bool {
    counters.comparisons += 1;
    if data[j] > data[j + 1] {
        data.swap(j, j + 1);
        counters.swaps += 1;
        true
    } else {
        false
    }
}

/// Standard bubble sort with early exit.
///
/// Pass `i` scans `0..n-i-1`; a pass that performs no swap proves the
/// slice sorted and terminates the loop.
fn bubble_standard<T: Ord>(data: &mut [T], counters: &mut Counters) {
    let n = data.len();

    for i in 0..n {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            if compare_and_swap(data, j, counters) {
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// Last-swap-boundary bubble sort.
///
/// Everything past the last swap of a pass is already sorted, so the next
/// pass stops there. The boundary is the last index where a swap occurred
/// (not one past it); a swap-free pass leaves it at 0 and terminates.
fn bubble_last_swap<T: Ord>(data: &mut [T], counters: &mut Counters) {
    if data.len() < 2 {
        return;
    }

    let mut boundary = data.len() - 1;
    while boundary > 0 {
        let mut last_swap = 0;
        for j in 0..boundary {
            if compare_and_swap(data, j, counters) {
                last_swap = j;
            }
        }
        boundary = last_swap;
    }
}

/// Bidirectional (cocktail) bubble sort.
///
/// Each cycle bubbles the largest unsorted element up to `right`, then the
/// smallest down to `left`, shrinking both bounds by one.
fn bubble_cocktail<T: Ord>(data: &mut [T], counters: &mut Counters) {
    if data.len() < 2 {
        return;
    }

    let mut left = 0;
    let mut right = data.len() - 1;

    while left < right {
        for j in left..right {
            compare_and_swap(data, j, counters);
        }
        right -= 1;

        for j in (left..right).rev() {
            compare_and_swap(data, j, counters);
        }
        left += 1;
    }
}
