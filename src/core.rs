//! Core types for Foamsort.
//!
//! This module defines:
//! - [`Strategy`]: The traversal-strategy selector.
//! - [`Metrics`]: Instrumentation collected by a single sort call.
//! - [`SortResult`]: The sorted copy bundled with its metrics.
//! - [`SortError`]: The single failure mode (unknown strategy name).

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Traversal strategy for a single sort invocation.
///
/// All three strategies are adjacent-swap sorts over the same comparison
/// primitive and produce identical output for the same input; they differ
/// only in how the scan range shrinks between passes, which shows up in
/// the comparison count.
///
/// # Examples
///
/// Strategies parse from their lowercase names, which is how textual
/// selectors (CLI arguments, config values) reach the sorter:
///
/// ```
/// use foamsort::core::Strategy;
///
/// let strategy: Strategy = "optimized".parse().unwrap();
/// assert_eq!(strategy, Strategy::Optimized);
///
/// assert!("quantum".parse::<Strategy>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Fixed pass ranges with an early exit once a pass performs no swap.
    Standard,
    /// Scan range shrinks to the last index where the previous pass swapped.
    Optimized,
    /// Cocktail sort: alternating forward and backward passes.
    Bidirectional,
}

impl Strategy {
    /// All known strategies, in declaration order.
    pub const ALL: [Strategy; 3] = [
        Strategy::Standard,
        Strategy::Optimized,
        Strategy::Bidirectional,
    ];

    /// The lowercase name used for display and parsing.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Standard => "standard",
            Strategy::Optimized => "optimized",
            Strategy::Bidirectional => "bidirectional",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Strategy::Standard),
            "optimized" => Ok(Strategy::Optimized),
            "bidirectional" => Ok(Strategy::Bidirectional),
            _ => Err(SortError::UnsupportedStrategy(s.to_string())),
        }
    }
}

/// Instrumentation gathered over one sort call.
///
/// Counters start at zero on every call; nothing accumulates across calls,
/// so metrics from independent calls are safe to compare. Both counters are
/// bounded by `n * (n - 1) / 2` for an input of length `n`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Number of element comparisons performed.
    pub comparisons: u64,
    /// Number of adjacent swaps performed.
    pub swaps: u64,
    /// Wall-clock time spent inside the algorithm.
    pub elapsed: Duration,
}

/// Outcome of a single [`sort`](crate::sort) call.
///
/// `sorted` holds a non-decreasing permutation of the input; the caller's
/// own sequence is never touched.
#[derive(Clone, Debug)]
pub struct SortResult<T> {
    /// Sorted copy of the input.
    pub sorted: Vec<T>,
    /// Strategy that produced this result.
    pub strategy: Strategy,
    /// Comparison/swap counts and elapsed time for this call.
    pub metrics: Metrics,
}

/// Errors reported by the fallible entry points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortError {
    /// A strategy selector that names none of the known variants.
    UnsupportedStrategy(String),
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortError::UnsupportedStrategy(name) => {
                write!(f, "unsupported sort strategy: {name:?}")
            }
        }
    }
}

impl std::error::Error for SortError {}
