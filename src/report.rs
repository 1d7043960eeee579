//! Text rendering for sort outcomes.
//!
//! Formatting lives outside the algorithms on purpose: nothing in this
//! module can fail a sort, and the sorting entry points never print.

use crate::core::{Metrics, SortResult, Strategy};
use std::fmt::Debug;
use std::fmt::Write;

/// One-line summary of a single sort outcome.
pub fn render_result<T: Debug>(result: &SortResult<T>) -> String {
    format!(
        "{}: {:?} ({} comparisons, {} swaps, {:?})",
        result.strategy,
        result.sorted,
        result.metrics.comparisons,
        result.metrics.swaps,
        result.metrics.elapsed
    )
}

/// Aligned comparison table for a [`benchmark`](crate::benchmark) outcome.
///
/// One row per strategy, with elapsed time in milliseconds:
///
/// ```text
/// strategy                time  comparisons        swaps
/// ------------------------------------------------------
/// standard           0.012 ms           21            9
/// ```
pub fn render_comparison(rows: &[(Strategy, Metrics)]) -> String {
    let mut out = String::new();

    writeln!(
        out,
        "{:<15} {:>12} {:>12} {:>12}",
        "strategy", "time", "comparisons", "swaps"
    )
    .unwrap();
    writeln!(out, "{}", "-".repeat(54)).unwrap();

    for (strategy, metrics) in rows {
        writeln!(
            out,
            "{:<15} {:>9.3} ms {:>12} {:>12}",
            strategy.as_str(),
            metrics.elapsed.as_secs_f64() * 1000.0,
            metrics.comparisons,
            metrics.swaps
        )
        .unwrap();
    }

    out
}
