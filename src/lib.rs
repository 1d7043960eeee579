//! # Foamsort
//!
//! `foamsort` is an instrumented adjacent-swap (bubble) sorting library. It
//! implements the classic algorithm in three traversal strategies and counts
//! every comparison and swap, which makes it a convenient harness for
//! studying how traversal order changes the work an O(n²) sort performs on
//! differently shaped inputs.
//!
//! ## Key Features
//!
//! - **Three strategies**: [`Strategy::Standard`] (early exit),
//!   [`Strategy::Optimized`] (last-swap boundary tracking) and
//!   [`Strategy::Bidirectional`] (cocktail sort), all producing identical
//!   output for the same input.
//! - **Instrumentation**: every call returns [`Metrics`] with comparison and
//!   swap counts plus elapsed wall-clock time. Counters start fresh on each
//!   call; there is no sorter object and no state carried between calls, so
//!   independent sorts can run concurrently without coordination.
//! - **Caller data untouched**: [`sort`] clones the input and sorts the
//!   copy. [`sort_mut`] is the explicit in-place variant for callers that
//!   own their data.
//! - **Test-array shapes**: the [`arrays`] module builds random, sorted,
//!   reverse-sorted and nearly-sorted inputs for measurements, and
//!   [`report`] renders outcomes as text.
//!
//! ## Usage
//!
//! ```rust
//! use foamsort::prelude::*;
//!
//! let data = vec![64, 34, 25, 12, 22, 11, 90];
//! let result = sort(&data, Strategy::Standard);
//!
//! assert_eq!(result.sorted, vec![11, 12, 22, 25, 34, 64, 90]);
//! assert_eq!(data[0], 64); // the input is never mutated
//! ```
//!
//! Comparing strategies over one input:
//!
//! ```rust
//! use foamsort::prelude::*;
//!
//! let data = vec![5, 2, 4, 6, 1, 3];
//! for (strategy, metrics) in benchmark(&data) {
//!     println!(
//!         "{strategy}: {} comparisons, {} swaps",
//!         metrics.comparisons, metrics.swaps
//!     );
//! }
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Worst case**: O(n²) comparisons and swaps for every strategy.
//! - **Best case**: O(n) comparisons and 0 swaps for Standard and Optimized
//!   on already-sorted input; Bidirectional always walks its full pass
//!   schedule.
//! - Swap counts equal the number of inversions in the input and are
//!   therefore identical across strategies; comparison counts are where the
//!   strategies differ.
//!
//! This library favors observability over speed. For production sorting,
//! use `slice::sort_unstable`.

pub mod algo;
pub mod arrays;
pub mod core;
pub mod report;
pub use algo::{benchmark, sort, sort_by_name, sort_mut};
pub use core::{Metrics, SortError, SortResult, Strategy};

pub mod prelude {
    pub use crate::algo::{benchmark, sort, sort_by_name, sort_mut};
    pub use crate::core::{Metrics, SortError, SortResult, Strategy};
}
