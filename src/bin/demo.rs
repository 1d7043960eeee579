//! Demonstration harness for the foamsort library.
//!
//! Runs a set of sample arrays through every strategy, then compares the
//! strategies on generated inputs sized by an optional command-line
//! argument. Everything goes through the public library API.

use foamsort::prelude::*;
use foamsort::{arrays, report};

/// Default element count for the generated-input comparison.
const DEFAULT_ARRAY_SIZE: usize = 1_000;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let size = args
        .get(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_ARRAY_SIZE);

    println!("Foamsort demonstration");
    println!("======================\n");

    let samples: Vec<Vec<i32>> = vec![
        vec![64, 34, 25, 12, 22, 11, 90],
        vec![5, 2, 4, 6, 1, 3],
        vec![1],
        vec![],
        vec![3, 3, 3, 3],
        vec![9, 8, 7, 6, 5, 4, 3, 2, 1],
    ];

    for (index, sample) in samples.iter().enumerate() {
        println!("Sample {}: {:?}", index + 1, sample);
        for strategy in Strategy::ALL {
            let result = sort(sample, strategy);
            println!("  {}", report::render_result(&result));
        }
        println!();
    }

    println!("Strategy comparison ({} elements)", size);
    for (label, input) in [
        ("random", arrays::random_array(size, 1, 1_000)),
        ("reverse sorted", arrays::reverse_sorted_array(size)),
        ("nearly sorted", arrays::nearly_sorted_array(size, 10)),
    ] {
        println!("\n{} input:", label);
        print!("{}", report::render_comparison(&benchmark(&input)));
    }
}
