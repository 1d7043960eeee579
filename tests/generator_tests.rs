use foamsort::arrays;
use foamsort::prelude::*;

#[test]
fn test_sorted_array_shape() {
    assert_eq!(arrays::sorted_array(5), vec![1, 2, 3, 4, 5]);
    assert!(arrays::sorted_array(0).is_empty());
}

#[test]
fn test_reverse_sorted_array_shape() {
    assert_eq!(arrays::reverse_sorted_array(5), vec![5, 4, 3, 2, 1]);
    assert!(arrays::reverse_sorted_array(0).is_empty());
}

#[test]
fn test_random_array_bounds() {
    let data = arrays::random_array(1_000, 10, 20);

    assert_eq!(data.len(), 1_000);
    assert!(data.iter().all(|&v| (10..=20).contains(&v)));
}

#[test]
fn test_nearly_sorted_array_is_permutation() {
    let data = arrays::nearly_sorted_array(100, 10);
    assert_eq!(data.len(), 100);

    let mut sorted = data.clone();
    sorted.sort();
    assert_eq!(sorted, arrays::sorted_array(100));
}

#[test]
fn test_nearly_sorted_degenerate_sizes() {
    assert!(arrays::nearly_sorted_array(0, 10).is_empty());
    assert_eq!(arrays::nearly_sorted_array(1, 10), vec![1]);
}

#[test]
fn test_nearly_sorted_costs_at_most_worst_case() {
    let nearly = arrays::nearly_sorted_array(200, 3);
    let reverse = arrays::reverse_sorted_array(200);

    let near_cost = sort(&nearly, Strategy::Optimized).metrics.comparisons;
    let worst_cost = sort(&reverse, Strategy::Optimized).metrics.comparisons;
    assert!(near_cost <= worst_cost);
}
