//! Statistics unit tests.
//!
//! Verifies counter arithmetic, ratio computation, sweep-result ordering,
//! and JSON export.

use tlbsim_core::stats::{AccessCounters, SweepPoint, SweepResult};
use tlbsim_core::tlb::Access;

// ══════════════════════════════════════════════════════════
// 1. Counters
// ══════════════════════════════════════════════════════════

#[test]
fn new_counters_are_zero() {
    let counters = AccessCounters::new();
    assert_eq!(counters.hits, 0);
    assert_eq!(counters.misses, 0);
    assert_eq!(counters.total(), 0);
}

#[test]
fn record_tallies_each_outcome_once() {
    let mut counters = AccessCounters::new();
    counters.record(Access::Hit);
    counters.record(Access::Miss);
    counters.record(Access::Miss);
    assert_eq!(counters.hits, 1);
    assert_eq!(counters.misses, 2);
    assert_eq!(counters.total(), 3);
}

#[test]
fn hit_ratio_is_percentage() {
    let counters = AccessCounters { hits: 2, misses: 8 };
    assert!((counters.hit_ratio_percent() - 20.0).abs() < 1e-9);

    let all_hits = AccessCounters { hits: 5, misses: 0 };
    assert!((all_hits.hit_ratio_percent() - 100.0).abs() < 1e-9);

    let all_misses = AccessCounters { hits: 0, misses: 5 };
    assert_eq!(all_misses.hit_ratio_percent(), 0.0);
}

/// Zero recorded accesses never divide by zero.
#[test]
fn hit_ratio_of_empty_counters_is_zero() {
    assert_eq!(AccessCounters::new().hit_ratio_percent(), 0.0);
}

// ══════════════════════════════════════════════════════════
// 2. Sweep Results
// ══════════════════════════════════════════════════════════

#[test]
fn sweep_result_preserves_push_order() {
    let mut result = SweepResult::new();
    for (entries, hit_ratio) in [(8usize, 50.0), (2, 10.0), (8, 50.0)] {
        result.push(SweepPoint { entries, hit_ratio });
    }
    let order: Vec<usize> = result.points().iter().map(|p| p.entries).collect();
    assert_eq!(order, vec![8, 2, 8]);
    assert_eq!(result.len(), 3);
    assert!(!result.is_empty());
}

#[test]
fn sweep_result_serializes_to_json() {
    let mut result = SweepResult::new();
    result.push(SweepPoint {
        entries: 4,
        hit_ratio: 20.0,
    });

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["points"][0]["entries"], 4);
    assert_eq!(value["points"][0]["hit_ratio"], 20.0);
}
