//! Synthetic traffic unit tests.
//!
//! Verifies the hot-page traffic generator:
//! - Seeded reproducibility (no global random state)
//! - Trace shape (length, page alignment, pool bounds)
//! - Hot-set confinement at the probability extremes
//! - Up-front rejection of invalid shapes

use tlbsim_core::common::error::ConfigError;
use tlbsim_core::config::TraceConfig;
use tlbsim_core::trace::{self, XorShift64};

/// A small, fast traffic shape for tests.
fn small_config(seed: u64) -> TraceConfig {
    TraceConfig {
        total_pages: 50,
        hot_pages: 10,
        accesses: 500,
        hot_fraction: 0.85,
        seed,
    }
}

// ══════════════════════════════════════════════════════════
// 1. Reproducibility
// ══════════════════════════════════════════════════════════

#[test]
fn same_seed_gives_identical_trace() {
    let a = trace::generate(&small_config(1234), 1024).unwrap();
    let b = trace::generate(&small_config(1234), 1024).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_give_different_traces() {
    let a = trace::generate(&small_config(1), 1024).unwrap();
    let b = trace::generate(&small_config(2), 1024).unwrap();
    assert_eq!(a.len(), b.len());
    assert_ne!(a, b);
}

// ══════════════════════════════════════════════════════════
// 2. Trace Shape
// ══════════════════════════════════════════════════════════

#[test]
fn trace_length_matches_access_count() {
    let addresses = trace::generate(&small_config(9), 1024).unwrap();
    assert_eq!(addresses.len(), 500);
}

/// Every generated address is the base address of a page in the pool.
#[test]
fn addresses_are_page_aligned_and_in_pool() {
    let cfg = small_config(77);
    let addresses = trace::generate(&cfg, 1024).unwrap();
    for &addr in &addresses {
        assert_eq!(addr % 1024, 0);
        assert!(addr / 1024 < cfg.total_pages);
    }
}

/// With hot_fraction = 1.0 the traffic touches at most hot_pages distinct pages.
#[test]
fn full_hot_fraction_confines_to_hot_set() {
    let cfg = TraceConfig {
        hot_fraction: 1.0,
        ..small_config(5)
    };
    let addresses = trace::generate(&cfg, 1024).unwrap();
    let distinct: std::collections::HashSet<u64> = addresses.iter().map(|a| a / 1024).collect();
    assert!(distinct.len() <= cfg.hot_pages);
}

// ══════════════════════════════════════════════════════════
// 3. Validation
// ══════════════════════════════════════════════════════════

#[test]
fn invalid_shapes_rejected_before_generation() {
    let cfg = TraceConfig {
        hot_fraction: 2.0,
        ..small_config(1)
    };
    assert_eq!(
        trace::generate(&cfg, 1024),
        Err(ConfigError::InvalidHotFraction(2.0))
    );

    assert_eq!(
        trace::generate(&small_config(1), 0),
        Err(ConfigError::ZeroPageSize)
    );
}

// ══════════════════════════════════════════════════════════
// 4. Generator
// ══════════════════════════════════════════════════════════

#[test]
fn xorshift_is_deterministic() {
    let mut a = XorShift64::new(99);
    let mut b = XorShift64::new(99);
    for _ in 0..100 {
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

#[test]
fn xorshift_below_respects_bound() {
    let mut rng = XorShift64::new(3);
    for _ in 0..1000 {
        assert!(rng.below(7) < 7);
    }
}

/// The generator is not stuck: many draws produce many distinct values.
#[test]
fn xorshift_not_stuck() {
    let mut rng = XorShift64::new(42);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..100 {
        let _ = seen.insert(rng.below(8));
    }
    assert!(seen.len() > 1);
}
