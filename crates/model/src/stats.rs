//! Simulation statistics collection and reporting.
//!
//! This module tracks measurement results for the TLB simulator. It provides:
//! 1. **Counters:** Hit/miss tallies for a single trace replay.
//! 2. **Sweep results:** Ordered `(capacity, hit ratio)` pairs across a sweep.
//! 3. **Reporting:** An aligned plain-text summary and `serde` JSON export.

use serde::Serialize;

use crate::tlb::Access;

/// Hit/miss counters for one trace replay.
///
/// Owned by the harness, never by the cache; each access increments exactly
/// one counter and counters are never decremented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AccessCounters {
    /// Number of accesses whose page was already resident.
    pub hits: u64,
    /// Number of accesses whose page was not resident.
    pub misses: u64,
}

impl AccessCounters {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tallies one lookup outcome.
    ///
    /// # Arguments
    ///
    /// * `access` - The outcome to record.
    pub fn record(&mut self, access: Access) {
        match access {
            Access::Hit => self.hits += 1,
            Access::Miss => self.misses += 1,
        }
    }

    /// Returns the total number of recorded accesses.
    pub fn total(&self) -> u64 {
        self.hits + self.misses
    }

    /// Returns the hit ratio as a percentage in [0, 100].
    ///
    /// Zero recorded accesses yield 0.0; the harness rejects empty traces
    /// before any counter exists, so that case never reaches a report.
    pub fn hit_ratio_percent(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        100.0 * (self.hits as f64 / total as f64)
    }
}

/// One measured sweep configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SweepPoint {
    /// Cache capacity this point was measured with.
    pub entries: usize,
    /// Hit ratio percentage over the full trace.
    pub hit_ratio: f64,
}

/// Result of a capacity sweep.
///
/// Points appear in exactly the order the capacities were requested — no
/// sorting, no deduplication — so callers can line results up with their
/// input.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SweepResult {
    points: Vec<SweepPoint>,
}

impl SweepResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one measured point, preserving request order.
    ///
    /// # Arguments
    ///
    /// * `point` - The measurement to append.
    pub fn push(&mut self, point: SweepPoint) {
        self.points.push(point);
    }

    /// Returns the measured points in request order.
    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    /// Returns the number of measured points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when nothing was measured.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Prints the sweep summary to stdout.
    ///
    /// One aligned row per measured capacity, in request order.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("TLB CAPACITY SWEEP");
        println!("==========================================================");
        for point in &self.points {
            println!(
                "entries {:<10} hit_ratio {:>6.2}%",
                point.entries, point.hit_ratio
            );
        }
        println!("==========================================================");
    }
}

impl<'a> IntoIterator for &'a SweepResult {
    type Item = &'a SweepPoint;
    type IntoIter = std::slice::Iter<'a, SweepPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
