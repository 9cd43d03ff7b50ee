//! Trace replay harness and capacity sweep.
//!
//! This module drives address traces through freshly constructed
//! [`TranslationCache`] instances and aggregates the outcomes. It performs:
//! 1. **Replay:** One cache, one trace, hit/miss tallies ([`run_trace`]).
//! 2. **Sweep:** One fresh cache per capacity, same trace, one ratio per
//!    capacity ([`sweep`]).
//! 3. **Events:** Per-access records for presentation layers ([`Simulator`]).
//!
//! All validation happens here, before any cache work begins; once a run
//! starts it proceeds to completion. For a fixed trace, page size, and
//! capacity the results are always identical — the model has no randomness.

use tracing::{debug, trace};

use crate::common::addr::{PageNumber, VirtAddr};
use crate::common::error::ConfigError;
use crate::stats::{AccessCounters, SweepPoint, SweepResult};
use crate::tlb::{Access, TranslationCache};

/// One access as seen by a presentation collaborator.
///
/// The residency snapshot is the cache's entries in recency order, oldest
/// first, purely for display; producing it does not alter cache state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessEvent {
    /// The virtual address that was accessed.
    pub addr: VirtAddr,
    /// The page containing the address.
    pub page: PageNumber,
    /// Whether the page was already resident.
    pub outcome: Access,
    /// Resident pages after the access, oldest first.
    pub resident: Vec<PageNumber>,
}

/// A single cache plus the counters for its trace.
///
/// The simulator owns the cache exclusively and is used by exactly one
/// logical trace run; nothing else mutates its internal order.
#[derive(Clone, Debug)]
pub struct Simulator {
    page_size: u64,
    cache: TranslationCache,
    counters: AccessCounters,
}

impl Simulator {
    /// Creates a simulator with a fresh, empty cache.
    ///
    /// # Arguments
    ///
    /// * `entries` - Cache capacity; zero is legal (every access misses).
    /// * `page_size` - Page size in bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroPageSize`] for a zero page size.
    pub fn new(entries: usize, page_size: u64) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(Self {
            page_size,
            cache: TranslationCache::new(entries),
            counters: AccessCounters::new(),
        })
    }

    /// Performs one access and tallies the outcome.
    ///
    /// # Arguments
    ///
    /// * `addr` - The virtual address to access.
    ///
    /// # Returns
    ///
    /// The page number the address maps to and the lookup outcome.
    pub fn access(&mut self, addr: VirtAddr) -> (PageNumber, Access) {
        let page = addr.page_number(self.page_size);
        let outcome = self.cache.lookup(page);
        self.counters.record(outcome);
        trace!(addr = %addr, page = %page, hit = outcome.is_hit(), "tlb access");
        (page, outcome)
    }

    /// Performs one access and returns the full presentation event.
    ///
    /// Identical to [`Self::access`] plus a residency snapshot taken after
    /// the access.
    ///
    /// # Arguments
    ///
    /// * `addr` - The virtual address to access.
    pub fn access_event(&mut self, addr: VirtAddr) -> AccessEvent {
        let (page, outcome) = self.access(addr);
        AccessEvent {
            addr,
            page,
            outcome,
            resident: self.cache.resident(),
        }
    }

    /// Returns the counters accumulated so far.
    pub fn counters(&self) -> AccessCounters {
        self.counters
    }

    /// Returns the resident pages in recency order, oldest first.
    pub fn resident(&self) -> Vec<PageNumber> {
        self.cache.resident()
    }

    /// Returns the cache capacity.
    pub fn entries(&self) -> usize {
        self.cache.capacity()
    }
}

/// Replays one trace through a fresh cache.
///
/// # Arguments
///
/// * `addresses` - Virtual addresses in access order.
/// * `page_size` - Page size in bytes.
/// * `entries` - Cache capacity.
///
/// # Returns
///
/// Final hit/miss counters; `hits + misses` equals the trace length.
///
/// # Errors
///
/// Returns a [`ConfigError`] for a zero page size or an empty trace, before
/// any cache work begins.
pub fn run_trace(
    addresses: &[u64],
    page_size: u64,
    entries: usize,
) -> Result<AccessCounters, ConfigError> {
    if addresses.is_empty() {
        return Err(ConfigError::EmptyTrace);
    }
    let mut sim = Simulator::new(entries, page_size)?;
    for &addr in addresses {
        let _ = sim.access(VirtAddr::new(addr));
    }
    Ok(sim.counters())
}

/// Measures the hit ratio of the same trace across many capacities.
///
/// Each capacity is measured independently against a fresh cache, so the
/// processing order cannot affect the results. The result order matches the
/// requested capacity order exactly — no sorting, no deduplication.
///
/// # Arguments
///
/// * `addresses` - Virtual addresses in access order; shared by every run.
/// * `page_size` - Page size in bytes.
/// * `capacities` - Capacities to measure, in the order results are wanted.
///
/// # Returns
///
/// One [`SweepPoint`] per requested capacity. An empty capacity list yields
/// an empty result.
///
/// # Errors
///
/// Returns a [`ConfigError`] for a zero page size or an empty trace, before
/// any run starts; a sweep either reports a full result set or fails up
/// front.
pub fn sweep(
    addresses: &[u64],
    page_size: u64,
    capacities: &[usize],
) -> Result<SweepResult, ConfigError> {
    if page_size == 0 {
        return Err(ConfigError::ZeroPageSize);
    }
    if addresses.is_empty() {
        return Err(ConfigError::EmptyTrace);
    }

    let mut result = SweepResult::new();
    for &entries in capacities {
        let counters = run_trace(addresses, page_size, entries)?;
        let hit_ratio = counters.hit_ratio_percent();
        debug!(
            entries,
            hits = counters.hits,
            misses = counters.misses,
            hit_ratio,
            "sweep point"
        );
        result.push(SweepPoint { entries, hit_ratio });
    }
    Ok(result)
}
