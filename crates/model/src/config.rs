//! Configuration system for the TLB simulator.
//!
//! This module defines all configuration structures used to parameterize a
//! simulation run. It provides:
//! 1. **Defaults:** Baseline constants (page size, TLB entries, traffic shape).
//! 2. **Structures:** Hierarchical config for the cache, the synthetic traffic,
//!    and the capacity sweep.
//! 3. **Validation:** Up-front rejection of impossible configurations.
//!
//! Configuration is supplied via JSON (`serde_json`) or `Config::default()`.

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
///
/// These values define the baseline configuration when not explicitly
/// overridden in a JSON configuration file.
mod defaults {
    /// Page size in bytes.
    ///
    /// Every address is divided by this value to obtain its page number.
    pub const PAGE_SIZE: u64 = 1024;

    /// Translation cache entry count for single-trace runs.
    ///
    /// Deliberately small so short traces force evictions.
    pub const TLB_ENTRIES: usize = 4;

    /// Number of distinct pages the synthetic traffic draws from.
    pub const TOTAL_PAGES: u64 = 50;

    /// Number of "hot" pages receiving the bulk of the traffic.
    pub const HOT_PAGES: usize = 10;

    /// Number of addresses generated per trace.
    pub const ACCESS_COUNT: usize = 1000;

    /// Probability that an access targets a hot page.
    ///
    /// The remainder of the traffic is uniform over the whole page pool.
    pub const HOT_FRACTION: f64 = 0.85;

    /// Traffic generator seed.
    ///
    /// An explicit seed keeps sweep results reproducible across runs.
    pub const SEED: u64 = 0x5eed_1234_abcd_ef01;

    /// Smallest capacity measured by the default sweep.
    pub const SWEEP_MIN_ENTRIES: usize = 1;

    /// Largest capacity measured by the default sweep.
    pub const SWEEP_MAX_ENTRIES: usize = 20;
}

/// Root configuration structure containing all simulator settings.
///
/// # Examples
///
/// Creating a default configuration:
///
/// ```
/// use tlbsim_core::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.page_size, 1024);
/// assert_eq!(config.tlb.entries, 4);
/// ```
///
/// Deserializing from JSON:
///
/// ```
/// use tlbsim_core::config::Config;
///
/// let json = r#"{
///     "page_size": 4096,
///     "tlb": { "entries": 8 },
///     "trace": {
///         "total_pages": 128,
///         "hot_pages": 16,
///         "accesses": 5000,
///         "hot_fraction": 0.9,
///         "seed": 42
///     },
///     "sweep": { "min_entries": 1, "max_entries": 32 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert_eq!(config.page_size, 4096);
/// assert_eq!(config.trace.seed, 42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Page size in bytes (`page = address / page_size`)
    #[serde(default = "Config::default_page_size")]
    pub page_size: u64,

    /// Translation cache settings
    #[serde(default)]
    pub tlb: TlbConfig,

    /// Synthetic traffic settings
    #[serde(default)]
    pub trace: TraceConfig,

    /// Capacity sweep settings
    #[serde(default)]
    pub sweep: SweepConfig,
}

impl Config {
    /// Returns the default page size in bytes.
    fn default_page_size() -> u64 {
        defaults::PAGE_SIZE
    }

    /// Checks the whole configuration for caller bugs.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for a zero page size, an out-of-range hot
    /// fraction, an empty traffic shape, or an inverted sweep range. A valid
    /// configuration can never fail later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        self.trace.validate()?;
        self.sweep.validate()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: defaults::PAGE_SIZE,
            tlb: TlbConfig::default(),
            trace: TraceConfig::default(),
            sweep: SweepConfig::default(),
        }
    }
}

/// Translation cache configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TlbConfig {
    /// Number of page translations the cache can hold (zero is legal: every
    /// access misses and nothing is retained)
    #[serde(default = "TlbConfig::default_entries")]
    pub entries: usize,
}

impl TlbConfig {
    /// Returns the default translation cache entry count.
    fn default_entries() -> usize {
        defaults::TLB_ENTRIES
    }
}

impl Default for TlbConfig {
    fn default() -> Self {
        Self {
            entries: defaults::TLB_ENTRIES,
        }
    }
}

/// Synthetic traffic configuration.
///
/// Describes a hot-page-biased access mixture: a small set of hot pages
/// receives `hot_fraction` of the traffic, the rest is uniform over the
/// whole pool of `total_pages` pages.
#[derive(Debug, Clone, Deserialize)]
pub struct TraceConfig {
    /// Size of the page pool addresses are drawn from
    #[serde(default = "TraceConfig::default_total_pages")]
    pub total_pages: u64,

    /// Number of hot pages
    #[serde(default = "TraceConfig::default_hot_pages")]
    pub hot_pages: usize,

    /// Number of addresses per generated trace
    #[serde(default = "TraceConfig::default_accesses")]
    pub accesses: usize,

    /// Probability in [0, 1] that an access targets a hot page
    #[serde(default = "TraceConfig::default_hot_fraction")]
    pub hot_fraction: f64,

    /// Traffic generator seed (identical seeds give identical traces)
    #[serde(default = "TraceConfig::default_seed")]
    pub seed: u64,
}

impl TraceConfig {
    /// Returns the default page pool size.
    fn default_total_pages() -> u64 {
        defaults::TOTAL_PAGES
    }

    /// Returns the default hot page count.
    fn default_hot_pages() -> usize {
        defaults::HOT_PAGES
    }

    /// Returns the default per-trace access count.
    fn default_accesses() -> usize {
        defaults::ACCESS_COUNT
    }

    /// Returns the default hot-page access probability.
    fn default_hot_fraction() -> f64 {
        defaults::HOT_FRACTION
    }

    /// Returns the default traffic generator seed.
    fn default_seed() -> u64 {
        defaults::SEED
    }

    /// Checks the traffic shape for caller bugs.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the shape cannot produce a non-empty
    /// trace or the hot fraction is not a probability.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.hot_fraction) {
            return Err(ConfigError::InvalidHotFraction(self.hot_fraction));
        }
        if self.accesses == 0 {
            return Err(ConfigError::ZeroAccessCount);
        }
        if self.hot_pages == 0 || self.total_pages == 0 {
            return Err(ConfigError::EmptyPagePool);
        }
        Ok(())
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            total_pages: defaults::TOTAL_PAGES,
            hot_pages: defaults::HOT_PAGES,
            accesses: defaults::ACCESS_COUNT,
            hot_fraction: defaults::HOT_FRACTION,
            seed: defaults::SEED,
        }
    }
}

/// Capacity sweep configuration.
///
/// The sweep measures one fresh cache per capacity in
/// `min_entries..=max_entries`, replaying the same trace against each.
#[derive(Debug, Clone, Deserialize)]
pub struct SweepConfig {
    /// Smallest capacity to measure
    #[serde(default = "SweepConfig::default_min_entries")]
    pub min_entries: usize,

    /// Largest capacity to measure (inclusive)
    #[serde(default = "SweepConfig::default_max_entries")]
    pub max_entries: usize,
}

impl SweepConfig {
    /// Returns the default sweep lower bound.
    fn default_min_entries() -> usize {
        defaults::SWEEP_MIN_ENTRIES
    }

    /// Returns the default sweep upper bound.
    fn default_max_entries() -> usize {
        defaults::SWEEP_MAX_ENTRIES
    }

    /// Returns the capacities this sweep measures, in ascending order.
    pub fn capacities(&self) -> Vec<usize> {
        (self.min_entries..=self.max_entries).collect()
    }

    /// Checks the sweep range for caller bugs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvertedSweepRange`] when the lower bound
    /// exceeds the upper bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_entries > self.max_entries {
            return Err(ConfigError::InvertedSweepRange {
                min: self.min_entries,
                max: self.max_entries,
            });
        }
        Ok(())
    }
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            min_entries: defaults::SWEEP_MIN_ENTRIES,
            max_entries: defaults::SWEEP_MAX_ENTRIES,
        }
    }
}
