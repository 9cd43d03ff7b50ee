//! Translation Lookaside Buffer simulation library.
//!
//! This crate models a TLB as a bounded, recency-ordered page cache and
//! measures its hit ratio under memory-access traces. It provides:
//! 1. **Model:** A fixed-capacity LRU cache of page numbers ([`tlb::TranslationCache`]).
//! 2. **Harness:** Trace replay and capacity sweeps ([`sim`]).
//! 3. **Traffic:** Seedable hot-page-biased address generation ([`trace`]).
//! 4. **Stats:** Hit/miss counters and sweep results ([`stats`]).
//! 5. **Config:** JSON-deserializable simulation parameters ([`config`]).
//!
//! # Examples
//!
//! ```
//! use tlbsim_core::common::addr::PageNumber;
//! use tlbsim_core::tlb::{Access, TranslationCache};
//!
//! let mut tlb = TranslationCache::new(2);
//! assert_eq!(tlb.lookup(PageNumber(7)), Access::Miss);
//! assert_eq!(tlb.lookup(PageNumber(7)), Access::Hit);
//! ```

/// Common types (addresses, page numbers, configuration errors).
pub mod common;
/// Simulation configuration (defaults, hierarchical config structures).
pub mod config;
/// Trace replay harness and capacity sweep.
pub mod sim;
/// Hit/miss counters and sweep statistics.
pub mod stats;
/// Translation cache model (LRU page residency).
pub mod tlb;
/// Synthetic hot-page traffic generation.
pub mod trace;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Configuration error taxonomy; the only way any operation here can fail.
pub use crate::common::error::ConfigError;
/// The TLB model itself.
pub use crate::tlb::TranslationCache;
