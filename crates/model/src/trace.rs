//! Synthetic hot-page traffic generation.
//!
//! Produces address traces with locality of reference: a small set of hot
//! pages receives most of the traffic, the remainder is uniform over the
//! whole page pool. The generator is explicitly seeded so sweep results are
//! reproducible; there is no global random state.
//!
//! The harness has no dependency on this module — it accepts any address
//! sequence — which keeps it testable with deterministic fixed traces.

use crate::common::error::ConfigError;
use crate::config::TraceConfig;

/// Seedable xorshift pseudo-random number generator.
///
/// A full statistical RNG is unnecessary for shaping synthetic traffic; a
/// 64-bit xorshift is cheap, dependency-free, and deterministic for a given
/// seed.
#[derive(Clone, Debug)]
pub struct XorShift64 {
    /// Internal generator state; never zero.
    state: u64,
}

impl XorShift64 {
    /// Creates a generator from a seed.
    ///
    /// # Arguments
    ///
    /// * `seed` - Any value; zero is remapped because an all-zero xorshift
    ///   state is a fixed point.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0x9e37_79b9_7f4a_7c15 } else { seed },
        }
    }

    /// Returns the next pseudo-random 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Returns a pseudo-random value in `[0, bound)`.
    ///
    /// # Arguments
    ///
    /// * `bound` - Exclusive upper bound; must be non-zero.
    pub fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }

    /// Returns a pseudo-random probability in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        // Top 53 bits give a uniformly distributed double mantissa.
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Generates a hot-page-biased address trace.
///
/// First draws `hot_pages` page numbers below `total_pages`, then emits
/// `accesses` addresses: each targets a hot page with probability
/// `hot_fraction`, otherwise a uniform page from the pool. Each address is
/// the base address of its page.
///
/// # Arguments
///
/// * `cfg` - Traffic shape and seed.
/// * `page_size` - Page size in bytes used to turn pages into addresses.
///
/// # Returns
///
/// The generated virtual addresses, in access order.
///
/// # Errors
///
/// Returns a [`ConfigError`] for a zero page size or an invalid traffic
/// shape, before generating anything.
pub fn generate(cfg: &TraceConfig, page_size: u64) -> Result<Vec<u64>, ConfigError> {
    if page_size == 0 {
        return Err(ConfigError::ZeroPageSize);
    }
    cfg.validate()?;

    let mut rng = XorShift64::new(cfg.seed);

    let hot: Vec<u64> = (0..cfg.hot_pages)
        .map(|_| rng.below(cfg.total_pages))
        .collect();

    let mut addresses = Vec::with_capacity(cfg.accesses);
    for _ in 0..cfg.accesses {
        let page = if rng.next_f64() < cfg.hot_fraction {
            hot[rng.below(hot.len() as u64) as usize]
        } else {
            rng.below(cfg.total_pages)
        };
        addresses.push(page * page_size);
    }
    Ok(addresses)
}
