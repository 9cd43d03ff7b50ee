//! Common types shared across the TLB simulator.
//!
//! This module provides the fundamental building blocks used by every other
//! component. It includes:
//! 1. **Address Types:** Strong types for virtual addresses and page numbers.
//! 2. **Error Handling:** The configuration error taxonomy.

/// Address type definitions (virtual addresses and page numbers).
pub mod addr;

/// Configuration error definitions.
pub mod error;

pub use addr::{PageNumber, VirtAddr};
pub use error::ConfigError;
