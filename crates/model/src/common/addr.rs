//! Virtual address and page number types.
//!
//! This module defines strong types for the two integer identifiers the
//! simulator works with, preventing accidental mixing of raw addresses and
//! page numbers. It provides the following:
//! 1. **Type Safety:** A virtual address and the page containing it are distinct types.
//! 2. **Page Derivation:** The single place where an address is divided down to a page number.

use std::fmt;

/// A virtual address issued by a trace.
///
/// Addresses are plain non-negative integers; two addresses inside the same
/// page-size-aligned block belong to the same page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtAddr(pub u64);

/// The number of a fixed-size block of address space.
///
/// Page numbers are compared by value equality only; the model makes no
/// aliasing assumptions beyond integer equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PageNumber(pub u64);

impl VirtAddr {
    /// Creates a new virtual address from a raw 64-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 64-bit address value.
    #[inline(always)]
    pub fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit address value.
    #[inline(always)]
    pub fn val(&self) -> u64 {
        self.0
    }

    /// Returns the number of the page containing this address.
    ///
    /// Computed by integer division with the page size, so all addresses in
    /// the same `page_size`-aligned block map to the same page number.
    ///
    /// # Arguments
    ///
    /// * `page_size` - Page size in bytes; must be non-zero (validated at the
    ///   harness entry points).
    #[inline(always)]
    pub fn page_number(&self, page_size: u64) -> PageNumber {
        PageNumber(self.0 / page_size)
    }
}

impl PageNumber {
    /// Returns the raw page number value.
    #[inline(always)]
    pub fn val(&self) -> u64 {
        self.0
    }

    /// Returns the lowest address inside this page.
    ///
    /// # Arguments
    ///
    /// * `page_size` - Page size in bytes.
    #[inline(always)]
    pub fn base_addr(&self, page_size: u64) -> VirtAddr {
        VirtAddr(self.0 * page_size)
    }
}

impl fmt::Display for VirtAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
