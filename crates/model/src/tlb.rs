//! Translation cache model.
//!
//! A fully associative, fixed-capacity cache of page numbers ordered by
//! recency of use. It only models *residency* — whether a translation for a
//! page is currently cached — not the translation itself. The replacement
//! policy is true LRU: a hit promotes the page to the most-recently-used
//! position, a miss on a full cache evicts the least-recently-used page.
//!
//! # Performance
//!
//! - **Time Complexity:** `lookup()` is O(C) where C is the capacity; the
//!   capacities studied here are small enough that a linear scan beats the
//!   constant factors of an index structure.
//! - **Space Complexity:** O(C).

use std::collections::VecDeque;

use crate::common::addr::PageNumber;

/// Outcome of a single cache lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// The page was already resident.
    Hit,
    /// The page was not resident and has been installed (capacity permitting).
    Miss,
}

impl Access {
    /// Returns `true` for a hit.
    #[inline(always)]
    pub fn is_hit(self) -> bool {
        self == Self::Hit
    }
}

/// Translation cache structure.
///
/// Entries are kept in recency order: index 0 (the front) is the
/// least-recently-used page, the back is the most-recently-used. The cache
/// never holds duplicates and never exceeds its capacity. It keeps no
/// aggregate counters; tallying hits and misses is the caller's concern,
/// which keeps the cache a pure data structure.
#[derive(Clone, Debug)]
pub struct TranslationCache {
    /// Resident pages, LRU at the front.
    entries: VecDeque<PageNumber>,
    /// Maximum entry count, fixed at construction.
    capacity: usize,
}

impl TranslationCache {
    /// Creates an empty cache with the given capacity.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of resident pages. Zero is a degenerate
    ///   but legal configuration: every access misses and nothing is retained.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Looks up a page and updates the recency order.
    ///
    /// On a hit the page moves to the most-recently-used position; pages it
    /// passes keep their relative order. On a miss the page is installed at
    /// the most-recently-used position, evicting exactly the
    /// least-recently-used page if the cache was already full.
    ///
    /// # Arguments
    ///
    /// * `page` - The page number to look up. Every value is valid.
    ///
    /// # Returns
    ///
    /// [`Access::Hit`] if the page was resident, [`Access::Miss`] otherwise.
    pub fn lookup(&mut self, page: PageNumber) -> Access {
        if let Some(pos) = self.entries.iter().position(|&p| p == page) {
            // Remove-then-reinsert is still correct when the page is already
            // at the MRU end.
            let _ = self.entries.remove(pos);
            self.entries.push_back(page);
            return Access::Hit;
        }

        if self.capacity == 0 {
            return Access::Miss;
        }
        if self.entries.len() == self.capacity {
            let _ = self.entries.pop_front();
        }
        self.entries.push_back(page);
        Access::Miss
    }

    /// Returns the resident pages in recency order, oldest first.
    ///
    /// Purely for display; taking the snapshot never alters cache state.
    pub fn resident(&self) -> Vec<PageNumber> {
        self.entries.iter().copied().collect()
    }

    /// Returns `true` if the page is currently resident, without touching
    /// the recency order.
    pub fn contains(&self, page: PageNumber) -> bool {
        self.entries.contains(&page)
    }

    /// Returns the number of resident pages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no page is resident.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the fixed capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drops every resident page.
    ///
    /// The capacity is unchanged; the caller's counters are untouched.
    pub fn flush(&mut self) {
        self.entries.clear();
    }
}
