//! Random code allocation over a fixed inclusive range.
//!
//! Codes are drawn uniformly from the codes that are still free, so a draw
//! never has to retry on collision and an exhausted range is reported instead
//! of looping forever.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use rand::Rng;

// ---------------------------------------------------------------------------
// Code ranges
// ---------------------------------------------------------------------------

/// Three-digit color codes.
pub const COLOR_CODES: RangeInclusive<u16> = 100..=999;

/// Four-digit item type codes.
pub const ITEM_TYPE_CODES: RangeInclusive<u16> = 1000..=9999;

// ---------------------------------------------------------------------------
// Allocator
// ---------------------------------------------------------------------------

/// Hands out unused codes from an inclusive range.
#[derive(Debug, Clone)]
pub struct CodeAllocator {
    range: RangeInclusive<u16>,
}

impl CodeAllocator {
    pub fn new(range: RangeInclusive<u16>) -> Self {
        Self { range }
    }

    pub fn colors() -> Self {
        Self::new(COLOR_CODES)
    }

    pub fn item_types() -> Self {
        Self::new(ITEM_TYPE_CODES)
    }

    pub fn range(&self) -> &RangeInclusive<u16> {
        &self.range
    }

    /// Total number of codes in the range.
    pub fn capacity(&self) -> usize {
        self.range.clone().count()
    }

    pub fn contains(&self, code: u16) -> bool {
        self.range.contains(&code)
    }

    /// Number of codes in the range not present in `used`.
    pub fn remaining(&self, used: &BTreeSet<u16>) -> usize {
        let used_in_range = used.range(self.range.clone()).count();
        self.capacity() - used_in_range
    }

    /// Draw a random code that is not in `used`.
    ///
    /// Picks the k-th free code for a uniformly random k, so every free code
    /// is equally likely. Returns `None` once every code in the range is used.
    pub fn allocate<R: Rng>(&self, used: &BTreeSet<u16>, rng: &mut R) -> Option<u16> {
        let remaining = self.remaining(used);
        if remaining == 0 {
            return None;
        }

        let k = rng.random_range(0..remaining);
        self.range.clone().filter(|code| !used.contains(code)).nth(k)
    }
}
