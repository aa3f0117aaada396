/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::sync::atomic::Ordering;
use sux::bits::AtomicBitVec;

/// The shared discovered-vertex flags of a parallel visit.
///
/// [`discover`](Self::discover) returns true exactly once per vertex per
/// traversal run, under arbitrary concurrent callers: the flag is read and
/// written by a single atomic swap, so there is no window in which two
/// threads can both observe a vertex as undiscovered. Flags are monotonic
/// within a run and are cleared only by [`clear`](Self::clear).
///
/// # Examples
///
/// ```
/// use levelsync::visits::DiscoverSet;
///
/// let discovered = DiscoverSet::new(3);
/// assert!(discovered.discover(2));
/// assert!(!discovered.discover(2));
/// assert!(discovered.contains(2));
/// ```
pub struct DiscoverSet {
    bits: AtomicBitVec,
}

impl DiscoverSet {
    /// Creates a cleared set of flags for vertices `1..=num_vertices`.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            bits: AtomicBitVec::new(num_vertices + 1),
        }
    }

    /// Marks `v` as discovered, returning true if this call won the
    /// transition from undiscovered to discovered.
    #[inline(always)]
    pub fn discover(&self, v: usize) -> bool {
        !self.bits.swap(v, true, Ordering::Relaxed)
    }

    /// Returns true if `v` has been discovered.
    pub fn contains(&self, v: usize) -> bool {
        self.bits.get(v, Ordering::Relaxed)
    }

    /// Clears all flags.
    pub fn clear(&mut self) {
        self.bits.fill(false, Ordering::Relaxed);
    }
}
