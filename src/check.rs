/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Correctness checks comparing a visit order against an oracle's.
//!
//! The comparison contract depends on what the engine under test actually
//! promises, so [`check`] is parameterized by a [`CheckMode`]:
//! [`StrictOrder`](CheckMode::StrictOrder) only when both orders come from
//! the same partition and merge policy (one worker against the sequential
//! oracle, or two runs at the same worker count),
//! [`LevelSets`](CheckMode::LevelSets) for parallel breadth-first visits,
//! and [`SetEquality`](CheckMode::SetEquality) for parallel depth-first
//! visits. Length equality is checked first in every mode; byte-for-byte
//! order equality across worker counts is never asserted.

use crate::visits::VisitOrder;
use std::collections::HashMap;
use std::fmt;

/// The comparison contract applied by [`check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
    /// Equal length and element-wise identical orders.
    StrictOrder,
    /// Equal length and equal sets of discovered vertices.
    SetEquality,
    /// [`SetEquality`](Self::SetEquality), plus every vertex must appear in
    /// the same level block in both orders (for breadth-first visits, at
    /// the same distance from the start).
    LevelSets,
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckMode::StrictOrder => write!(f, "strict order"),
            CheckMode::SetEquality => write!(f, "set equality"),
            CheckMode::LevelSets => write!(f, "level sets"),
        }
    }
}

/// The result of a [`check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The observed order satisfies the contract.
    Pass,
    /// The observed order violates the contract.
    Fail(Mismatch),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Pass => write!(f, "Pass"),
            Outcome::Fail(mismatch) => write!(f, "Fail: {}", mismatch),
        }
    }
}

/// The first violation found by a [`check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// The two orders have different lengths.
    Length {
        /// The oracle's length.
        expected: usize,
        /// The observed length.
        observed: usize,
    },
    /// The orders differ at `index`.
    Position {
        /// The first index at which the orders differ.
        index: usize,
        /// The oracle's vertex at that index.
        expected: usize,
        /// The observed vertex at that index.
        observed: usize,
    },
    /// A vertex was discovered by exactly one of the two visits (or more
    /// than once by one of them).
    Vertex {
        /// The offending vertex.
        vertex: usize,
    },
    /// A vertex was discovered in the wrong level.
    Distance {
        /// The offending vertex.
        vertex: usize,
        /// The oracle's level for that vertex.
        expected: usize,
        /// The observed level.
        observed: usize,
    },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::Length { expected, observed } => write!(
                f,
                "the orders have different lengths (expected {expected}, observed {observed})"
            ),
            Mismatch::Position {
                index,
                expected,
                observed,
            } => write!(
                f,
                "mismatch at index {index} (expected vertex {expected}, observed vertex {observed})"
            ),
            Mismatch::Vertex { vertex } => write!(
                f,
                "vertex {vertex} was discovered by exactly one of the two visits"
            ),
            Mismatch::Distance {
                vertex,
                expected,
                observed,
            } => write!(
                f,
                "vertex {vertex} was discovered at level {observed} instead of level {expected}"
            ),
        }
    }
}

/// Compares an observed visit order against an oracle's under the given
/// mode, reporting the first violation found.
pub fn check(oracle: &VisitOrder, observed: &VisitOrder, mode: CheckMode) -> Outcome {
    if oracle.len() != observed.len() {
        return Outcome::Fail(Mismatch::Length {
            expected: oracle.len(),
            observed: observed.len(),
        });
    }

    match mode {
        CheckMode::StrictOrder => check_positions(oracle.order(), observed.order()),
        CheckMode::SetEquality => check_sets(oracle.order(), observed.order()),
        CheckMode::LevelSets => match check_sets(oracle.order(), observed.order()) {
            Outcome::Pass => check_distances(oracle, observed),
            fail => fail,
        },
    }
}

fn check_positions(expected: &[usize], observed: &[usize]) -> Outcome {
    for (index, (&e, &o)) in expected.iter().zip(observed).enumerate() {
        if e != o {
            return Outcome::Fail(Mismatch::Position {
                index,
                expected: e,
                observed: o,
            });
        }
    }
    Outcome::Pass
}

fn check_sets(expected: &[usize], observed: &[usize]) -> Outcome {
    let mut expected = expected.to_vec();
    let mut observed = observed.to_vec();
    expected.sort_unstable();
    observed.sort_unstable();
    for (&e, &o) in expected.iter().zip(&observed) {
        if e != o {
            // The smaller vertex is the one missing from the other side.
            return Outcome::Fail(Mismatch::Vertex { vertex: e.min(o) });
        }
    }
    Outcome::Pass
}

fn check_distances(oracle: &VisitOrder, observed: &VisitOrder) -> Outcome {
    let mut expected = HashMap::with_capacity(oracle.len());
    for (level, block) in oracle.level_blocks().enumerate() {
        for &v in block {
            expected.insert(v, level);
        }
    }
    for (level, block) in observed.level_blocks().enumerate() {
        for &v in block {
            match expected.get(&v) {
                None => return Outcome::Fail(Mismatch::Vertex { vertex: v }),
                Some(&e) if e != level => {
                    return Outcome::Fail(Mismatch::Distance {
                        vertex: v,
                        expected: e,
                        observed: level,
                    })
                }
                _ => {}
            }
        }
    }
    Outcome::Pass
}
