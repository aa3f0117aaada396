/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! [`Seq`] is the sequential oracle: an iterative LIFO stack marking
//! vertices when they are discovered, with neighbors pushed in adjacency
//! order so the last-pushed neighbor is explored first. [`Par`] expands the
//! stack a level batch at a time; it guarantees that the set of discovered
//! vertices equals the oracle's, but not the oracle's sequence, since a
//! true LIFO order under same-level parallel expansion would require
//! serializing every pop.

mod seq;
pub use seq::*;

mod par;
pub use par::*;
