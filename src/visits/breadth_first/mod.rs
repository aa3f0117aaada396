/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits.
//!
//! [`Seq`] is the sequential oracle: its discovery order is the classical
//! FIFO order, with neighbors scanned in adjacency order. [`Par`] is the
//! level-synchronous parallel engine; its discovery order is deterministic
//! for a fixed graph, start vertex, and worker count, coincides with the
//! oracle's when run with one worker, and always partitions discoveries
//! into the same distance classes as the oracle.

mod seq;
pub use seq::*;

mod par;
pub use par::*;
