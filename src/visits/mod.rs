/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph visits.
//!
//! A *visit* explores the component reachable from a start vertex and
//! returns a [`VisitOrder`]: the vertices in the order in which they were
//! discovered, together with the number of discoveries per level. Every
//! discipline comes in two flavors:
//!
//! * a [`Sequential`] oracle, whose output is the canonical single-thread
//!   order used as ground truth by the
//!   [correctness checks](crate::check);
//! * a [`Parallel`] level-synchronous engine, which partitions the current
//!   frontier across workers, accumulates discoveries in thread-local
//!   buffers, and merges them in worker order at a per-level barrier.
//!
//! Visit state is cleared at the beginning of every call, so a visit value
//! can be reused across runs on the same graph without leaking the previous
//! run's visited flags.

pub mod breadth_first;
pub mod depth_first;

mod discover;
pub use discover::DiscoverSet;

use crate::graph::AdjGraph;
use rayon::ThreadPool;
use thiserror::Error;

/// Errors raised by visits before any traversal state is touched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalError {
    /// The start vertex does not name a vertex of the graph.
    #[error("start vertex {start} out of range [1, {num_vertices}]")]
    StartOutOfRange {
        /// The offending start vertex.
        start: usize,
        /// The number of vertices of the graph.
        num_vertices: usize,
    },
}

/// The traversal discipline of a visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Breadth-first: the frontier is expanded a distance class at a time.
    Bfs,
    /// Depth-first: the frontier is a level-batched stack.
    Dfs,
}

/// The outcome of a visit: the discovery order and the per-level discovery
/// counts.
///
/// The order contains each discovered vertex exactly once, starting with the
/// start vertex. For breadth-first visits the levels are the distance
/// classes, so the `d`-th [level block](Self::level_blocks) contains exactly
/// the vertices at distance `d` from the start; for depth-first visits they
/// are the discoveries of each expansion round. In both cases the level
/// sizes sum to the length of the order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitOrder {
    order: Vec<usize>,
    levels: Vec<usize>,
}

impl VisitOrder {
    /// Assembles a visit order from its parts.
    ///
    /// # Panics
    ///
    /// This method will panic if the level sizes do not sum to the length of
    /// the order.
    pub fn from_parts(order: Vec<usize>, levels: Vec<usize>) -> Self {
        let total: usize = levels.iter().sum();
        if total != order.len() {
            panic!(
                "Level sizes sum to {} but the order contains {} vertices",
                total,
                order.len(),
            );
        }
        Self { order, levels }
    }

    /// Returns the vertices in discovery order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns the number of vertices discovered at each level.
    pub fn levels(&self) -> &[usize] {
        &self.levels
    }

    /// Returns the number of discovered vertices.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no vertex was discovered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns an iterator over the vertices in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    /// Returns an iterator over the levels as contiguous blocks of the
    /// discovery order.
    pub fn level_blocks(&self) -> impl Iterator<Item = &[usize]> + '_ {
        let mut offset = 0;
        self.levels.iter().map(move |&len| {
            let block = &self.order[offset..offset + len];
            offset += len;
            block
        })
    }

    /// Consumes the visit order, returning the vertices in discovery order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }
}

impl<'a> IntoIterator for &'a VisitOrder {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter().copied()
    }
}

/// A single-thread visit.
pub trait Sequential {
    /// Visits the component reachable from `start`.
    ///
    /// State left over by previous calls is cleared first, so consecutive
    /// calls on the same value are independent.
    fn visit(&mut self, start: usize) -> Result<VisitOrder, TraversalError>;

    /// Clears the visit state.
    fn reset(&mut self);
}

/// A parallel visit.
pub trait Parallel {
    /// Visits the component reachable from `start` using the threads of
    /// `thread_pool`.
    ///
    /// State left over by previous calls is cleared first, so consecutive
    /// calls on the same value are independent.
    fn par_visit(
        &mut self,
        start: usize,
        thread_pool: &ThreadPool,
    ) -> Result<VisitOrder, TraversalError>;

    /// Clears the visit state.
    fn reset(&mut self);
}

/// Rejects a start vertex outside `[1, N]` before any state is created.
pub(crate) fn check_start(graph: &AdjGraph, start: usize) -> Result<(), TraversalError> {
    let num_vertices = graph.num_vertices();
    if start == 0 || start > num_vertices {
        return Err(TraversalError::StartOutOfRange {
            start,
            num_vertices,
        });
    }
    Ok(())
}

/// Runs a single-thread visit of the given discipline and returns its
/// discovery order.
pub fn traverse_sequential(
    graph: &AdjGraph,
    start: usize,
    mode: Mode,
) -> Result<VisitOrder, TraversalError> {
    match mode {
        Mode::Bfs => breadth_first::Seq::new(graph).visit(start),
        Mode::Dfs => depth_first::Seq::new(graph).visit(start),
    }
}

/// Runs a level-synchronous parallel visit of the given discipline on a
/// freshly built pool of `threads` threads (clamped to at least one) and
/// returns its discovery order.
///
/// To reuse a pool across several runs, instantiate the engines directly and
/// call [`Parallel::par_visit`].
pub fn traverse_parallel(
    graph: &AdjGraph,
    start: usize,
    mode: Mode,
    threads: usize,
) -> Result<VisitOrder, TraversalError> {
    let threads = threads.max(1);
    let thread_pool = crate::thread_pool![threads];
    match mode {
        Mode::Bfs => breadth_first::Par::new(graph, threads).par_visit(start, &thread_pool),
        Mode::Dfs => depth_first::Par::new(graph, threads).par_visit(start, &thread_pool),
    }
}
