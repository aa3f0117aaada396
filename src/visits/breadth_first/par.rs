/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graph::AdjGraph;
use crate::visits::{check_start, DiscoverSet, Parallel, TraversalError, VisitOrder};
use rayon::{prelude::*, ThreadPool};

/// A level-synchronous parallel breadth-first visit.
///
/// Each level is processed in three phases:
///
/// 1. the frontier is partitioned into contiguous slices of
///    `ceil(k / num_workers)` entries, a pure function of the frontier
///    length and the worker count;
/// 2. every worker scans its slice in order and tries to
///    [discover](DiscoverSet::discover) each neighbor with a single atomic
///    test-and-set; winners go into the worker's local buffer, so the
///    shared frontier is never mutated concurrently;
/// 3. at the barrier the buffers are handed over to a single-threaded merge
///    that concatenates them in worker order into the next frontier and the
///    discovery order.
///
/// The resulting order is deterministic for a fixed graph, start vertex,
/// and worker count. With one worker it degenerates to the sequential scan
/// order, so it equals the [oracle](super::Seq)'s order exactly; with more
/// workers only the composition of each distance class is guaranteed, as a
/// vertex reachable from two slices is appended by whichever worker wins
/// the discovery race.
///
/// # Examples
///
/// ```
/// use levelsync::prelude::*;
/// use levelsync::thread_pool;
///
/// let graph = AdjGraph::from_edges(6, [(1, 2), (1, 3), (2, 4), (3, 5), (4, 6)]).unwrap();
/// let mut visit = breadth_first::Par::new(&graph, 2);
/// let result = visit.par_visit(1, &thread_pool![2]).unwrap();
///
/// // The distance classes are those of the sequential oracle.
/// assert_eq!(result.levels(), [1, 2, 2, 1]);
/// ```
pub struct Par<'a> {
    graph: &'a AdjGraph,
    num_workers: usize,
    visited: DiscoverSet,
}

impl<'a> Par<'a> {
    /// Creates a parallel breadth-first visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    /// * `num_workers`: the number of frontier slices per level (clamped to
    ///   at least one); pass the size of the thread pool the visit will run
    ///   on.
    pub fn new(graph: &'a AdjGraph, num_workers: usize) -> Self {
        Self {
            graph,
            num_workers: num_workers.max(1),
            visited: DiscoverSet::new(graph.num_vertices()),
        }
    }

    /// Returns the number of frontier slices per level.
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }
}

impl Parallel for Par<'_> {
    fn par_visit(
        &mut self,
        start: usize,
        thread_pool: &ThreadPool,
    ) -> Result<VisitOrder, TraversalError> {
        check_start(self.graph, start)?;
        self.reset();

        let graph = self.graph;
        let visited = &self.visited;

        // The start vertex always wins on a cleared set.
        visited.discover(start);
        let mut order = vec![start];
        let mut levels = vec![1];
        let mut frontier = vec![start];

        while !frontier.is_empty() {
            let chunk = frontier.len().div_ceil(self.num_workers);
            let buffers: Vec<Vec<usize>> = thread_pool.install(|| {
                frontier
                    .par_chunks(chunk)
                    .map(|slice| {
                        let mut local = Vec::new();
                        for &v in slice {
                            for &w in graph.neighbors(v) {
                                if visited.discover(w) {
                                    local.push(w);
                                }
                            }
                        }
                        local
                    })
                    .collect()
            });

            // Merge phase: buffers in worker order, single-threaded.
            frontier.clear();
            for buffer in buffers {
                order.extend_from_slice(&buffer);
                frontier.extend_from_slice(&buffer);
            }
            if !frontier.is_empty() {
                levels.push(frontier.len());
            }
        }

        Ok(VisitOrder::from_parts(order, levels))
    }

    fn reset(&mut self) {
        self.visited.clear();
    }
}
