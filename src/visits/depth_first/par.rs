/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graph::AdjGraph;
use crate::visits::{check_start, DiscoverSet, Parallel, TraversalError, VisitOrder};
use rayon::{prelude::*, ThreadPool};

/// A level-batched parallel depth-first visit.
///
/// At each round the whole stack is drained: its `k` entries are
/// partitioned into contiguous slices of `ceil(k / num_workers)` entries,
/// with worker 0 owning the slice at the top of the stack and every worker
/// expanding its slice top-down. Each entry is thus popped by exactly one
/// worker, with no shared pop loop to guard. Newly
/// [discovered](DiscoverSet::discover) vertices go into the worker's local
/// buffer; at the barrier the buffers are merged back onto the stack in
/// worker order, and the next round drains from the tail, so with a single
/// worker the most recent discoveries are still expanded first.
///
/// Buffer order and push order determine which vertices are expanded next
/// round, so the discovery order is deterministic for a fixed graph, start
/// vertex, and worker count, but it is *not* the LIFO order of the
/// [sequential oracle](super::Seq): only the set of discovered vertices is
/// guaranteed to match.
pub struct Par<'a> {
    graph: &'a AdjGraph,
    num_workers: usize,
    visited: DiscoverSet,
}

impl<'a> Par<'a> {
    /// Creates a parallel depth-first visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    /// * `num_workers`: the number of stack slices per round (clamped to at
    ///   least one); pass the size of the thread pool the visit will run
    ///   on.
    pub fn new(graph: &'a AdjGraph, num_workers: usize) -> Self {
        Self {
            graph,
            num_workers: num_workers.max(1),
            visited: DiscoverSet::new(graph.num_vertices()),
        }
    }

    /// Returns the number of stack slices per round.
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

        visited.discover(start);
        let mut order = vec![start];
        let mut levels = vec![1];
        let mut stack = vec![start];

        while !stack.is_empty() {
            let chunk = stack.len().div_ceil(self.num_workers);
            // Worker 0 owns the top of the stack; slices are scanned
            // top-down.
            let buffers: Vec<Vec<usize>> = thread_pool.install(|| {
                stack
                    .par_rchunks(chunk)
                    .map(|slice| {
                        let mut local = Vec::new();
                        for &v in slice.iter().rev() {
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

            // Merge phase: buffers back onto the stack in worker order,
            // single-threaded.
            stack.clear();
            for buffer in buffers {
                order.extend_from_slice(&buffer);
                stack.extend_from_slice(&buffer);
            }
            if !stack.is_empty() {
                levels.push(stack.len());
            }
        }

        Ok(VisitOrder::from_parts(order, levels))
    }

    fn reset(&mut self) {
        self.visited.clear();
    }
}
