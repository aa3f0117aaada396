/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graph::AdjGraph;
use crate::visits::{check_start, Sequential, TraversalError, VisitOrder};
use sux::bits::BitVec;

/// A sequential breadth-first visit.
///
/// The frontier is double-buffered: the current level is scanned in order,
/// newly discovered vertices are appended to the next frontier, and the two
/// buffers are swapped at the end of the level. The resulting discovery
/// order is identical to the one produced by the textbook FIFO queue, and
/// the buffer swap delimits the distance classes recorded as level sizes.
///
/// # Examples
///
/// ```
/// use levelsync::prelude::*;
///
/// let graph = AdjGraph::from_edges(6, [(1, 2), (1, 3), (2, 4), (3, 5), (4, 6)]).unwrap();
/// let mut visit = breadth_first::Seq::new(&graph);
/// let result = visit.visit(1).unwrap();
///
/// assert_eq!(result.order(), [1, 2, 3, 4, 5, 6]);
/// assert_eq!(result.levels(), [1, 2, 2, 1]);
/// ```
pub struct Seq<'a> {
    graph: &'a AdjGraph,
    visited: BitVec,
    frontier: Vec<usize>,
    next: Vec<usize>,
}

impl<'a> Seq<'a> {
    /// Creates a new sequential breadth-first visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a AdjGraph) -> Self {
        Self {
            graph,
            visited: BitVec::new(graph.num_vertices() + 1),
            frontier: Vec::new(),
            next: Vec::new(),
        }
    }
}

impl Sequential for Seq<'_> {
    fn visit(&mut self, start: usize) -> Result<VisitOrder, TraversalError> {
        check_start(self.graph, start)?;
        self.reset();

        let mut order = vec![start];
        let mut levels = vec![1];
        self.visited.set(start, true);
        self.frontier.push(start);

        while !self.frontier.is_empty() {
            for &v in &self.frontier {
                for &w in self.graph.neighbors(v) {
                    if !self.visited[w] {
                        self.visited.set(w, true);
                        order.push(w);
                        self.next.push(w);
                    }
                }
            }
            if !self.next.is_empty() {
                levels.push(self.next.len());
            }
            // Swap the frontiers and clear the one to fill next.
            std::mem::swap(&mut self.frontier, &mut self.next);
            self.next.clear();
        }

        Ok(VisitOrder::from_parts(order, levels))
    }

    fn reset(&mut self) {
        self.visited.fill(false);
        self.frontier.clear();
        self.next.clear();
    }
}
