/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graph::AdjGraph;
use crate::visits::{check_start, Sequential, TraversalError, VisitOrder};
use sux::bits::BitVec;

/// A sequential depth-first visit.
///
/// This is an iterative implementation over an explicit stack. A vertex is
/// marked and appended to the discovery order when it is first seen (that
/// is, when it is pushed), not when it is popped, so the output is the
/// discovery order and no vertex enters the stack twice. Neighbors are
/// pushed in adjacency order, hence the last-pushed neighbor is explored
/// first.
///
/// Each level size records the discoveries of one expansion step.
///
/// # Examples
///
/// ```
/// use levelsync::prelude::*;
///
/// let graph = AdjGraph::from_edges(4, [(1, 2), (1, 3), (2, 4)]).unwrap();
/// let mut visit = depth_first::Seq::new(&graph);
///
/// // 2 and 3 are discovered while expanding 1; 3, pushed last, is
/// // expanded before 2, which then discovers 4.
/// assert_eq!(visit.visit(1).unwrap().order(), [1, 2, 3, 4]);
/// ```
pub struct Seq<'a> {
    graph: &'a AdjGraph,
    visited: BitVec,
    stack: Vec<usize>,
}

impl<'a> Seq<'a> {
    /// Creates a new sequential depth-first visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a AdjGraph) -> Self {
        Self {
            graph,
            visited: BitVec::new(graph.num_vertices() + 1),
            stack: Vec::new(),
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
        self.stack.push(start);

        while let Some(v) = self.stack.pop() {
            let mut discovered = 0;
            for &w in self.graph.neighbors(v) {
                if !self.visited[w] {
                    self.visited.set(w, true);
                    order.push(w);
                    self.stack.push(w);
                    discovered += 1;
                }
            }
            if discovered > 0 {
                levels.push(discovered);
            }
        }

        Ok(VisitOrder::from_parts(order, levels))
    }

    fn reset(&mut self) {
        self.visited.fill(false);
        self.stack.clear();
    }
}
