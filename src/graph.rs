/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Adjacency-list graph storage.

use rand::Rng;
use thiserror::Error;

/// Errors raised while building an [`AdjGraph`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint does not name a vertex of the graph.
    #[error("edge ({u}, {v}): endpoint out of range [1, {num_vertices}]")]
    EndpointOutOfRange {
        /// The first endpoint of the offending edge.
        u: usize,
        /// The second endpoint of the offending edge.
        v: usize,
        /// The number of vertices of the graph.
        num_vertices: usize,
    },
}

/// A mutable undirected graph over vertices `1..=N`, based on a vector of
/// adjacency lists.
///
/// Each undirected edge contributes one entry to the list of both endpoints.
/// Lists keep insertion order and are never sorted; self-loops and parallel
/// edges are stored as given (a re-encounter during a traversal is ignored by
/// the visited state, so they are harmless). The vertex-indexed arena is
/// sized at construction time, so there is no capacity ceiling beyond the
/// vertex count itself.
///
/// The structure is never mutated during traversals and can be shared across
/// threads without locking.
///
/// # Examples
///
/// ```
/// use levelsync::graph::AdjGraph;
///
/// let graph = AdjGraph::from_edges(4, [(1, 2), (1, 3), (2, 4)]).unwrap();
/// assert_eq!(graph.num_vertices(), 4);
/// assert_eq!(graph.num_edges(), 3);
/// assert_eq!(graph.neighbors(1), [2, 3]);
/// assert_eq!(graph.neighbors(4), [2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjGraph {
    /// For each vertex, its list of neighbors; slot 0 is unused so vertex
    /// ids index directly.
    succ: Vec<Vec<usize>>,
    /// The number of undirected edges in the graph.
    num_edges: u64,
}

impl AdjGraph {
    /// Creates a new graph with `n` vertices and no edges.
    pub fn empty(n: usize) -> Self {
        Self {
            succ: vec![Vec::new(); n + 1],
            num_edges: 0,
        }
    }

    /// Creates a new graph with `n` vertices from an iterator of undirected
    /// edges.
    ///
    /// Returns an error on the first edge with an endpoint outside `[1, n]`.
    pub fn from_edges(
        n: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, GraphError> {
        let mut graph = Self::empty(n);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Adds an undirected edge, appending each endpoint to the other's
    /// neighbor list.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        let num_vertices = self.num_vertices();
        if u == 0 || u > num_vertices || v == 0 || v > num_vertices {
            return Err(GraphError::EndpointOutOfRange { u, v, num_vertices });
        }
        self.succ[u].push(v);
        self.succ[v].push(u);
        self.num_edges += 1;
        Ok(())
    }

    /// Returns the number of vertices of the graph.
    pub fn num_vertices(&self) -> usize {
        self.succ.len() - 1
    }

    /// Returns the number of undirected edges of the graph.
    pub fn num_edges(&self) -> u64 {
        self.num_edges
    }

    /// Returns the neighbors of `v` in insertion order.
    ///
    /// # Panics
    ///
    /// This method will panic if `v` is not a vertex of the graph.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        if v == 0 || v >= self.succ.len() {
            panic!(
                "Vertex {} does not exist (the graph has vertices 1..={})",
                v,
                self.num_vertices(),
            );
        }
        &self.succ[v]
    }

    /// Creates a graph with `n` vertices and `m` uniformly random edges.
    ///
    /// Endpoints are drawn independently, so self-loops and parallel edges
    /// may appear, as in any edge list taken as given. With `n = 0` the
    /// result is the empty graph regardless of `m`.
    pub fn random(n: usize, m: u64, rng: &mut impl Rng) -> Self {
        let mut graph = Self::empty(n);
        if n == 0 {
            return graph;
        }
        for _ in 0..m {
            let u = rng.random_range(1..=n);
            let v = rng.random_range(1..=n);
            // Endpoints are in range by construction.
            graph.succ[u].push(v);
            graph.succ[v].push(u);
            graph.num_edges += 1;
        }
        graph
    }
}
