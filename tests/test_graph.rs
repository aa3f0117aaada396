/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use levelsync::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_endpoint_validation() {
    assert_eq!(
        AdjGraph::from_edges(3, [(1, 4)]),
        Err(GraphError::EndpointOutOfRange {
            u: 1,
            v: 4,
            num_vertices: 3
        })
    );
    assert_eq!(
        AdjGraph::from_edges(3, [(0, 2)]),
        Err(GraphError::EndpointOutOfRange {
            u: 0,
            v: 2,
            num_vertices: 3
        })
    );
    // An empty graph has no valid endpoints at all.
    assert!(AdjGraph::from_edges(0, [(1, 1)]).is_err());
}

#[test]
fn test_insertion_order() -> Result<()> {
    let mut graph = AdjGraph::empty(3);
    graph.add_edge(1, 3)?;
    graph.add_edge(1, 2)?;
    assert_eq!(graph.num_vertices(), 3);
    assert_eq!(graph.num_edges(), 2);
    assert_eq!(graph.neighbors(1), [3, 2]);
    assert_eq!(graph.neighbors(2), [1]);
    assert_eq!(graph.neighbors(3), [1]);
    Ok(())
}

#[test]
fn test_symmetry() {
    let mut rng = SmallRng::seed_from_u64(5);
    let graph = AdjGraph::random(100, 400, &mut rng);
    assert_eq!(graph.num_edges(), 400);
    // Every undirected edge contributes one entry to both endpoints.
    let total: usize = (1..=100).map(|v| graph.neighbors(v).len()).sum();
    assert_eq!(total, 800);
    for u in 1..=100 {
        for &w in graph.neighbors(u) {
            assert!(graph.neighbors(w).contains(&u));
        }
    }
}

#[test]
fn test_self_loop() -> Result<()> {
    let mut graph = AdjGraph::empty(2);
    graph.add_edge(2, 2)?;
    assert_eq!(graph.neighbors(2), [2, 2]);
    assert_eq!(graph.num_edges(), 1);
    // The visited state ignores the re-encounter.
    assert_eq!(traverse_sequential(&graph, 2, Mode::Bfs)?.order(), [2]);
    Ok(())
}

#[test]
#[should_panic(expected = "does not exist")]
fn test_neighbors_out_of_range() {
    let graph = AdjGraph::empty(2);
    let _ = graph.neighbors(3);
}
