/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(unreachable_patterns)]

pub mod check;
pub mod graph;
pub mod report;
pub mod visits;

pub mod prelude {
    pub use crate::check::{check, CheckMode, Mismatch, Outcome};
    pub use crate::graph::{AdjGraph, GraphError};
    pub use crate::report::{Summary, Timings, TimingStream};
    pub use crate::visits::{
        breadth_first, depth_first, traverse_parallel, traverse_sequential, Mode, Parallel,
        Sequential, TraversalError, VisitOrder,
    };
}

/// Utility macro to create [thread pools](rayon::ThreadPool).
///
/// There are two forms of this macro:
/// * Create a [`ThreadPool`](rayon::ThreadPool) with the default settings:
/// ```
/// # use levelsync::thread_pool;
/// let t: rayon::ThreadPool = thread_pool![];
/// ```
/// * Create a [`ThreadPool`](rayon::ThreadPool) with a given number of threads:
/// ```
/// # use levelsync::thread_pool;
/// let t: rayon::ThreadPool = thread_pool![7];
/// assert_eq!(t.current_num_threads(), 7);
/// ```
#[macro_export]
macro_rules! thread_pool {
    () => {
        rayon::ThreadPoolBuilder::new()
            .build()
            .expect("Cannot build a ThreadPool with default parameters")
    };
    ($num_threads:expr) => {
        rayon::ThreadPoolBuilder::new()
            .num_threads($num_threads)
            .build()
            .unwrap_or_else(|_| {
                panic!(
                    "Cannot build a ThreadPool with default parameters and {} threads",
                    $num_threads,
                )
            })
    };
}
