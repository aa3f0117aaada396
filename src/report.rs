/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Speedup and efficiency reporting.

use std::fmt;
use std::time::Duration;

/// Floor substituted for a zero parallel elapsed time, below the resolution
/// of any wall clock; a true zero would make the speedup undefined.
const MIN_ELAPSED: Duration = Duration::from_nanos(1);

/// The timings of one sequential/parallel pair of runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// The wall-clock time of the sequential run.
    pub seq_elapsed: Duration,
    /// The wall-clock time of the parallel run.
    pub par_elapsed: Duration,
    /// The number of threads used by the parallel run.
    pub threads: usize,
}

impl Summary {
    /// Creates a summary; `threads` is clamped to at least one.
    pub fn new(seq_elapsed: Duration, par_elapsed: Duration, threads: usize) -> Self {
        Self {
            seq_elapsed,
            par_elapsed,
            threads: threads.max(1),
        }
    }

    /// Returns the ratio between the sequential and the parallel elapsed
    /// times.
    pub fn speedup(&self) -> f64 {
        self.seq_elapsed.as_secs_f64() / self.par_elapsed.max(MIN_ELAPSED).as_secs_f64()
    }

    /// Returns the speedup normalized by the number of threads.
    pub fn efficiency(&self) -> f64 {
        self.speedup() / self.threads as f64
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "speedup {:.4}, efficiency {:.4} on {} threads",
            self.speedup(),
            self.efficiency(),
            self.threads,
        )
    }
}

/// Streaming statistics over the elapsed times of repeated runs.
///
/// The average and the corrected sum of squares are maintained with
/// Welford's algorithm, so standard deviation does not suffer from
/// cancellation.
pub struct TimingStream {
    values: Vec<f64>,
    avg: f64,
    m2: f64,
}

/// The statistics of a [`TimingStream`], in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    /// The average elapsed time.
    pub avg: f64,
    /// The sample standard deviation (zero with fewer than two runs).
    pub std: f64,
    /// The median elapsed time.
    pub median: f64,
    /// The minimum elapsed time.
    pub min: f64,
}

impl TimingStream {
    /// Creates a stream with room for `capacity` timings.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            avg: 0.0,
            m2: 0.0,
        }
    }

    /// Ingests the elapsed time of one run.
    pub fn update(&mut self, elapsed: Duration) {
        let value = elapsed.as_secs_f64();
        self.values.push(value);

        let delta = value - self.avg;
        self.avg += delta / self.values.len() as f64;
        let delta2 = value - self.avg;
        self.m2 += delta * delta2;
    }

    /// Returns the number of timings ingested so far.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if no timing has been ingested yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consumes the stream and returns its statistics.
    ///
    /// # Panics
    ///
    /// This method will panic if no timing was ingested.
    pub fn finalize(mut self) -> Timings {
        assert!(!self.values.is_empty(), "no timings recorded");
        self.values.sort_unstable_by(|a, b| a.total_cmp(b));
        let std = if self.values.len() < 2 {
            0.0
        } else {
            (self.m2 / (self.values.len() - 1) as f64).sqrt()
        };
        Timings {
            avg: self.avg,
            std,
            median: self.values[(self.values.len() - 1) / 2],
            min: self.values[0],
        }
    }
}

impl fmt::Display for Timings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "avg {:.3} ms, std {:.3} ms, median {:.3} ms, min {:.3} ms",
            self.avg * 1000.0,
            self.std * 1000.0,
            self.median * 1000.0,
            self.min * 1000.0,
        )
    }
}
