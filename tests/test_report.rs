/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use levelsync::prelude::*;
use std::time::Duration;

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn test_speedup_and_efficiency() {
    let summary = Summary::new(Duration::from_millis(100), Duration::from_millis(25), 4);
    assert_close(summary.speedup(), 4.0);
    assert_close(summary.efficiency(), 1.0);
}

#[test]
fn test_zero_parallel_elapsed() {
    // A zero measurement is floored, so the speedup stays finite.
    let summary = Summary::new(Duration::from_millis(1), Duration::ZERO, 8);
    assert!(summary.speedup().is_finite());
    assert!(summary.speedup() > 0.0);
    assert!(summary.efficiency().is_finite());
}

#[test]
fn test_threads_clamped() {
    let summary = Summary::new(Duration::from_millis(1), Duration::from_millis(1), 0);
    assert_eq!(summary.threads, 1);
    assert_close(summary.efficiency(), summary.speedup());
}

#[test]
fn test_timing_stream() {
    let mut stream = TimingStream::with_capacity(2);
    stream.update(Duration::from_millis(2));
    stream.update(Duration::from_millis(4));
    assert_eq!(stream.len(), 2);
    let timings = stream.finalize();
    assert_close(timings.avg, 0.003);
    assert_close(timings.min, 0.002);
    assert_close(timings.median, 0.002);
    assert_close(timings.std, (2e-6_f64).sqrt());
}

#[test]
fn test_single_run() {
    let mut stream = TimingStream::with_capacity(1);
    stream.update(Duration::from_millis(3));
    let timings = stream.finalize();
    assert_close(timings.avg, 0.003);
    assert_close(timings.median, 0.003);
    assert_close(timings.min, 0.003);
    assert_close(timings.std, 0.0);
}
