/*
 * SPDX-FileCopyrightText: 2023 Tommaso Fontana
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};
use dsi_progress_logger::prelude::*;
use levelsync::prelude::*;
use levelsync::thread_pool;
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use rayon::ThreadPool;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Bfs,
    Dfs,
    Both,
}

#[derive(Parser, Debug)]
#[command(name = "levelsync", about = "Benchmarks level-synchronous parallel graph traversal against the sequential oracle.", long_about = None)]
struct CliArgs {
    /// The number of vertices of the graph.
    #[arg(short = 'n', long, default_value_t = 100_000)]
    vertices: usize,

    /// The number of random edges (ignored with --arcs).
    #[arg(short = 'm', long, default_value_t = 500_000)]
    edges: u64,

    /// Read the edges from a file with one "u v" pair per line (1-based)
    /// instead of generating them; lines starting with '#' are ignored.
    #[arg(long)]
    arcs: Option<PathBuf>,

    /// The start vertex.
    #[arg(short, long, default_value_t = 1)]
    start: usize,

    /// The number of worker threads of the parallel visits.
    #[arg(short, long, default_value_t = num_cpus::get())]
    threads: usize,

    /// The traversal disciplines to benchmark.
    #[arg(long, value_enum, default_value_t = ModeArg::Both)]
    mode: ModeArg,

    /// The seed of the random graph generator.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// How many timed runs per engine; run statistics are printed when
    /// greater than one.
    #[arg(long, default_value_t = 1)]
    repeats: usize,

    /// Print the parallel visit order.
    #[arg(long)]
    print_orders: bool,
}

pub fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .try_init()?;
    let args = CliArgs::parse();
    ensure!(args.vertices >= 1, "The graph must have at least one vertex");
    let threads = args.threads.max(1);

    let graph = match &args.arcs {
        Some(path) => read_arcs(path, args.vertices)?,
        None => random_graph(&args),
    };
    info!(
        "Graph with {} vertices and {} edges; start vertex {}, {} threads",
        graph.num_vertices(),
        graph.num_edges(),
        args.start,
        threads,
    );

    let thread_pool = thread_pool![threads];

    if matches!(args.mode, ModeArg::Bfs | ModeArg::Both) {
        // The merge order is strictly comparable with the oracle's order
        // only when both runs use the same partition policy, that is, with
        // one worker; otherwise the distance classes are the contract.
        let check_mode = if threads == 1 {
            CheckMode::StrictOrder
        } else {
            CheckMode::LevelSets
        };
        bench(
            "BFS",
            &mut breadth_first::Seq::new(&graph),
            &mut breadth_first::Par::new(&graph, threads),
            &thread_pool,
            &args,
            threads,
            check_mode,
        )?;
    }
    if matches!(args.mode, ModeArg::Dfs | ModeArg::Both) {
        bench(
            "DFS",
            &mut depth_first::Seq::new(&graph),
            &mut depth_first::Par::new(&graph, threads),
            &thread_pool,
            &args,
            threads,
            CheckMode::SetEquality,
        )?;
    }
    Ok(())
}

fn random_graph(args: &CliArgs) -> AdjGraph {
    let mut pl = ProgressLogger::default();
    pl.item_name("edge");
    pl.start(format!(
        "Generating a random graph with {} vertices and {} edges...",
        args.vertices, args.edges,
    ));
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let graph = AdjGraph::random(args.vertices, args.edges, &mut rng);
    pl.done();
    graph
}

fn read_arcs(path: &Path, n: usize) -> Result<AdjGraph> {
    let file = BufReader::new(
        File::open(path).with_context(|| format!("Could not open {}", path.display()))?,
    );
    let mut pl = ProgressLogger::default();
    pl.item_name("edge");
    pl.start(format!("Reading edges from {}...", path.display()));
    let mut graph = AdjGraph::empty(n);
    for (lineno, line) in file.lines().enumerate() {
        let line = line.with_context(|| format!("Could not read line {}", lineno + 1))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut endpoints = line.split_whitespace();
        let (u, v) = endpoints
            .next()
            .zip(endpoints.next())
            .with_context(|| format!("Line {} does not contain two vertices", lineno + 1))?;
        let u = u
            .parse::<usize>()
            .with_context(|| format!("Invalid vertex on line {}", lineno + 1))?;
        let v = v
            .parse::<usize>()
            .with_context(|| format!("Invalid vertex on line {}", lineno + 1))?;
        graph
            .add_edge(u, v)
            .with_context(|| format!("Invalid edge on line {}", lineno + 1))?;
        pl.light_update();
    }
    pl.done();
    Ok(graph)
}

fn bench<S: Sequential, P: Parallel>(
    label: &str,
    seq: &mut S,
    par: &mut P,
    thread_pool: &ThreadPool,
    args: &CliArgs,
    threads: usize,
    check_mode: CheckMode,
) -> Result<()> {
    let repeats = args.repeats.max(1);

    let (oracle, seq_timings) = time_runs(repeats, || seq.visit(args.start))?;
    let (parallel, par_timings) = time_runs(repeats, || par.par_visit(args.start, thread_pool))?;

    let outcome = check(&oracle, &parallel, check_mode);
    let summary = Summary::new(
        Duration::from_secs_f64(seq_timings.avg),
        Duration::from_secs_f64(par_timings.avg),
        threads,
    );

    println!("{label} sequential time: {:.3} ms", seq_timings.avg * 1000.0);
    println!("{label} parallel time:   {:.3} ms", par_timings.avg * 1000.0);
    if repeats > 1 {
        println!("{label} sequential runs: {seq_timings}");
        println!("{label} parallel runs:   {par_timings}");
    }
    println!("{label} speedup:    {:.4}", summary.speedup());
    println!("{label} threads:    {}", summary.threads);
    println!("{label} efficiency: {:.4}", summary.efficiency());
    println!("{label} correctness ({check_mode} check): {outcome}");
    if let Outcome::Fail(_) = outcome {
        // A mismatch is a reportable result, not a fatal error: print both
        // orders and keep going.
        println!("{label} oracle order:   {:?}", oracle.order());
        println!("{label} parallel order: {:?}", parallel.order());
    } else if args.print_orders {
        println!("{label} visit order: {:?}", parallel.order());
    }
    Ok(())
}

fn time_runs<F: FnMut() -> Result<VisitOrder, TraversalError>>(
    repeats: usize,
    mut run: F,
) -> Result<(VisitOrder, Timings)> {
    let mut stream = TimingStream::with_capacity(repeats);
    let mut last = None;
    for _ in 0..repeats {
        let clock = Instant::now();
        let order = run()?;
        stream.update(clock.elapsed());
        last = Some(order);
    }
    Ok((last.expect("at least one timed run"), stream.finalize()))
}
