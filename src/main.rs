use std::{error::Error, time::Instant};

use clap::Parser;
use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;
use sliding_window_min::{
    generate_random_values, Naive, Queue, SlidingMin, SlidingWindowMin, WindowError,
};
use tracing::{debug, info, warn, Level};

#[derive(Clone, Copy, Debug, Serialize)]
struct Report {
    k: usize,
    n: usize,
    sigma: u64,
    seed: u64,
    /// Largest number of buffered candidates seen during the run.
    max_buffered: usize,
    /// Number of runs of equal consecutive minima.
    distinct_minima: usize,
    agree: bool,
    queue_ns: u128,
    naive_ns: u128,
}

/// Run both strategies on the same random stream and compare them.
fn evaluate(k: usize, n: usize, sigma: u64, seed: u64) -> Result<Report, WindowError> {
    let values = generate_random_values(n, sigma, seed);

    let start = Instant::now();
    let queue = Queue.sliding_min(k, values.iter().copied())?.collect_vec();
    let queue_ns = start.elapsed().as_nanos();

    let start = Instant::now();
    let naive = Naive.sliding_min(k, values.iter().copied())?.collect_vec();
    let naive_ns = start.elapsed().as_nanos();

    let mut it = SlidingWindowMin::new(k)?.process(values.iter().copied());
    let mut max_buffered = 0;
    while it.next().is_some() {
        max_buffered = max_buffered.max(it.buffered());
    }

    let agree = queue == naive;
    if !agree {
        let i = queue.iter().zip(&naive).position(|(a, b)| a != b);
        warn!(k, seed, first_mismatch = ?i, "strategies disagree");
    }
    debug!(k, max_buffered, queue_ns, naive_ns, "evaluated");

    Ok(Report {
        k,
        n,
        sigma,
        seed,
        max_buffered,
        distinct_minima: queue.iter().dedup().count(),
        agree,
        queue_ns,
        naive_ns,
    })
}

#[derive(clap::Subcommand)]
enum Command {
    /// Evaluate a single window size.
    Run {
        /// Window size.
        #[arg(short)]
        k: usize,
    },
    /// Evaluate window sizes 1, 2, 4, .., 1024 in parallel.
    Eval,
}

/// Cross-check the sliding window minimum strategies on random input.
#[derive(clap::Parser)]
struct Args {
    /// Length of the generated random stream.
    #[clap(short, default_value_t = 100000)]
    n: usize,
    /// Values are drawn from 0..sigma.
    #[clap(short, long, default_value_t = 4)]
    sigma: u64,
    /// Seed for the random stream. Random when omitted.
    #[clap(long)]
    seed: Option<u64>,
    /// Log per window size details.
    #[clap(short, long)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(n = args.n, sigma = args.sigma, seed, "generating input");

    let reports = match args.command {
        Command::Run { k } => vec![evaluate(k, args.n, args.sigma, seed)?],
        Command::Eval => (0..=10)
            .into_par_iter()
            .map(|e| evaluate(1 << e, args.n, args.sigma, seed))
            .collect::<Result<Vec<_>, _>>()?,
    };

    println!("{}", serde_json::to_string(&reports)?);

    let failed = reports.iter().filter(|r| !r.agree).map(|r| r.k).collect_vec();
    if !failed.is_empty() {
        return Err(format!("strategies disagree for k in {failed:?} (seed {seed})").into());
    }
    info!(runs = reports.len(), "all strategies agree");
    Ok(())
}
