//! Cache simulator CLI.
//!
//! This binary replays a recorded memory-access trace against one cache
//! configuration and prints hit/miss/eviction statistics. It performs:
//! 1. **Config:** built-in defaults, optional JSON file, flag overrides.
//! 2. **Replay:** in-order simulation of the whole trace.
//! 3. **Report:** optional per-access decoded display plus the final counters.

use clap::{Parser, Subcommand};
use std::{fs, process};
use tracing_subscriber::EnvFilter;

use cachesim_core::AccessSimulator;
use cachesim_core::config::CacheConfig;
use cachesim_core::sim::trace;

#[derive(Parser, Debug)]
#[command(
    name = "csim",
    author,
    version,
    about = "Trace-driven set-associative cache simulator",
    long_about = "Replay a traffic file against a set-associative cache with NMRU replacement.\n\nEach traffic line is \"<hex-address> <0|1>\" (0 = load, 1 = store). Block size is fixed at 128 bytes and addresses are 32-bit.\n\nExamples:\n  csim run traces/gcc.txt --size 2048 --ways 2\n  csim run traces/gcc.txt --config cache.json --trace-accesses\n  csim run traces/gcc.txt -s 512 -w 1 --sections summary --sections misses"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a traffic file and print statistics.
    Run {
        /// Traffic file: whitespace-separated "<hex-address> <0|1>" pairs.
        trace: String,

        /// Total cache size in bytes (overrides --config).
        #[arg(short, long)]
        size: Option<usize>,

        /// Ways per set (overrides --config).
        #[arg(short, long)]
        ways: Option<usize>,

        /// JSON cache configuration file.
        #[arg(long)]
        config: Option<String>,

        /// Print each access as tag/index/offset plus its outcome.
        #[arg(long)]
        trace_accesses: bool,

        /// Statistics sections to print: summary, hits, misses (default: all).
        #[arg(long)]
        sections: Vec<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            trace,
            size,
            ways,
            config,
            trace_accesses,
            sections,
        }) => cmd_run(&trace, size, ways, config.as_deref(), trace_accesses, &sections),
        None => {
            eprintln!("csim — pass a subcommand");
            eprintln!();
            eprintln!("  csim run <trace> -s <bytes> -w <ways>   Replay a traffic file");
            eprintln!("  csim run <trace> --config cache.json    Configure from JSON");
            eprintln!();
            eprintln!("  csim --help  for full options");
            process::exit(1);
        }
    }
}

/// Runs the simulator: resolves config, parses the trace, replays it, and
/// prints the report.
///
/// Exits the process with code 1 on a configuration or trace error
/// (reported to stderr before any statistics are produced).
fn cmd_run(
    trace_path: &str,
    size: Option<usize>,
    ways: Option<usize>,
    config_path: Option<&str>,
    trace_accesses: bool,
    sections: &[String],
) {
    let mut config = load_config(config_path);
    if let Some(size) = size {
        config.size_bytes = size;
    }
    if let Some(ways) = ways {
        config.ways = ways;
    }

    let mut sim = match AccessSimulator::new(&config) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let records = match trace::load_trace(trace_path) {
        Ok(records) => records,
        Err(e) => {
            eprintln!("Error: {trace_path}: {e}");
            process::exit(1);
        }
    };
    tracing::info!(trace = trace_path, records = records.len(), "replaying");

    let geometry = *sim.geometry();
    println!(
        "Configuration: {} B, {}-way, {} sets ({} B blocks)",
        geometry.size_bytes, geometry.ways, geometry.num_sets, geometry.block_bytes
    );
    println!(
        "  index_bits: {}  tag_bits: {}  trace: {} ({} records)",
        geometry.index_bits,
        geometry.tag_bits,
        trace_path,
        records.len()
    );

    if trace_accesses {
        for record in &records {
            let step = sim.step(record);
            println!(
                "{} {} {} -> {}",
                record.addr, step.op, step.decoded, step.outcome
            );
        }
    } else {
        let _ = sim.run(&records);
    }

    sim.stats().print_sections(sections);
}

/// Loads the cache configuration from a JSON file, or the defaults when no
/// path is given.
///
/// Exits the process with code 1 when the file cannot be read or parsed.
fn load_config(path: Option<&str>) -> CacheConfig {
    let Some(path) = path else {
        return CacheConfig::default();
    };
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading config {path}: {e}");
        process::exit(1);
    });
    CacheConfig::from_json(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing config {path}: {e}");
        process::exit(1);
    })
}
