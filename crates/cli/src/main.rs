//! TLB hit-ratio simulator CLI.
//!
//! This binary provides a single entry point for both simulation modes. It performs:
//! 1. **Trace replay:** Step-by-step table of hits, misses, and evictions for a short address list.
//! 2. **Capacity sweep:** Hit ratio per cache capacity over generated hot-page traffic, as a bar chart or JSON.

use clap::{Parser, Subcommand};
use std::{fs, process};

use tlbsim_core::common::addr::VirtAddr;
use tlbsim_core::common::error::ConfigError;
use tlbsim_core::config::Config;
use tlbsim_core::sim::{self, Simulator};
use tlbsim_core::trace;

/// The worked demo sequence: pages 0,0,1,0,2,3,4,1,0,5 with a 1 KiB page size.
const DEMO_ADDRESSES: &[u64] = &[100, 105, 2000, 100, 3000, 4000, 5000, 2000, 105, 6000];

#[derive(Parser, Debug)]
#[command(
    name = "tlbsim",
    author,
    version,
    about = "TLB hit-ratio simulator",
    long_about = "Model a Translation Lookaside Buffer as a bounded LRU page cache and measure hit ratios.\n\nExamples:\n  tlbsim trace\n  tlbsim trace -a 100,105,2000,100 --entries 2\n  tlbsim sweep --seed 7 --max-entries 32\n  tlbsim sweep --config sweep.json --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a short address list step by step, showing residency after each access.
    Trace {
        /// Comma-separated virtual addresses (defaults to the built-in demo sequence).
        #[arg(short, long, value_delimiter = ',')]
        addresses: Option<Vec<u64>>,

        /// Page size in bytes.
        #[arg(long, default_value_t = 1024)]
        page_size: u64,

        /// Cache capacity in entries.
        #[arg(long, default_value_t = 4)]
        entries: usize,
    },

    /// Measure hit ratio across a range of cache capacities on generated hot-page traffic.
    Sweep {
        /// JSON configuration file (flags below override its values).
        #[arg(short, long)]
        config: Option<String>,

        /// Traffic generator seed.
        #[arg(long)]
        seed: Option<u64>,

        /// Page size in bytes.
        #[arg(long)]
        page_size: Option<u64>,

        /// Smallest capacity to measure.
        #[arg(long)]
        min_entries: Option<usize>,

        /// Largest capacity to measure (inclusive).
        #[arg(long)]
        max_entries: Option<usize>,

        /// Number of addresses to generate.
        #[arg(long)]
        accesses: Option<usize>,

        /// Fraction of traffic aimed at hot pages.
        #[arg(long)]
        hot_fraction: Option<f64>,

        /// Emit the sweep result as JSON instead of a bar chart.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Trace {
            addresses,
            page_size,
            entries,
        } => cmd_trace(addresses, page_size, entries),
        Commands::Sweep {
            config,
            seed,
            page_size,
            min_entries,
            max_entries,
            accesses,
            hot_fraction,
            json,
        } => cmd_sweep(
            config,
            seed,
            page_size,
            min_entries,
            max_entries,
            accesses,
            hot_fraction,
            json,
        ),
    }
}

/// Prints a configuration error and exits with code 1.
fn die(err: &dyn std::fmt::Display) -> ! {
    eprintln!("Error: {}", err);
    process::exit(1);
}

/// Replays an address list, printing one row per access and a final summary.
///
/// Uses the built-in demo sequence when no addresses are given.
fn cmd_trace(addresses: Option<Vec<u64>>, page_size: u64, entries: usize) {
    let addresses = addresses.unwrap_or_else(|| DEMO_ADDRESSES.to_vec());
    if addresses.is_empty() {
        die(&ConfigError::EmptyTrace);
    }
    let mut simulator = match Simulator::new(entries, page_size) {
        Ok(s) => s,
        Err(e) => die(&e),
    };

    println!(
        "Step-by-step trace (page_size={}, entries={})",
        page_size, entries
    );
    println!(
        "{:<10} | {:<8} | {:<6} | {}",
        "Virt Addr", "Page #", "Status", "Resident Pages (LRU -> MRU)"
    );
    println!("{}", "-".repeat(60));

    for addr in addresses {
        let event = simulator.access_event(VirtAddr::new(addr));
        let status = if event.outcome.is_hit() { "HIT" } else { "MISS" };
        let resident: Vec<u64> = event.resident.iter().map(|p| p.val()).collect();
        println!(
            "{:<10} | {:<8} | {:<6} | {:?}",
            addr,
            event.page.val(),
            status,
            resident
        );
    }

    let counters = simulator.counters();
    println!("{}", "-".repeat(60));
    println!(
        "Final Stats: Hits: {} | Misses: {} | Ratio: {:.2}%",
        counters.hits,
        counters.misses,
        counters.hit_ratio_percent()
    );
}

/// Runs the capacity sweep and prints a bar chart or JSON.
///
/// Configuration comes from the JSON file when given, otherwise defaults;
/// individual flags override either.
#[allow(clippy::too_many_arguments)]
fn cmd_sweep(
    config_path: Option<String>,
    seed: Option<u64>,
    page_size: Option<u64>,
    min_entries: Option<usize>,
    max_entries: Option<usize>,
    accesses: Option<usize>,
    hot_fraction: Option<f64>,
    json: bool,
) {
    let mut config = match config_path {
        Some(path) => {
            let text = fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("Error reading config {}: {}", path, e);
                process::exit(1);
            });
            serde_json::from_str::<Config>(&text).unwrap_or_else(|e| {
                eprintln!("Error parsing config {}: {}", path, e);
                process::exit(1);
            })
        }
        None => Config::default(),
    };

    if let Some(v) = seed {
        config.trace.seed = v;
    }
    if let Some(v) = page_size {
        config.page_size = v;
    }
    if let Some(v) = min_entries {
        config.sweep.min_entries = v;
    }
    if let Some(v) = max_entries {
        config.sweep.max_entries = v;
    }
    if let Some(v) = accesses {
        config.trace.accesses = v;
    }
    if let Some(v) = hot_fraction {
        config.trace.hot_fraction = v;
    }

    if let Err(e) = config.validate() {
        die(&e);
    }

    let addresses = match trace::generate(&config.trace, config.page_size) {
        Ok(a) => a,
        Err(e) => die(&e),
    };
    let result = match sim::sweep(&addresses, config.page_size, &config.sweep.capacities()) {
        Ok(r) => r,
        Err(e) => die(&e),
    };

    if json {
        let text = serde_json::to_string_pretty(&result).unwrap_or_else(|e| {
            eprintln!("Error encoding result: {}", e);
            process::exit(1);
        });
        println!("{}", text);
        return;
    }

    println!(
        "Capacity sweep: {} accesses over {} pages ({} hot, {:.0}% hot traffic), seed {}",
        config.trace.accesses,
        config.trace.total_pages,
        config.trace.hot_pages,
        config.trace.hot_fraction * 100.0,
        config.trace.seed
    );
    for point in &result {
        let bar = "#".repeat((point.hit_ratio / 5.0) as usize);
        println!(
            "entries {:02}: {:<20} {:.1}%",
            point.entries, bar, point.hit_ratio
        );
    }
}
