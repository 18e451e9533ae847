//! heap-bench: times binary and binomial min-heaps over growing datasets.
//!
//! ```bash
//! # Reference sweep: N = 10^3 .. 10^7, 1000 lookups and extractions each
//! cargo run --release
//!
//! # Smaller sweep with a fixed seed
//! cargo run --release -- --sizes 1000,10000 --seed 42
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use heap_bench::config::{BenchConfig, DEFAULT_MAX_KEY, DEFAULT_OPERATIONS, DEFAULT_SIZES};
use heap_bench::harness;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Benchmark insert, peek-min and extract-min on binary and binomial min-heaps
#[derive(Parser, Debug)]
#[command(name = "heap-bench")]
#[command(version)]
struct Cli {
    /// Dataset sizes to benchmark, comma separated
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
    sizes: Vec<usize>,

    /// Timed lookups and extractions per heap and size
    #[arg(long, default_value_t = DEFAULT_OPERATIONS)]
    operations: usize,

    /// Exclusive upper bound for generated keys
    #[arg(long, default_value_t = DEFAULT_MAX_KEY)]
    max_key: i32,

    /// RNG seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
}

impl From<Cli> for BenchConfig {
    fn from(cli: Cli) -> Self {
        BenchConfig {
            sizes: cli.sizes,
            operations: cli.operations,
            max_key: cli.max_key,
            seed: cli.seed,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = BenchConfig::from(Cli::parse());
    config.validate().context("Invalid benchmark configuration")?;

    let seed = match config.seed {
        Some(seed) => seed,
        None => clock_seed()?,
    };
    info!(seed, sizes = ?config.sizes, operations = config.operations, "starting benchmark");

    let mut rng = StdRng::seed_from_u64(seed);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    harness::run(&config, &mut rng, &mut out).context("Benchmark run failed")?;

    info!("benchmark complete");
    Ok(())
}

/// Seed derived from the wall clock, so each run sees different keys
fn clock_seed() -> Result<u64> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .context("System clock is before the Unix epoch")?;
    // Truncation keeps the fast-moving low bits
    Ok(elapsed.as_nanos() as u64)
}

/// Initialize tracing subscriber with environment filter; logs go to stderr.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
