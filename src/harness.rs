//! Timing harness for the heaps in this crate
//!
//! For every configured size the harness generates one random dataset and
//! drives each structure through the same workload:
//!
//! 1. insert every key in generation order (total time)
//! 2. `operations` consecutive `peek_min` calls (average per call)
//! 3. `operations` consecutive `extract_min` calls (average per call)
//!
//! When the dataset is smaller than `operations`, the heap runs dry during
//! step 3. Those empty extractions are counted, not treated as errors.

use crate::binary::MinHeap;
use crate::binomial::BinomialHeap;
use crate::config::BenchConfig;
use crate::traits::{Heap, HeapError};
use rand::Rng;
use std::fmt;
use std::hint::black_box;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Errors that stop a benchmark run
#[derive(Debug)]
pub enum BenchError {
    /// The configuration cannot be run
    InvalidConfig(String),
    /// A heap could not be constructed
    Heap(HeapError),
    /// Writing the report failed
    Io(io::Error),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::InvalidConfig(reason) => write!(f, "invalid configuration: {reason}"),
            BenchError::Heap(err) => write!(f, "heap error: {err}"),
            BenchError::Io(err) => write!(f, "failed to write report: {err}"),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::InvalidConfig(_) => None,
            BenchError::Heap(err) => Some(err),
            BenchError::Io(err) => Some(err),
        }
    }
}

impl From<HeapError> for BenchError {
    fn from(err: HeapError) -> Self {
        BenchError::Heap(err)
    }
}

impl From<io::Error> for BenchError {
    fn from(err: io::Error) -> Self {
        BenchError::Io(err)
    }
}

/// Measurements for one structure at one dataset size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperationTimings {
    /// Time to insert the whole dataset
    pub insert_total: Duration,
    /// Average time of one `peek_min`
    pub peek_avg: Duration,
    /// Average time of one `extract_min`
    pub extract_avg: Duration,
    /// Inserts rejected because the heap was full
    pub overflows: usize,
    /// `extract_min` calls that found the heap empty
    pub empty_extractions: usize,
}

/// All measurements for one dataset size
#[derive(Debug, Clone, PartialEq)]
pub struct SizeReport {
    pub size: usize,
    pub binary: OperationTimings,
    pub binomial: OperationTimings,
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Running tests for N={}", self.size)?;
        write_timings(f, "MinHeap", &self.binary)?;
        writeln!(f)?;
        write_timings(f, "BinomialHeap", &self.binomial)
    }
}

fn write_timings(f: &mut fmt::Formatter<'_>, name: &str, t: &OperationTimings) -> fmt::Result {
    write!(
        f,
        "{name} - Insert: {:.9}, Search: {:.9}, Remove: {:.9}",
        t.insert_total.as_secs_f64(),
        t.peek_avg.as_secs_f64(),
        t.extract_avg.as_secs_f64()
    )
}

/// Generates `n` keys uniformly distributed in `[0, max_key)`
pub fn generate_dataset<R: Rng>(rng: &mut R, n: usize, max_key: i32) -> Vec<i32> {
    (0..n).map(|_| rng.gen_range(0..max_key)).collect()
}

/// Runs the insert / peek / extract workload against `heap`
///
/// `operations` must be positive; averages divide by it.
pub fn time_operations<H: Heap<i32>>(
    mut heap: H,
    data: &[i32],
    operations: usize,
) -> OperationTimings {
    let mut overflows = 0;
    let start = Instant::now();
    for &key in data {
        if let Err(err) = heap.insert(black_box(key)) {
            overflows += 1;
            warn!(key, %err, "insert rejected");
        }
    }
    let insert_total = start.elapsed();

    let start = Instant::now();
    for _ in 0..operations {
        black_box(heap.peek_min());
    }
    let peek_avg = start.elapsed().div_f64(operations as f64);

    let mut empty_extractions = 0;
    let start = Instant::now();
    for _ in 0..operations {
        if black_box(heap.extract_min()).is_none() {
            empty_extractions += 1;
        }
    }
    let extract_avg = start.elapsed().div_f64(operations as f64);

    OperationTimings {
        insert_total,
        peek_avg,
        extract_avg,
        overflows,
        empty_extractions,
    }
}

/// Benchmarks every structure on one freshly generated dataset of size `n`
///
/// # Errors
/// Returns [`BenchError::Heap`] if the bounded heap cannot be created.
pub fn run_size<R: Rng>(
    config: &BenchConfig,
    n: usize,
    rng: &mut R,
) -> Result<SizeReport, BenchError> {
    let data = generate_dataset(rng, n, config.max_key);
    debug!(size = n, "dataset generated");

    let binary = time_operations(MinHeap::with_capacity(n)?, &data, config.operations);
    let binomial = time_operations(BinomialHeap::new(), &data, config.operations);

    for (name, timings) in [("MinHeap", &binary), ("BinomialHeap", &binomial)] {
        if timings.empty_extractions > 0 {
            info!(
                heap = name,
                size = n,
                empty = timings.empty_extractions,
                "heap ran empty during extraction"
            );
        }
    }

    Ok(SizeReport {
        size: n,
        binary,
        binomial,
    })
}

/// Runs the full sweep, writing each size's report to `out` as it completes
///
/// # Errors
/// Fails on an invalid configuration, a heap construction error or a failed write.
pub fn run<R: Rng, W: Write>(
    config: &BenchConfig,
    rng: &mut R,
    out: &mut W,
) -> Result<Vec<SizeReport>, BenchError> {
    config.validate()?;

    let mut reports = Vec::with_capacity(config.sizes.len());
    for &n in &config.sizes {
        info!(size = n, "benchmarking");
        let report = run_size(config, n, rng)?;
        writeln!(out, "{report}")?;
        out.flush()?;
        reports.push(report);
    }
    Ok(reports)
}
