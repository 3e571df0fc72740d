//! # Distribution Statistics
//!
//! Occupancy metrics over a populated [`HashTable`] and the line-oriented
//! report they are written to.
//!
//! For a fixed corpus and bucket count every hash function yields the same
//! load factor; what separates a good function from a bad one is the spread
//! around it. [`Statistics`] therefore carries the per-bucket lengths along
//! with min, max, variance and standard deviation.
//!
//! Reports are appended one line per run, so a single file can collect the
//! results of every hash function tried against the same corpus:
//!
//! ```text
//! label=crc32 buckets=4 total=5 load_factor=1.250000 min=1 max=2 variance=0.187500 std_dev=0.433013 lengths=2,1,1,1
//! ```

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::hashing::HashFunction;
use crate::table::HashTable;

mod report;

pub use report::{read_records, ReportRecord};

/// A snapshot of how a table's elements are spread over its buckets.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    /// Chain length of every bucket, in bucket order.
    pub bucket_lengths: Vec<usize>,
    /// Sum of all chain lengths.
    pub total: usize,
    /// Mean chain length (total / buckets).
    pub load_factor: f64,
    /// Shortest chain.
    pub min: usize,
    /// Longest chain.
    pub max: usize,
    /// Population variance of the chain lengths.
    pub variance: f64,
    pub std_dev: f64,
}

impl Statistics {
    /// Computes the statistics of `table`. The table is only read.
    pub fn from_table<H: HashFunction>(table: &HashTable<H>) -> Self {
        Self::from_lengths(table.bucket_lengths().collect())
    }

    /// Computes the statistics of a list of chain lengths.
    ///
    /// An empty list yields all-zero statistics.
    pub fn from_lengths(bucket_lengths: Vec<usize>) -> Self {
        let buckets = bucket_lengths.len();
        let total: usize = bucket_lengths.iter().sum();
        let min = bucket_lengths.iter().copied().min().unwrap_or(0);
        let max = bucket_lengths.iter().copied().max().unwrap_or(0);

        let (load_factor, variance) = if buckets == 0 {
            (0.0, 0.0)
        } else {
            let mean = total as f64 / buckets as f64;
            let sum_sq: f64 = bucket_lengths
                .iter()
                .map(|&len| {
                    let d = len as f64 - mean;
                    d * d
                })
                .sum();
            (mean, sum_sq / buckets as f64)
        };

        Self {
            bucket_lengths,
            total,
            load_factor,
            min,
            max,
            variance,
            std_dev: variance.sqrt(),
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.bucket_lengths.len()
    }

    /// Number of buckets no element hashed to.
    pub fn empty_buckets(&self) -> usize {
        self.bucket_lengths.iter().filter(|&&len| len == 0).count()
    }
}

/// Computes the statistics of `table` and writes them to `writer` as one
/// record line tagged with `label`.
pub fn write_report<H, W>(
    table: &HashTable<H>,
    writer: W,
    label: &str,
) -> Result<ReportRecord>
where
    H: HashFunction,
    W: Write,
{
    let record = ReportRecord::new(label, Statistics::from_table(table))?;
    write_record(&record, writer)?;
    Ok(record)
}

fn write_record<W: Write>(record: &ReportRecord, mut writer: W) -> Result<()> {
    writeln!(writer, "{record}")?;
    writer.flush()?;
    Ok(())
}

/// Appends the statistics of `table` to the file at `path`, creating it if
/// needed.
///
/// The file is opened and closed within this call. The table is left as it
/// was whether or not the write succeeds.
pub fn generate_report<H, P>(table: &HashTable<H>, path: P, label: &str) -> Result<ReportRecord>
where
    H: HashFunction,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    // validate the label before touching the file
    let record = ReportRecord::new(label, Statistics::from_table(table))?;

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    write_record(&record, file)?;

    log::debug!(
        "Appended report for {label} to {} (total={}, max={}, std_dev={:.4})",
        path.display(),
        record.statistics.total,
        record.statistics.max,
        record.statistics.std_dev
    );

    Ok(record)
}
