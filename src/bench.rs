//! Running every configured hash function over one corpus.
//!
//! The corpus is read once. Each algorithm gets its own table with the same
//! bucket count, and each table appends one record to the report, in the
//! configured order. With the `parallel` feature the tables are built on the
//! rayon pool; each table is still touched by one thread only.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::BenchConfig;
use crate::error::Result;
use crate::hashing::Algorithm;
use crate::stats::{generate_report, ReportRecord};
use crate::table::{populate, Element, HashTable};
use crate::text;

/// Builds a table of `bucket_count` buckets hashed by `algorithm` and fills
/// it with `elements`.
pub fn build_table(
    bucket_count: usize,
    algorithm: Algorithm,
    elements: &[Element],
) -> Result<HashTable<Algorithm>> {
    let mut table = HashTable::new(bucket_count, algorithm)?;
    populate(&mut table, elements.iter().cloned())?;
    Ok(table)
}

#[cfg(not(feature = "parallel"))]
fn build_tables(config: &BenchConfig, elements: &[Element]) -> Result<Vec<HashTable<Algorithm>>> {
    config
        .algorithms
        .iter()
        .map(|&alg| build_table(config.bucket_count, alg, elements))
        .collect()
}

#[cfg(feature = "parallel")]
fn build_tables(config: &BenchConfig, elements: &[Element]) -> Result<Vec<HashTable<Algorithm>>> {
    config
        .algorithms
        .par_iter()
        .map(|&alg| build_table(config.bucket_count, alg, elements))
        .collect()
}

/// Runs the benchmark described by `config` and returns the records
/// appended to its report, in configured order.
pub fn run(config: &BenchConfig) -> Result<Vec<ReportRecord>> {
    let elements = text::read_corpus(&config.corpus)?;
    log::info!(
        "Benchmarking {} hash function(s) over {} elements in {} buckets",
        config.algorithms.len(),
        elements.len(),
        config.bucket_count
    );

    let tables = build_tables(config, &elements)?;

    let mut records = Vec::with_capacity(tables.len());
    for table in &tables {
        let label = table.hasher().label();
        let record = generate_report(table, &config.report, label)?;
        log::info!(
            "{label}: max chain {}, empty buckets {}, std dev {:.4}",
            record.statistics.max,
            record.statistics.empty_buckets(),
            record.statistics.std_dev
        );
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::stats::read_records;
    use std::fs::{self, File};
    use std::io::BufReader;
    use test_log::test;

    #[test]
    fn test_run_writes_one_record_per_algorithm() {
        let dir = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("corpus.txt");
        let report = dir.path().join("report.txt");
        fs::write(&corpus, "the quick brown fox jumps over the lazy dog").unwrap();

        let config = BenchConfig::builder()
            .with_bucket_count(5)
            .with_algorithms([Algorithm::Zero, Algorithm::Fnv1a, Algorithm::Length])
            .with_corpus(&corpus)
            .with_report(&report)
            .build()
            .unwrap();

        let records = run(&config).unwrap();
        let labels: Vec<&str> = records.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, ["zero", "fnv1a", "length"]);
        assert!(records.iter().all(|r| r.statistics.total == 9));
        assert_eq!(records[0].statistics.bucket_lengths, [9, 0, 0, 0, 0]);

        let read_back = read_records(BufReader::new(File::open(&report).unwrap())).unwrap();
        assert_eq!(read_back.len(), 3);
        assert_eq!(read_back[1].statistics, records[1].statistics);
    }

    #[test]
    fn test_run_missing_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let config = BenchConfig::builder()
            .with_corpus(dir.path().join("nope.txt"))
            .with_report(dir.path().join("report.txt"))
            .build()
            .unwrap();
        assert!(matches!(run(&config), Err(Error::IoFailure(_))));
        assert!(!dir.path().join("report.txt").exists());
    }
}
