//! Settings for a benchmark run.
//!
//! Built with [`BenchConfigBuilder`]; typically you'll call
//! `.with_corpus(...)`, `.with_report(...)`, optionally `.with_bucket_count(...)`
//! and `.with_algorithms(...)`, then `.build()`.

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::hashing::Algorithm;

/// Bucket count used when none is given. A prime, so weak hashes with a
/// common factor are not flattered.
pub const DEFAULT_BUCKET_COUNT: usize = 1009;

/// A validated benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Buckets in every table built.
    pub bucket_count: usize,
    /// Hash functions to compare, in report order.
    pub algorithms: Vec<Algorithm>,
    /// Text file the elements are read from.
    pub corpus: PathBuf,
    /// Report file the records are appended to.
    pub report: PathBuf,
}

impl BenchConfig {
    pub fn builder() -> BenchConfigBuilder {
        BenchConfigBuilder::new()
    }
}

/// Builder for [`BenchConfig`].
#[derive(Debug, Clone)]
pub struct BenchConfigBuilder {
    bucket_count: usize,
    algorithms: Vec<Algorithm>,
    corpus: Option<PathBuf>,
    report: Option<PathBuf>,
}

impl Default for BenchConfigBuilder {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            algorithms: Algorithm::ALL.to_vec(),
            corpus: None,
            report: None,
        }
    }
}

impl BenchConfigBuilder {
    /// Creates a builder with the default bucket count and every algorithm.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    /// Replaces the list of algorithms to compare.
    pub fn with_algorithms(mut self, algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        self.algorithms = algorithms.into_iter().collect();
        self
    }

    pub fn with_corpus(mut self, corpus: impl Into<PathBuf>) -> Self {
        self.corpus = Some(corpus.into());
        self
    }

    pub fn with_report(mut self, report: impl Into<PathBuf>) -> Self {
        self.report = Some(report.into());
        self
    }

    /// Validates and builds the configuration.
    pub fn build(self) -> Result<BenchConfig> {
        if self.bucket_count == 0 {
            return Err(Error::invalid_argument("bucket count must be > 0"));
        }
        if self.algorithms.is_empty() {
            return Err(Error::invalid_argument("at least one algorithm is required"));
        }
        let corpus = self
            .corpus
            .ok_or_else(|| Error::invalid_argument("corpus path is required"))?;
        let report = self
            .report
            .ok_or_else(|| Error::invalid_argument("report path is required"))?;

        Ok(BenchConfig {
            bucket_count: self.bucket_count,
            algorithms: self.algorithms,
            corpus,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::builder()
            .with_corpus("corpus.txt")
            .with_report("report.txt")
            .build()
            .unwrap();
        assert_eq!(config.bucket_count, DEFAULT_BUCKET_COUNT);
        assert_eq!(config.algorithms, Algorithm::ALL);
        assert_eq!(config.corpus, PathBuf::from("corpus.txt"));
    }

    #[test]
    fn test_overrides() {
        let config = BenchConfig::builder()
            .with_bucket_count(31)
            .with_algorithms([Algorithm::Crc32, Algorithm::Murmur])
            .with_corpus("c")
            .with_report("r")
            .build()
            .unwrap();
        assert_eq!(config.bucket_count, 31);
        assert_eq!(config.algorithms, [Algorithm::Crc32, Algorithm::Murmur]);
    }

    #[test]
    fn test_validation() {
        let base = BenchConfig::builder().with_corpus("c").with_report("r");

        assert!(matches!(
            base.clone().with_bucket_count(0).build(),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            base.clone().with_algorithms([]).build(),
            Err(Error::InvalidArgument(_))
        ));
        assert!(BenchConfig::builder().with_report("r").build().is_err());
        assert!(BenchConfig::builder().with_corpus("c").build().is_err());
    }
}
