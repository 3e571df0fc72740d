//! A chained hash table over text tokens, for measuring how evenly hash
//! functions spread a corpus across buckets.
//!
//! ```rust
//! use hashbench::hashing::Algorithm;
//! use hashbench::stats::Statistics;
//! use hashbench::table::{populate, HashTable};
//! use hashbench::text::tokenize;
//!
//! let mut table = HashTable::new(8, Algorithm::Crc32)?;
//! populate(&mut table, tokenize("a rose is a rose is a rose"))?;
//!
//! let stats = Statistics::from_table(&table);
//! assert_eq!(stats.total, 8);
//! assert_eq!(stats.load_factor, 1.0);
//! # Ok::<(), hashbench::Error>(())
//! ```

pub mod bench;
pub mod config;
pub mod error;
pub mod hashing;
pub mod inspect;
pub mod stats;
pub mod table;
pub mod text;

pub use config::{BenchConfig, BenchConfigBuilder};
pub use error::{Error, Result};
pub use hashing::{Algorithm, HashFunction};
pub use stats::{generate_report, ReportRecord, Statistics};
pub use table::{BucketChain, Element, HashTable};
