//! Error type shared by every fallible operation in the crate.

use std::collections::TryReserveError;
use std::io;

use thiserror::Error;

/// Errors produced while building, querying or reporting on a hash table.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied argument was rejected (zero buckets, bad label, oversized element).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Backing storage for the table or one of its chains could not be reserved.
    #[error("allocation failure: {0}")]
    AllocationFailure(#[from] TryReserveError),

    /// Reading the corpus or writing a report failed.
    #[error("I/O failure: {0}")]
    IoFailure(#[from] io::Error),

    /// A bucket index outside `[0, buckets)`.
    #[error("bucket index {index} is out of range for a table of {buckets} buckets")]
    OutOfRange { index: usize, buckets: usize },

    /// A report line that does not follow the record format.
    #[error("malformed report record: {0}")]
    ParseRecord(String),
}

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
