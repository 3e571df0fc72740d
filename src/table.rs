//! # Chained Hash Table
//!
//! A hash table keyed by short text tokens, built to compare how evenly
//! different hash functions spread a corpus across buckets.
//!
//! - A **fixed** number of buckets chosen at construction; there is no resize.
//! - Each bucket is a [`BucketChain`]: an owned, growable `Vec` of elements in
//!   insertion order. Duplicates are stored, nothing is ever removed.
//! - The hash function is any [`HashFunction`]; an element lands in bucket
//!   `hash(element) mod bucket_count`.
//!
//! The table is single-threaded. It is `Send` whenever its hash function is,
//! but it does no locking of its own.

use crate::error::{Error, Result};
use crate::hashing::HashFunction;

mod chain;
mod element;
mod populate;

pub use chain::BucketChain;
pub use element::{Element, MAX_ELEMENT_LEN};
pub use populate::{compute_load_factor, compute_load_factor_from_path, populate};

/// A separate-chaining table of [`Element`]s over a pluggable hash function.
#[derive(Debug)]
pub struct HashTable<H> {
    buckets: Vec<BucketChain>,
    hash: H,
    /// Number of elements inserted so far.
    len: usize,
}

impl<H: HashFunction> HashTable<H> {
    /// Creates a table with `bucket_count` empty buckets.
    ///
    /// Fails with [`Error::InvalidArgument`] when `bucket_count` is zero and
    /// with [`Error::AllocationFailure`] when the bucket array cannot be
    /// reserved.
    pub fn new(bucket_count: usize, hash: H) -> Result<Self> {
        if bucket_count == 0 {
            return Err(Error::invalid_argument("bucket count must be > 0"));
        }

        let mut buckets = Vec::new();
        buckets.try_reserve_exact(bucket_count)?;
        buckets.resize_with(bucket_count, BucketChain::default);

        log::debug!("Created hash table with {bucket_count} buckets");

        Ok(Self {
            buckets,
            hash,
            len: 0,
        })
    }

    /// Number of buckets, fixed for the table's lifetime.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of elements inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The hash function this table was built with.
    pub fn hasher(&self) -> &H {
        &self.hash
    }

    /// Bucket an element with these bytes belongs to.
    pub fn bucket_index(&self, bytes: &[u8]) -> usize {
        (self.hash.hash(bytes) % self.buckets.len() as u64) as usize
    }

    /// Appends `element` to its bucket and returns the bucket index.
    ///
    /// No duplicate check is made. If the chain cannot grow the table is left
    /// unchanged and [`Error::AllocationFailure`] is returned.
    pub fn insert(&mut self, element: Element) -> Result<usize> {
        let idx = self.bucket_index(element.as_bytes());
        log::trace!("Inserting {element} into bucket {idx}");
        self.buckets[idx].push(element)?;
        self.len += 1;
        Ok(idx)
    }

    /// Searches bucket `bucket` (and only that bucket) for `element`.
    ///
    /// The index is taken as given, so this can probe any bucket, not only the
    /// one `element` hashes to. Fails with [`Error::OutOfRange`] when
    /// `bucket >= bucket_count()`.
    pub fn find(&self, bucket: usize, element: &Element) -> Result<bool> {
        Ok(self.bucket(bucket)?.contains(element))
    }

    /// Looks `element` up in the bucket it hashes to.
    pub fn contains(&self, element: &Element) -> bool {
        self.buckets[self.bucket_index(element.as_bytes())].contains(element)
    }

    /// Borrows one bucket's chain.
    pub fn bucket(&self, index: usize) -> Result<&BucketChain> {
        self.buckets.get(index).ok_or(Error::OutOfRange {
            index,
            buckets: self.buckets.len(),
        })
    }

    /// All chains, in bucket order.
    pub fn buckets(&self) -> &[BucketChain] {
        &self.buckets
    }

    /// Length of every chain, in bucket order.
    pub fn bucket_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(BucketChain::len)
    }

    /// Total number of elements across all chains.
    ///
    /// Always equal to [`len`](Self::len); it is recounted from the chains so
    /// reports can cross-check the two.
    pub fn sum_size_of_lists(&self) -> usize {
        self.bucket_lengths().sum()
    }

    /// Mean chain length: elements / buckets.
    pub fn load_factor(&self) -> f64 {
        self.sum_size_of_lists() as f64 / self.buckets.len() as f64
    }

    /// Releases every chain and its elements.
    ///
    /// Consumes the table, so it cannot be destroyed twice.
    pub fn destroy(self) {
        log::debug!(
            "Destroying hash table ({} elements in {} buckets)",
            self.len,
            self.buckets.len()
        );
        drop(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hashing::{Algorithm, HashFunction};
    use approx::assert_relative_eq;
    use test_log::test;

    /// "a" -> 0, "b" -> 1, ...
    fn letter(bytes: &[u8]) -> u64 {
        (bytes[0] - b'a') as u64
    }

    fn el(s: &str) -> Element {
        Element::try_from(s).unwrap()
    }

    fn letter_table() -> HashTable<fn(&[u8]) -> u64> {
        let mut table = HashTable::new(4, letter as fn(&[u8]) -> u64).unwrap();
        for word in ["a", "b", "c", "d", "e"] {
            table.insert(el(word)).unwrap();
        }
        table
    }

    #[test]
    fn test_zero_buckets_rejected() {
        let err = HashTable::new(0, Algorithm::Crc32).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = HashTable::new(16, Algorithm::Fnv1a).unwrap();
        assert_eq!(table.bucket_count(), 16);
        assert!(table.is_empty());
        assert_eq!(table.sum_size_of_lists(), 0);
        assert!(table.buckets().iter().all(BucketChain::is_empty));
    }

    #[test]
    fn test_letter_scenario_distribution() {
        let table = letter_table();

        let bucket0: Vec<String> = table
            .bucket(0)
            .unwrap()
            .iter()
            .map(|e| e.to_string())
            .collect();
        assert_eq!(bucket0, ["a", "e"]);
        for idx in 1..4 {
            assert_eq!(table.bucket(idx).unwrap().len(), 1);
        }

        assert_eq!(table.sum_size_of_lists(), 5);
        assert_relative_eq!(table.load_factor(), 1.25);
    }

    #[test]
    fn test_letter_scenario_find() {
        let table = letter_table();
        assert!(table.find(0, &el("e")).unwrap());
        assert!(!table.find(1, &el("e")).unwrap());
    }

    #[test]
    fn test_find_out_of_range() {
        let table = letter_table();
        let err = table.find(4, &el("a")).unwrap_err();
        assert!(matches!(
            err,
            Error::OutOfRange {
                index: 4,
                buckets: 4
            }
        ));
    }

    #[test]
    fn test_insert_then_find_in_hashed_bucket() {
        let mut table = HashTable::new(7, Algorithm::Murmur).unwrap();
        for word in ["lorem", "ipsum", "dolor", "sit", "amet", "lorem"] {
            let element = el(word);
            let idx = table.insert(element.clone()).unwrap();
            assert_eq!(idx, (Algorithm::Murmur.hash(word.as_bytes()) % 7) as usize);
            assert!(table.find(idx, &element).unwrap());
            assert!(table.contains(&element));
        }
        assert_eq!(table.len(), 6);
        assert_eq!(table.sum_size_of_lists(), 6);
    }

    #[test]
    fn test_no_false_positives() {
        let mut table = HashTable::new(8, Algorithm::Crc32).unwrap();
        for word in ["one", "two", "three"] {
            table.insert(el(word)).unwrap();
        }
        let missing = el("four");
        for idx in 0..table.bucket_count() {
            assert!(!table.find(idx, &missing).unwrap());
        }
        assert!(!table.contains(&missing));
    }

    #[test]
    fn test_constant_hash_chains_everything() {
        let mut table = HashTable::new(5, Algorithm::Zero).unwrap();
        for word in ["x", "y", "z"] {
            assert_eq!(table.insert(el(word)).unwrap(), 0);
        }
        let lengths: Vec<usize> = table.bucket_lengths().collect();
        assert_eq!(lengths, [3, 0, 0, 0, 0]);
        table.destroy();
    }
}
