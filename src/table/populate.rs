use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use super::{Element, HashTable};
use crate::error::Result;
use crate::hashing::HashFunction;
use crate::text;

/// Inserts every element of `elements`, in order.
///
/// Stops at the first failed insertion and returns its error. Elements
/// inserted before the failure stay in the table. On success returns the
/// number of elements inserted.
pub fn populate<H, I>(table: &mut HashTable<H>, elements: I) -> Result<usize>
where
    H: HashFunction,
    I: IntoIterator<Item = Element>,
{
    let mut inserted = 0;
    for element in elements {
        table.insert(element)?;
        inserted += 1;
    }

    log::debug!(
        "Populated {inserted} elements, table now holds {} in {} buckets",
        table.len(),
        table.bucket_count()
    );

    Ok(inserted)
}

/// Builds a throwaway table over the words of `source` and returns its load
/// factor (elements / buckets).
pub fn compute_load_factor<H, R>(bucket_count: usize, hash: H, source: R) -> Result<f64>
where
    H: HashFunction,
    R: Read,
{
    let mut table = HashTable::new(bucket_count, hash)?;
    populate(&mut table, text::read_elements(source)?)?;
    Ok(table.load_factor())
}

/// [`compute_load_factor`] over the contents of a file.
pub fn compute_load_factor_from_path<H, P>(
    bucket_count: usize,
    hash: H,
    path: P,
) -> Result<f64>
where
    H: HashFunction,
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref())?;
    compute_load_factor(bucket_count, hash, BufReader::new(file))
}
