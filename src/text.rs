//! Splitting a corpus into table elements.
//!
//! A word is a maximal run of alphanumeric characters (Unicode aware).
//! Everything else separates words. Words longer than [`MAX_ELEMENT_LEN`]
//! bytes are cut down to fit.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;
use crate::table::{Element, MAX_ELEMENT_LEN};

/// Lazily yields the words of `text` as elements, in order.
pub fn tokenize(text: &str) -> impl Iterator<Item = Element> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(Element::truncated)
}

/// Reads all of `source` and tokenizes it. Invalid UTF-8 is replaced, not
/// rejected.
pub fn read_elements<R: Read>(mut source: R) -> Result<Vec<Element>> {
    let mut raw = Vec::new();
    source.read_to_end(&mut raw)?;

    let text = String::from_utf8_lossy(&raw);
    let elements: Vec<Element> = tokenize(&text).collect();

    log::debug!(
        "Tokenized {} bytes into {} elements (max {MAX_ELEMENT_LEN} bytes each)",
        raw.len(),
        elements.len()
    );

    Ok(elements)
}

/// Reads and tokenizes the file at `path`.
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<Vec<Element>> {
    let path = path.as_ref();
    log::debug!("Reading corpus from {}", path.display());
    let file = File::open(path)?;
    read_elements(BufReader::new(file))
}
