use std::fmt;

use crate::error::{Error, Result};

/// Longest key, in bytes, a table accepts.
pub const MAX_ELEMENT_LEN: usize = 32;

/// A short text token stored in the table.
///
/// The table treats the bytes as an opaque key; equality is by content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element(Box<[u8]>);

impl Element {
    /// Creates an element from raw bytes.
    ///
    /// Fails with [`Error::InvalidArgument`] if `bytes` is longer than
    /// [`MAX_ELEMENT_LEN`].
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let bytes = bytes.as_ref();
        if bytes.len() > MAX_ELEMENT_LEN {
            return Err(Error::invalid_argument(format!(
                "element of {} bytes exceeds the {MAX_ELEMENT_LEN} byte limit",
                bytes.len()
            )));
        }
        Ok(Element(bytes.into()))
    }

    /// Creates an element from a token, cutting it to at most
    /// [`MAX_ELEMENT_LEN`] bytes on a char boundary.
    pub fn truncated(token: &str) -> Self {
        let mut end = token.len().min(MAX_ELEMENT_LEN);
        while !token.is_char_boundary(end) {
            end -= 1;
        }
        Element(token.as_bytes()[..end].into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The element as text, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.0).ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<&str> for Element {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Element::new(value)
    }
}

impl TryFrom<&[u8]> for Element {
    type Error = Error;

    fn try_from(value: &[u8]) -> Result<Self> {
        Element::new(value)
    }
}

impl AsRef<[u8]> for Element {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Text as-is; anything that is not UTF-8 is shown as `0x`-prefixed hex.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(text) => f.write_str(text),
            None => write!(f, "0x{}", hex::encode(&self.0)),
        }
    }
}
