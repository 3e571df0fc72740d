use std::slice;

use super::Element;
use crate::error::Result;

/// The elements that hashed to one bucket, in insertion order.
///
/// Duplicates are kept: a word that appears twice in the corpus occupies two
/// slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketChain {
    elements: Vec<Element>,
}

impl BucketChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element to the end of the chain.
    ///
    /// The chain is left untouched if its storage cannot grow.
    pub fn push(&mut self, element: Element) -> Result<()> {
        self.elements.try_reserve(1)?;
        self.elements.push(element);
        Ok(())
    }

    /// Linear search for an element equal by content.
    pub fn contains(&self, element: &Element) -> bool {
        self.position(element).is_some()
    }

    /// Position of the first element equal to `element`.
    pub fn position(&self, element: &Element) -> Option<usize> {
        self.elements.iter().position(|e| e == element)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Element> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.elements
    }
}

impl<'a> IntoIterator for &'a BucketChain {
    type Item = &'a Element;
    type IntoIter = slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn el(s: &str) -> Element {
        Element::try_from(s).unwrap()
    }

    #[test]
    fn test_push_keeps_order_and_duplicates() {
        let mut chain = BucketChain::new();
        assert!(chain.is_empty());

        for word in ["to", "be", "or", "not", "to", "be"] {
            chain.push(el(word)).unwrap();
        }

        assert_eq!(chain.len(), 6);
        let words: Vec<String> = chain.iter().map(|e| e.to_string()).collect();
        assert_eq!(words, ["to", "be", "or", "not", "to", "be"]);
        assert_eq!(chain.position(&el("be")), Some(1));
    }

    #[test]
    fn test_contains() {
        let mut chain = BucketChain::new();
        chain.push(el("alpha")).unwrap();
        assert!(chain.contains(&el("alpha")));
        assert!(!chain.contains(&el("beta")));
        assert!(!BucketChain::new().contains(&el("alpha")));
    }
}
