//! Read-only dumps of a single bucket chain.
//!
//! Each renderer borrows the chain and returns a value implementing
//! [`Display`](fmt::Display). Nothing is formatted until the value is
//! written, and writing it again produces the same output as long as the
//! chain has not changed. The borrow keeps the chain alive, so a dump can
//! never outlive its table.
//!
//! Elements that are not valid UTF-8 are shown as hex.

use std::fmt;

use crate::table::BucketChain;

/// Renders a chain as a numbered plain-text listing.
pub fn render_text(chain: &BucketChain) -> TextDump<'_> {
    TextDump { chain }
}

/// Renders a chain as a Graphviz `digraph`: one node per element, one edge
/// per link. An empty chain yields a graph with no nodes.
pub fn render_graph(chain: &BucketChain) -> GraphDump<'_> {
    GraphDump { chain }
}

/// Renders a chain as an HTML `<pre>` fragment.
pub fn render_html(chain: &BucketChain) -> HtmlDump<'_> {
    HtmlDump { chain }
}

#[derive(Debug, Clone, Copy)]
pub struct TextDump<'a> {
    chain: &'a BucketChain,
}

impl fmt::Display for TextDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "chain of {} element(s)", self.chain.len())?;
        for (i, element) in self.chain.iter().enumerate() {
            writeln!(f, "  [{i}] {element}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GraphDump<'a> {
    chain: &'a BucketChain,
}

impl fmt::Display for GraphDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "digraph bucket {{")?;
        writeln!(f, "    rankdir=LR;")?;
        writeln!(f, "    node [shape=box];")?;

        for (i, element) in self.chain.iter().enumerate() {
            let label = escape_dot(&element.to_string());
            writeln!(f, "    n{i} [label=\"[{i}] {label}\"];")?;
        }
        for i in 1..self.chain.len() {
            writeln!(f, "    n{} -> n{i};", i - 1)?;
        }

        writeln!(f, "}}")
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HtmlDump<'a> {
    chain: &'a BucketChain,
}

impl fmt::Display for HtmlDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<pre>")?;
        writeln!(f, "<b>chain</b> size: {}", self.chain.len())?;
        for (i, element) in self.chain.iter().enumerate() {
            writeln!(f, "[{i}] {}", escape_html(&element.to_string()))?;
        }
        writeln!(f, "</pre>")
    }
}

fn escape_dot(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Element;

    fn chain_of(words: &[&[u8]]) -> BucketChain {
        let mut chain = BucketChain::new();
        for word in words {
            chain.push(Element::new(word).unwrap()).unwrap();
        }
        chain
    }

    #[test]
    fn test_text_listing() {
        let chain = chain_of(&[b"alpha", b"beta"]);
        assert_eq!(
            render_text(&chain).to_string(),
            "chain of 2 element(s)\n  [0] alpha\n  [1] beta\n"
        );
    }

    #[test]
    fn test_graph_nodes_and_edges() {
        let chain = chain_of(&[b"a", b"b", b"c"]);
        let dot = render_graph(&chain).to_string();
        assert!(dot.starts_with("digraph bucket {\n"));
        assert!(dot.contains("    n0 [label=\"[0] a\"];\n"));
        assert!(dot.contains("    n2 [label=\"[2] c\"];\n"));
        assert!(dot.contains("    n0 -> n1;\n    n1 -> n2;\n"));
        assert!(dot.ends_with("}\n"));
    }

    #[test]
    fn test_empty_chain_renders() {
        let chain = BucketChain::new();
        let dot = render_graph(&chain).to_string();
        assert!(!dot.contains("n0"));
        assert!(!dot.contains("->"));
        assert_eq!(render_text(&chain).to_string(), "chain of 0 element(s)\n");
        assert_eq!(
            render_html(&chain).to_string(),
            "<pre>\n<b>chain</b> size: 0\n</pre>\n"
        );
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let chain = chain_of(&[b"same", b"output", b"twice"]);
        let text = render_text(&chain);
        assert_eq!(text.to_string(), text.to_string());
        let graph = render_graph(&chain);
        assert_eq!(graph.to_string(), graph.to_string());
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn test_escaping() {
        let chain = chain_of(&[b"say\"hi\\", b"<b>&"]);
        let dot = render_graph(&chain).to_string();
        assert!(dot.contains(r#"[0] say\"hi\\"#));
        let html = render_html(&chain).to_string();
        assert!(html.contains("[1] &lt;b&gt;&amp;\n"));
    }

    #[test]
    fn test_non_utf8_as_hex() {
        // 0xff never appears in UTF-8
        let chain = chain_of(&[&[0xff, 0x00]]);
        assert!(render_text(&chain).to_string().contains("  [0] 0xff00\n"));
        assert!(render_graph(&chain)
            .to_string()
            .contains("    n0 [label=\"[0] 0xff00\"];\n"));
        assert!(render_html(&chain).to_string().contains("[0] 0xff00\n"));
    }
}
