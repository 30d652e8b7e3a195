//! HTML to canonical text normalization
//!
//! Reduces raw markup to an ordered sequence of non-empty, trimmed lines so
//! that two fetches of the same visible content compare equal even when the
//! markup differs in whitespace, or when per-request noise (script bodies,
//! inline styles, comments) changes underneath.

use ego_tree::NodeRef;
use scraper::{Html, Node};

/// Elements whose entire subtree is invisible to readers. Their content
/// often carries per-request noise (nonces, timestamps) and must never
/// influence the comparison.
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

/// Convert raw HTML into whitespace-stable visible text.
///
/// Each text node boundary becomes a line break, every line is trimmed, and
/// lines left empty after trimming are dropped. Pure and deterministic;
/// malformed markup degrades to best-effort extraction because the
/// underlying parser is error-tolerant and never fails.
pub fn normalize(raw_html: &str) -> String {
    let document = Html::parse_document(raw_html);

    let mut fragments = Vec::new();
    collect_visible_text(document.tree.root(), &mut fragments);

    let mut lines = Vec::new();
    for fragment in &fragments {
        for line in fragment.lines() {
            let line = line.trim();
            if !line.is_empty() {
                lines.push(line);
            }
        }
    }
    lines.join("\n")
}

fn collect_visible_text(node: NodeRef<'_, Node>, out: &mut Vec<String>) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push(text.text.to_string()),
            Node::Element(element) => {
                if HIDDEN_ELEMENTS.contains(&element.name()) {
                    continue;
                }
                collect_visible_text(child, out);
            }
            // Comments, doctypes and processing instructions carry no
            // visible text.
            _ => {}
        }
    }
}
