//! DOM Operations Adapter
//!
//! Thin layer over the `dom_query` crate exposing the handful of document
//! operations block extraction needs: parsing, finding classed `div`
//! elements in document order, reading class lists, text and the title.

// Re-export core types for external use
pub use dom_query::{Document, NodeRef, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

/// CSS selector for `div` elements carrying a `class` attribute.
pub const CLASSED_DIV_SELECTOR: &str = "div[class]";

// === Parsing ===

/// Parse HTML string into document
///
/// Parsing never fails: malformed markup is repaired the way browsers do.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Class names of an element, in the order the attribute lists them.
///
/// The attribute is split on any Unicode whitespace, so a no-break space
/// separates names too. Repeated names are kept, so
/// `class="a a"` yields `["a", "a"]`. An empty or missing attribute yields
/// an empty list.
#[must_use]
pub fn class_list(sel: &Selection) -> Vec<String> {
    sel.attr("class")
        .map(|value| {
            value
                .split_whitespace()
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Descendant text nodes are concatenated without separators or trimming.
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Elements whose text is never rendered.
const NON_TEXT_TAGS: [&str; 3] = ["script", "style", "template"];

/// Text of the selected elements as a reader sees it.
///
/// Like [`text_content`], but text inside `script`, `style` and `template`
/// elements is skipped. Comments never contribute.
#[must_use]
pub fn visible_text(sel: &Selection) -> String {
    let mut out = String::new();
    for node in sel.nodes() {
        push_visible_text(node, &mut out);
    }
    out
}

fn push_visible_text(node: &NodeRef, out: &mut String) {
    for child in node.children() {
        if child.is_text() {
            out.push_str(&child.text());
        } else if child.is_element() {
            let skipped = child
                .node_name()
                .is_some_and(|tag| NON_TEXT_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t)));
            if !skipped {
                push_visible_text(&child, out);
            }
        }
    }
}

/// All `div` elements with a `class` attribute, one selection per element,
/// in document order.
#[must_use]
pub fn classed_divs(doc: &Document) -> Vec<Selection<'_>> {
    doc.select(CLASSED_DIV_SELECTOR)
        .nodes()
        .iter()
        .cloned()
        .map(Selection::from)
        .collect()
}

/// Trimmed text of the first `<title>` element.
///
/// Returns `None` when there is no title element or its text is blank.
#[must_use]
pub fn title(doc: &Document) -> Option<String> {
    let titles = doc.select("title");
    let first = titles.nodes().first()?;
    let text = text_content(&Selection::from(first.clone()));
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
