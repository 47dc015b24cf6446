//! Result types for extraction output.
//!
//! This module defines the per-class accumulation record and the structured
//! output of a block extraction.

use serde::{Deserialize, Serialize};

/// Title used when the document has no (non-empty) `<title>` element.
pub const NO_TITLE: &str = "No Title Found";

/// Occurrence count and collected text for one CSS class name.
///
/// `count` is the total number of `div` elements listing the class.
/// `snippets` only holds the text of occurrences whose running count was
/// inside the frequency window, so `count` may exceed `snippets.len()`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// The class name as listed in the `class` attribute.
    pub class_name: String,

    /// Number of element-class memberships seen.
    pub count: usize,

    /// Untrimmed element text, in document order.
    pub snippets: Vec<String>,
}

impl ClassRecord {
    /// Create an empty record for `class_name`.
    #[must_use]
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            count: 0,
            snippets: Vec::new(),
        }
    }
}

/// Result of block extraction from an HTML document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResult {
    /// Trimmed page title, or [`NO_TITLE`].
    pub title: String,

    /// Valid snippets of every retained class, in first-seen class order.
    pub blocks: Vec<String>,

    /// Source URL, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Non-fatal observations made during extraction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ExtractResult {
    /// True when no content block was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl Default for ExtractResult {
    fn default() -> Self {
        Self {
            title: NO_TITLE.to_string(),
            blocks: Vec::new(),
            url: None,
            warnings: Vec::new(),
        }
    }
}
