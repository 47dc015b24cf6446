//! Rendering of extraction results and writing them to disk.
//!
//! The text format is the listing layout used for saved extractions:
//!
//! ```text
//! Title - <title>
//!
//! ----...---- (100 dashes)
//! *  <block>
//! ----...----
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::result::ExtractResult;

/// Width of the separator line in text output.
pub const SEPARATOR_WIDTH: usize = 100;

/// Output format for stored results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Title header and one separated entry per block.
    #[default]
    Text,
    /// Pretty-printed JSON `ExtractResult`.
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}' (expected text or json)")),
        }
    }
}

/// Render a result in the text listing layout.
#[must_use]
pub fn render_text(result: &ExtractResult) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = format!("Title - {}\n\n{separator}\n", result.title);

    for block in &result.blocks {
        out.push_str("*  ");
        out.push_str(block);
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');
    }
    out
}

/// Render a result as pretty-printed JSON.
pub fn render_json(result: &ExtractResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Render a result in the given format.
pub fn render(result: &ExtractResult, format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(render_text(result)),
        Format::Json => render_json(result),
    }
}

/// Write a rendered result to `path`, replacing any existing file.
///
/// Returns the absolute path of the written file.
pub fn store(path: impl AsRef<Path>, result: &ExtractResult, format: Format) -> Result<PathBuf> {
    let path = path.as_ref();
    let rendered = render(result, format)?;
    fs::write(path, rendered)?;

    let absolute = std::path::absolute(path)?;
    tracing::info!(path = %absolute.display(), blocks = result.blocks.len(), "output saved");
    Ok(absolute)
}
