//! Block selection: the extraction pipeline tying the stages together.
//!
//! document -> aggregate -> filter -> per-class validity -> flattened blocks

use crate::aggregate::{self, ClassRecords, Window};
use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::options::Options;
use crate::result::{ExtractResult, NO_TITLE};
use crate::validity;

/// Run the full pipeline on an HTML string.
pub(crate) fn extract_content(html: &str, options: &Options) -> Result<ExtractResult> {
    let doc = dom::parse(html);
    extract_document(&doc, options)
}

/// Run the full pipeline on an already parsed document.
pub(crate) fn extract_document(doc: &Document, options: &Options) -> Result<ExtractResult> {
    let window = Window::new(options.min_count, options.max_count);

    let mut warnings = Vec::new();
    if window.is_inverted() {
        if options.strict_window {
            return Err(Error::InvalidWindow {
                min_count: options.min_count,
                max_count: options.max_count,
            });
        }
        warnings.push(format!(
            "min_count {} exceeds max_count {}; no class can be selected",
            options.min_count, options.max_count
        ));
    }

    let title = dom::title(doc).unwrap_or_else(|| NO_TITLE.to_string());

    let records = aggregate::aggregate(doc, window);
    let retained = aggregate::filter(records, window);
    let blocks = select_blocks(retained, options);

    tracing::debug!(blocks = blocks.len(), %title, "extraction finished");

    Ok(ExtractResult {
        title,
        blocks,
        url: options.url.clone(),
        warnings,
    })
}

/// Flatten the valid snippets of every class that has enough of them.
///
/// Classes are visited in first-seen order and snippets keep their
/// document order. A class whose valid snippets number fewer than
/// `options.min_valid_snippets` contributes nothing.
pub(crate) fn select_blocks(records: ClassRecords, options: &Options) -> Vec<String> {
    let mut blocks = Vec::new();

    for record in records {
        let valid: Vec<String> = record
            .snippets
            .into_iter()
            .filter(|snippet| validity::is_valid_with_min_len(snippet, options.min_text_chars))
            .collect();

        if valid.len() >= options.min_valid_snippets {
            tracing::trace!(class = %record.class_name, kept = valid.len(), "class selected");
            blocks.extend(valid);
        }
    }

    blocks
}
