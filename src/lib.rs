//! # block-extract
//!
//! Extracts repeated content blocks (product cards, listing entries,
//! article teasers) from an HTML page using class frequency.
//!
//! Meaningful repeated content tends to live in `div` elements that share a
//! CSS class repeated a moderate number of times. The extractor counts every
//! class used on a `div`, keeps the classes whose count falls in a
//! configurable window, and returns the text of their elements that passes
//! a cheap content-validity check.
//!
//! ## Quick Start
//!
//! ```rust
//! use block_extract::{extract_with_options, Options};
//!
//! let html = r#"<html><head><title>Laptops</title></head><body>
//!   <div class="card">Slim, light and fast: 16GB RAM for everyday work.</div>
//!   <div class="card">Gaming-ready, with a fast display and RTX graphics.</div>
//! </body></html>"#;
//!
//! let result = extract_with_options(html, &Options::with_window(1, 5))?;
//! assert_eq!(result.title, "Laptops");
//! assert_eq!(result.blocks.len(), 2);
//! # Ok::<(), block_extract::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Aggregation**: count class memberships over all classed `div`s,
//!   collecting element text while the running count is inside the window
//! - **Window filter**: drop classes whose final count is outside the window
//! - **Validity**: keep snippets that look like prose, not bare labels
//! - **Selection**: keep classes with more than one valid snippet

mod error;
mod extract;
mod options;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Class-frequency aggregation and window filtering.
pub mod aggregate;

/// Snippet validity heuristic.
pub mod validity;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Text and JSON rendering of results, and writing them to disk.
pub mod render;

/// Request/response contract of the extraction endpoint.
pub mod service;

/// Blocking HTTP document source.
#[cfg(feature = "fetch")]
pub mod fetch;

// Public API - re-exports
pub use aggregate::{ClassRecords, Window};
pub use error::{Error, Result};
pub use options::Options;
pub use result::{ClassRecord, ExtractResult, NO_TITLE};

/// Extracts content blocks from an HTML document using default options.
///
/// The default frequency window is `10..=30`.
///
/// # Example
///
/// ```rust
/// use block_extract::extract;
///
/// let result = extract("<html><body><div class='x'>Content</div></body></html>")?;
/// assert!(result.blocks.is_empty());
/// assert_eq!(result.title, "No Title Found");
/// # Ok::<(), block_extract::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str) -> Result<ExtractResult> {
    extract_with_options(html, &Options::default())
}

/// Extracts content blocks from an HTML document with custom options.
///
/// Only fails with `Error::InvalidWindow`, and only when
/// `options.strict_window` is set.
///
/// # Example
///
/// ```rust
/// use block_extract::{extract_with_options, Options};
///
/// let options = Options {
///     min_count: 2,
///     max_count: 50,
///     ..Options::default()
/// };
/// let result = extract_with_options("<div class='a'>text</div>", &options)?;
/// assert!(result.is_empty());
/// # Ok::<(), block_extract::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_options(html: &str, options: &Options) -> Result<ExtractResult> {
    extract::extract_content(html, options)
}

/// Extracts content blocks from an already parsed document.
///
/// Use this when the caller parsed the page for other purposes; the
/// document is only read.
#[allow(clippy::missing_errors_doc)]
pub fn extract_document(doc: &dom::Document, options: &Options) -> Result<ExtractResult> {
    extract::extract_document(doc, options)
}

/// Extracts content blocks from HTML bytes with automatic encoding detection.
///
/// # Example
///
/// ```rust
/// use block_extract::{extract_bytes, Options};
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9</title></head></html>";
/// let result = extract_bytes(html, &Options::default())?;
/// assert_eq!(result.title, "Café");
/// # Ok::<(), block_extract::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_bytes(html: &[u8], options: &Options) -> Result<ExtractResult> {
    let html_str = encoding::transcode_to_utf8(html);
    extract_with_options(&html_str, options)
}
