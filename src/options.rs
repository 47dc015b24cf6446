//! Configuration options for block extraction.
//!
//! The `Options` struct holds the class-frequency window and the thresholds
//! used when selecting content blocks.

/// Configuration options for block extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use block_extract::Options;
///
/// // Use defaults (window 10..=30)
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     min_count: 2,
///     strict_window: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Lowest number of `div` occurrences a class needs to be kept.
    ///
    /// Default: `10`
    pub min_count: i64,

    /// Highest number of `div` occurrences a class may have to be kept.
    ///
    /// Classes repeated more often than this are treated as boilerplate.
    ///
    /// Default: `30`
    pub max_count: i64,

    /// Reject windows where `min_count > max_count` with `Error::InvalidWindow`.
    ///
    /// When disabled, such a window simply selects nothing.
    ///
    /// Default: `false`
    pub strict_window: bool,

    /// Minimum snippet length in characters (untrimmed) to count as content.
    ///
    /// Default: `20`
    pub min_text_chars: usize,

    /// Minimum number of valid snippets a class needs to contribute blocks.
    ///
    /// A class with fewer valid snippets is treated as a one-off.
    ///
    /// Default: `2`
    pub min_valid_snippets: usize,

    /// Source URL of the document, copied into `ExtractResult::url`.
    ///
    /// Default: `None`
    pub url: Option<String>,
}

impl Options {
    /// Default options with a custom frequency window.
    #[must_use]
    pub fn with_window(min_count: i64, max_count: i64) -> Self {
        Self {
            min_count,
            max_count,
            ..Self::default()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_count: 10,
            max_count: 30,
            strict_window: false,
            min_text_chars: 20,
            min_valid_snippets: 2,
            url: None,
        }
    }
}
