//! Character encoding detection and transcoding.
//!
//! Fetched pages arrive as bytes. The charset is taken from the HTTP
//! `Content-Type` header when one is known, otherwise from the document's
//! own meta declarations, and the bytes are decoded to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading bytes searched for a meta charset declaration.
const SNIFF_LEN: usize = 1024;

/// `<meta charset=...>` or `<meta http-equiv=Content-Type content="...; charset=...">`
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>/]+)"#).expect("META_CHARSET_RE")
});

/// `charset=` parameter of a `Content-Type` header value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("HEADER_CHARSET_RE")
});

/// Charset label declared in the head of an HTML document, if any.
#[must_use]
pub fn declared_charset(html: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Charset label from a `Content-Type` header value, if any.
#[must_use]
pub fn header_charset(content_type: &str) -> Option<String> {
    HEADER_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Detect character encoding from HTML bytes, defaulting to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    declared_charset(html)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use block_extract::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"windows-1252\"><div>\x93quoted\x94</div>";
/// assert!(transcode_to_utf8(html).contains("\u{201C}quoted\u{201D}"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    decode(html, detect_encoding(html))
}

/// Transcode bytes, preferring the charset of an HTTP `Content-Type` header.
///
/// Falls back to [`transcode_to_utf8`] when the header is absent, has no
/// charset, or names an unknown one.
#[must_use]
pub fn transcode_with_content_type(html: &[u8], content_type: Option<&str>) -> String {
    let from_header = content_type
        .and_then(header_charset)
        .and_then(|label| Encoding::for_label(label.as_bytes()));

    match from_header {
        Some(encoding) => decode(html, encoding),
        None => transcode_to_utf8(html),
    }
}

fn decode(html: &[u8], encoding: &'static Encoding) -> String {
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
