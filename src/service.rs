//! Request/response contract of the extraction endpoint.
//!
//! A request names a page, a frequency window and an output file. Handling
//! it fetches the page, extracts blocks, stores the rendering and answers
//! with a coarse status; every failure collapses to the same
//! "Request failed" response and is logged.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::options::Options;
use crate::render::{self, Format};

/// Default lower bound of the frequency window for requests.
pub const DEFAULT_MIN_COUNT: i64 = 10;

/// Default upper bound of the frequency window for requests.
pub const DEFAULT_MAX_COUNT: i64 = 30;

/// Status code and JSON body of a dispatched request.
pub type Reply = (u16, String);

const fn default_min_count() -> i64 {
    DEFAULT_MIN_COUNT
}

const fn default_max_count() -> i64 {
    DEFAULT_MAX_COUNT
}

/// Extraction request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractRequest {
    /// Page to extract from.
    #[serde(default)]
    pub webpage_url: Option<String>,

    /// Lower bound of the frequency window.
    #[serde(default = "default_min_count")]
    pub min_count: i64,

    /// Upper bound of the frequency window.
    #[serde(default = "default_max_count")]
    pub max_count: i64,

    /// File the rendering is written to.
    #[serde(default)]
    pub output_filename: Option<String>,

    /// Rendering written to the output file.
    #[serde(default)]
    pub format: Format,
}

impl ExtractRequest {
    /// Request with the default window and text output.
    #[must_use]
    pub fn new(webpage_url: impl Into<String>, output_filename: impl Into<String>) -> Self {
        Self {
            webpage_url: Some(webpage_url.into()),
            min_count: DEFAULT_MIN_COUNT,
            max_count: DEFAULT_MAX_COUNT,
            output_filename: Some(output_filename.into()),
            format: Format::Text,
        }
    }

    /// Extraction options for this request.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            url: self.webpage_url.clone(),
            ..Options::with_window(self.min_count, self.max_count)
        }
    }

    fn output_path(&self) -> Result<&str> {
        self.output_filename
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| {
                Error::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "output_filename is required",
                ))
            })
    }
}

/// Extraction response payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractResponse {
    /// Whether the output file was written.
    pub success: bool,

    /// Human-readable status.
    pub message: String,

    /// Absolute path of the output file on success.
    pub file_path: Option<String>,
}

impl ExtractResponse {
    /// Response for a stored extraction.
    #[must_use]
    pub fn saved(output_filename: &str, file_path: &Path) -> Self {
        Self {
            success: true,
            message: format!("Output saved to {output_filename}"),
            file_path: Some(file_path.display().to_string()),
        }
    }

    /// Response for any failure.
    #[must_use]
    pub fn failed() -> Self {
        Self {
            success: false,
            message: "Request failed".to_string(),
            file_path: None,
        }
    }
}

fn respond(outcome: Result<(String, PathBuf)>) -> ExtractResponse {
    match outcome {
        Ok((name, path)) => ExtractResponse::saved(&name, &path),
        Err(err) => {
            tracing::warn!(error = %err, "extraction request failed");
            ExtractResponse::failed()
        }
    }
}

/// Body sent for anything other than a POST.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodError {
    /// Error description.
    pub error: String,
}

/// Extract from already fetched HTML and store the result.
#[must_use]
pub fn handle_with_html(request: &ExtractRequest, html: &str) -> ExtractResponse {
    respond(store_from_html(request, html))
}

fn store_from_html(request: &ExtractRequest, html: &str) -> Result<(String, PathBuf)> {
    let output = request.output_path()?;
    let result = crate::extract_with_options(html, &request.options())?;
    let path = render::store(output, &result, request.format)?;
    Ok((output.to_string(), path))
}

/// Fetch the requested page, extract from it and store the result.
#[cfg(feature = "fetch")]
#[must_use]
pub fn handle(request: &ExtractRequest) -> ExtractResponse {
    respond(fetch_and_store(request))
}

#[cfg(feature = "fetch")]
fn fetch_and_store(request: &ExtractRequest) -> Result<(String, PathBuf)> {
    let output = request.output_path()?;
    let url = request
        .webpage_url
        .as_deref()
        .ok_or_else(|| Error::InvalidUrl("webpage_url is required".to_string()))?;
    let result = crate::fetch::fetch_and_extract(url, &request.options())?;
    let path = render::store(output, &result, request.format)?;
    Ok((output.to_string(), path))
}

/// Dispatch a raw request the way the HTTP endpoint does.
///
/// Only `POST` with a JSON [`ExtractRequest`] body is accepted. Other
/// methods get `405` and a [`MethodError`]; an unparseable body gets the
/// failure response.
pub fn dispatch(
    method: &str,
    body: &str,
    handler: impl FnOnce(&ExtractRequest) -> ExtractResponse,
) -> Result<Reply> {
    if !method.eq_ignore_ascii_case("POST") {
        let reply = MethodError {
            error: "Invalid request method".to_string(),
        };
        return Ok((405, serde_json::to_string(&reply)?));
    }

    let response = match serde_json::from_str::<ExtractRequest>(body) {
        Ok(request) => handler(&request),
        Err(err) => {
            tracing::warn!(error = %err, "malformed extraction request");
            ExtractResponse::failed()
        }
    };
    Ok((200, serde_json::to_string(&response)?))
}
