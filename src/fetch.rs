//! Blocking HTTP document source.
//!
//! Fetches a page with a shared `ureq` agent and hands the decoded HTML to
//! the extractor. A non-success status is reported as
//! [`Error::HttpStatus`] and extraction is not attempted.

use std::sync::LazyLock;
use std::time::Duration;

use ureq::ResponseExt;
use url::Url;

use crate::encoding;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::result::ExtractResult;

/// Default HTTP request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

const USER_AGENT: &str = concat!("block-extract/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP agent for connection pooling
static HTTP_AGENT: LazyLock<ureq::Agent> = LazyLock::new(|| {
    ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)))
        .build()
        .into()
});

/// A successfully fetched page.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: String,
    /// `Content-Type` response header, if sent
    pub content_type: Option<String>,
    /// Raw response body
    pub body: Vec<u8>,
}

impl FetchedPage {
    /// Body decoded to UTF-8, honouring the declared charset.
    #[must_use]
    pub fn html(&self) -> String {
        encoding::transcode_with_content_type(&self.body, self.content_type.as_deref())
    }
}

/// Parse `url` and make sure it is an absolute http(s) URL.
pub fn validate_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url)?;
    match parsed.scheme() {
        "http" | "https" if parsed.host_str().is_some() => Ok(parsed),
        _ => Err(Error::InvalidUrl(format!("{url} (only http and https are supported)"))),
    }
}

/// Fetch a page over HTTP.
pub fn fetch_page(url: &str) -> Result<FetchedPage> {
    let target = validate_url(url)?;

    let response = HTTP_AGENT
        .get(target.as_str())
        .header("User-Agent", USER_AGENT)
        .call();

    let mut response = match response {
        Ok(response) => response,
        Err(ureq::Error::StatusCode(status)) => {
            tracing::warn!(%url, status, "non-success status");
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status,
            });
        }
        Err(err) => {
            tracing::warn!(%url, error = %err, "fetch failed");
            return Err(Error::Fetch {
                url: url.to_string(),
                reason: err.to_string(),
            });
        }
    };

    let final_url = response.get_uri().to_string();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response
        .body_mut()
        .read_to_vec()
        .map_err(|err| Error::Fetch {
            url: url.to_string(),
            reason: err.to_string(),
        })?;

    tracing::debug!(url = %final_url, bytes = body.len(), "fetched page");

    Ok(FetchedPage {
        url: final_url,
        content_type,
        body,
    })
}

/// Fetch a page and extract its content blocks.
///
/// `options.url` is filled with the final URL when the caller left it unset.
pub fn fetch_and_extract(url: &str, options: &Options) -> Result<ExtractResult> {
    let page = fetch_page(url)?;
    let options = Options {
        url: options.url.clone().or_else(|| Some(page.url.clone())),
        ..options.clone()
    };
    crate::extract_with_options(&page.html(), &options)
}
