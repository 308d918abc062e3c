//! Downloading the rules text over HTTP.

use std::time::Duration;

use ureq::Agent;
use ureq::http::header::CONTENT_TYPE;

use crate::RulesSource;
use crate::decode::decode_utf8_sig;
use crate::error::SourceError;
use crate::locate::{find_link_href, resolve_href};

/// Default anchor text of the plain-text rules link.
pub const DEFAULT_LINK_TEXT: &str = "TXT";

/// Rules text fetched from the published rules page.
///
/// Unless a direct text URL is configured, the rules page is downloaded first
/// and the text URL is taken from its `TXT` link.
pub struct HttpSource {
    agent: Agent,
    page_url: String,
    link_text: String,
    text_url: Option<String>,
}

impl HttpSource {
    /// Create a source for the given rules page.
    #[must_use]
    pub fn new(page_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            agent: create_agent(timeout),
            page_url: page_url.into(),
            link_text: DEFAULT_LINK_TEXT.to_owned(),
            text_url: None,
        }
    }

    /// Match the text link by different anchor text.
    #[must_use]
    pub fn with_link_text(mut self, link_text: impl Into<String>) -> Self {
        self.link_text = link_text.into();
        self
    }

    /// Download the text from `url` directly instead of locating it.
    #[must_use]
    pub fn with_text_url(mut self, url: Option<String>) -> Self {
        self.text_url = url;
        self
    }

    /// Return the URL of the rules text.
    ///
    /// # Errors
    ///
    /// Returns an error if the rules page cannot be downloaded or has no
    /// matching link.
    pub fn locate(&self) -> Result<String, SourceError> {
        if let Some(url) = &self.text_url {
            return Ok(url.clone());
        }

        let page = decode_utf8_sig(self.get(&self.page_url, false)?)?;
        let not_found = || SourceError::LinkNotFound {
            url: self.page_url.clone(),
            text: self.link_text.clone(),
        };
        let href = find_link_href(&page, &self.link_text).ok_or_else(not_found)?;
        let url = resolve_href(&self.page_url, &href).ok_or_else(not_found)?;

        tracing::info!(%url, "Located rules text");
        Ok(url)
    }

    /// Download a URL and return the response body.
    ///
    /// With `text_only`, responses that are not plain text are rejected.
    fn get(&self, url: &str, text_only: bool) -> Result<Vec<u8>, SourceError> {
        tracing::debug!(url, "Downloading");

        let response = self.agent.get(url).call().map_err(|e| SourceError::Http {
            url: url.to_owned(),
            message: e.to_string(),
        })?;

        let status = response.status().as_u16();
        if status >= 400 {
            return Err(SourceError::Status {
                url: url.to_owned(),
                status,
            });
        }

        if text_only {
            let content_type = response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|value| value.to_str().ok());
            match content_type {
                Some(value) if !is_text_content_type(value) => {
                    return Err(SourceError::ContentType {
                        url: url.to_owned(),
                        content_type: value.to_owned(),
                    });
                }
                Some(_) => {}
                None => tracing::warn!(url, "Response has no content type, assuming text"),
            }
        }

        let bytes = response
            .into_body()
            .with_config()
            .limit(MAX_BODY_BYTES)
            .read_to_vec()
            .map_err(|e| SourceError::Http {
                url: url.to_owned(),
                message: e.to_string(),
            })?;
        tracing::debug!(url, bytes = bytes.len(), "Downloaded");
        Ok(bytes)
    }
}

impl RulesSource for HttpSource {
    fn fetch(&self) -> Result<String, SourceError> {
        let url = self.locate()?;
        decode_utf8_sig(self.get(&url, true)?)
    }

    fn describe(&self) -> String {
        self.text_url.clone().unwrap_or_else(|| self.page_url.clone())
    }
}

/// Upper bound on a downloaded body.
const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

/// Create HTTP agent with the specified timeout.
///
/// Status codes are checked by the caller rather than surfaced as transport
/// errors.
fn create_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .http_status_as_error(false)
        .build()
        .into()
}

/// Whether a `Content-Type` header value describes a text body.
fn is_text_content_type(value: &str) -> bool {
    let mime = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime.starts_with("text/") || mime == "application/octet-stream"
}
