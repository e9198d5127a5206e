//! Word list fetched over HTTP.
//!
//! # Responsibilities
//! - GET the configured URL with the shared client
//! - Stream the body line by line, trimming each line
//! - Bound memory with a per-line cap
//!
//! # Design Decisions
//! - Non-2xx responses are fetch failures, not word lists
//! - The body is streamed, never buffered whole
//! - Dropping the source (or the request future) drops the response body

use async_trait::async_trait;
use futures_util::TryStreamExt;
use tokio_util::io::StreamReader;
use url::Url;

use crate::error::{AnagramError, AnagramResult};
use crate::source::lines::{read_lines, LineError};
use crate::source::{WordSource, REMOTE_URL};

/// Default cap on a single buffered line (2 MiB).
pub const DEFAULT_MAX_LINE_BYTES: usize = 2 * 1024 * 1024;

/// Fetches a newline-separated word list from an http(s) URL.
#[derive(Debug, Clone)]
pub struct RemoteUrlSource {
    client: reqwest::Client,
    url: Url,
    max_line_bytes: usize,
}

impl RemoteUrlSource {
    /// Validate `url` and prepare the fetch. No request is sent yet.
    pub fn new(client: reqwest::Client, url: &str, max_line_bytes: usize) -> AnagramResult<Self> {
        let parsed = Url::parse(url.trim()).map_err(|e| AnagramError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AnagramError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }

        Ok(Self {
            client,
            url: parsed,
            max_line_bytes,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn fetch_error(&self, reason: impl ToString) -> AnagramError {
        AnagramError::Fetch {
            url: self.url.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[async_trait]
impl WordSource for RemoteUrlSource {
    async fn get_words(self: Box<Self>) -> AnagramResult<Vec<String>> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| self.fetch_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.fetch_error(format!("unexpected status {}", status)));
        }

        let body = Box::pin(response.bytes_stream().map_err(std::io::Error::other));
        let lines = read_lines(StreamReader::new(body), Some(self.max_line_bytes))
            .await
            .map_err(|e| match e {
                LineError::TooLong { limit } => AnagramError::LineTooLong { limit },
                LineError::InvalidUtf8 { line } => {
                    AnagramError::StreamRead(format!("line {} is not valid UTF-8", line))
                }
                LineError::Io(e) => self.fetch_error(e),
            })?;

        Ok(lines.into_iter().map(|line| line.trim().to_string()).collect())
    }

    fn origin(&self) -> &'static str {
        REMOTE_URL
    }
}
