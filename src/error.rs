//! Error taxonomy for the grouping core.
//!
//! Every variant is a local, recoverable condition. The core only returns
//! these; deciding how they reach a client is the transport's job.

use thiserror::Error;

/// Errors produced by word sources, groupers and their factories.
#[derive(Debug, Error)]
pub enum AnagramError {
    /// No source is registered under the requested origin tag.
    #[error("unknown input type `{tag}`. supported types: {}", .supported.join(", "))]
    UnknownOrigin { tag: String, supported: Vec<String> },

    /// No grouper is registered under the requested algorithm tag.
    #[error("unknown algorithm `{tag}`. supported algorithms: {}", .supported.join(", "))]
    UnknownAlgorithm { tag: String, supported: Vec<String> },

    /// Inline input did not contain at least two words.
    #[error("input must contain at least two comma-separated words")]
    EmptySource,

    /// The payload variant does not fit the origin it was handed to.
    #[error("input type `{origin}` expects {expected}")]
    PayloadMismatch { origin: String, expected: &'static str },

    /// The remote word-list location is not a usable http(s) URL.
    #[error("invalid url `{url}`: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Transport failure while fetching a remote word list.
    #[error("failed to fetch `{url}`: {reason}")]
    Fetch { url: String, reason: String },

    /// A single line exceeded the buffered line cap.
    #[error("line exceeds the maximum size of {limit} bytes")]
    LineTooLong { limit: usize },

    /// The uploaded stream could not be read, or was not UTF-8.
    #[error("failed to read input: {0}")]
    StreamRead(String),
}

/// Result type for the grouping core.
pub type AnagramResult<T> = Result<T, AnagramError>;
