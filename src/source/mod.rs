//! Word source subsystem.
//!
//! # Data Flow
//! ```text
//! Transport input
//!     → SourcePayload (Text | Stream | Url)
//!     → factory.rs (origin tag → constructor)
//!     → inline_text.rs   : split on ','
//!     → uploaded_file.rs : one word per line, verbatim
//!     → remote_url.rs    : HTTP GET, one trimmed word per line
//!     → Vec<Word>
//! ```
//!
//! # Design Decisions
//! - A source consumes itself when producing words, so stream handles and
//!   response bodies are dropped on every exit path
//! - The payload is a sum type; a payload that does not fit the origin is a
//!   `PayloadMismatch`, never a runtime cast
//! - Sources never log; the caller decides what to report

pub mod factory;
pub mod inline_text;
pub(crate) mod lines;
pub mod remote_url;
pub mod uploaded_file;

pub use factory::{SourceContext, SourceFactory};
pub use inline_text::InlineTextSource;
pub use remote_url::RemoteUrlSource;
pub use uploaded_file::UploadedFileSource;

use async_trait::async_trait;
use tokio::io::AsyncRead;

use crate::error::AnagramResult;

/// Origin tag for comma-separated inline text.
pub const INLINE_TEXT: &str = "inline_text";
/// Origin tag for an uploaded file, one word per line.
pub const UPLOADED_FILE: &str = "uploaded_file";
/// Origin tag for a word list fetched over HTTP.
pub const REMOTE_URL: &str = "remote_url";

/// Produces the ordered word sequence for one request.
#[async_trait]
pub trait WordSource: Send {
    /// Read all words. Consumes the source and releases whatever it holds.
    async fn get_words(self: Box<Self>) -> AnagramResult<Vec<String>>;

    /// Registry tag this source is known by.
    fn origin(&self) -> &'static str;
}

/// Raw input handed to the source factory.
pub enum SourcePayload {
    /// Inline text as sent by the client.
    Text(String),
    /// Byte stream of an uploaded file.
    Stream(Box<dyn AsyncRead + Send + Unpin>),
    /// Location of a remote word list.
    Url(String),
}

impl SourcePayload {
    /// Wrap any readable stream.
    pub fn stream<R>(reader: R) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        Self::Stream(Box::new(reader))
    }

    /// Short name of the variant, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SourcePayload::Text(_) => "text",
            SourcePayload::Stream(_) => "stream",
            SourcePayload::Url(_) => "url",
        }
    }
}

impl std::fmt::Debug for SourcePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourcePayload::Text(text) => f.debug_tuple("Text").field(text).finish(),
            SourcePayload::Stream(_) => f.write_str("Stream(..)"),
            SourcePayload::Url(url) => f.debug_tuple("Url").field(url).finish(),
        }
    }
}
