//! Uploaded file, one word per line.

use async_trait::async_trait;
use tokio::io::{AsyncRead, BufReader};

use crate::error::{AnagramError, AnagramResult};
use crate::source::lines::{read_lines, LineError};
use crate::source::{WordSource, UPLOADED_FILE};

/// Reads one word per line from an uploaded byte stream.
///
/// Lines are kept exactly as written apart from the line terminator. The
/// stream is owned by the source and dropped as soon as `get_words` returns.
pub struct UploadedFileSource {
    reader: Box<dyn AsyncRead + Send + Unpin>,
}

impl UploadedFileSource {
    pub fn new(reader: Box<dyn AsyncRead + Send + Unpin>) -> Self {
        Self { reader }
    }
}

impl std::fmt::Debug for UploadedFileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadedFileSource").finish_non_exhaustive()
    }
}

#[async_trait]
impl WordSource for UploadedFileSource {
    async fn get_words(self: Box<Self>) -> AnagramResult<Vec<String>> {
        read_lines(BufReader::new(self.reader), None)
            .await
            .map_err(|e| match e {
                LineError::TooLong { limit } => AnagramError::LineTooLong { limit },
                LineError::InvalidUtf8 { line } => {
                    AnagramError::StreamRead(format!("line {} is not valid UTF-8", line))
                }
                LineError::Io(e) => AnagramError::StreamRead(e.to_string()),
            })
    }

    fn origin(&self) -> &'static str {
        UPLOADED_FILE
    }
}
