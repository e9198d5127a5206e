//! Line splitting shared by the stream-backed sources.
//!
//! Lines end at `\n`; a `\r` right before it is dropped. A last line without a
//! terminator still counts, a trailing terminator does not add an empty line.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Failure while splitting a stream into lines.
#[derive(Debug)]
pub(crate) enum LineError {
    /// A line grew past the configured cap.
    TooLong { limit: usize },
    /// The line at `line` (1-based) is not valid UTF-8.
    InvalidUtf8 { line: usize },
    /// The underlying reader failed.
    Io(std::io::Error),
}

/// Read every line of `reader`, optionally capping the bytes buffered per line.
pub(crate) async fn read_lines<R>(mut reader: R, max_line_bytes: Option<usize>) -> Result<Vec<String>, LineError>
where
    R: AsyncBufRead + Unpin,
{
    let limit = max_line_bytes.unwrap_or(usize::MAX);
    let mut lines = Vec::new();
    let mut current: Vec<u8> = Vec::new();

    loop {
        let (consumed, line_done) = {
            let available = reader.fill_buf().await.map_err(LineError::Io)?;
            if available.is_empty() {
                break;
            }
            match available.iter().position(|b| *b == b'\n') {
                Some(pos) => {
                    current.extend_from_slice(&available[..pos]);
                    (pos + 1, true)
                }
                None => {
                    current.extend_from_slice(available);
                    (available.len(), false)
                }
            }
        };
        reader.consume(consumed);

        if content_len(&current) > limit {
            return Err(LineError::TooLong { limit });
        }
        if line_done {
            push_line(&mut lines, &mut current)?;
        }
    }

    if !current.is_empty() {
        push_line(&mut lines, &mut current)?;
    }

    Ok(lines)
}

/// Length of the line without a trailing `\r`, which belongs to the terminator.
fn content_len(line: &[u8]) -> usize {
    match line.last() {
        Some(b'\r') => line.len() - 1,
        _ => line.len(),
    }
}

fn push_line(lines: &mut Vec<String>, current: &mut Vec<u8>) -> Result<(), LineError> {
    if current.last() == Some(&b'\r') {
        current.pop();
    }
    let line = String::from_utf8(std::mem::take(current))
        .map_err(|_| LineError::InvalidUtf8 { line: lines.len() + 1 })?;
    lines.push(line);
    Ok(())
}
