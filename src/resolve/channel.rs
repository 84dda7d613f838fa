//! Content-Length framed JSON messages over a child's stdio.
//!
//! Same base framing as the language server protocol: a header block
//! terminated by an empty line, then exactly `Content-Length` bytes of
//! UTF-8 JSON.

use super::module::ResolveError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Longest header line accepted before the helper is considered broken.
const MAX_HEADER_LINE: usize = 1024;

/// Largest message body accepted from the helper.
const MAX_CONTENT_LENGTH: usize = 1 << 20;

/// Frame a message body for transmission.
pub(crate) fn frame(content: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(content.len() + 32);
    result.extend_from_slice(format!("Content-Length: {}\r\n\r\n", content.len()).as_bytes());
    result.extend_from_slice(content.as_bytes());
    result
}

pub(crate) struct Channel<R, W> {
    reader: R,
    writer: W,
}

impl<R: AsyncRead + Unpin, W: AsyncWrite + Unpin> Channel<R, W> {
    pub(crate) fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub(crate) async fn send<T: Serialize>(&mut self, message: &T) -> Result<(), ResolveError> {
        let content = serde_json::to_string(message)
            .map_err(|e| ResolveError::Ipc(format!("cannot encode message: {}", e)))?;
        self.writer
            .write_all(&frame(&content))
            .await
            .map_err(|e| ResolveError::Ipc(format!("write failed: {}", e)))?;
        self.writer
            .flush()
            .await
            .map_err(|e| ResolveError::Ipc(format!("flush failed: {}", e)))
    }

    pub(crate) async fn receive<T: DeserializeOwned>(&mut self) -> Result<T, ResolveError> {
        let content_length = self.read_headers().await?;
        if content_length > MAX_CONTENT_LENGTH {
            return Err(ResolveError::Ipc(format!(
                "message of {} bytes exceeds the {} byte limit",
                content_length, MAX_CONTENT_LENGTH
            )));
        }
        let mut buffer = vec![0; content_length];
        self.reader
            .read_exact(&mut buffer)
            .await
            .map_err(|e| ResolveError::Ipc(format!("truncated message body: {}", e)))?;
        serde_json::from_slice(&buffer)
            .map_err(|e| ResolveError::Ipc(format!("malformed message: {}", e)))
    }

    /// Reads the header block and returns the announced content length.
    async fn read_headers(&mut self) -> Result<usize, ResolveError> {
        let mut content_length = None;

        loop {
            let line = self.read_line().await?;
            if line.is_empty() {
                break;
            }

            let (name, value) = parse_header_field(&line)?;
            if name.eq_ignore_ascii_case("content-length") {
                content_length = Some(value.parse::<usize>().map_err(|_| {
                    ResolveError::Ipc(format!("invalid Content-Length: {}", value))
                })?);
            }
        }

        content_length.ok_or_else(|| ResolveError::Ipc("missing Content-Length header".to_string()))
    }

    /// Read a single line (ending with \r\n).
    async fn read_line(&mut self) -> Result<String, ResolveError> {
        let mut line = Vec::new();
        let mut prev_byte = 0u8;

        loop {
            let mut byte = [0u8; 1];
            self.reader
                .read_exact(&mut byte)
                .await
                .map_err(|e| ResolveError::Ipc(format!("helper closed its output: {}", e)))?;
            let byte = byte[0];

            if byte == b'\n' && prev_byte == b'\r' {
                line.pop();
                break;
            }

            if line.len() >= MAX_HEADER_LINE {
                return Err(ResolveError::Ipc(format!(
                    "header line exceeds {} bytes",
                    MAX_HEADER_LINE
                )));
            }
            line.push(byte);
            prev_byte = byte;
        }

        String::from_utf8(line)
            .map_err(|e| ResolveError::Ipc(format!("invalid UTF-8 in header: {}", e)))
    }
}

fn parse_header_field(line: &str) -> Result<(&str, &str), ResolveError> {
    line.split_once(':')
        .map(|(name, value)| (name.trim(), value.trim()))
        .ok_or_else(|| ResolveError::Ipc(format!("invalid header field: {}", line)))
}
