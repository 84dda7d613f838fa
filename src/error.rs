//! Error types for the wire layer.
//!
//! Conversions themselves are infallible; errors come from the edges of the
//! crate: serializing params for the external transport, parsing URIs that
//! arrive in server responses, and the module resolution helper.

use crate::resolve::ResolveError;
use std::fmt;
use thiserror::Error;

/// A specialized Result type for wire operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type of the crate.
#[derive(Error, Debug)]
pub enum Error {
    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A URI received from the server could not be parsed
    #[error("Invalid URI: {0}")]
    InvalidUri(#[from] url::ParseError),

    /// Protocol-level errors returned by the server
    #[error("LSP protocol error: {0}")]
    Protocol(#[from] ResponseError),

    /// Failure reported by the external transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// Module resolution through the helper process failed
    #[error("Module resolution failed: {0}")]
    Resolve(#[from] ResolveError),
}

/// LSP ResponseError as defined by the JSON-RPC specification.
/// This corresponds to the error object in LSP response messages.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ResponseError {
    /// A number indicating the error type that occurred.
    pub code: i32,
    /// A string providing a short description of the error.
    pub message: String,
    /// A primitive or structured value that contains additional information about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for ResponseError {}

/// Error codes as defined by the LSP specification.
pub mod error_codes {
    // JSON RPC error codes
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;

    pub const SERVER_NOT_INITIALIZED: i32 = -32002;
    pub const UNKNOWN_ERROR_CODE: i32 = -32001;

    pub const CONTENT_MODIFIED: i32 = -32801;
    pub const REQUEST_CANCELLED: i32 = -32800;
}

impl ResponseError {
    /// Create a new ResponseError with the given code and message.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Create a new ResponseError with additional data.
    pub fn with_data(code: i32, message: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            code,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Whether the server gave up because the document changed underneath it.
    pub fn is_content_modified(&self) -> bool {
        self.code == error_codes::CONTENT_MODIFIED
    }

    /// Whether the request was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.code == error_codes::REQUEST_CANCELLED
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_error_display() {
        let error = ResponseError::new(error_codes::METHOD_NOT_FOUND, "no such method");
        assert_eq!(error.to_string(), "Error -32601: no such method");
    }

    #[test]
    fn test_response_error_omits_missing_data() {
        let error = ResponseError::new(error_codes::INTERNAL_ERROR, "boom");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json, json!({"code": -32603, "message": "boom"}));

        let error = ResponseError::with_data(error_codes::INVALID_PARAMS, "bad", json!([1]));
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["data"], json!([1]));
    }

    #[test]
    fn test_response_error_classification() {
        assert!(ResponseError::new(error_codes::CONTENT_MODIFIED, "stale").is_content_modified());
        assert!(ResponseError::new(error_codes::REQUEST_CANCELLED, "gone").is_cancelled());
        assert!(!ResponseError::new(error_codes::PARSE_ERROR, "x").is_cancelled());
    }
}
