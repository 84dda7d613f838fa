//! Common test utilities and infrastructure for lsp-wire tests
//!
//! This module provides a recording mock transport, host documents and
//! wire fixtures shared by the integration tests.
#![allow(dead_code)]
use lsp_wire::error::ResponseError;
use lsp_wire::host::{self, Document};
use lsp_wire::{types::*, Error, Result, RpcTransport};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use url::Url;

/// A reply queued on the mock transport
pub enum Reply {
    Result(Value),
    Error(ResponseError),
}

/// Mock transport that records every call and answers requests from a queue
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<(String, Value)>>,
    notifications: Mutex<Vec<(String, Value)>>,
    fail_notifications: bool,
}

impl MockTransport {
    /// Create a mock transport with no queued replies
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock transport that answers requests in order
    pub fn with_replies(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            ..Self::default()
        }
    }

    /// Create a mock transport whose notifications always fail
    pub fn failing_notifications() -> Self {
        Self {
            fail_notifications: true,
            ..Self::default()
        }
    }

    /// Requests sent so far, as (method, params)
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests.lock().unwrap().clone()
    }

    /// Notifications sent so far, as (method, params)
    pub fn notifications(&self) -> Vec<(String, Value)> {
        self.notifications.lock().unwrap().clone()
    }
}

impl RpcTransport for MockTransport {
    async fn send_request(&self, method: &str, params: Value) -> Result<Value> {
        self.requests
            .lock()
            .unwrap()
            .push((method.to_string(), params));
        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(Reply::Result(value)) => Ok(value),
            Some(Reply::Error(error)) => Err(Error::Protocol(error)),
            None => Err(Error::Transport(format!("no reply queued for {}", method))),
        }
    }

    async fn send_notification(&self, method: &str, params: Value) -> Result<()> {
        if self.fail_notifications {
            return Err(Error::Transport("connection closed".to_string()));
        }
        self.notifications
            .lock()
            .unwrap()
            .push((method.to_string(), params));
        Ok(())
    }
}

/// Parse a file URI for testing
pub fn test_uri(path: &str) -> Url {
    Url::parse(&format!("file://{}", path)).expect("test URI should be valid")
}

/// Create a host document for testing
pub fn test_document() -> Document {
    Document::new(
        test_uri("/test/project/src/lib.rs"),
        "rust",
        1,
        "pub fn add(a: i32, b: i32) -> i32 {\n    a + b\n}\n",
    )
}

/// Create test initialization parameters
pub fn test_init_params() -> InitializeParams {
    InitializeParams {
        process_id: Some(12345),
        client_info: Some(ClientInfo {
            name: "Test Client".to_string(),
            version: Some("1.0.0".to_string()),
        }),
        locale: None,
        root_uri: Some("file:///test/project".to_string()),
        initialization_options: None,
        capabilities: ClientCapabilities::default(),
        trace: None,
        workspace_folders: None,
    }
}

/// Create a host range for testing
pub fn test_host_range() -> host::Range {
    host::Range::from_coords(0, 0, 0, 5)
}

/// Create a wire range for testing
pub fn test_range() -> Range {
    Range::new(Position::new(0, 0), Position::new(0, 5))
}

/// Create a host diagnostic for testing
pub fn test_host_diagnostic() -> host::Diagnostic {
    let mut diagnostic = host::Diagnostic::new(test_host_range(), "Test diagnostic message")
        .with_severity(host::DiagnosticSeverity::Error);
    diagnostic.code = Some(host::DiagnosticCode::String("E001".to_string()));
    diagnostic.source = Some("test".to_string());
    diagnostic
}

/// Assert that two JSON values are equivalent, ignoring field order
pub fn assert_json_eq(expected: &str, actual: &str) {
    let expected: Value = serde_json::from_str(expected).expect("Expected JSON should be valid");
    let actual: Value = serde_json::from_str(actual).expect("Actual JSON should be valid");
    assert_eq!(expected, actual, "JSON values should be equal");
}
