//! Text document synchronization and workspace file notifications.

use crate::types::{
    Diagnostic, DocumentUri, Range, TextDocumentIdentifier, VersionedTextDocumentIdentifier,
};
use serde::{Deserialize, Serialize};

/// An item to transfer a text document from the client to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentItem {
    pub uri: DocumentUri,
    pub language_id: String,
    pub version: i32,
    /// The content of the opened text document.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidOpenTextDocumentParams {
    pub text_document: TextDocumentItem,
}

/// An event describing a change to a text document.
///
/// With `range` and `range_length` omitted the new text is the full content
/// of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentContentChangeEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,

    /// The length of the range that got replaced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_length: Option<u32>,

    pub text: String,
}

impl TextDocumentContentChangeEvent {
    /// A change replacing the whole document.
    pub fn full(text: impl Into<String>) -> Self {
        Self {
            range: None,
            range_length: None,
            text: text.into(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.range.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidChangeTextDocumentParams {
    /// The document that did change. The version number points to the
    /// version after all provided content changes have been applied.
    pub text_document: VersionedTextDocumentIdentifier,

    /// The changes are applied in array order.
    pub content_changes: Vec<TextDocumentContentChangeEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidCloseTextDocumentParams {
    pub text_document: TextDocumentIdentifier,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidSaveTextDocumentParams {
    pub text_document: VersionedTextDocumentIdentifier,

    /// Only present when the server asked for content on save.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

wire_enum! {
    /// Represents reasons why a text document is saved.
    pub enum TextDocumentSaveReason {
        /// Manually triggered, e.g. by the user pressing save.
        Manual = 1,
        /// Automatic after a delay.
        AfterDelay = 2,
        /// When the editor lost focus.
        FocusOut = 3,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WillSaveTextDocumentParams {
    pub text_document: TextDocumentIdentifier,
    pub reason: TextDocumentSaveReason,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishDiagnosticsParams {
    pub uri: DocumentUri,

    /// Optional version of the document the diagnostics were computed for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,

    pub diagnostics: Vec<Diagnostic>,
}

wire_enum! {
    /// The file event type.
    pub enum FileChangeType {
        Created = 1,
        Changed = 2,
        Deleted = 3,
    }
}

/// An event describing a file change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileEvent {
    pub uri: DocumentUri,
    #[serde(rename = "type")]
    pub typ: FileChangeType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidChangeWatchedFilesParams {
    pub changes: Vec<FileEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DidChangeConfigurationParams {
    /// The actual changed settings.
    pub settings: serde_json::Value,
}
