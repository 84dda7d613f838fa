//! Dynamic capability registration.
//!
//! After initialization a server may register or unregister features with
//! `client/registerCapability` and `client/unregisterCapability`. Each
//! registration carries method-specific options.

use crate::types::{
    CodeActionOptions, CodeLensOptions, CompletionOptions, DocumentLinkOptions,
    DocumentOnTypeFormattingOptions, ExecuteCommandOptions, TextDocumentSyncKind,
};
use serde::{Deserialize, Serialize};

/// A document filter denotes a document through properties like language,
/// scheme or pattern. At least one property should be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentFilter {
    /// A language id, like `typescript`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// A URI scheme, like `file` or `untitled`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,

    /// A glob pattern, like `*.{ts,js}`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

pub type DocumentSelector = Vec<DocumentFilter>;

/// General text document registration options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentRegistrationOptions {
    /// `null` means the selector provided on the client side is used.
    pub document_selector: Option<DocumentSelector>,
}

/// Static registration options to be returned in the initialize request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticRegistrationOptions {
    /// The id used to register the request. Can be used to deregister it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentChangeRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,

    pub sync_kind: TextDocumentSyncKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentSaveRegistrationOptions {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_text: Option<bool>,
}

/// Registration options combining a document selector with feature options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRegistrationOptions<T> {
    #[serde(flatten)]
    pub text_document_registration_options: TextDocumentRegistrationOptions,

    #[serde(flatten)]
    pub options: T,
}

pub type CompletionRegistrationOptions = FeatureRegistrationOptions<CompletionOptions>;
pub type CodeActionRegistrationOptions = FeatureRegistrationOptions<CodeActionOptions>;
pub type CodeLensRegistrationOptions = FeatureRegistrationOptions<CodeLensOptions>;
pub type DocumentLinkRegistrationOptions = FeatureRegistrationOptions<DocumentLinkOptions>;
pub type DocumentOnTypeFormattingRegistrationOptions =
    FeatureRegistrationOptions<DocumentOnTypeFormattingOptions>;

pub type ExecuteCommandRegistrationOptions = ExecuteCommandOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSystemWatcher {
    /// The glob pattern to watch.
    pub glob_pattern: String,

    /// Bit set of create (1), change (2) and delete (4). Defaults to 7.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DidChangeWatchedFilesRegistrationOptions {
    pub watchers: Vec<FileSystemWatcher>,
}

/// General parameters to register for a capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// The id used to register the request. Can be used to deregister it.
    pub id: String,

    /// The method / capability to register for.
    pub method: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_options: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationParams {
    pub registrations: Vec<Registration>,
}

/// General parameters to unregister a capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unregistration {
    pub id: String,
    pub method: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnregistrationParams {
    /// Misspelled in the protocol itself; kept for compatibility.
    pub unregisterations: Vec<Unregistration>,
}
