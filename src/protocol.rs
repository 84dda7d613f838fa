//! Typed catalog of protocol methods.
//!
//! Every request and notification is a zero-sized marker type tying a method
//! name to its parameter and result types, so a call site can never pair
//! `textDocument/completion` with the wrong payload.
//!
//! ```
//! use lsp_wire::protocol::{request, Request};
//!
//! assert_eq!(<request::Completion as Request>::METHOD, "textDocument/completion");
//! ```

use crate::error::Result;
use crate::types::{
    CodeActionRegistrationOptions, CodeLensRegistrationOptions, CompletionRegistrationOptions,
    DidChangeWatchedFilesRegistrationOptions, DocumentLinkRegistrationOptions,
    DocumentOnTypeFormattingRegistrationOptions, ExecuteCommandRegistrationOptions, Registration,
    TextDocumentChangeRegistrationOptions, TextDocumentRegistrationOptions,
    TextDocumentSaveRegistrationOptions,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod notification;
pub mod request;

/// A method that expects a response.
pub trait Request {
    type Params: Serialize + DeserializeOwned;
    type Result: Serialize + DeserializeOwned;
    const METHOD: &'static str;
}

/// A fire-and-forget message.
pub trait Notification {
    type Params: Serialize + DeserializeOwned;
    const METHOD: &'static str;
}

/// A method a server may register for after initialization.
pub trait DynamicRegistration {
    type RegistrationOptions: Serialize + DeserializeOwned;
    const METHOD: &'static str;
}

macro_rules! dynamic_registrations {
    ( $( $kind:ident $marker:ty => $options:ty; )* ) => {
        $(
            impl DynamicRegistration for $marker {
                type RegistrationOptions = $options;
                const METHOD: &'static str = <$marker as $kind>::METHOD;
            }
        )*
    };
}

dynamic_registrations! {
    Notification notification::DidOpenTextDocument => TextDocumentRegistrationOptions;
    Notification notification::DidChangeTextDocument => TextDocumentChangeRegistrationOptions;
    Notification notification::DidCloseTextDocument => TextDocumentRegistrationOptions;
    Notification notification::DidSaveTextDocument => TextDocumentSaveRegistrationOptions;
    Notification notification::WillSaveTextDocument => TextDocumentRegistrationOptions;
    Notification notification::DidChangeWatchedFiles => DidChangeWatchedFilesRegistrationOptions;
    Request request::WillSaveWaitUntil => TextDocumentRegistrationOptions;
    Request request::Completion => CompletionRegistrationOptions;
    Request request::HoverRequest => TextDocumentRegistrationOptions;
    Request request::GotoDefinition => TextDocumentRegistrationOptions;
    Request request::References => TextDocumentRegistrationOptions;
    Request request::CodeActionRequest => CodeActionRegistrationOptions;
    Request request::CodeLensRequest => CodeLensRegistrationOptions;
    Request request::DocumentLinkRequest => DocumentLinkRegistrationOptions;
    Request request::Formatting => TextDocumentRegistrationOptions;
    Request request::RangeFormatting => TextDocumentRegistrationOptions;
    Request request::OnTypeFormatting => DocumentOnTypeFormattingRegistrationOptions;
    Request request::Rename => TextDocumentRegistrationOptions;
    Request request::ExecuteCommand => ExecuteCommandRegistrationOptions;
}

impl Registration {
    /// Builds a registration entry for `M` with typed options.
    pub fn new<M>(id: impl Into<String>, options: M::RegistrationOptions) -> Result<Self>
    where
        M: DynamicRegistration,
    {
        Ok(Self {
            id: id.into(),
            method: M::METHOD.to_string(),
            register_options: Some(serde_json::to_value(options)?),
        })
    }

    /// Decodes the options of a registration for `M`.
    ///
    /// `None` when the entry registers a different method or carries no
    /// options.
    pub fn options<M>(&self) -> Result<Option<M::RegistrationOptions>>
    where
        M: DynamicRegistration,
    {
        if self.method != M::METHOD {
            return Ok(None);
        }
        match &self.register_options {
            Some(options) => Ok(Some(serde_json::from_value(options.clone())?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CompletionOptions, DocumentFilter, TextDocumentSyncKind};
    use serde_json::json;

    fn rust_selector() -> TextDocumentRegistrationOptions {
        TextDocumentRegistrationOptions {
            document_selector: Some(vec![DocumentFilter {
                language: Some("rust".to_string()),
                ..DocumentFilter::default()
            }]),
        }
    }

    #[test]
    fn test_registration_method_comes_from_marker() {
        let registration = Registration::new::<request::Completion>(
            "completion-1",
            CompletionRegistrationOptions {
                text_document_registration_options: rust_selector(),
                options: CompletionOptions {
                    trigger_characters: Some(vec![".".to_string()]),
                    ..CompletionOptions::default()
                },
            },
        )
        .unwrap();

        assert_eq!(registration.method, "textDocument/completion");
        assert_eq!(
            serde_json::to_value(&registration).unwrap(),
            json!({
                "id": "completion-1",
                "method": "textDocument/completion",
                "registerOptions": {
                    "documentSelector": [{"language": "rust"}],
                    "triggerCharacters": ["."]
                }
            })
        );
    }

    #[test]
    fn test_change_registration_carries_sync_kind() {
        let registration = Registration::new::<notification::DidChangeTextDocument>(
            "sync",
            TextDocumentChangeRegistrationOptions {
                text_document_registration_options: TextDocumentRegistrationOptions::default(),
                sync_kind: TextDocumentSyncKind::Incremental,
            },
        )
        .unwrap();

        assert_eq!(
            registration.register_options,
            Some(json!({"documentSelector": null, "syncKind": 2}))
        );
    }

    #[test]
    fn test_options_are_decoded_for_matching_method_only() {
        let registration = Registration {
            id: "save".to_string(),
            method: "textDocument/didSave".to_string(),
            register_options: Some(json!({"documentSelector": null, "includeText": true})),
        };

        let options = registration
            .options::<notification::DidSaveTextDocument>()
            .unwrap()
            .unwrap();
        assert_eq!(options.include_text, Some(true));
        assert_eq!(options.text_document_registration_options.document_selector, None);

        assert!(registration
            .options::<notification::DidOpenTextDocument>()
            .unwrap()
            .is_none());
    }
}
