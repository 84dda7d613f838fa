//! Document lifecycle notifications: open, change, close, save, will-save,
//! plus watched file events.

use super::Converter;
use crate::host::{self, DocumentChange, TextDocument};
use crate::types::{
    DidChangeTextDocumentParams, DidChangeWatchedFilesParams, DidCloseTextDocumentParams,
    DidOpenTextDocumentParams, DidSaveTextDocumentParams, FileChangeType, FileEvent,
    TextDocumentContentChangeEvent, TextDocumentItem, TextDocumentSaveReason,
    WillSaveTextDocumentParams,
};
use url::Url;

impl Converter {
    /// Full snapshot of a newly opened document.
    ///
    /// Send at most once between a matching pair of open and close.
    pub fn as_open_text_document_params<D>(&self, document: &D) -> DidOpenTextDocumentParams
    where
        D: TextDocument + ?Sized,
    {
        DidOpenTextDocumentParams {
            text_document: TextDocumentItem {
                uri: self.as_uri(document.uri()),
                language_id: document.language_id().to_string(),
                version: document.version(),
                text: document.text(),
            },
        }
    }

    /// Params for `textDocument/didChange`, in full or incremental form.
    pub fn as_change_text_document_params(
        &self,
        change: DocumentChange<'_>,
    ) -> DidChangeTextDocumentParams {
        match change {
            DocumentChange::Full(document) => DidChangeTextDocumentParams {
                text_document: self.as_versioned_text_document_identifier(document),
                content_changes: vec![TextDocumentContentChangeEvent::full(document.text())],
            },
            DocumentChange::Incremental(event) => DidChangeTextDocumentParams {
                text_document: self.as_versioned_text_document_identifier(event.document),
                content_changes: event
                    .content_changes
                    .iter()
                    .map(|change| TextDocumentContentChangeEvent {
                        range: Some(self.as_range(&change.range)),
                        range_length: Some(change.range_length),
                        text: change.text.clone(),
                    })
                    .collect(),
            },
        }
    }

    /// Params for `textDocument/didClose`.
    pub fn as_close_text_document_params<D>(&self, document: &D) -> DidCloseTextDocumentParams
    where
        D: TextDocument + ?Sized,
    {
        DidCloseTextDocumentParams {
            text_document: self.as_text_document_identifier(document),
        }
    }

    /// `include_text` comes from the server's save options; it is never
    /// assumed.
    pub fn as_save_text_document_params<D>(
        &self,
        document: &D,
        include_text: bool,
    ) -> DidSaveTextDocumentParams
    where
        D: TextDocument + ?Sized,
    {
        DidSaveTextDocumentParams {
            text_document: self.as_versioned_text_document_identifier(document),
            text: include_text.then(|| document.text()),
        }
    }

    /// Map a host save reason; unknown reasons become `Manual`.
    pub fn as_text_document_save_reason(
        &self,
        reason: host::TextDocumentSaveReason,
    ) -> TextDocumentSaveReason {
        match reason {
            host::TextDocumentSaveReason::AFTER_DELAY => TextDocumentSaveReason::AfterDelay,
            host::TextDocumentSaveReason::FOCUS_OUT => TextDocumentSaveReason::FocusOut,
            _ => TextDocumentSaveReason::Manual,
        }
    }

    /// Params for `textDocument/willSave`.
    pub fn as_will_save_text_document_params(
        &self,
        event: &host::TextDocumentWillSaveEvent<'_>,
    ) -> WillSaveTextDocumentParams {
        WillSaveTextDocumentParams {
            text_document: self.as_text_document_identifier(event.document),
            reason: self.as_text_document_save_reason(event.reason),
        }
    }

    /// Create a file event for a watched file.
    pub fn as_file_event(&self, uri: &Url, change: host::FileChangeType) -> FileEvent {
        FileEvent {
            uri: self.as_uri(uri),
            typ: match change {
                host::FileChangeType::Created => FileChangeType::Created,
                host::FileChangeType::Changed => FileChangeType::Changed,
                host::FileChangeType::Deleted => FileChangeType::Deleted,
            },
        }
    }

    /// Params for `workspace/didChangeWatchedFiles`.
    pub fn as_did_change_watched_files_params(
        &self,
        changes: &[(Url, host::FileChangeType)],
    ) -> DidChangeWatchedFilesParams {
        DidChangeWatchedFilesParams {
            changes: changes
                .iter()
                .map(|(uri, change)| self.as_file_event(uri, *change))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{Document, TextDocumentChangeEvent, TextDocumentContentChange};
    use crate::types::Range;
    use serde_json::json;

    fn document() -> Document {
        Document::new(Url::parse("file:///a.py").unwrap(), "python", 4, "abc")
    }

    #[test]
    fn test_open_sends_full_snapshot() {
        let converter = Converter::new();
        let json = serde_json::to_value(converter.as_open_text_document_params(&document())).unwrap();
        assert_eq!(
            json,
            json!({
                "textDocument": {
                    "uri": "file:///a.py",
                    "languageId": "python",
                    "version": 4,
                    "text": "abc"
                }
            })
        );
    }

    #[test]
    fn test_full_change_is_a_single_rangeless_record() {
        let converter = Converter::new();
        let document = document();
        let params = converter.as_change_text_document_params(DocumentChange::Full(&document));
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["contentChanges"], json!([{"text": "abc"}]));
        assert_eq!(json["textDocument"]["version"], 4);
    }

    #[test]
    fn test_incremental_change_keeps_order() {
        let converter = Converter::new();
        let document = document();
        let event = TextDocumentChangeEvent {
            document: &document,
            content_changes: vec![
                TextDocumentContentChange {
                    range: host::Range::from_coords(0, 0, 0, 1),
                    range_length: 1,
                    text: "x".to_string(),
                },
                TextDocumentContentChange {
                    range: host::Range::from_coords(0, 2, 0, 2),
                    range_length: 0,
                    text: "yz".to_string(),
                },
            ],
        };

        let params = converter.as_change_text_document_params(DocumentChange::Incremental(&event));
        assert_eq!(params.content_changes.len(), 2);
        assert_eq!(params.content_changes[0].range, Some(Range::from_coords(0, 0, 0, 1)));
        assert_eq!(params.content_changes[0].range_length, Some(1));
        assert_eq!(params.content_changes[0].text, "x");
        assert_eq!(params.content_changes[1].range, Some(Range::from_coords(0, 2, 0, 2)));
        assert_eq!(params.content_changes[1].range_length, Some(0));
        assert_eq!(params.content_changes[1].text, "yz");
    }

    #[test]
    fn test_close_is_identifier_only() {
        let converter = Converter::new();
        let json =
            serde_json::to_value(converter.as_close_text_document_params(&document())).unwrap();
        assert_eq!(json, json!({"textDocument": {"uri": "file:///a.py"}}));
    }

    #[test]
    fn test_save_includes_text_only_on_request() {
        let converter = Converter::new();
        let without = converter.as_save_text_document_params(&document(), false);
        assert_eq!(without.text, None);
        assert_eq!(without.text_document.version, 4);

        let with = converter.as_save_text_document_params(&document(), true);
        assert_eq!(with.text.as_deref(), Some("abc"));
    }

    #[test]
    fn test_unknown_save_reason_falls_back_to_manual() {
        let converter = Converter::new();
        let document = document();
        let event = host::TextDocumentWillSaveEvent {
            document: &document,
            reason: host::TextDocumentSaveReason(17),
        };
        let params = converter.as_will_save_text_document_params(&event);
        assert_eq!(params.reason, TextDocumentSaveReason::Manual);

        assert_eq!(
            converter.as_text_document_save_reason(host::TextDocumentSaveReason::FOCUS_OUT),
            TextDocumentSaveReason::FocusOut
        );
    }

    #[test]
    fn test_watched_file_events() {
        let converter = Converter::new();
        let uri = Url::parse("file:///Cargo.toml").unwrap();
        let params = converter
            .as_did_change_watched_files_params(&[(uri, host::FileChangeType::Changed)]);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"changes": [{"uri": "file:///Cargo.toml", "type": 2}]})
        );
    }
}
