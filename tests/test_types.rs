//! Unit tests for core LSP types
//!
//! This module tests the exact JSON shapes of wire types: field naming,
//! optional and nullable fields, enumeration integers and union shapes.

mod common;

use common::*;
use lsp_wire::{error::ResponseError, types::*};
use serde_json::json;

#[test]
fn test_id_serialization() {
    let id = Id::Number(42);
    let serialized = serde_json::to_string(&id).unwrap();
    assert_eq!(serialized, "42");
    let deserialized: Id = serde_json::from_str(&serialized).unwrap();
    assert_eq!(id, deserialized);

    let id = Id::String("test-id".to_string());
    let serialized = serde_json::to_string(&id).unwrap();
    assert_eq!(serialized, "\"test-id\"");
    let deserialized: Id = serde_json::from_str(&serialized).unwrap();
    assert_eq!(id, deserialized);
}

#[test]
fn test_cancel_params() {
    let params = CancelParams { id: 7i64.into() };
    assert_eq!(serde_json::to_value(&params).unwrap(), json!({"id": 7}));
}

#[test]
fn test_initialize_params_emit_nullable_fields() {
    let mut params = test_init_params();
    params.process_id = None;
    params.root_uri = None;
    params.capabilities = ClientCapabilities {
        workspace: None,
        text_document: None,
        window: None,
        experimental: None,
    };

    let json = serde_json::to_value(&params).unwrap();
    assert_eq!(
        json,
        json!({
            "processId": null,
            "clientInfo": {"name": "Test Client", "version": "1.0.0"},
            "rootUri": null,
            "capabilities": {}
        })
    );
}

#[test]
fn test_default_client_capabilities_announce_converter_support() {
    let json = serde_json::to_value(ClientCapabilities::default()).unwrap();
    let completion_item = &json["textDocument"]["completion"]["completionItem"];
    assert_eq!(completion_item["snippetSupport"], true);
    assert_eq!(
        completion_item["documentationFormat"],
        json!(["markdown", "plaintext"])
    );
    assert_eq!(
        json["textDocument"]["completion"]["completionItemKind"]["valueSet"]
            .as_array()
            .unwrap()
            .len(),
        25
    );
    assert_eq!(
        json["textDocument"]["publishDiagnostics"]["relatedInformation"],
        true
    );
    assert_eq!(
        json["textDocument"]["publishDiagnostics"]["tagSupport"]["valueSet"],
        json!([1, 2])
    );
}

#[test]
fn test_missing_capability_nodes_stay_unknown() {
    let caps: ServerCapabilities = serde_json::from_value(json!({})).unwrap();
    assert_eq!(caps.hover_provider, None);
    assert_eq!(caps.text_document_sync_kind(), None);
    assert_eq!(caps.open_close(), None);
    assert_eq!(caps.include_text_on_save(), None);
}

#[test]
fn test_text_document_sync_shapes() {
    let bare: ServerCapabilities =
        serde_json::from_value(json!({"textDocumentSync": 2})).unwrap();
    assert_eq!(
        bare.text_document_sync_kind(),
        Some(TextDocumentSyncKind::Incremental)
    );
    assert_eq!(bare.open_close(), Some(true));

    let options: ServerCapabilities = serde_json::from_value(json!({
        "textDocumentSync": {
            "openClose": true,
            "change": 1,
            "save": {"includeText": true}
        }
    }))
    .unwrap();
    assert_eq!(options.text_document_sync_kind(), Some(TextDocumentSyncKind::Full));
    assert_eq!(options.include_text_on_save(), Some(true));

    let save_flag: ServerCapabilities =
        serde_json::from_value(json!({"textDocumentSync": {"save": true}})).unwrap();
    assert_eq!(save_flag.include_text_on_save(), Some(false));
    assert_eq!(save_flag.open_close(), None);
}

#[test]
fn test_code_action_provider_one_of() {
    let flag: ServerCapabilities =
        serde_json::from_value(json!({"codeActionProvider": true})).unwrap();
    assert_eq!(flag.code_action_provider, Some(OneOf::Left(true)));

    let options: ServerCapabilities = serde_json::from_value(json!({
        "codeActionProvider": {"codeActionKinds": ["quickfix", "refactor.extract"]}
    }))
    .unwrap();
    let kinds = options
        .code_action_provider
        .and_then(OneOf::right)
        .and_then(|options| options.code_action_kinds)
        .unwrap();
    assert_eq!(
        kinds,
        vec![CodeActionKind::QUICKFIX, CodeActionKind::REFACTOR_EXTRACT]
    );
}

#[test]
fn test_enum_integers() {
    assert_eq!(serde_json::to_value(DiagnosticSeverity::Hint).unwrap(), json!(4));
    assert_eq!(serde_json::to_value(DiagnosticTag::Deprecated).unwrap(), json!(2));
    assert_eq!(serde_json::to_value(InsertTextFormat::Snippet).unwrap(), json!(2));
    assert_eq!(
        serde_json::to_value(CompletionTriggerKind::TriggerForIncompleteCompletions).unwrap(),
        json!(3)
    );
    assert_eq!(serde_json::to_value(TextDocumentSaveReason::FocusOut).unwrap(), json!(3));
    assert_eq!(serde_json::to_value(FileChangeType::Deleted).unwrap(), json!(3));
    assert_eq!(serde_json::to_value(TextDocumentSyncKind::None).unwrap(), json!(0));
    assert_eq!(serde_json::to_value(MessageType::Log).unwrap(), json!(4));
    assert_eq!(serde_json::to_value(CompletionItemKind::TYPE_PARAMETER).unwrap(), json!(25));
    assert_eq!(serde_json::to_value(SymbolKind::TYPE_PARAMETER).unwrap(), json!(26));
}

#[test]
fn test_closed_enums_reject_unknown_values() {
    assert!(serde_json::from_value::<DiagnosticSeverity>(json!(0)).is_err());
    assert!(serde_json::from_value::<DiagnosticSeverity>(json!(5)).is_err());
    assert!(serde_json::from_value::<TextDocumentSyncKind>(json!(3)).is_err());
    assert_eq!(DiagnosticSeverity::try_from(9u8), Err(9));
}

#[test]
fn test_open_kinds_accept_unknown_values() {
    let kind: CompletionItemKind = serde_json::from_value(json!(118)).unwrap();
    assert_eq!(kind, CompletionItemKind(118));
    let kind: SymbolKind = serde_json::from_value(json!(300)).unwrap();
    assert_eq!(kind, SymbolKind(300));
}

#[test]
fn test_diagnostic_from_server() {
    let json = r#"{
        "range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 5}},
        "severity": 1,
        "code": "E001",
        "source": "test",
        "message": "Test diagnostic message"
    }"#;
    let diagnostic: Diagnostic = serde_json::from_str(json).unwrap();
    assert_eq!(diagnostic.range, test_range());
    assert_eq!(diagnostic.code, Some(DiagnosticCode::String("E001".to_string())));
    assert_json_eq(json, &serde_json::to_string(&diagnostic).unwrap());
}

#[test]
fn test_publish_diagnostics_with_newer_tags() {
    let params: PublishDiagnosticsParams = serde_json::from_value(json!({
        "uri": "file:///test/project/src/lib.rs",
        "diagnostics": [
            {
                "range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 5}},
                "message": "unused import",
                "tags": [1, 3]
            },
            {
                "range": {"start": {"line": 2, "character": 0}, "end": {"line": 2, "character": 5}},
                "message": "plain"
            }
        ]
    }))
    .unwrap();
    assert_eq!(params.diagnostics.len(), 2);
    assert_eq!(params.diagnostics[0].tags, Some(vec![DiagnosticTag::Unnecessary]));
    assert_eq!(params.diagnostics[1].tags, None);
}

#[test]
fn test_optional_versioned_identifier_emits_null() {
    let identifier = OptionalVersionedTextDocumentIdentifier {
        uri: "file:///a.rs".to_string(),
        version: None,
    };
    assert_eq!(
        serde_json::to_value(&identifier).unwrap(),
        json!({"uri": "file:///a.rs", "version": null})
    );
}

#[test]
fn test_workspace_edit_document_changes() {
    let edit: WorkspaceEdit = serde_json::from_value(json!({
        "documentChanges": [{
            "textDocument": {"uri": "file:///a.rs", "version": 3},
            "edits": [{"range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 0}}, "newText": "// "}]
        }]
    }))
    .unwrap();
    let changes = edit.document_changes.unwrap();
    assert_eq!(changes[0].text_document.version, Some(3));
    assert_eq!(changes[0].edits[0].new_text, "// ");
    assert!(edit.changes.is_none());
}

#[test]
fn test_hover_contents_shapes() {
    let markup: Hover =
        serde_json::from_value(json!({"contents": {"kind": "markdown", "value": "**x**"}}))
            .unwrap();
    assert!(matches!(markup.contents, HoverContents::Markup(_)));

    let language: Hover = serde_json::from_value(
        json!({"contents": {"language": "rust", "value": "fn x()"}}),
    )
    .unwrap();
    assert!(matches!(
        language.contents,
        HoverContents::Scalar(MarkedString::LanguageString(_))
    ));

    let array: Hover = serde_json::from_value(json!({"contents": ["a", "b"]})).unwrap();
    assert!(matches!(array.contents, HoverContents::Array(ref items) if items.len() == 2));
}

#[test]
fn test_code_action_or_command() {
    let actions: Vec<CodeActionOrCommand> = serde_json::from_value(json!([
        {"title": "Run", "command": "cargo.run"},
        {"title": "Fix", "kind": "quickfix", "isPreferred": true}
    ]))
    .unwrap();
    assert!(matches!(actions[0], CodeActionOrCommand::Command(_)));
    match &actions[1] {
        CodeActionOrCommand::CodeAction(action) => {
            assert_eq!(action.kind, Some(CodeActionKind::QUICKFIX));
            assert_eq!(action.is_preferred, Some(true));
        }
        other => panic!("expected a code action, got {:?}", other),
    }
}

#[test]
fn test_formatting_options_extra_properties() {
    let options: FormattingOptions = serde_json::from_value(json!({
        "tabSize": 2,
        "insertSpaces": false,
        "trimTrailingWhitespace": true,
        "editorconfig": "on"
    }))
    .unwrap();
    assert_eq!(options.tab_size, 2);
    assert_eq!(options.trim_trailing_whitespace, Some(true));
    assert_eq!(
        options.properties.get("editorconfig"),
        Some(&FormattingProperty::String("on".to_string()))
    );
}

#[test]
fn test_unregistration_params_keep_protocol_spelling() {
    let params = UnregistrationParams {
        unregisterations: vec![Unregistration {
            id: "1".to_string(),
            method: "textDocument/completion".to_string(),
        }],
    };
    let json = serde_json::to_value(&params).unwrap();
    assert!(json.get("unregisterations").is_some());
}

#[test]
fn test_response_error() {
    let error: ResponseError = serde_json::from_value(json!({
        "code": -32801,
        "message": "content modified"
    }))
    .unwrap();
    assert!(error.is_content_modified());
    assert_eq!(error.to_string(), "Error -32801: content modified");
}
