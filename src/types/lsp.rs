//! Basic structures shared by most LSP messages.
//!
//! Positions, ranges, locations, diagnostics, edits and commands.

use crate::types::{DocumentUri, Uri};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Position in a text document expressed as zero-based line and character offset.
///
/// The character unit is whatever the host and server agreed on; nothing in
/// this crate re-encodes it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Position {
    /// Line position in a document (zero-based).
    pub line: u32,
    /// Character offset on a line in a document (zero-based).
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// A range in a text document expressed as (zero-based) start and end positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// The range's start position.
    pub start: Position,
    /// The range's end position (exclusive).
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a range from line/character coordinates.
    pub fn from_coords(start_line: u32, start_char: u32, end_line: u32, end_char: u32) -> Self {
        Self::new(
            Position::new(start_line, start_char),
            Position::new(end_line, end_char),
        )
    }
}

/// Represents a location inside a resource, such as a line inside a text file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub uri: DocumentUri,
    pub range: Range,
}

impl Location {
    pub fn new(uri: impl Into<DocumentUri>, range: Range) -> Self {
        Self {
            uri: uri.into(),
            range,
        }
    }
}

/// Represents a link between a source and a target location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationLink {
    /// Span of the origin of this link. Defaults to the word range at the
    /// mouse position when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_selection_range: Option<Range>,

    /// The target resource identifier of this link.
    pub target_uri: DocumentUri,

    /// The full target range of this link.
    pub target_range: Range,

    /// The range that should be selected and revealed when this link is followed.
    /// Must be contained by `target_range`.
    pub target_selection_range: Range,
}

/// Defines a diagnostic, such as a compiler error or warning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// The range at which the message applies.
    pub range: Range,

    /// The diagnostic's severity. If omitted it is up to the client to
    /// interpret diagnostics as error, warning, info or hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<DiagnosticSeverity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<DiagnosticCode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_description: Option<CodeDescription>,

    /// A human-readable string describing the source of this diagnostic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    pub message: String,

    /// Tags this crate does not know are dropped on receipt.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "known_diagnostic_tags"
    )]
    pub tags: Option<Vec<DiagnosticTag>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_information: Option<Vec<DiagnosticRelatedInformation>>,

    /// Preserved between a `textDocument/publishDiagnostics` notification and
    /// a `textDocument/codeAction` request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Diagnostic {
    /// A diagnostic carrying only a range and a message.
    pub fn new_simple(range: Range, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: None,
            code: None,
            code_description: None,
            source: None,
            message: message.into(),
            tags: None,
            related_information: None,
            data: None,
        }
    }
}

wire_enum! {
    /// The diagnostic's severity.
    pub enum DiagnosticSeverity {
        /// Reports an error.
        Error = 1,
        /// Reports a warning.
        Warning = 2,
        /// Reports an information.
        Information = 3,
        /// Reports a hint.
        Hint = 4,
    }
}

/// The diagnostic's code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiagnosticCode {
    Number(i32),
    String(String),
}

/// Structure to capture a description for an error code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeDescription {
    /// A URI to open with more information about the diagnostic error.
    pub href: Uri,
}

wire_enum! {
    /// The diagnostic tags.
    pub enum DiagnosticTag {
        /// Unused or unnecessary code.
        Unnecessary = 1,
        /// Deprecated or obsolete code.
        Deprecated = 2,
    }
}

/// Keeps the tags this crate knows; the tag set grows between protocol
/// versions and one new tag must not fail the whole diagnostic.
fn known_diagnostic_tags<'de, D>(deserializer: D) -> Result<Option<Vec<DiagnosticTag>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<Vec<i64>> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|raw| {
        let tags: Vec<DiagnosticTag> = raw
            .into_iter()
            .filter_map(|value| {
                let tag = u8::try_from(value)
                    .ok()
                    .and_then(|value| DiagnosticTag::try_from(value).ok());
                if tag.is_none() {
                    log::trace!("dropping unknown diagnostic tag {}", value);
                }
                tag
            })
            .collect();
        if tags.is_empty() {
            None
        } else {
            Some(tags)
        }
    }))
}

/// Represents a related message and source code location for a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagnosticRelatedInformation {
    pub location: Location,
    pub message: String,
}

/// A command is a reference to a command handler on either side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Title of the command, like 'save'.
    pub title: String,
    /// The identifier of the actual command handler.
    pub command: String,
    /// Arguments that the command handler should be invoked with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<serde_json::Value>>,
}

/// A text edit applicable to a text document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextEdit {
    /// The range of the text document to be manipulated.
    pub range: Range,
    /// The string to be inserted. For delete operations use an empty string.
    pub new_text: String,
}

impl TextEdit {
    pub fn new(range: Range, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }
}

/// Describes textual changes on a single text document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentEdit {
    pub text_document: OptionalVersionedTextDocumentIdentifier,
    pub edits: Vec<TextEdit>,
}

/// A workspace edit represents changes to many resources managed in the workspace.
///
/// Either `changes` or `document_changes` is used, depending on the client's
/// `workspace.workspaceEdit.documentChanges` capability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceEdit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changes: Option<HashMap<DocumentUri, Vec<TextEdit>>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_changes: Option<Vec<TextDocumentEdit>>,
}

/// Text documents are identified using a URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextDocumentIdentifier {
    pub uri: DocumentUri,
}

impl TextDocumentIdentifier {
    pub fn new(uri: impl Into<DocumentUri>) -> Self {
        Self { uri: uri.into() }
    }
}

/// A versioned text document identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionedTextDocumentIdentifier {
    pub uri: DocumentUri,
    /// The version number of this document. Increases after each change,
    /// including undo/redo.
    pub version: i32,
}

impl VersionedTextDocumentIdentifier {
    pub fn new(uri: impl Into<DocumentUri>, version: i32) -> Self {
        Self {
            uri: uri.into(),
            version,
        }
    }
}

/// A text document identifier where the version is optional.
///
/// `version: null` means the document is not open in the editor and the
/// content on disk is the truth.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OptionalVersionedTextDocumentIdentifier {
    pub uri: DocumentUri,
    pub version: Option<i32>,
}

/// A parameter literal used in requests to pass a text document and a position inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextDocumentPositionParams {
    pub text_document: TextDocumentIdentifier,
    pub position: Position,
}

/// A helper type to represent either one of two types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOf<A, B> {
    Left(A),
    Right(B),
}

impl<A, B> OneOf<A, B> {
    pub fn left(self) -> Option<A> {
        match self {
            OneOf::Left(a) => Some(a),
            OneOf::Right(_) => None,
        }
    }

    pub fn right(self) -> Option<B> {
        match self {
            OneOf::Right(b) => Some(b),
            OneOf::Left(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_position_ordering() {
        let pos1 = Position::new(1, 5);
        let pos2 = Position::new(1, 10);
        let pos3 = Position::new(2, 0);

        assert!(pos1 < pos2);
        assert!(pos2 < pos3);
    }

    #[test]
    fn test_diagnostic_severity_values() {
        assert_eq!(DiagnosticSeverity::Error.as_u8(), 1);
        assert_eq!(DiagnosticSeverity::Warning.as_u8(), 2);
        assert_eq!(DiagnosticSeverity::Information.as_u8(), 3);
        assert_eq!(DiagnosticSeverity::Hint.as_u8(), 4);
        assert_eq!(DiagnosticSeverity::try_from(5), Err(5));
    }

    #[test]
    fn test_diagnostic_tag_rejects_unknown_wire_value() {
        let result: Result<DiagnosticTag, _> = serde_json::from_value(json!(7));
        assert!(result.is_err());
        let tag: DiagnosticTag = serde_json::from_value(json!(2)).unwrap();
        assert_eq!(tag, DiagnosticTag::Deprecated);
    }

    #[test]
    fn test_diagnostic_drops_unknown_tags() {
        let diagnostic: Diagnostic = serde_json::from_value(json!({
            "range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 1}},
            "message": "unused",
            "tags": [1, 3]
        }))
        .unwrap();
        assert_eq!(diagnostic.tags, Some(vec![DiagnosticTag::Unnecessary]));

        let diagnostic: Diagnostic = serde_json::from_value(json!({
            "range": {"start": {"line": 0, "character": 0}, "end": {"line": 0, "character": 1}},
            "message": "future",
            "tags": [3]
        }))
        .unwrap();
        assert_eq!(diagnostic.tags, None);
    }

    #[test]
    fn test_simple_diagnostic_omits_optionals() {
        let diagnostic = Diagnostic::new_simple(Range::from_coords(0, 0, 0, 1), "oops");
        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(
            json,
            json!({
                "range": {
                    "start": {"line": 0, "character": 0},
                    "end": {"line": 0, "character": 1}
                },
                "message": "oops"
            })
        );
    }

    #[test]
    fn test_text_edit_uses_camel_case() {
        let edit = TextEdit::new(Range::default(), "x");
        let json = serde_json::to_value(&edit).unwrap();
        assert_eq!(json["newText"], "x");
        assert!(json.get("new_text").is_none());
    }

    #[test]
    fn test_optional_version_serializes_null() {
        let id = OptionalVersionedTextDocumentIdentifier {
            uri: "file:///a.rs".to_string(),
            version: None,
        };
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json, json!({"uri": "file:///a.rs", "version": null}));
    }

    #[test]
    fn test_one_of_type() {
        let left: OneOf<bool, String> = serde_json::from_value(json!(true)).unwrap();
        let right: OneOf<bool, String> = serde_json::from_value(json!("x")).unwrap();

        assert_eq!(left.left(), Some(true));
        assert_eq!(right.right(), Some("x".to_string()));
    }
}
