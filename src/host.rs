//! The editor-side object model.
//!
//! These are the values a host editor hands to the [`Converter`]. They
//! follow editor conventions rather than protocol ones: enumerations are
//! zero-based, resources are parsed [`Url`]s, and rich text is carried as
//! typed wrappers (`MarkdownString`, `SnippetString`) instead of tagged
//! JSON objects.
//!
//! Items that were themselves built from a server response carry an
//! explicit origin record (`CompletionItemOrigin`, the `data` field of
//! [`CodeLens`] and [`DocumentLink`]). Only the inbound conversion path
//! fills those in.
//!
//! [`Converter`]: crate::convert::Converter

use crate::types;
use serde_json::Value;
use url::Url;

/// Zero-based line and character offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn from_coords(start_line: u32, start_char: u32, end_line: u32, end_char: u32) -> Self {
        Self::new(
            Position::new(start_line, start_char),
            Position::new(end_line, end_char),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub uri: Url,
    pub range: Range,
}

impl Location {
    pub fn new(uri: Url, range: Range) -> Self {
        Self { uri, range }
    }
}

/// Read-only view of an open document owned by the editor.
pub trait TextDocument {
    fn uri(&self) -> &Url;

    fn language_id(&self) -> &str;

    /// Increases after every change, undo and redo included.
    fn version(&self) -> i32;

    /// Snapshot of the complete current content.
    fn text(&self) -> String;
}

/// A plain in-memory document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub uri: Url,
    pub language_id: String,
    pub version: i32,
    pub text: String,
}

impl Document {
    pub fn new(uri: Url, language_id: impl Into<String>, version: i32, text: impl Into<String>) -> Self {
        Self {
            uri,
            language_id: language_id.into(),
            version,
            text: text.into(),
        }
    }
}

impl TextDocument for Document {
    fn uri(&self) -> &Url {
        &self.uri
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn version(&self) -> i32 {
        self.version
    }

    fn text(&self) -> String {
        self.text.clone()
    }
}

/// One discrete edit of an incremental change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocumentContentChange {
    /// Range in the document *before* the edit.
    pub range: Range,
    /// Length of the replaced text.
    pub range_length: u32,
    pub text: String,
}

/// The editor reported a batch of edits to an open document.
pub struct TextDocumentChangeEvent<'a> {
    pub document: &'a dyn TextDocument,
    pub content_changes: Vec<TextDocumentContentChange>,
}

/// Input of `textDocument/didChange` construction.
///
/// Full sync sends a whole-document snapshot, incremental sync sends the
/// edits of a change event.
pub enum DocumentChange<'a> {
    Full(&'a dyn TextDocument),
    Incremental(&'a TextDocumentChangeEvent<'a>),
}

/// Why a document is about to be saved.
///
/// Editors may grow new reasons, so this is an open set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextDocumentSaveReason(pub u8);

impl TextDocumentSaveReason {
    pub const MANUAL: TextDocumentSaveReason = TextDocumentSaveReason(1);
    pub const AFTER_DELAY: TextDocumentSaveReason = TextDocumentSaveReason(2);
    pub const FOCUS_OUT: TextDocumentSaveReason = TextDocumentSaveReason(3);
}

pub struct TextDocumentWillSaveEvent<'a> {
    pub document: &'a dyn TextDocument,
    pub reason: TextDocumentSaveReason,
}

/// File system change observed by the editor's watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileChangeType {
    Created,
    Changed,
    Deleted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticSeverity {
    Error = 0,
    Warning = 1,
    Information = 2,
    Hint = 3,
}

/// Open set of diagnostic tags; unknown values are dropped on conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticTag(pub u8);

impl DiagnosticTag {
    pub const UNNECESSARY: DiagnosticTag = DiagnosticTag(1);
    pub const DEPRECATED: DiagnosticTag = DiagnosticTag(2);
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DiagnosticCode {
    Number(i32),
    String(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagnosticRelatedInformation {
    pub location: Location,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub range: Range,
    pub message: String,
    pub severity: Option<DiagnosticSeverity>,
    pub code: Option<DiagnosticCode>,
    pub source: Option<String>,
    pub tags: Vec<DiagnosticTag>,
    pub related_information: Vec<DiagnosticRelatedInformation>,
}

impl Diagnostic {
    pub fn new(range: Range, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
            severity: None,
            code: None,
            source: None,
            tags: Vec::new(),
            related_information: Vec::new(),
        }
    }

    pub fn with_severity(mut self, severity: DiagnosticSeverity) -> Self {
        self.severity = Some(severity);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub title: String,
    pub command: String,
    pub arguments: Option<Vec<Value>>,
}

impl Command {
    pub fn new(title: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            command: command.into(),
            arguments: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextEdit {
    pub range: Range,
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

/// Markdown formatted text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MarkdownString {
    pub value: String,
}

impl MarkdownString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// Text with tab stops and placeholders, interpreted by the editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SnippetString {
    pub value: String,
}

impl SnippetString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Documentation {
    Plain(String),
    Markdown(MarkdownString),
}

impl Documentation {
    pub fn value(&self) -> &str {
        match self {
            Documentation::Plain(value) => value,
            Documentation::Markdown(markdown) => &markdown.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InsertText {
    Plain(String),
    Snippet(SnippetString),
}

/// Zero-based completion kind as the editor numbers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompletionItemKind(pub u32);

impl CompletionItemKind {
    pub const TEXT: CompletionItemKind = CompletionItemKind(0);
    pub const METHOD: CompletionItemKind = CompletionItemKind(1);
    pub const FUNCTION: CompletionItemKind = CompletionItemKind(2);
    pub const CONSTRUCTOR: CompletionItemKind = CompletionItemKind(3);
    pub const FIELD: CompletionItemKind = CompletionItemKind(4);
    pub const VARIABLE: CompletionItemKind = CompletionItemKind(5);
    pub const CLASS: CompletionItemKind = CompletionItemKind(6);
    pub const INTERFACE: CompletionItemKind = CompletionItemKind(7);
    pub const MODULE: CompletionItemKind = CompletionItemKind(8);
    pub const PROPERTY: CompletionItemKind = CompletionItemKind(9);
    pub const UNIT: CompletionItemKind = CompletionItemKind(10);
    pub const VALUE: CompletionItemKind = CompletionItemKind(11);
    pub const ENUM: CompletionItemKind = CompletionItemKind(12);
    pub const KEYWORD: CompletionItemKind = CompletionItemKind(13);
    pub const SNIPPET: CompletionItemKind = CompletionItemKind(14);
    pub const COLOR: CompletionItemKind = CompletionItemKind(15);
    pub const FILE: CompletionItemKind = CompletionItemKind(16);
    pub const REFERENCE: CompletionItemKind = CompletionItemKind(17);
    pub const FOLDER: CompletionItemKind = CompletionItemKind(18);
    pub const ENUM_MEMBER: CompletionItemKind = CompletionItemKind(19);
    pub const CONSTANT: CompletionItemKind = CompletionItemKind(20);
    pub const STRUCT: CompletionItemKind = CompletionItemKind(21);
    pub const EVENT: CompletionItemKind = CompletionItemKind(22);
    pub const OPERATOR: CompletionItemKind = CompletionItemKind(23);
    pub const TYPE_PARAMETER: CompletionItemKind = CompletionItemKind(24);
}

/// Marker recorded for documentation that arrived as a bare string.
pub const PLAIN_STRING_FORMAT: &str = "$string";

/// What a completion item remembers about the server response it came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionItemOrigin {
    /// Opaque data echoed back in `completionItem/resolve`.
    pub data: Option<Value>,
    /// The kind exactly as the server sent it.
    pub original_kind: Option<types::CompletionItemKind>,
    /// `"$string"`, `"plaintext"` or `"markdown"` as received. Anything else
    /// means the server and client disagree on markup support.
    pub documentation_format: Option<String>,
    /// The server expressed insertion as a `textEdit`.
    pub from_edit: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionItem {
    pub label: String,
    pub kind: Option<CompletionItemKind>,
    pub detail: Option<String>,
    pub documentation: Option<Documentation>,
    pub filter_text: Option<String>,
    pub sort_text: Option<String>,
    pub insert_text: Option<InsertText>,
    /// Range replaced on insertion. Overrides the range of `text_edit`.
    pub range: Option<Range>,
    /// Explicit edit override; wins over `insert_text`.
    pub text_edit: Option<TextEdit>,
    pub additional_text_edits: Vec<TextEdit>,
    pub commit_characters: Vec<String>,
    pub command: Option<Command>,
    pub preselect: Option<bool>,
    pub deprecated: Option<bool>,
    pub origin: Option<CompletionItemOrigin>,
}

impl CompletionItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }
}

/// Trigger kinds as the editor numbers them (zero-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompletionTriggerKind {
    Invoke = 0,
    TriggerCharacter = 1,
    TriggerForIncompleteCompletions = 2,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionContext {
    pub trigger_kind: CompletionTriggerKind,
    pub trigger_character: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeLens {
    pub range: Range,
    pub command: Option<Command>,
    /// Resolve data from the server; never synthesized by the editor.
    pub data: Option<Value>,
}

impl CodeLens {
    pub fn new(range: Range, command: Option<Command>) -> Self {
        Self {
            range,
            command,
            data: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLink {
    pub range: Range,
    pub target: Option<Url>,
    pub tooltip: Option<String>,
    /// Resolve data from the server; never synthesized by the editor.
    pub data: Option<Value>,
}

impl DocumentLink {
    pub fn new(range: Range, target: Option<Url>) -> Self {
        Self {
            range,
            target,
            tooltip: None,
            data: None,
        }
    }
}

/// A single code action kind, e.g. `"quickfix"` or `"refactor.extract"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CodeActionKind(pub String);

impl CodeActionKind {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeActionContext {
    pub diagnostics: Vec<Diagnostic>,
    /// The editor filters by at most one kind.
    pub only: Option<CodeActionKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingOptions {
    pub tab_size: u32,
    pub insert_spaces: bool,
}
