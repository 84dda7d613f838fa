//! Language feature requests: completion, hover, navigation, code actions,
//! code lenses, document links, formatting and rename.

use crate::types::{
    Command, Diagnostic, DocumentUri, Location, LocationLink, Range,
    TextDocumentIdentifier, TextDocumentPositionParams, TextEdit, WorkspaceEdit,
};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;

/// Describes the content type that a client supports in various result types.
///
/// Servers may send kinds this crate does not render; those are kept as
/// [`MarkupKind::Other`] so the surrounding response still decodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MarkupKind {
    /// Plain text is supported as a content format.
    PlainText,
    /// Markdown is supported as a content format.
    Markdown,
    /// Any other literal, verbatim.
    Other(String),
}

impl MarkupKind {
    /// The literal used on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            MarkupKind::PlainText => "plaintext",
            MarkupKind::Markdown => "markdown",
            MarkupKind::Other(kind) => kind,
        }
    }

    /// Parse one of the two recognized wire literals.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "plaintext" => Some(MarkupKind::PlainText),
            "markdown" => Some(MarkupKind::Markdown),
            _ => None,
        }
    }
}

impl From<String> for MarkupKind {
    fn from(value: String) -> Self {
        MarkupKind::from_wire(&value).unwrap_or(MarkupKind::Other(value))
    }
}

impl Serialize for MarkupKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MarkupKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(MarkupKind::from)
    }
}

/// A string value whose rendering depends on its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkupContent {
    pub kind: MarkupKind,
    pub value: String,
}

/// Documentation of a completion item: a bare string or markup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Documentation {
    String(String),
    MarkupContent(MarkupContent),
}

wire_enum! {
    /// How a completion was triggered.
    pub enum CompletionTriggerKind {
        /// Typing an identifier, manual invocation or via API.
        Invoked = 1,
        /// One of the server's trigger characters.
        TriggerCharacter = 2,
        /// Re-triggered because the current completion list is incomplete.
        TriggerForIncompleteCompletions = 3,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionContext {
    pub trigger_kind: CompletionTriggerKind,

    /// Set if `trigger_kind` is `TriggerCharacter`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_character: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionParams {
    #[serde(flatten)]
    pub text_document_position: TextDocumentPositionParams,

    /// Only available if the client announces `contextSupport`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<CompletionContext>,
}

wire_enum! {
    /// Defines whether the insert text in a completion item should be
    /// interpreted as plain text or a snippet.
    pub enum InsertTextFormat {
        PlainText = 1,
        /// Tab stops and placeholders (`$1`, `${2:foo}`) are interpreted by the client.
        Snippet = 2,
    }
}

/// The kind of a completion entry.
///
/// An open set: servers may send values this crate has no constant for, and
/// those must survive a round trip untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionItemKind(pub u32);

impl CompletionItemKind {
    pub const TEXT: CompletionItemKind = CompletionItemKind(1);
    pub const METHOD: CompletionItemKind = CompletionItemKind(2);
    pub const FUNCTION: CompletionItemKind = CompletionItemKind(3);
    pub const CONSTRUCTOR: CompletionItemKind = CompletionItemKind(4);
    pub const FIELD: CompletionItemKind = CompletionItemKind(5);
    pub const VARIABLE: CompletionItemKind = CompletionItemKind(6);
    pub const CLASS: CompletionItemKind = CompletionItemKind(7);
    pub const INTERFACE: CompletionItemKind = CompletionItemKind(8);
    pub const MODULE: CompletionItemKind = CompletionItemKind(9);
    pub const PROPERTY: CompletionItemKind = CompletionItemKind(10);
    pub const UNIT: CompletionItemKind = CompletionItemKind(11);
    pub const VALUE: CompletionItemKind = CompletionItemKind(12);
    pub const ENUM: CompletionItemKind = CompletionItemKind(13);
    pub const KEYWORD: CompletionItemKind = CompletionItemKind(14);
    pub const SNIPPET: CompletionItemKind = CompletionItemKind(15);
    pub const COLOR: CompletionItemKind = CompletionItemKind(16);
    pub const FILE: CompletionItemKind = CompletionItemKind(17);
    pub const REFERENCE: CompletionItemKind = CompletionItemKind(18);
    pub const FOLDER: CompletionItemKind = CompletionItemKind(19);
    pub const ENUM_MEMBER: CompletionItemKind = CompletionItemKind(20);
    pub const CONSTANT: CompletionItemKind = CompletionItemKind(21);
    pub const STRUCT: CompletionItemKind = CompletionItemKind(22);
    pub const EVENT: CompletionItemKind = CompletionItemKind(23);
    pub const OPERATOR: CompletionItemKind = CompletionItemKind(24);
    pub const TYPE_PARAMETER: CompletionItemKind = CompletionItemKind(25);
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionItem {
    /// The label of this completion item. Also the text inserted when
    /// neither `insert_text` nor `text_edit` is given.
    pub label: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<CompletionItemKind>,

    /// Additional information, like type or symbol information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<Documentation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    /// Select this item when showing. Only one item may be preselected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preselect: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_text_format: Option<InsertTextFormat>,

    /// Takes precedence over `insert_text`. The range must be single line and
    /// contain the position at which completion was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_edit: Option<TextEdit>,

    /// Edits applied on selection that do not overlap the main edit, e.g.
    /// adding an import at the top of the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_text_edits: Option<Vec<TextEdit>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_characters: Option<Vec<String>>,

    /// Executed *after* inserting this completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,

    /// Preserved between a completion and a completion resolve request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl CompletionItem {
    pub fn new_simple(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: Some(detail.into()),
            ..Self::default()
        }
    }
}

/// A collection of completion items to be presented in the editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionList {
    /// Further typing should result in recomputing this list.
    pub is_incomplete: bool,
    pub items: Vec<CompletionItem>,
}

/// Result of `textDocument/completion`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompletionResponse {
    Array(Vec<CompletionItem>),
    List(CompletionList),
}

impl CompletionResponse {
    /// The items regardless of which shape the server chose.
    pub fn into_items(self) -> Vec<CompletionItem> {
        match self {
            CompletionResponse::Array(items) => items,
            CompletionResponse::List(list) => list.items,
        }
    }
}

/// A string in a given language, or a bare markdown string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkedString {
    String(String),
    LanguageString(LanguageString),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageString {
    pub language: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HoverContents {
    Markup(MarkupContent),
    Scalar(MarkedString),
    Array(Vec<MarkedString>),
}

/// The result of a hover request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hover {
    pub contents: HoverContents,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

/// Result of `textDocument/definition`: `Location | Location[] | LocationLink[]`.
///
/// Servers only send links when the client announced `linkSupport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GotoDefinitionResponse {
    Scalar(Location),
    Array(Vec<Location>),
    Link(Vec<LocationLink>),
}

impl GotoDefinitionResponse {
    /// Flatten to plain locations, using each link's selection range.
    pub fn into_locations(self) -> Vec<Location> {
        match self {
            GotoDefinitionResponse::Scalar(location) => vec![location],
            GotoDefinitionResponse::Array(locations) => locations,
            GotoDefinitionResponse::Link(links) => links
                .into_iter()
                .map(|link| Location::new(link.target_uri, link.target_selection_range))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceContext {
    /// Include the declaration of the current symbol.
    pub include_declaration: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceParams {
    #[serde(flatten)]
    pub text_document_position: TextDocumentPositionParams,
    pub context: ReferenceContext,
}

/// The kind of a code action.
///
/// Kinds are a hierarchical list of identifiers separated by `.`,
/// e.g. `"refactor.extract.function"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeActionKind(Cow<'static, str>);

impl CodeActionKind {
    pub const EMPTY: CodeActionKind = CodeActionKind::new("");
    pub const QUICKFIX: CodeActionKind = CodeActionKind::new("quickfix");
    pub const REFACTOR: CodeActionKind = CodeActionKind::new("refactor");
    pub const REFACTOR_EXTRACT: CodeActionKind = CodeActionKind::new("refactor.extract");
    pub const REFACTOR_INLINE: CodeActionKind = CodeActionKind::new("refactor.inline");
    pub const REFACTOR_REWRITE: CodeActionKind = CodeActionKind::new("refactor.rewrite");
    pub const SOURCE: CodeActionKind = CodeActionKind::new("source");
    pub const SOURCE_ORGANIZE_IMPORTS: CodeActionKind =
        CodeActionKind::new("source.organizeImports");

    pub const fn new(tag: &'static str) -> Self {
        CodeActionKind(Cow::Borrowed(tag))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CodeActionKind {
    fn from(from: String) -> Self {
        CodeActionKind(Cow::Owned(from))
    }
}

impl From<&'static str> for CodeActionKind {
    fn from(from: &'static str) -> Self {
        CodeActionKind::new(from)
    }
}

/// Additional diagnostic information about the context in which a code
/// action is run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeActionContext {
    /// The diagnostics overlapping the requested range.
    pub diagnostics: Vec<Diagnostic>,

    /// Requested kinds of actions. Omitted means "all kinds".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only: Option<Vec<CodeActionKind>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeActionParams {
    pub text_document: TextDocumentIdentifier,
    pub range: Range,
    pub context: CodeActionContext,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeAction {
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<CodeActionKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<Vec<Diagnostic>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_preferred: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit: Option<WorkspaceEdit>,

    /// Executed after `edit` is applied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// One entry of a `textDocument/codeAction` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CodeActionOrCommand {
    Command(Command),
    CodeAction(CodeAction),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeLensParams {
    pub text_document: TextDocumentIdentifier,
}

/// A command shown inline with source text, e.g. a reference count.
///
/// A code lens without a command is unresolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeLens {
    pub range: Range,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,

    /// Preserved between a code lens and a code lens resolve request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentLinkParams {
    pub text_document: TextDocumentIdentifier,
}

/// A range in a text document that links to an internal or external resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentLink {
    pub range: Range,

    /// The uri this link points to. If missing a resolve request is sent later.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<DocumentUri>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,

    /// Preserved between a document link and a document link resolve request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// Extra formatting properties sent alongside the two required options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormattingProperty {
    Bool(bool),
    Number(i32),
    String(String),
}

/// Value-object describing what options formatting should use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattingOptions {
    /// Size of a tab in spaces.
    pub tab_size: u32,

    /// Prefer spaces over tabs.
    pub insert_spaces: bool,

    #[serde(flatten)]
    pub properties: HashMap<String, FormattingProperty>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_trailing_whitespace: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_final_newline: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_final_newlines: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFormattingParams {
    pub text_document: TextDocumentIdentifier,
    pub options: FormattingOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRangeFormattingParams {
    pub text_document: TextDocumentIdentifier,
    pub range: Range,
    pub options: FormattingOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentOnTypeFormattingParams {
    #[serde(flatten)]
    pub text_document_position: TextDocumentPositionParams,

    /// The character that has been typed.
    pub ch: String,

    pub options: FormattingOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameParams {
    #[serde(flatten)]
    pub text_document_position: TextDocumentPositionParams,

    /// The new name of the symbol. An empty or invalid name makes the server
    /// reply with an error.
    pub new_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceSymbolParams {
    /// A non-empty query string.
    pub query: String,
}

/// A symbol kind. Open set, like [`CompletionItemKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolKind(pub u32);

impl SymbolKind {
    pub const FILE: SymbolKind = SymbolKind(1);
    pub const MODULE: SymbolKind = SymbolKind(2);
    pub const NAMESPACE: SymbolKind = SymbolKind(3);
    pub const PACKAGE: SymbolKind = SymbolKind(4);
    pub const CLASS: SymbolKind = SymbolKind(5);
    pub const METHOD: SymbolKind = SymbolKind(6);
    pub const PROPERTY: SymbolKind = SymbolKind(7);
    pub const FIELD: SymbolKind = SymbolKind(8);
    pub const CONSTRUCTOR: SymbolKind = SymbolKind(9);
    pub const ENUM: SymbolKind = SymbolKind(10);
    pub const INTERFACE: SymbolKind = SymbolKind(11);
    pub const FUNCTION: SymbolKind = SymbolKind(12);
    pub const VARIABLE: SymbolKind = SymbolKind(13);
    pub const CONSTANT: SymbolKind = SymbolKind(14);
    pub const STRING: SymbolKind = SymbolKind(15);
    pub const NUMBER: SymbolKind = SymbolKind(16);
    pub const BOOLEAN: SymbolKind = SymbolKind(17);
    pub const ARRAY: SymbolKind = SymbolKind(18);
    pub const OBJECT: SymbolKind = SymbolKind(19);
    pub const KEY: SymbolKind = SymbolKind(20);
    pub const NULL: SymbolKind = SymbolKind(21);
    pub const ENUM_MEMBER: SymbolKind = SymbolKind(22);
    pub const STRUCT: SymbolKind = SymbolKind(23);
    pub const EVENT: SymbolKind = SymbolKind(24);
    pub const OPERATOR: SymbolKind = SymbolKind(25);
    pub const TYPE_PARAMETER: SymbolKind = SymbolKind(26);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInformation {
    pub name: String,
    pub kind: SymbolKind,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    pub location: Location,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteCommandParams {
    pub command: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<serde_json::Value>>,
}

/// Parameters of the `workspace/applyEdit` request sent by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplyWorkspaceEditParams {
    /// Shown in the undo stack, for example.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub edit: WorkspaceEdit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyWorkspaceEditResponse {
    pub applied: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

wire_enum! {
    pub enum MessageType {
        Error = 1,
        Warning = 2,
        Info = 3,
        Log = 4,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowMessageParams {
    #[serde(rename = "type")]
    pub typ: MessageType,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessageParams {
    #[serde(rename = "type")]
    pub typ: MessageType,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_markup_kind_literals() {
        assert_eq!(serde_json::to_value(MarkupKind::PlainText).unwrap(), json!("plaintext"));
        assert_eq!(serde_json::to_value(MarkupKind::Markdown).unwrap(), json!("markdown"));
        assert_eq!(MarkupKind::from_wire("markdown"), Some(MarkupKind::Markdown));
        assert_eq!(MarkupKind::from_wire("html"), None);
    }

    #[test]
    fn test_unknown_markup_kind_still_decodes() {
        let content: MarkupContent =
            serde_json::from_value(json!({"kind": "html", "value": "<b>x</b>"})).unwrap();
        assert_eq!(content.kind, MarkupKind::Other("html".to_string()));
        assert_eq!(
            serde_json::to_value(&content).unwrap(),
            json!({"kind": "html", "value": "<b>x</b>"})
        );

        let known: MarkupKind = serde_json::from_value(json!("markdown")).unwrap();
        assert_eq!(known, MarkupKind::Markdown);
    }

    #[test]
    fn test_completion_item_kind_is_transparent() {
        let item = CompletionItem {
            label: "x".to_string(),
            kind: Some(CompletionItemKind::FUNCTION),
            ..CompletionItem::default()
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json, json!({"label": "x", "kind": 3}));

        let unknown: CompletionItem =
            serde_json::from_value(json!({"label": "y", "kind": 99})).unwrap();
        assert_eq!(unknown.kind, Some(CompletionItemKind(99)));
    }

    #[test]
    fn test_completion_response_shapes() {
        let array: CompletionResponse =
            serde_json::from_value(json!([{"label": "a"}, {"label": "b"}])).unwrap();
        assert_eq!(array.into_items().len(), 2);

        let list: CompletionResponse =
            serde_json::from_value(json!({"isIncomplete": true, "items": [{"label": "a"}]}))
                .unwrap();
        assert!(matches!(list, CompletionResponse::List(ref l) if l.is_incomplete));
    }

    #[test]
    fn test_definition_response_discriminates_links() {
        let scalar: GotoDefinitionResponse = serde_json::from_value(json!({
            "uri": "file:///a.rs",
            "range": {"start": {"line": 1, "character": 0}, "end": {"line": 1, "character": 3}}
        }))
        .unwrap();
        assert!(matches!(scalar, GotoDefinitionResponse::Scalar(_)));

        let links: GotoDefinitionResponse = serde_json::from_value(json!([{
            "targetUri": "file:///b.rs",
            "targetRange": {"start": {"line": 0, "character": 0}, "end": {"line": 9, "character": 0}},
            "targetSelectionRange": {"start": {"line": 2, "character": 4}, "end": {"line": 2, "character": 8}}
        }]))
        .unwrap();
        let locations = links.into_locations();
        assert_eq!(locations[0].uri, "file:///b.rs");
        assert_eq!(locations[0].range, Range::from_coords(2, 4, 2, 8));
    }

    #[test]
    fn test_code_action_or_command() {
        let command: CodeActionOrCommand =
            serde_json::from_value(json!({"title": "Run", "command": "run"})).unwrap();
        assert!(matches!(command, CodeActionOrCommand::Command(_)));

        let action: CodeActionOrCommand = serde_json::from_value(json!({
            "title": "Fix",
            "kind": "quickfix",
            "command": {"title": "Run", "command": "run"}
        }))
        .unwrap();
        match action {
            CodeActionOrCommand::CodeAction(action) => {
                assert_eq!(action.kind, Some(CodeActionKind::QUICKFIX));
            }
            other => panic!("expected code action, got {:?}", other),
        }
    }

    #[test]
    fn test_formatting_options_flatten_properties() {
        let mut options = FormattingOptions {
            tab_size: 4,
            insert_spaces: true,
            ..FormattingOptions::default()
        };
        options
            .properties
            .insert("semicolons".to_string(), FormattingProperty::Bool(false));
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(
            json,
            json!({"tabSize": 4, "insertSpaces": true, "semicolons": false})
        );
    }

    #[test]
    fn test_show_message_type_key() {
        let params = ShowMessageParams {
            typ: MessageType::Warning,
            message: "careful".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"type": 2, "message": "careful"})
        );
    }
}
