//! Server responses turned into host items.
//!
//! This is the only place that fills in origin records. Whatever is recorded
//! here is what the outbound path honors when the item travels back to the
//! server in a resolve request.

use super::Converter;
use crate::error::Result;
use crate::host::{self, CompletionItemOrigin, InsertText, MarkdownString, SnippetString};
use crate::types::{
    CodeLens, Command, CompletionItem, CompletionItemKind, Documentation, DocumentLink,
    InsertTextFormat, MarkupKind, Position, Range, TextEdit,
};
use url::Url;

impl Converter {
    /// Build a host completion item from a server response, recording its origin.
    pub fn completion_item_from_wire(&self, item: CompletionItem) -> host::CompletionItem {
        let mut origin = CompletionItemOrigin {
            data: item.data,
            ..CompletionItemOrigin::default()
        };

        let documentation = item.documentation.map(|documentation| {
            let (format, documentation) = documentation_from_wire(documentation);
            origin.documentation_format = Some(format);
            documentation
        });

        let kind = item.kind.map(|kind| {
            let (kind, original) = completion_item_kind_from_wire(kind);
            origin.original_kind = original;
            kind
        });

        let is_snippet = item.insert_text_format == Some(InsertTextFormat::Snippet);
        let wrap = |text: String| {
            if is_snippet {
                InsertText::Snippet(SnippetString::new(text))
            } else {
                InsertText::Plain(text)
            }
        };

        let (insert_text, range) = match item.text_edit {
            Some(edit) => {
                origin.from_edit = true;
                (Some(wrap(edit.new_text)), Some(range_from_wire(&edit.range)))
            }
            None => (item.insert_text.map(wrap), None),
        };

        host::CompletionItem {
            label: item.label,
            kind,
            detail: item.detail,
            documentation,
            filter_text: item.filter_text,
            sort_text: item.sort_text,
            insert_text,
            range,
            text_edit: None,
            additional_text_edits: item
                .additional_text_edits
                .unwrap_or_default()
                .iter()
                .map(text_edit_from_wire)
                .collect(),
            commit_characters: item.commit_characters.unwrap_or_default(),
            command: item.command.map(command_from_wire),
            preselect: item.preselect,
            deprecated: item.deprecated,
            origin: Some(origin),
        }
    }

    /// Build a host code lens from a server response, keeping its data.
    pub fn code_lens_from_wire(&self, lens: CodeLens) -> host::CodeLens {
        host::CodeLens {
            range: range_from_wire(&lens.range),
            command: lens.command.map(command_from_wire),
            data: lens.data,
        }
    }

    /// Fails when the link target is not a valid URL.
    pub fn document_link_from_wire(&self, link: DocumentLink) -> Result<host::DocumentLink> {
        let target = match link.target {
            Some(target) => Some(Url::parse(&target)?),
            None => None,
        };
        Ok(host::DocumentLink {
            range: range_from_wire(&link.range),
            target,
            tooltip: link.tooltip,
            data: link.data,
        })
    }
}

fn position_from_wire(position: &Position) -> host::Position {
    host::Position::new(position.line, position.character)
}

fn range_from_wire(range: &Range) -> host::Range {
    host::Range::new(position_from_wire(&range.start), position_from_wire(&range.end))
}

fn text_edit_from_wire(edit: &TextEdit) -> host::TextEdit {
    host::TextEdit::new(range_from_wire(&edit.range), edit.new_text.clone())
}

fn command_from_wire(command: Command) -> host::Command {
    host::Command {
        title: command.title,
        command: command.command,
        arguments: command.arguments,
    }
}

/// Known kinds shift down by one. Anything else maps to `TEXT` and the
/// server's value is kept as the original.
fn completion_item_kind_from_wire(
    kind: CompletionItemKind,
) -> (host::CompletionItemKind, Option<CompletionItemKind>) {
    if (CompletionItemKind::TEXT.0..=CompletionItemKind::TYPE_PARAMETER.0).contains(&kind.0) {
        (host::CompletionItemKind(kind.0 - 1), None)
    } else {
        (host::CompletionItemKind::TEXT, Some(kind))
    }
}

/// Splits wire documentation into the recorded format and the host value.
///
/// Unrecognized markup keeps its raw kind so the outbound path can flag it.
fn documentation_from_wire(documentation: Documentation) -> (String, host::Documentation) {
    match documentation {
        Documentation::String(value) => (
            host::PLAIN_STRING_FORMAT.to_string(),
            host::Documentation::Plain(value),
        ),
        Documentation::MarkupContent(content) => {
            let format = content.kind.as_str().to_string();
            let documentation = match content.kind {
                MarkupKind::Markdown => {
                    host::Documentation::Markdown(MarkdownString::new(content.value))
                }
                MarkupKind::PlainText | MarkupKind::Other(_) => {
                    host::Documentation::Plain(content.value)
                }
            };
            (format, documentation)
        }
    }
}
