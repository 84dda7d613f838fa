//! Completion items and completion request params.

use super::Converter;
use crate::host::{self, InsertText, TextDocument, PLAIN_STRING_FORMAT};
use crate::types::{
    CompletionContext, CompletionItem, CompletionItemKind, CompletionParams,
    CompletionTriggerKind, Documentation, InsertTextFormat, MarkupContent, MarkupKind, TextEdit,
};

impl Converter {
    /// Convert a completion item, honoring its origin record.
    pub fn as_completion_item(&self, item: &host::CompletionItem) -> CompletionItem {
        let origin = item.origin.as_ref();
        let mut result = CompletionItem {
            label: item.label.clone(),
            detail: item.detail.clone(),
            filter_text: item.filter_text.clone(),
            sort_text: item.sort_text.clone(),
            preselect: item.preselect,
            deprecated: item.deprecated,
            data: origin.and_then(|origin| origin.data.clone()),
            ..CompletionItem::default()
        };

        if let Some(documentation) = &item.documentation {
            let format = origin.and_then(|origin| origin.documentation_format.as_deref());
            result.documentation = Some(self.as_documentation(format, documentation));
        }

        self.fill_primary_insert_text(&mut result, item);

        if let Some(kind) = item.kind {
            let original = origin.and_then(|origin| origin.original_kind);
            result.kind = Some(self.as_completion_item_kind(kind, original));
        }
        if !item.additional_text_edits.is_empty() {
            result.additional_text_edits = Some(self.as_text_edits(&item.additional_text_edits));
        }
        if !item.commit_characters.is_empty() {
            result.commit_characters = Some(item.commit_characters.clone());
        }
        result.command = item.command.as_ref().map(|command| self.as_command(command));

        result
    }

    /// Convert completion items in order.
    pub fn as_completion_items(&self, items: &[host::CompletionItem]) -> Vec<CompletionItem> {
        items
            .iter()
            .map(|item| self.as_completion_item(item))
            .collect()
    }

    /// Picks exactly one insertion representation for `target`.
    ///
    /// An explicit edit wins over a snippet, a snippet over plain text, and
    /// the label is the last resort. A separate item range then replaces
    /// whatever range was picked. Only items whose server response used a
    /// `textEdit` get one back; everything else travels as `insertText`.
    fn fill_primary_insert_text(&self, target: &mut CompletionItem, source: &host::CompletionItem) {
        let mut format = InsertTextFormat::PlainText;
        let mut range = None;

        let text = if let Some(edit) = &source.text_edit {
            range = Some(self.as_range(&edit.range));
            edit.new_text.clone()
        } else {
            match &source.insert_text {
                Some(InsertText::Snippet(snippet)) => {
                    format = InsertTextFormat::Snippet;
                    snippet.value.clone()
                }
                Some(InsertText::Plain(text)) => text.clone(),
                None => source.label.clone(),
            }
        };

        if let Some(item_range) = &source.range {
            range = Some(self.as_range(item_range));
        }

        target.insert_text_format = Some(format);

        let from_edit = source.origin.as_ref().is_some_and(|origin| origin.from_edit);
        match range {
            Some(range) if from_edit => target.text_edit = Some(TextEdit::new(range, text)),
            _ => target.insert_text = Some(text),
        }
    }

    /// Keeps the server's own kind when the item came from a response;
    /// otherwise shifts the zero-based host kind.
    pub fn as_completion_item_kind(
        &self,
        kind: host::CompletionItemKind,
        original: Option<CompletionItemKind>,
    ) -> CompletionItemKind {
        original.unwrap_or(CompletionItemKind(kind.0.saturating_add(1)))
    }

    /// Renders documentation according to the format recorded on receipt.
    ///
    /// Host-authored documentation has no recorded format: plain strings stay
    /// bare, markdown becomes markdown markup.
    pub fn as_documentation(
        &self,
        format: Option<&str>,
        documentation: &host::Documentation,
    ) -> Documentation {
        match format {
            None => match documentation {
                host::Documentation::Plain(value) => Documentation::String(value.clone()),
                host::Documentation::Markdown(markdown) => {
                    Documentation::MarkupContent(MarkupContent {
                        kind: MarkupKind::Markdown,
                        value: markdown.value.clone(),
                    })
                }
            },
            Some(PLAIN_STRING_FORMAT) => Documentation::String(documentation.value().to_string()),
            Some(format) => match MarkupKind::from_wire(format) {
                Some(kind) => Documentation::MarkupContent(MarkupContent {
                    kind,
                    value: documentation.value().to_string(),
                }),
                None => {
                    log::warn!("unsupported documentation format {:?}", format);
                    Documentation::String(format!(
                        "Unsupported Markup content received. Kind is: {}",
                        format
                    ))
                }
            },
        }
    }

    /// Shift a zero-based host trigger kind onto the wire scale.
    pub fn as_completion_trigger_kind(
        &self,
        kind: host::CompletionTriggerKind,
    ) -> CompletionTriggerKind {
        match kind {
            host::CompletionTriggerKind::Invoke => CompletionTriggerKind::Invoked,
            host::CompletionTriggerKind::TriggerCharacter => {
                CompletionTriggerKind::TriggerCharacter
            }
            host::CompletionTriggerKind::TriggerForIncompleteCompletions => {
                CompletionTriggerKind::TriggerForIncompleteCompletions
            }
        }
    }

    /// Create a wire completion context.
    pub fn as_completion_context(&self, context: &host::CompletionContext) -> CompletionContext {
        CompletionContext {
            trigger_kind: self.as_completion_trigger_kind(context.trigger_kind),
            trigger_character: context.trigger_character.clone(),
        }
    }

    /// Params for `textDocument/completion`.
    pub fn as_completion_params<D>(
        &self,
        document: &D,
        position: &host::Position,
        context: &host::CompletionContext,
    ) -> CompletionParams
    where
        D: TextDocument + ?Sized,
    {
        CompletionParams {
            text_document_position: self.as_text_document_position_params(document, position),
            context: Some(self.as_completion_context(context)),
        }
    }
}
