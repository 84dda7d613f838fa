//! Commands, code lenses, code actions, document links, formatting and the
//! remaining request params.

use super::Converter;
use crate::host::{self, TextDocument};
use crate::types::{
    CodeActionContext, CodeActionKind, CodeActionParams, CodeLens, CodeLensParams, Command,
    DocumentFormattingParams, DocumentLink, DocumentLinkParams, DocumentOnTypeFormattingParams,
    DocumentRangeFormattingParams, ExecuteCommandParams, FormattingOptions, ReferenceContext,
    ReferenceParams, RenameParams, WorkspaceSymbolParams,
};
use serde_json::Value;

impl Converter {
    /// Create a wire command; arguments pass through untouched.
    pub fn as_command(&self, command: &host::Command) -> Command {
        Command {
            title: command.title.clone(),
            command: command.command.clone(),
            arguments: command.arguments.clone(),
        }
    }

    /// Convert commands in order.
    pub fn as_commands(&self, commands: &[host::Command]) -> Vec<Command> {
        commands
            .iter()
            .map(|command| self.as_command(command))
            .collect()
    }

    /// `data` is only present when the lens came from a server response.
    pub fn as_code_lens(&self, lens: &host::CodeLens) -> CodeLens {
        CodeLens {
            range: self.as_range(&lens.range),
            command: lens.command.as_ref().map(|command| self.as_command(command)),
            data: lens.data.clone(),
        }
    }

    /// Convert code lenses in order.
    pub fn as_code_lenses(&self, lenses: &[host::CodeLens]) -> Vec<CodeLens> {
        lenses.iter().map(|lens| self.as_code_lens(lens)).collect()
    }

    /// A single host filter kind becomes a one-element `only` list.
    pub fn as_code_action_context(&self, context: &host::CodeActionContext) -> CodeActionContext {
        CodeActionContext {
            diagnostics: self.as_diagnostics(&context.diagnostics),
            only: context
                .only
                .as_ref()
                .map(|kind| vec![CodeActionKind::from(kind.0.clone())]),
        }
    }

    /// Params for `textDocument/codeAction`.
    pub fn as_code_action_params<D>(
        &self,
        document: &D,
        range: &host::Range,
        context: &host::CodeActionContext,
    ) -> CodeActionParams
    where
        D: TextDocument + ?Sized,
    {
        CodeActionParams {
            text_document: self.as_text_document_identifier(document),
            range: self.as_range(range),
            context: self.as_code_action_context(context),
        }
    }

    /// Params for `textDocument/codeLens`.
    pub fn as_code_lens_params<D>(&self, document: &D) -> CodeLensParams
    where
        D: TextDocument + ?Sized,
    {
        CodeLensParams {
            text_document: self.as_text_document_identifier(document),
        }
    }

    /// Create a wire document link, rendering its target.
    pub fn as_document_link(&self, link: &host::DocumentLink) -> DocumentLink {
        DocumentLink {
            range: self.as_range(&link.range),
            target: link.target.as_ref().map(|target| self.as_uri(target)),
            tooltip: link.tooltip.clone(),
            data: link.data.clone(),
        }
    }

    /// Convert document links in order.
    pub fn as_document_links(&self, links: &[host::DocumentLink]) -> Vec<DocumentLink> {
        links.iter().map(|link| self.as_document_link(link)).collect()
    }

    /// Params for `textDocument/documentLink`.
    pub fn as_document_link_params<D>(&self, document: &D) -> DocumentLinkParams
    where
        D: TextDocument + ?Sized,
    {
        DocumentLinkParams {
            text_document: self.as_text_document_identifier(document),
        }
    }

    /// Copy formatting options field by field.
    pub fn as_formatting_options(&self, options: &host::FormattingOptions) -> FormattingOptions {
        FormattingOptions {
            tab_size: options.tab_size,
            insert_spaces: options.insert_spaces,
            ..FormattingOptions::default()
        }
    }

    /// Params for `textDocument/formatting`.
    pub fn as_document_formatting_params<D>(
        &self,
        document: &D,
        options: &host::FormattingOptions,
    ) -> DocumentFormattingParams
    where
        D: TextDocument + ?Sized,
    {
        DocumentFormattingParams {
            text_document: self.as_text_document_identifier(document),
            options: self.as_formatting_options(options),
        }
    }

    /// Params for `textDocument/rangeFormatting`.
    pub fn as_document_range_formatting_params<D>(
        &self,
        document: &D,
        range: &host::Range,
        options: &host::FormattingOptions,
    ) -> DocumentRangeFormattingParams
    where
        D: TextDocument + ?Sized,
    {
        DocumentRangeFormattingParams {
            text_document: self.as_text_document_identifier(document),
            range: self.as_range(range),
            options: self.as_formatting_options(options),
        }
    }

    /// Params for `textDocument/onTypeFormatting`.
    pub fn as_document_on_type_formatting_params<D>(
        &self,
        document: &D,
        position: &host::Position,
        ch: &str,
        options: &host::FormattingOptions,
    ) -> DocumentOnTypeFormattingParams
    where
        D: TextDocument + ?Sized,
    {
        DocumentOnTypeFormattingParams {
            text_document_position: self.as_text_document_position_params(document, position),
            ch: ch.to_string(),
            options: self.as_formatting_options(options),
        }
    }

    /// Params for `textDocument/rename`.
    pub fn as_rename_params<D>(
        &self,
        document: &D,
        position: &host::Position,
        new_name: &str,
    ) -> RenameParams
    where
        D: TextDocument + ?Sized,
    {
        RenameParams {
            text_document_position: self.as_text_document_position_params(document, position),
            new_name: new_name.to_string(),
        }
    }

    /// Params for `textDocument/references`.
    pub fn as_reference_params<D>(
        &self,
        document: &D,
        position: &host::Position,
        include_declaration: bool,
    ) -> ReferenceParams
    where
        D: TextDocument + ?Sized,
    {
        ReferenceParams {
            text_document_position: self.as_text_document_position_params(document, position),
            context: ReferenceContext {
                include_declaration,
            },
        }
    }

    /// Params for `workspace/symbol`.
    pub fn as_workspace_symbol_params(&self, query: &str) -> WorkspaceSymbolParams {
        WorkspaceSymbolParams {
            query: query.to_string(),
        }
    }

    /// Empty argument lists are omitted.
    pub fn as_execute_command_params(
        &self,
        command: &str,
        arguments: Vec<Value>,
    ) -> ExecuteCommandParams {
        ExecuteCommandParams {
            command: command.to_string(),
            arguments: if arguments.is_empty() {
                None
            } else {
                Some(arguments)
            },
        }
    }
}
