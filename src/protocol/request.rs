//! Request markers.

use super::Request;
use crate::types::{
    ApplyWorkspaceEditParams, ApplyWorkspaceEditResponse, CodeActionOrCommand, CodeActionParams,
    CodeLens, CodeLensParams, CompletionItem, CompletionParams, CompletionResponse,
    DocumentFormattingParams, DocumentLink, DocumentLinkParams, DocumentOnTypeFormattingParams,
    DocumentRangeFormattingParams, ExecuteCommandParams, GotoDefinitionResponse, Hover,
    InitializeParams, InitializeResult, Location, ReferenceParams, RegistrationParams,
    RenameParams, SymbolInformation, TextDocumentPositionParams, TextEdit, UnregistrationParams,
    WillSaveTextDocumentParams, WorkspaceEdit, WorkspaceSymbolParams,
};
use serde_json::Value;

macro_rules! requests {
    ( $( $(#[$meta:meta])* $name:ident = $method:literal, $params:ty => $result:ty; )* ) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub enum $name {}

            impl Request for $name {
                type Params = $params;
                type Result = $result;
                const METHOD: &'static str = $method;
            }
        )*
    };
}

requests! {
    /// First request from client to server.
    Initialize = "initialize", InitializeParams => InitializeResult;
    /// Asks the server to shut down without exiting.
    Shutdown = "shutdown", () => ();

    Completion = "textDocument/completion", CompletionParams => Option<CompletionResponse>;
    ResolveCompletionItem = "completionItem/resolve", CompletionItem => CompletionItem;
    HoverRequest = "textDocument/hover", TextDocumentPositionParams => Option<Hover>;
    GotoDefinition = "textDocument/definition",
        TextDocumentPositionParams => Option<GotoDefinitionResponse>;
    References = "textDocument/references", ReferenceParams => Option<Vec<Location>>;
    CodeActionRequest = "textDocument/codeAction",
        CodeActionParams => Option<Vec<CodeActionOrCommand>>;
    CodeLensRequest = "textDocument/codeLens", CodeLensParams => Option<Vec<CodeLens>>;
    CodeLensResolve = "codeLens/resolve", CodeLens => CodeLens;
    DocumentLinkRequest = "textDocument/documentLink",
        DocumentLinkParams => Option<Vec<DocumentLink>>;
    DocumentLinkResolve = "documentLink/resolve", DocumentLink => DocumentLink;
    Formatting = "textDocument/formatting", DocumentFormattingParams => Option<Vec<TextEdit>>;
    RangeFormatting = "textDocument/rangeFormatting",
        DocumentRangeFormattingParams => Option<Vec<TextEdit>>;
    OnTypeFormatting = "textDocument/onTypeFormatting",
        DocumentOnTypeFormattingParams => Option<Vec<TextEdit>>;
    Rename = "textDocument/rename", RenameParams => Option<WorkspaceEdit>;
    /// Edits returned here are applied before the document is saved.
    WillSaveWaitUntil = "textDocument/willSaveWaitUntil",
        WillSaveTextDocumentParams => Option<Vec<TextEdit>>;

    WorkspaceSymbol = "workspace/symbol",
        WorkspaceSymbolParams => Option<Vec<SymbolInformation>>;
    ExecuteCommand = "workspace/executeCommand", ExecuteCommandParams => Option<Value>;
    /// Sent by the server.
    ApplyWorkspaceEdit = "workspace/applyEdit",
        ApplyWorkspaceEditParams => ApplyWorkspaceEditResponse;

    /// Sent by the server.
    RegisterCapability = "client/registerCapability", RegistrationParams => ();
    /// Sent by the server.
    UnregisterCapability = "client/unregisterCapability", UnregistrationParams => ();
}
