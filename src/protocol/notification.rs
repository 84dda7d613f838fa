//! Notification markers.

use super::Notification;
use crate::types::{
    CancelParams, DidChangeConfigurationParams, DidChangeTextDocumentParams,
    DidChangeWatchedFilesParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    DidSaveTextDocumentParams, InitializedParams, LogMessageParams, PublishDiagnosticsParams,
    ShowMessageParams, WillSaveTextDocumentParams,
};

macro_rules! notifications {
    ( $( $(#[$meta:meta])* $name:ident = $method:literal, $params:ty; )* ) => {
        $(
            $(#[$meta])*
            #[derive(Debug)]
            pub enum $name {}

            impl Notification for $name {
                type Params = $params;
                const METHOD: &'static str = $method;
            }
        )*
    };
}

notifications! {
    /// Sent once after the initialize result has been received.
    Initialized = "initialized", InitializedParams;
    /// Asks the server process to exit.
    Exit = "exit", ();
    Cancel = "$/cancelRequest", CancelParams;

    DidOpenTextDocument = "textDocument/didOpen", DidOpenTextDocumentParams;
    DidChangeTextDocument = "textDocument/didChange", DidChangeTextDocumentParams;
    DidCloseTextDocument = "textDocument/didClose", DidCloseTextDocumentParams;
    DidSaveTextDocument = "textDocument/didSave", DidSaveTextDocumentParams;
    WillSaveTextDocument = "textDocument/willSave", WillSaveTextDocumentParams;
    /// Sent by the server.
    PublishDiagnostics = "textDocument/publishDiagnostics", PublishDiagnosticsParams;

    DidChangeConfiguration = "workspace/didChangeConfiguration", DidChangeConfigurationParams;
    DidChangeWatchedFiles = "workspace/didChangeWatchedFiles", DidChangeWatchedFilesParams;

    /// Sent by the server.
    ShowMessage = "window/showMessage", ShowMessageParams;
    /// Sent by the server.
    LogMessage = "window/logMessage", LogMessageParams;
}
