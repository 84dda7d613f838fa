//! Typed requests over an external JSON-RPC transport.
//!
//! The crate does not own a connection to the language server. The host
//! supplies an [`RpcTransport`] that moves raw JSON values; [`Connection`]
//! puts the protocol catalog on top of it so every call is checked against
//! its method's parameter and result types.

use crate::error::Result;
use crate::protocol::{notification, request, Notification, Request};
use crate::types::{InitializeParams, InitializeResult, InitializedParams};
use serde_json::Value;
use std::future::Future;

/// The host's JSON-RPC channel to a language server.
///
/// Implementations map server error responses to
/// [`Error::Protocol`](crate::Error::Protocol) and channel failures to
/// [`Error::Transport`](crate::Error::Transport).
pub trait RpcTransport: Send + Sync {
    fn send_request(
        &self,
        method: &str,
        params: Value,
    ) -> impl Future<Output = Result<Value>> + Send;

    fn send_notification(
        &self,
        method: &str,
        params: Value,
    ) -> impl Future<Output = Result<()>> + Send;
}

/// Typed front end of an [`RpcTransport`].
#[derive(Debug)]
pub struct Connection<T> {
    transport: T,
}

impl<T: RpcTransport> Connection<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Send a request and decode its result.
    pub async fn request<R: Request>(&self, params: R::Params) -> Result<R::Result> {
        let params = serde_json::to_value(params)?;
        log::debug!("sending request {}", R::METHOD);
        let result = self.transport.send_request(R::METHOD, params).await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Send a notification (no response expected).
    pub async fn notify<N: Notification>(&self, params: N::Params) -> Result<()> {
        let params = serde_json::to_value(params)?;
        log::debug!("sending notification {}", N::METHOD);
        self.transport.send_notification(N::METHOD, params).await
    }

    /// Initialize the LSP server with the given parameters.
    pub async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        let result = self.request::<request::Initialize>(params).await?;
        if let Some(info) = &result.server_info {
            log::info!(
                "initialized {} {}",
                info.name,
                info.version.as_deref().unwrap_or("")
            );
        }
        Ok(result)
    }

    pub async fn initialized(&self) -> Result<()> {
        self.notify::<notification::Initialized>(InitializedParams {})
            .await
    }

    pub async fn shutdown(&self) -> Result<()> {
        self.request::<request::Shutdown>(()).await
    }

    pub async fn exit(&self) -> Result<()> {
        self.notify::<notification::Exit>(()).await
    }
}
