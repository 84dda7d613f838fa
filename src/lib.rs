//! # lsp-wire
//!
//! Wire vocabulary of the Language Server Protocol (3.16) and conversion of
//! an editor's object model into it.
//!
//! The crate is the client half of an LSP integration, minus the connection:
//!
//! - [`types`]: every protocol value with its exact JSON shape
//! - [`protocol`]: typed catalog of request and notification methods
//! - [`host`]: the editor-side model (zero-based enums, parsed URLs)
//! - [`convert`]: the [`Converter`] from host values to wire values, plus the
//!   inbound path that remembers what a server originally sent
//! - [`connection`]: typed calls over a host-supplied JSON-RPC transport
//! - [`resolve`]: path helpers and Node module resolution for locating
//!   servers
//!
//! ## Example
//!
//! ```rust
//! use lsp_wire::host::{Document, Position};
//! use lsp_wire::Converter;
//! use url::Url;
//!
//! let converter = Converter::new();
//! let document = Document::new(
//!     Url::parse("file:///src/main.rs").unwrap(),
//!     "rust",
//!     3,
//!     "fn main() {}",
//! );
//!
//! let params = converter.as_open_text_document_params(&document);
//! assert_eq!(params.text_document.version, 3);
//!
//! let position = converter.as_text_document_position_params(&document, &Position::new(0, 3));
//! assert_eq!(position.text_document.uri, "file:///src/main.rs");
//! ```

pub mod connection;
pub mod convert;
pub mod error;
pub mod host;
pub mod protocol;
pub mod resolve;
pub mod types;

pub use connection::{Connection, RpcTransport};
pub use convert::Converter;
pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::connection::{Connection, RpcTransport};
    pub use crate::convert::Converter;
    pub use crate::error::{Error, Result};
    pub use crate::protocol::{notification, request, Notification, Request};
    pub use crate::types::*;
}
