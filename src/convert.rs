//! Conversion from the host editor model to wire values.
//!
//! A [`Converter`] is a small value holding the URI rendering strategy; all
//! of its methods are synchronous, side-effect free and return freshly owned
//! wire values. Each concern lives in its own submodule:
//!
//! - `basic`: positions, ranges, locations, identifiers and diagnostics
//! - `completion`: completion items and completion request params
//! - `document`: open/change/close/save lifecycle params
//! - `items`: commands, code lenses, code actions, links, formatting
//! - `inbound`: the wire-to-host path that records item origins

use std::fmt;
use std::sync::Arc;
use url::Url;

mod basic;
mod completion;
mod document;
mod inbound;
mod items;

/// Renders a host resource identifier as the string sent on the wire.
pub type UriRenderer = Arc<dyn Fn(&Url) -> String + Send + Sync>;

/// Converts host model values into wire schema values.
#[derive(Clone)]
pub struct Converter {
    render_uri: UriRenderer,
}

impl Converter {
    /// A converter rendering URIs in their native string form.
    pub fn new() -> Self {
        Self {
            render_uri: Arc::new(|uri: &Url| uri.to_string()),
        }
    }

    /// A converter routing every emitted resource identifier through `render`.
    ///
    /// ```
    /// use lsp_wire::convert::Converter;
    /// use url::Url;
    ///
    /// let converter = Converter::with_uri_renderer(|uri| uri.as_str().to_lowercase());
    /// let uri = Url::parse("file:///Work/Main.rs").unwrap();
    /// assert_eq!(converter.as_uri(&uri), "file:///work/main.rs");
    /// ```
    pub fn with_uri_renderer<F>(render: F) -> Self
    where
        F: Fn(&Url) -> String + Send + Sync + 'static,
    {
        Self {
            render_uri: Arc::new(render),
        }
    }

    /// The single place where host URIs become wire strings.
    pub fn as_uri(&self, uri: &Url) -> String {
        (self.render_uri)(uri)
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter").finish_non_exhaustive()
    }
}
