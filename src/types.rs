//! Wire schema of the Language Server Protocol.
//!
//! Every type in this module serializes to the exact JSON shape exchanged
//! with a language server: camelCase field names, optional fields skipped
//! when absent, and enumerations encoded as their fixed protocol integers.

use serde::{Deserialize, Serialize};

/// Declares a closed protocol enumeration that travels as a small integer.
///
/// The numeric values are part of the interoperability contract, so they are
/// spelled out at the declaration site and serialized verbatim.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )*
        }

        impl $name {
            /// The integer carried on the wire.
            pub fn as_u8(self) -> u8 {
                self as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = u8;

            fn try_from(value: u8) -> ::std::result::Result<Self, u8> {
                match value {
                    $( $value => Ok($name::$variant), )*
                    other => Err(other),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_u8(*self as u8)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <u8 as serde::Deserialize>::deserialize(deserializer)?;
                $name::try_from(value).map_err(|value| {
                    serde::de::Error::custom(format!(
                        concat!("Invalid ", stringify!($name), ": {}"),
                        value
                    ))
                })
            }
        }
    };
}

pub mod document;
pub mod initialization;
pub mod language;
pub mod lsp;
pub mod registration;

pub use document::*;
pub use initialization::*;
pub use language::*;
pub use lsp::*;
pub use registration::*;

/// Type alias for request/notification IDs.
/// Can be either a number or a string as per JSON-RPC spec.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(i64),
    String(String),
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Id::Number(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::String(value.to_string())
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{}", n),
            Id::String(s) => write!(f, "{}", s),
        }
    }
}

/// URI type as defined by LSP.
/// Over the wire it is a plain string; the host decides how it is rendered.
pub type Uri = String;

/// Document URI type as defined by LSP.
pub type DocumentUri = Uri;

/// Parameters for the `$/cancelRequest` notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelParams {
    /// The request ID to cancel.
    pub id: Id,
}
