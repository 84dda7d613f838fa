//! Supporting utilities for locating language server modules.
//!
//! - `files`: path helpers aware of file system case sensitivity
//! - `module`: Node module resolution through a helper process
//!
//! Nothing here is used by the converters.

mod channel;
pub mod files;
pub mod module;

pub use module::{resolve_global_node_path, HelperCommand, ModuleResolver, ResolveError};
