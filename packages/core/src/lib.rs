//! sshmgr-core - Core library for sshmgr
//!
//! SSH client config parsing, in-memory editing, and persistence. The CLI
//! frontend is a thin presentation layer over the types exported here.

pub mod document;
pub mod error;
pub mod paths;
pub mod store;

pub use document::{ConfigDocument, Field, HostEntry, display_keyword, parse, render};
pub use error::ConfigError;
pub use paths::ssh_config_path;
pub use store::{load_document, save_document};
