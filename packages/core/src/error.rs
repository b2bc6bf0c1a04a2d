//! Typed errors for config operations

use thiserror::Error;

/// Errors that can occur while loading, editing, or saving the SSH config
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Host alias already present in the document
    #[error("Host already exists: {0}")]
    DuplicateHost(String),

    /// Host alias not present in the document
    #[error("Host not found: {0}")]
    HostNotFound(String),

    /// Config file exists but could not be read
    #[error("Failed to read SSH config: {0}")]
    Read(String),

    /// Config file could not be written
    #[error("Failed to write SSH config: {0}")]
    Write(String),
}
