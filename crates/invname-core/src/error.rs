//! Error types for the invname-core library.
//!
//! A filename that does not match the grammar is not an error; the parser
//! reports it as `None`. Only environmental failures end up here.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the invname library.
#[derive(Error, Debug)]
pub enum InvnameError {
    /// I/O error while listing or reading files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The `*.pdf` listing pattern could not be compiled.
    #[error("invalid listing pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Writing the rendered report failed.
    #[error("failed to write report to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the invname library.
pub type Result<T> = std::result::Result<T, InvnameError>;
