//! Error types for asmlight
//!
//! Classification itself never fails; these cover setup: loading
//! configuration, compiling grammar shapes and resolving palettes.

use thiserror::Error;

/// Result type alias for asmlight operations
pub type Result<T> = std::result::Result<T, Error>;

/// Setup error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid {name} pattern: {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Unknown style category: {0}")]
    UnknownCategory(String),

    #[error("Unknown grammar: {0}")]
    UnknownGrammar(String),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}
