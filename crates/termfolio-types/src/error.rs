//! Error types for TERMFOLIO.
//!
//! Command handlers never produce these: a user mistake at the prompt is a
//! normal error-flagged transcript entry. `TermfolioError` covers the ambient
//! failures around the interpreter (loading configuration and content tables,
//! front-end I/O).

use std::io;

/// Errors produced outside the command interpreter.
#[derive(Debug, thiserror::Error)]
pub enum TermfolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("content error: {0}")]
    Content(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, TermfolioError>;
