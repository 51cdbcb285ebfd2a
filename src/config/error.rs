use std::path::PathBuf;
use thiserror::Error;

use super::value::ValueKind;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("path '{path}' names the document root, not a value")]
    EmptyPath { path: String },

    #[error("no value at path '{path}'")]
    PathNotFound { path: String },

    #[error("invalid list index at path '{path}'")]
    InvalidIndex { path: String },

    #[error("list index out of bounds at path '{path}' (length {len})")]
    IndexOutOfBounds { path: String, len: usize },

    #[error("cannot descend into {kind} value at path '{path}'")]
    NotIndexable { path: String, kind: ValueKind },

    #[error("expected {expected} at path '{path}', found {found}")]
    TypeMismatch {
        path: String,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("required config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to decode config: {0}")]
    DecodeError(#[from] serde_json::Error),
}

impl ConfigError {
    /// Returns the dotted path prefix at which resolution or type checking failed.
    pub fn path(&self) -> Option<&str> {
        match self {
            ConfigError::EmptyPath { path }
            | ConfigError::PathNotFound { path }
            | ConfigError::InvalidIndex { path }
            | ConfigError::IndexOutOfBounds { path, .. }
            | ConfigError::NotIndexable { path, .. }
            | ConfigError::TypeMismatch { path, .. } => Some(path),
            _ => None,
        }
    }
}
