//! Error types for stencil-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while applying file marks.
///
/// Every variant carries the offending mark string verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkError {
    /// No `:` separating path from `key=value`.
    #[error("expected file mark '{mark}' to be in format path:key=value")]
    MalformedMark { mark: String },

    /// No `=` in the portion after the path.
    #[error("expected file mark '{mark}' key-value portion to be in format key=value")]
    MalformedValue { mark: String },

    /// The path matched no file in the current collection.
    #[error("expected file mark '{mark}' to match one file by path, but did not")]
    UnknownFile { mark: String },

    /// The path matched more than one file.
    #[error("expected file mark '{mark}' to match one file by path, but matched {count}")]
    AmbiguousFile { mark: String, count: usize },

    #[error("unknown key in file mark '{mark}'")]
    UnknownKey { mark: String },

    #[error("unknown value in file mark '{mark}'")]
    UnknownValue { mark: String },
}

/// Coarse classification of a [`MarkError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkErrorKind {
    Parse,
    Lookup,
    Validation,
}

impl MarkError {
    pub fn kind(&self) -> MarkErrorKind {
        match self {
            MarkError::MalformedMark { .. } | MarkError::MalformedValue { .. } => {
                MarkErrorKind::Parse
            }
            MarkError::UnknownFile { .. } | MarkError::AmbiguousFile { .. } => {
                MarkErrorKind::Lookup
            }
            MarkError::UnknownKey { .. } | MarkError::UnknownValue { .. } => {
                MarkErrorKind::Validation
            }
        }
    }

    /// The mark string that caused the error.
    pub fn mark(&self) -> &str {
        match self {
            MarkError::MalformedMark { mark }
            | MarkError::MalformedValue { mark }
            | MarkError::UnknownFile { mark }
            | MarkError::AmbiguousFile { mark, .. }
            | MarkError::UnknownKey { mark }
            | MarkError::UnknownValue { mark } => mark,
        }
    }
}

/// Errors from loading or assembling a [`crate::config::RunConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error, with the config path for context.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("expected data value '{pair}' to be in format key=value")]
    MalformedDataValue { pair: String },
}
