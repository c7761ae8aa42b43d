//! Error types for stencil-output.

use std::path::PathBuf;

use thiserror::Error;

use stencil_core::MarkError;
use stencil_discovery::DiscoveryError;
use stencil_renderer::RenderError;

/// All errors that can arise from writing output or running the pipeline.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Two output files resolve to the same destination.
    #[error("multiple files have the same output destination path: {path}")]
    DuplicatePath { path: PathBuf },

    /// An output file's destination is absolute or climbs out of the root.
    #[error("output destination path escapes the output directory: {path}")]
    OutsideRoot { path: PathBuf },

    /// The output path exists but is not a directory.
    #[error("expected output path '{path}' to be a directory")]
    NotADirectory { path: PathBuf },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file mark error: {0}")]
    Mark(#[from] MarkError),

    #[error("discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

/// Convenience constructor for [`OutputError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> OutputError {
    OutputError::Io {
        path: path.into(),
        source,
    }
}
