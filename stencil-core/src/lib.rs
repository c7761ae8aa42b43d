//! Stencil core library: file records, file marks, run config, errors.
//!
//! - [`types`]: [`FileRecord`], [`ContentType`], [`OutputFile`]
//! - [`marks`]: `path:key=value` file marks and the template allow-list
//! - [`config`]: [`RunConfig`]
//! - [`ui`]: the [`Ui`] progress sink
//! - [`error`]: [`MarkError`], [`ConfigError`]

pub mod config;
pub mod error;
pub mod marks;
pub mod types;
pub mod ui;

pub use config::RunConfig;
pub use error::{ConfigError, MarkError, MarkErrorKind};
pub use marks::{apply_marks, filter_template_files};
pub use types::{ContentType, FileRecord, OutputFile};
pub use ui::{MemoryUi, StdoutUi, Ui};
