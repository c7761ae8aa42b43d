//! # stencil-renderer
//!
//! Tera-based renderer that turns marked [`FileRecord`]s into
//! [`OutputFile`]s.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::collections::BTreeMap;
//! use stencil_core::types::FileRecord;
//! use stencil_renderer::Renderer;
//!
//! fn render_all(records: &[FileRecord]) {
//!     if let Ok(outputs) = Renderer::new().render(records, &BTreeMap::new()) {
//!         for out in outputs {
//!             println!("{}: {} bytes", out.relative_path().display(), out.content().len());
//!         }
//!     }
//! }
//! ```
//!
//! [`FileRecord`]: stencil_core::types::FileRecord
//! [`OutputFile`]: stencil_core::types::OutputFile

pub mod context;
pub mod engine;
pub mod error;

pub use context::TemplateContext;
pub use engine::{Renderer, TemplateEngine};
pub use error::RenderError;
