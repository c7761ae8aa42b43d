//! # stencil-output
//!
//! Output reconciliation and pipeline orchestration.
//!
//! Call [`pipeline::run`] to discover, mark, render and write a run, or use
//! [`OutputDirectory`] directly to reconcile already-rendered files onto a
//! directory.

pub mod classify;
pub mod directory;
pub mod error;
pub mod pipeline;
pub mod stdout;

pub use classify::is_likely_template_output;
pub use directory::{check_conflicts, OutputDirectory, WriteResult};
pub use error::OutputError;
pub use pipeline::RunOutcome;
