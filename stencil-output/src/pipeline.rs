//! Shared pipeline entrypoint used by the CLI.
//!
//! discovery → template allow-list → file marks → render → output.

use stencil_core::{apply_marks, filter_template_files, FileRecord, RunConfig, Ui};
use stencil_discovery::discover;
use stencil_renderer::Renderer;

use crate::directory::{OutputDirectory, WriteResult};
use crate::error::OutputError;
use crate::stdout::print_files;

/// What a pipeline run did with its rendered files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Reconciled onto the output directory.
    Written(Vec<WriteResult>),
    /// Printed through the UI; holds the number of files printed.
    Printed(usize),
}

/// Discover inputs and apply the allow-list and file marks.
///
/// The allow-list runs first, so a later `type=...-template` mark re-enables
/// templating for a file the allow-list demoted.
pub fn prepare(config: &RunConfig) -> Result<Vec<FileRecord>, OutputError> {
    let mut records = discover(&config.files, config.recursive)?;
    filter_template_files(&mut records, &config.filter_template_files);
    apply_marks(&mut records, &config.file_marks)?;
    Ok(records)
}

/// Run the full pipeline for `config`.
pub fn run(config: &RunConfig, ui: &dyn Ui) -> Result<RunOutcome, OutputError> {
    let records = prepare(config)?;
    let outputs = Renderer::new().render(&records, &config.values)?;

    match &config.output {
        Some(dir) => {
            let results = OutputDirectory::new(dir, outputs, ui).write()?;
            Ok(RunOutcome::Written(results))
        }
        None => {
            tracing::debug!("printing {} file(s)", outputs.len());
            print_files(&outputs, ui);
            Ok(RunOutcome::Printed(outputs.len()))
        }
    }
}
