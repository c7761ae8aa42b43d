//! `stencil files`: show each input after the allow-list and marks.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use stencil_core::{FileRecord, StdoutUi, Ui};
use stencil_output::pipeline;

use super::input::InputArgs;

/// Arguments for `stencil files`.
#[derive(Args, Debug)]
pub struct FilesArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

impl FilesArgs {
    pub fn run(self) -> Result<()> {
        self.run_with(&StdoutUi)
    }

    fn run_with(self, ui: &dyn Ui) -> Result<()> {
        let config = self.input.into_config()?;
        if config.files.is_empty() {
            bail!("provide at least one --file");
        }

        let records = pipeline::prepare(&config).context("failed to read files")?;
        if records.is_empty() {
            ui.print_line("No files.");
            return Ok(());
        }
        for record in &records {
            ui.print_line(&describe(record));
        }
        Ok(())
    }
}

fn describe(record: &FileRecord) -> String {
    let mode = if record.is_template() {
        "template".green()
    } else {
        "plain".dimmed()
    };
    let dest = if record.relative_path() == record.original_relative_path() {
        record.relative_path().to_string()
    } else {
        format!(
            "{} -> {}",
            record.original_relative_path(),
            record.relative_path()
        )
    };
    format!("{dest}  ({}, {mode})", record.content_type())
}
