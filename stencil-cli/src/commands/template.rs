//! `stencil template`: render inputs to stdout or an output directory.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;

use stencil_core::StdoutUi;
use stencil_output::pipeline::{self, RunOutcome};

use super::input::InputArgs;

/// Arguments for `stencil template`.
#[derive(Args, Debug)]
pub struct TemplateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Directory for output; prints to stdout when omitted.
    #[arg(long, short = 'o', value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Data value exposed to templates as `values.<key>`
    /// (format: key=value; can be specified multiple times).
    #[arg(long = "data-value", short = 'v', value_name = "KEY=VALUE")]
    pub data_values: Vec<String>,
}

impl TemplateArgs {
    pub fn run(self) -> Result<()> {
        let mut config = self.input.into_config()?;
        if self.output.is_some() {
            config.output = self.output;
        }
        for pair in &self.data_values {
            config.set_data_value(pair)?;
        }
        if config.files.is_empty() {
            bail!("provide at least one --file");
        }

        let outcome = pipeline::run(&config, &StdoutUi).context("template failed")?;
        if let RunOutcome::Written(results) = outcome {
            log::info!("{} operation(s) on output directory", results.len());
        }
        Ok(())
    }
}
