//! Input flags shared by every subcommand.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use stencil_core::RunConfig;

/// Which files to read and how to mark them.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// File or directory to read (can be specified multiple times).
    #[arg(long = "file", short = 'f', value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Interpret directories in --file recursively.
    #[arg(long, short = 'R')]
    pub recursive: bool,

    /// File mark, e.g. change a file's path or mark it non-template
    /// (format: path:key=value; can be specified multiple times).
    #[arg(long = "file-mark", value_name = "MARK")]
    pub file_marks: Vec<String>,

    /// Only template these files; all others pass through
    /// (can be specified multiple times).
    #[arg(long = "filter-template-file", value_name = "PATH")]
    pub filter_template_files: Vec<String>,

    /// YAML config supplying defaults for every flag.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl InputArgs {
    /// Load `--config` (if any) and layer these flags on top.
    pub fn into_config(self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load_at(path)
                .with_context(|| format!("failed to load config '{}'", path.display()))?,
            None => RunConfig::default(),
        };
        config.files.extend(self.files);
        config.recursive |= self.recursive;
        config.file_marks.extend(self.file_marks);
        config
            .filter_template_files
            .extend(self.filter_template_files);
        Ok(config)
    }
}
