//! Stencil: mark, render, and write template files.
//!
//! # Usage
//!
//! ```text
//! stencil template -f <path>... [-R] [--file-mark path:key=value]...
//!                  [--filter-template-file path]... [-v key=value]...
//!                  [-o <dir>] [--config stencil.yaml]
//! stencil files    -f <path>... [-R] [--file-mark ...] [--filter-template-file ...]
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{files::FilesArgs, template::TemplateArgs};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "stencil",
    version,
    about = "Render template files and write them to a directory",
    long_about = None,
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render input files to stdout or an output directory.
    Template(TemplateArgs),

    /// List input files as they look after marks are applied.
    Files(FilesArgs),
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Template(args) => args.run(),
        Commands::Files(args) => args.run(),
    }
}
