//! CLI for the packcheck resource-bundle verifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use packcheck_core::config;
use std::path::PathBuf;

use commands::{run_checksum, run_completions, run_list, run_man, run_strings, run_verify};

/// Top-level CLI for the packcheck resource-bundle verifier.
#[derive(Debug, Parser)]
#[command(name = "packcheck")]
#[command(about = "packcheck: integrity checks for packaged application resources", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Verify a bundle against its expectation manifest.
    Verify {
        /// Bundle root directory.
        bundle: PathBuf,

        /// Manifest path (default: the configured manifest filename inside
        /// the bundle root).
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Stop at the first failing check.
        #[arg(long)]
        fail_fast: bool,

        /// Print the report as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List all asset paths in a bundle.
    List {
        /// Bundle root directory.
        bundle: PathBuf,
    },

    /// Print a bundle's resource table.
    Strings {
        /// Bundle root directory.
        bundle: PathBuf,
    },

    /// Compute SHA-256 of one asset inside a bundle.
    Checksum {
        /// Bundle root directory.
        bundle: PathBuf,

        /// Relative asset path, e.g. www/js/forms/Child_FUP.json.
        path: String,
    },

    /// Generate shell completion scripts on stdout.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },

    /// Render the man page to stdout.
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Verify {
                bundle,
                manifest,
                fail_fast,
                json,
            } => run_verify(&cfg, &bundle, manifest.as_deref(), fail_fast, json),
            CliCommand::List { bundle } => run_list(&bundle),
            CliCommand::Strings { bundle } => run_strings(&bundle),
            CliCommand::Checksum { bundle, path } => run_checksum(&bundle, &path),
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man(),
        }
    }
}

#[cfg(test)]
mod tests;
