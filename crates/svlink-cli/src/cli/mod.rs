//! CLI for the svlink Street View link decoder.

mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::process::ExitCode;
use svlink_core::config;

use commands::{run_analyze, run_completions, run_parse};

/// Top-level CLI for svlink.
#[derive(Debug, Parser)]
#[command(name = "svlink")]
#[command(about = "svlink: decode Google Maps Street View share links", long_about = None)]
pub struct Cli {
    /// Defaults to interactive `parse` when omitted.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decode a share link; without a URL, read links from stdin one per line.
    Parse {
        /// Street View share link copied from Google Maps.
        url: Option<String>,

        /// Print JSON on a single line regardless of config.
        #[arg(long)]
        compact: bool,
    },

    /// Show the structure of a share link (viewport params, data directives, thumbnail).
    Analyze {
        /// Street View share link copied from Google Maps.
        url: String,
    },

    /// Print a shell completion script to stdout.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<ExitCode> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let command = cli.command.unwrap_or(CliCommand::Parse {
            url: None,
            compact: false,
        });

        match command {
            CliCommand::Parse { url, compact } => {
                if compact {
                    cfg.pretty_json = false;
                }
                return run_parse(&cfg, url.as_deref());
            }
            CliCommand::Analyze { url } => run_analyze(&cfg, &url)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(ExitCode::SUCCESS)
    }
}

#[cfg(test)]
mod tests;
