//! `svlink parse [url]` – decode one link, or loop over stdin.

use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use svlink_core::config::SvlinkConfig;

use crate::cli::render;

const BANNER: &str = "=== Google Street View URL Parser ===";

/// Exit status of a one-shot parse whose link could not be decoded.
const EXIT_NOT_DECODED: u8 = 2;

pub fn run_parse(cfg: &SvlinkConfig, url: Option<&str>) -> Result<ExitCode> {
    let mut out = io::stdout().lock();
    match url {
        Some(url) => {
            if parse_once(cfg, url, &mut out, &mut io::stderr().lock())? {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(EXIT_NOT_DECODED))
            }
        }
        None => {
            parse_interactive(cfg, io::stdin().lock(), &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Prints the decoded record to `out`, or the failure message to `err`.
/// Returns whether the link was decoded.
pub(crate) fn parse_once<W: Write, E: Write>(
    cfg: &SvlinkConfig,
    url: &str,
    out: &mut W,
    err: &mut E,
) -> Result<bool> {
    let Some(panorama) = svlink_core::parse(url.trim()) else {
        writeln!(err, "Failed to extract parameters from the URL.")?;
        writeln!(
            err,
            "Please make sure you entered a valid Google Street View URL."
        )?;
        err.flush()?;
        return Ok(false);
    };

    writeln!(out, "{BANNER}")?;
    writeln!(out)?;
    writeln!(out, "Extracted parameters:")?;
    render::write_panorama(out, cfg, &panorama)?;
    out.flush()?;
    Ok(true)
}

/// Reads one link per line until the exit command or EOF.
pub(crate) fn parse_interactive<R: BufRead, W: Write>(
    cfg: &SvlinkConfig,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    prompt(cfg, out)?;

    for line in input.lines() {
        let line = line?;
        if cfg.is_exit_command(&line) {
            break;
        }

        let link = line.trim();
        if !link.is_empty() {
            writeln!(out)?;
            match svlink_core::parse(link) {
                Some(panorama) => {
                    writeln!(out, "Successfully extracted parameters:")?;
                    render::write_panorama(out, cfg, &panorama)?;
                }
                None => {
                    writeln!(out, "Failed to extract parameters from the URL.")?;
                    writeln!(
                        out,
                        "Please make sure you entered a valid Google Street View URL."
                    )?;
                }
            }
        }

        writeln!(out)?;
        prompt(cfg, out)?;
    }

    writeln!(out)?;
    writeln!(out, "Parser exited.")?;
    out.flush()?;
    Ok(())
}

fn prompt<W: Write>(cfg: &SvlinkConfig, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Enter a Google Maps Street View URL (or type \"{}\" to quit):",
        cfg.exit_command
    )?;
    out.flush()?;
    Ok(())
}
