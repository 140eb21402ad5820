//! `svlink analyze <url>` – print the structure of a share link.

use anyhow::{Context, Result};
use std::io::{self, Write};
use svlink_core::analyze;
use svlink_core::config::SvlinkConfig;

use crate::cli::render;

pub fn run_analyze(cfg: &SvlinkConfig, url: &str) -> Result<()> {
    let analysis = analyze::analyze(url.trim()).context("cannot analyze link")?;
    let mut out = io::stdout().lock();
    render::write_analysis(&mut out, cfg, &analysis)?;
    out.flush()?;
    Ok(())
}
