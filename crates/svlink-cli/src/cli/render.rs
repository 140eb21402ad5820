//! Human-readable output for decoded links and link analyses.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use svlink_core::analyze::LinkAnalysis;
use svlink_core::config::SvlinkConfig;
use svlink_core::PanoramaReference;

/// Key/value block followed by the JSON form.
pub(crate) fn write_panorama<W: Write>(
    out: &mut W,
    cfg: &SvlinkConfig,
    p: &PanoramaReference,
) -> Result<()> {
    writeln!(out, "ID: {}", p.id)?;
    writeln!(out, "Pitch: {}", p.pitch)?;
    writeln!(out, "Heading: {}", p.heading)?;
    writeln!(out, "Latitude: {}", p.latitude)?;
    writeln!(out, "Longitude: {}", p.longitude)?;
    if let Some(fov) = p.field_of_view {
        writeln!(out, "FOV: {}", fov)?;
    }
    if let Some(zoom) = p.zoom_level {
        writeln!(out, "Zoom: {:.*}", cfg.zoom_precision, zoom)?;
    }
    if let Some(w) = p.image_width {
        writeln!(out, "Image Width: {}", w)?;
    }
    if let Some(h) = p.image_height {
        writeln!(out, "Image Height: {}", h)?;
    }
    writeln!(out)?;
    write_json(out, cfg, p)
}

pub(crate) fn write_analysis<W: Write>(
    out: &mut W,
    cfg: &SvlinkConfig,
    a: &LinkAnalysis,
) -> Result<()> {
    writeln!(out, "=== URL Structure ===")?;
    writeln!(out, "Protocol: {}:", a.structure.scheme)?;
    writeln!(out, "Hostname: {}", a.structure.host.as_deref().unwrap_or("-"))?;
    writeln!(out, "Pathname: {}", a.structure.path)?;
    writeln!(out, "Search params:")?;
    for (k, v) in &a.structure.query {
        writeln!(out, "  {k} = {v}")?;
    }

    if !a.viewport.is_empty() {
        writeln!(out)?;
        writeln!(out, "=== @ Parameters ===")?;
        for (i, entry) in a.viewport.iter().enumerate() {
            match (&entry.value, &entry.unit) {
                (Some(value), Some(unit)) => {
                    writeln!(out, "  Param {i}: Value={value}, Unit={unit}")?
                }
                _ => writeln!(out, "  Param {i}: Value={}", entry.raw)?,
            }
        }
    }

    if !a.directives.is_empty() {
        writeln!(out)?;
        writeln!(out, "=== Data Parameter ===")?;
        for (i, d) in a.directives.iter().enumerate() {
            writeln!(out, "  Param {}: {}", i + 1, d.raw)?;
        }
    }

    if let Some(t) = &a.thumbnail {
        writeln!(out)?;
        writeln!(out, "=== Thumbnail URL ===")?;
        writeln!(out, "URL: {}", t.url)?;
        for (k, v) in &t.params {
            writeln!(out, "  {k} = {v}")?;
        }
        for opt in &t.options {
            match opt.value {
                Some(value) => writeln!(out, "  {}: {}", opt.name, value)?,
                None => writeln!(out, "  {}", opt.name)?,
            }
        }
    }

    writeln!(out)?;
    write_json(out, cfg, a)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, cfg: &SvlinkConfig, value: &T) -> Result<()> {
    let json = if cfg.pretty_json {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writeln!(out, "JSON format:")?;
    writeln!(out, "{json}")?;
    Ok(())
}
