//! Camera heading and pitch.
//!
//! Each source is an independent extractor; per field the first one that
//! yields a finite value wins:
//!
//! 1. thumbnail URL embedded by operator-captured imagery
//!    (`pitch%3D<n>%26panoid%3D...%26yaw%3D<n>`)
//! 2. dash tokens of user-contributed photo spheres (`pi<n>`, `ya<n>`),
//!    consulted only when the thumbnail anchor is absent
//! 3. the viewport segment (`<n>h` for heading, `<n>t` for pitch)

use std::sync::LazyLock;

use regex::Regex;

use super::viewport::Viewport;

static THUMBNAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"pitch%3D([-+]?[0-9]*\.?[0-9]+)%26panoid%3D[^%]+%26yaw%3D([-+]?[0-9]*\.?[0-9]+)",
    )
    .expect("valid regex")
});
// The dash after `pi`/`ya` is the sign of the value, not a separator.
// Tokens start after a non-alphanumeric or after an encoded `=` (`%3D`).
static PHOTO_SPHERE_PITCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^a-zA-Z0-9]|%3[dD])pi([-+]?[0-9]*\.?[0-9]+)").expect("valid regex")
});
static PHOTO_SPHERE_YAW_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^a-zA-Z0-9]|%3[dD])ya([-+]?[0-9]*\.?[0-9]+)").expect("valid regex")
});

/// Everything the extractors look at, gathered once per link.
pub(crate) struct Sources<'a> {
    url: &'a str,
    viewport: &'a Viewport,
    thumbnail: Option<(f64, f64)>,
}

impl<'a> Sources<'a> {
    pub(crate) fn new(url: &'a str, viewport: &'a Viewport) -> Self {
        Self {
            url,
            viewport,
            thumbnail: thumbnail_angles(url),
        }
    }
}

type Extractor = fn(&Sources<'_>) -> Option<f64>;

const HEADING_CHAIN: &[(&str, Extractor)] = &[
    ("thumbnail yaw", thumbnail_yaw),
    ("photo sphere ya", photo_sphere_yaw),
    ("viewport heading", viewport_heading),
];

// `t` is a tilt on the provider's own scale rather than pitch degrees; it is
// the least trusted source and is only clamped, never rescaled.
const PITCH_CHAIN: &[(&str, Extractor)] = &[
    ("thumbnail pitch", thumbnail_pitch),
    ("photo sphere pi", photo_sphere_pitch),
    ("viewport tilt", viewport_tilt),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Orientation {
    pub heading: f64,
    pub pitch: f64,
}

/// Resolves heading and pitch, defaulting each to 0 when no source has it.
pub(crate) fn resolve(sources: &Sources<'_>) -> Orientation {
    let heading = first_success(HEADING_CHAIN, sources).unwrap_or(0.0);
    let pitch = first_success(PITCH_CHAIN, sources).unwrap_or(0.0);
    Orientation {
        heading: normalize_heading(heading),
        pitch: clamp_pitch(pitch),
    }
}

fn first_success(chain: &[(&str, Extractor)], sources: &Sources<'_>) -> Option<f64> {
    chain.iter().find_map(|(name, extract)| {
        let value = extract(sources).filter(|v| v.is_finite())?;
        tracing::trace!(source = *name, value, "orientation source matched");
        Some(value)
    })
}

fn thumbnail_angles(url: &str) -> Option<(f64, f64)> {
    let cap = THUMBNAIL_RE.captures(url)?;
    let pitch = cap.get(1)?.as_str().parse::<f64>().ok()?;
    let yaw = cap.get(2)?.as_str().parse::<f64>().ok()?;
    Some((pitch, yaw))
}

fn thumbnail_pitch(sources: &Sources<'_>) -> Option<f64> {
    sources.thumbnail.map(|(pitch, _)| pitch)
}

fn thumbnail_yaw(sources: &Sources<'_>) -> Option<f64> {
    sources.thumbnail.map(|(_, yaw)| yaw)
}

fn photo_sphere_pitch(sources: &Sources<'_>) -> Option<f64> {
    if sources.thumbnail.is_some() {
        return None;
    }
    signed_token(&PHOTO_SPHERE_PITCH_RE, sources.url)
}

fn photo_sphere_yaw(sources: &Sources<'_>) -> Option<f64> {
    if sources.thumbnail.is_some() {
        return None;
    }
    signed_token(&PHOTO_SPHERE_YAW_RE, sources.url)
}

fn viewport_heading(sources: &Sources<'_>) -> Option<f64> {
    sources.viewport.param("h")
}

fn viewport_tilt(sources: &Sources<'_>) -> Option<f64> {
    sources.viewport.param("t").map(clamp_pitch)
}

fn signed_token(re: &Regex, url: &str) -> Option<f64> {
    re.captures(url)?.get(1)?.as_str().parse::<f64>().ok()
}

/// Wraps any finite bearing into `[0, 360)`.
pub(crate) fn normalize_heading(heading: f64) -> f64 {
    let wrapped = heading.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

pub(crate) fn clamp_pitch(pitch: f64) -> f64 {
    pitch.clamp(-90.0, 90.0)
}
