//! Field of view and the zoom level derived from it.

use std::sync::LazyLock;

use regex::Regex;

use super::viewport::Viewport;

/// Narrowest field of view the provider emits (fully zoomed in).
const MIN_FOV_DEGREES: f64 = 10.0;
/// Widest field of view the provider emits (fully zoomed out).
const MAX_FOV_DEGREES: f64 = 120.0;

static PHOTO_SPHERE_FOV_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^a-zA-Z0-9]|%3[dD])fo-?([0-9]+(?:\.[0-9]+)?)").expect("valid regex")
});

/// Field of view from the viewport `y` param, else the photo sphere `fo` token.
///
/// Values that are not in `(0, 180]` are ignored.
pub(crate) fn field_of_view(url: &str, viewport: &Viewport) -> Option<f64> {
    viewport
        .param("y")
        .filter(|&fov| plausible_fov(fov))
        .or_else(|| photo_sphere_fov(url))
}

fn photo_sphere_fov(url: &str) -> Option<f64> {
    PHOTO_SPHERE_FOV_RE
        .captures(url)?
        .get(1)?
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|&fov| plausible_fov(fov))
}

fn plausible_fov(fov: f64) -> bool {
    fov.is_finite() && fov > 0.0 && fov <= 180.0
}

/// Maps a field of view onto `[0, 1]`: 10° → 1 (zoomed in), 120° → 0.
/// Values outside the observed range saturate.
pub fn zoom_from_fov(fov: f64) -> f64 {
    let zoom = 1.0 - (fov - MIN_FOV_DEGREES) / (MAX_FOV_DEGREES - MIN_FOV_DEGREES);
    zoom.clamp(0.0, 1.0)
}
