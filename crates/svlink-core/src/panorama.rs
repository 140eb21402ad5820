//! Decoded panorama viewing parameters.

use serde::{Deserialize, Serialize};

/// Street View viewing parameters recovered from a single share link.
///
/// Produced by [`crate::parse`]; heading is always in `[0, 360)`, pitch in
/// `[-90, 90]`, and `zoom_level` is present exactly when `field_of_view` is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanoramaReference {
    /// Provider-assigned panorama identifier.
    pub id: String,
    /// Horizontal camera bearing in degrees.
    pub heading: f64,
    /// Vertical camera tilt in degrees.
    pub pitch: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Angular field of view in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_of_view: Option<f64>,
    /// Zoom derived from `field_of_view`: 0 = zoomed out, 1 = zoomed in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_height: Option<u32>,
}
