//! Reasons a share link yields no panorama.

/// Hard failure while decoding a share link.
///
/// Orientation and zoom never produce an error; they fall back to defaults
/// or are left out of the record.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtractError {
    /// No `!1s<id>` directive anywhere in the link.
    #[error("no panorama id (`!1s` directive) in link")]
    MissingPanoramaId,
    /// No `@<lat>,<lng>` segment, or one whose numbers do not parse.
    #[error("no `@latitude,longitude` segment in link")]
    MissingCoordinates,
    /// Coordinates parsed but are not finite or fall outside the globe.
    #[error("coordinates out of range: {latitude},{longitude}")]
    InvalidCoordinates { latitude: f64, longitude: f64 },
}
