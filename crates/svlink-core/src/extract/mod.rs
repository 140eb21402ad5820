//! Street View share-link decoding.
//!
//! A link carries its data in provider-specific, undocumented encodings:
//! `!`-delimited directives for the panorama id and tile size, an
//! `@lat,lng,...` viewport segment, and (depending on the imagery source)
//! either a percent-encoded thumbnail URL or dash-delimited photo sphere
//! tokens for the camera angles. Extraction is plain pattern matching over
//! the text, so arbitrary input is fine.

mod directives;
mod error;
mod orientation;
mod viewport;
mod zoom;

pub use error::ExtractError;
pub use zoom::zoom_from_fov;

pub(crate) use directives::split_opcode;
pub(crate) use viewport::ViewportParam;

use crate::panorama::PanoramaReference;
use orientation::Sources;
use viewport::Viewport;

/// Decodes a share link, or returns `None` when it carries no panorama id or
/// no usable coordinates.
///
/// Never panics. Failures are logged at debug level.
///
/// # Examples
///
/// ```
/// let p = svlink_core::parse("https://www.google.com/maps/@10.0,20.0/data=!3m4!1e1!3m2!1sABC!2e0")
///     .unwrap();
/// assert_eq!(p.id, "ABC");
/// assert_eq!(p.heading, 0.0);
/// assert!(svlink_core::parse("not a url at all").is_none());
/// ```
pub fn parse(url: &str) -> Option<PanoramaReference> {
    match try_parse(url) {
        Ok(panorama) => Some(panorama),
        Err(err) => {
            tracing::debug!(error = %err, len = url.len(), "no panorama in link");
            None
        }
    }
}

/// Like [`parse`], but reports why a link was rejected.
pub fn try_parse(url: &str) -> Result<PanoramaReference, ExtractError> {
    let id = directives::panorama_id(url).ok_or(ExtractError::MissingPanoramaId)?;
    let viewport = Viewport::locate(url)?;

    let orientation = orientation::resolve(&Sources::new(url, &viewport));
    let field_of_view = zoom::field_of_view(url, &viewport);

    Ok(PanoramaReference {
        id: id.to_string(),
        heading: orientation.heading,
        pitch: orientation.pitch,
        latitude: viewport.latitude,
        longitude: viewport.longitude,
        field_of_view,
        zoom_level: field_of_view.map(zoom_from_fov),
        image_width: directives::image_width(url),
        image_height: directives::image_height(url),
    })
}
