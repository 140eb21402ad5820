//! The `@<lat>,<lng>,<n><unit>,...` camera segment of a share link.
//!
//! Units seen in the wild: `a` (altitude mode), `y` (field of view),
//! `h` (heading) and `t` (tilt).

use std::sync::LazyLock;

use regex::Regex;

use super::ExtractError;

static VIEWPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@([-+]?[0-9]*\.?[0-9]+),([-+]?[0-9]*\.?[0-9]+)([^/?&#!\s]*)")
        .expect("valid regex")
});
static PARAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([-+]?[0-9]*\.?[0-9]+)([a-zA-Z]+)$").expect("valid regex")
});

/// A unit-suffixed number from the viewport segment, e.g. `75y`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ViewportParam {
    pub value: f64,
    pub unit: String,
}

impl ViewportParam {
    /// Parses `<number><letters>`; bare numbers and other shapes yield `None`.
    pub(crate) fn parse(raw: &str) -> Option<Self> {
        let cap = PARAM_RE.captures(raw.trim())?;
        let value = cap.get(1)?.as_str().parse::<f64>().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Self {
            value,
            unit: cap.get(2)?.as_str().to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Viewport {
    pub latitude: f64,
    pub longitude: f64,
    params: Vec<ViewportParam>,
}

impl Viewport {
    /// Finds the leftmost `@lat,lng` segment and validates the coordinates.
    pub fn locate(url: &str) -> Result<Self, ExtractError> {
        let cap = VIEWPORT_RE
            .captures(url)
            .ok_or(ExtractError::MissingCoordinates)?;

        let coordinate = |i: usize| {
            cap.get(i)
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .ok_or(ExtractError::MissingCoordinates)
        };
        let latitude = coordinate(1)?;
        let longitude = coordinate(2)?;

        if !valid_coordinates(latitude, longitude) {
            return Err(ExtractError::InvalidCoordinates {
                latitude,
                longitude,
            });
        }

        let params = cap
            .get(3)
            .map(|m| {
                m.as_str()
                    .split(',')
                    .filter(|s| !s.is_empty())
                    .filter_map(ViewportParam::parse)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            latitude,
            longitude,
            params,
        })
    }

    /// Value of the first param carrying `unit`.
    pub fn param(&self, unit: &str) -> Option<f64> {
        self.params
            .iter()
            .find(|p| p.unit == unit)
            .map(|p| p.value)
    }
}

fn valid_coordinates(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}
