//! Structural breakdown of a share link, for debugging new link shapes.
//!
//! Unlike [`crate::parse`] this needs a well-formed URL: the structure
//! section comes from the `url` crate.

mod thumbnail;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::extract::{split_opcode, ViewportParam};

pub use thumbnail::{ImageOption, Thumbnail};

static VIEWPORT_SEGMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@([^/?#]+)").expect("valid regex"));
static DATA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"data=([^?]+)").expect("valid regex"));

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("not a valid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkAnalysis {
    pub structure: UrlStructure,
    pub viewport: Vec<ViewportEntry>,
    pub directives: Vec<Directive>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UrlStructure {
    pub scheme: String,
    pub host: Option<String>,
    pub path: String,
    pub query: Vec<(String, String)>,
}

/// One comma-separated param of the `@` segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewportEntry {
    pub raw: String,
    pub value: Option<f64>,
    pub unit: Option<String>,
}

/// One `!`-delimited token of the `data=` segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Directive {
    pub raw: String,
    pub field: Option<u32>,
    pub kind: Option<char>,
    pub value: String,
}

impl Directive {
    fn from_token(raw: &str) -> Self {
        match split_opcode(raw) {
            Some((field, kind, value)) => Self {
                raw: raw.to_string(),
                field: Some(field),
                kind: Some(kind),
                value: value.to_string(),
            },
            None => Self {
                raw: raw.to_string(),
                field: None,
                kind: None,
                value: raw.to_string(),
            },
        }
    }

    fn is_thumbnail(&self) -> bool {
        self.field == Some(6) && self.kind == Some('s')
    }
}

/// Breaks a share link into its URL structure, viewport params, data
/// directives and (when present) the embedded thumbnail URL.
pub fn analyze(link: &str) -> Result<LinkAnalysis, AnalyzeError> {
    let parsed = url::Url::parse(link)?;

    let structure = UrlStructure {
        scheme: parsed.scheme().to_string(),
        host: parsed.host_str().map(str::to_string),
        path: parsed.path().to_string(),
        query: parsed.query_pairs().into_owned().collect(),
    };

    let viewport: Vec<ViewportEntry> = VIEWPORT_SEGMENT_RE
        .captures(link)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().split(',').map(viewport_entry).collect())
        .unwrap_or_default();

    let directives: Vec<Directive> = DATA_RE
        .captures(link)
        .and_then(|cap| cap.get(1))
        .map(|m| {
            m.as_str()
                .split('!')
                .filter(|s| !s.is_empty())
                .map(Directive::from_token)
                .collect()
        })
        .unwrap_or_default();

    let thumbnail = directives
        .iter()
        .find(|d| d.is_thumbnail())
        .map(|d| Thumbnail::decode(&d.value));

    tracing::debug!(
        viewport = viewport.len(),
        directives = directives.len(),
        thumbnail = thumbnail.is_some(),
        "analyzed link"
    );

    Ok(LinkAnalysis {
        structure,
        viewport,
        directives,
        thumbnail,
    })
}

fn viewport_entry(raw: &str) -> ViewportEntry {
    match ViewportParam::parse(raw) {
        Some(param) => ViewportEntry {
            raw: raw.to_string(),
            value: Some(param.value),
            unit: Some(param.unit),
        },
        None => ViewportEntry {
            raw: raw.to_string(),
            value: raw.parse::<f64>().ok(),
            unit: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPERATOR_LINK: &str = "https://www.google.com/maps/@51.8114178,19.4684854,3a,75y,231.44h,97.65t/data=!3m7!1e1!3m5!1s9nXbRoEDdIP_Nra2T9UD2g!2e0!6shttps:%2F%2Fstreetviewpixels-pa.googleapis.com%2Fv1%2Fthumbnail%3Fcb_client%3Dmaps_sv.tactile%26w%3D900%26h%3D600%26pitch%3D-7.653027784829149%26panoid%3D9nXbRoEDdIP_Nra2T9UD2g%26yaw%3D231.43853022351698!7i13312!8i6656?entry=ttu&g_ep=EgoyMDI2MDIwMS4wIKXMDSoASAFQAw%3D%3D";

    #[test]
    fn structure_from_url() {
        let a = analyze(OPERATOR_LINK).unwrap();
        assert_eq!(a.structure.scheme, "https");
        assert_eq!(a.structure.host.as_deref(), Some("www.google.com"));
        assert!(a.structure.path.starts_with("/maps/@51.8114178"));
        assert!(a
            .structure
            .query
            .iter()
            .any(|(k, v)| k == "entry" && v == "ttu"));
    }

    #[test]
    fn viewport_params_split_by_unit() {
        let a = analyze(OPERATOR_LINK).unwrap();
        assert_eq!(a.viewport.len(), 6);
        assert_eq!(a.viewport[0].value, Some(51.8114178));
        assert_eq!(a.viewport[0].unit, None);
        assert_eq!(a.viewport[3].value, Some(75.0));
        assert_eq!(a.viewport[3].unit.as_deref(), Some("y"));
        assert_eq!(a.viewport[5].unit.as_deref(), Some("t"));
    }

    #[test]
    fn directives_split_by_opcode() {
        let a = analyze(OPERATOR_LINK).unwrap();
        assert_eq!(a.directives[0].raw, "3m7");
        let id = a
            .directives
            .iter()
            .find(|d| d.field == Some(1) && d.kind == Some('s'))
            .unwrap();
        assert_eq!(id.value, "9nXbRoEDdIP_Nra2T9UD2g");
        assert_eq!(a.directives.last().unwrap().raw, "8i6656");
    }

    #[test]
    fn thumbnail_decoded() {
        let a = analyze(OPERATOR_LINK).unwrap();
        let t = a.thumbnail.unwrap();
        assert!(t
            .url
            .starts_with("https://streetviewpixels-pa.googleapis.com/v1/thumbnail?"));
        assert!(t
            .params
            .iter()
            .any(|(k, v)| k == "yaw" && v == "231.43853022351698"));
        assert!(t.options.is_empty());
    }

    #[test]
    fn link_without_data_segment() {
        let a = analyze("https://www.google.com/maps/@10.0,20.0,15z").unwrap();
        assert_eq!(a.viewport.len(), 3);
        assert!(a.directives.is_empty());
        assert!(a.thumbnail.is_none());
    }

    #[test]
    fn invalid_url_rejected() {
        assert!(matches!(
            analyze("not a url at all"),
            Err(AnalyzeError::InvalidUrl(_))
        ));
    }
}
