//! The percent-encoded image URL carried by the `!6s` directive.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;
use serde::Serialize;

// Image-server options look like `w900-h600-k-no-pi-10.05-ya141.35-ro0-fo100`.
static IMAGE_OPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|-)([a-z]+)([-+]?[0-9]*\.?[0-9]+)?").expect("valid regex")
});

#[derive(Debug, Clone, Serialize)]
pub struct Thumbnail {
    /// Decoded thumbnail URL.
    pub url: String,
    /// Query pairs when the decoded text is a valid URL.
    pub params: Vec<(String, String)>,
    /// `=`-suffixed image-server options of user-contributed imagery.
    pub options: Vec<ImageOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageOption {
    pub name: String,
    pub value: Option<f64>,
}

impl Thumbnail {
    pub(super) fn decode(encoded: &str) -> Self {
        let url = percent_decode_str(encoded).decode_utf8_lossy().into_owned();
        let parsed = url::Url::parse(&url).ok();

        let params: Vec<(String, String)> = parsed
            .as_ref()
            .map(|u| u.query_pairs().into_owned().collect())
            .unwrap_or_default();

        let options: Vec<ImageOption> = parsed
            .as_ref()
            .and_then(|u| u.path().rsplit_once('=').map(|(_, opts)| opts.to_string()))
            .map(|opts| image_options(&opts))
            .unwrap_or_default();

        Self {
            url,
            params,
            options,
        }
    }
}

fn image_options(opts: &str) -> Vec<ImageOption> {
    IMAGE_OPTION_RE
        .captures_iter(opts)
        .filter_map(|cap| {
            Some(ImageOption {
                name: cap.get(1)?.as_str().to_string(),
                value: cap.get(2).and_then(|m| m.as_str().parse::<f64>().ok()),
            })
        })
        .collect()
}
