//! `!`-delimited data directives (`!<field><kind><value>`).

use std::sync::LazyLock;

use regex::Regex;

static PANORAMA_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!1s([^!?&#\s]+)").expect("valid regex"));
static IMAGE_WIDTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!7i([0-9]+)").expect("valid regex"));
static IMAGE_HEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!8i([0-9]+)").expect("valid regex"));
static OPCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)([a-zA-Z])(.*)$").expect("valid regex"));

/// Leftmost `!1s` token, up to the next `!` or the start of the query string.
pub(crate) fn panorama_id(url: &str) -> Option<&str> {
    PANORAMA_ID_RE
        .captures(url)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}

pub(crate) fn image_width(url: &str) -> Option<u32> {
    positive_integer(&IMAGE_WIDTH_RE, url)
}

pub(crate) fn image_height(url: &str) -> Option<u32> {
    positive_integer(&IMAGE_HEIGHT_RE, url)
}

/// Parses the first capture as a pixel count; zero and overflow count as absent.
fn positive_integer(re: &Regex, url: &str) -> Option<u32> {
    re.captures(url)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .filter(|&n| n > 0)
}

/// Splits one directive token (without its leading `!`) into field number,
/// kind letter and value, e.g. `1s9nXb` → `(1, 's', "9nXb")`.
pub(crate) fn split_opcode(token: &str) -> Option<(u32, char, &str)> {
    let cap = OPCODE_RE.captures(token)?;
    let field = cap.get(1)?.as_str().parse::<u32>().ok()?;
    let kind = cap.get(2)?.as_str().chars().next()?;
    let value = cap.get(3).map_or("", |m| m.as_str());
    Some((field, kind, value))
}
