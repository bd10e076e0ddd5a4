//! Building, validating, and decoding playground share URLs.

use std::sync::OnceLock;

use gleampark_lz_string::{compress_to_base64, decompress_from_base64};
use regex::Regex;

use crate::payload::PlaygroundPayload;

/// Base URL of the Gleam playground.
pub const PLAYGROUND_BASE_URL: &str = "https://playground.gleam.run";

/// A share URL is the fixed scheme and host, an empty path, and a
/// fragment of one or more Base64 characters (standard alphabet plus the
/// URL-safe `-`/`_` substitutes).
const PLAYGROUND_URL_PATTERN: &str = r"^https://playground\.gleam\.run/#([A-Za-z0-9+/=_-]+)$";

fn playground_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PLAYGROUND_URL_PATTERN).expect("pattern is a valid regex"))
}

/// Computes the URL fragment for a snippet: the current-version payload,
/// serialized to JSON and compressed to Base64.
///
/// Deterministic and total: every string, including the empty string,
/// produces a fragment.
pub fn compute_playground_hash(code: &str) -> String {
    let payload = PlaygroundPayload::new(code);
    let json =
        serde_json::to_string(&payload).expect("a payload struct always serializes to JSON");
    compress_to_base64(&json)
}

/// Builds a complete share URL for a snippet.
///
/// # Example
///
/// ```
/// use gleampark_playground::build_playground_url;
///
/// let url = build_playground_url("pub fn main() {}");
/// assert!(url.starts_with("https://playground.gleam.run/#"));
/// ```
pub fn build_playground_url(code: &str) -> String {
    format!("{}/#{}", PLAYGROUND_BASE_URL, compute_playground_hash(code))
}

/// True iff the candidate is exactly a playground share URL.
pub fn validate_playground_url(url: &str) -> bool {
    playground_url_regex().is_match(url)
}

/// Extracts the fragment from a share URL, or `None` when the candidate
/// does not match the URL rule.
pub fn extract_hash_from_url(url: &str) -> Option<&str> {
    playground_url_regex()
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|fragment| fragment.as_str())
}

/// Decodes a URL fragment back into its payload.
///
/// Every failure mode collapses to `None`: fragments that do not
/// decompress, decompressed text that is not JSON, and JSON whose shape
/// is wrong (not an object, `version` not a number, `content` not a
/// string, either field missing). The `version` value itself is not
/// checked, only its type.
pub fn decode_playground_hash(hash: &str) -> Option<PlaygroundPayload> {
    let decompressed = decompress_from_base64(hash)?;
    serde_json::from_str(&decompressed).ok()
}
