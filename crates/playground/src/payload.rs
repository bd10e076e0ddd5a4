//! The record carried inside a playground URL fragment.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Schema tag stamped into every payload this crate produces.
pub const PAYLOAD_VERSION: i64 = 1;

/// Snippet record serialized into the URL fragment.
///
/// `version` is a schema tag: producers always write `1`, while decoding
/// only requires the field to be a JSON number, so payloads from newer
/// producers still parse. `content` is the snippet text, carried verbatim
/// with no normalization or trimming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaygroundPayload {
    pub version: Number,
    pub content: String,
}

impl PlaygroundPayload {
    /// Wraps snippet text in a current-version payload.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            version: Number::from(PAYLOAD_VERSION),
            content: content.into(),
        }
    }
}
