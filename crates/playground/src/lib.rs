//! Codec for Gleam playground share URLs.
//!
//! A snippet is wrapped in a `{version, content}` payload, serialized to
//! JSON, and compressed into a Base64 fragment appended to the playground
//! base URL. Decoding reverses the pipeline; every malformed input
//! resolves to an absent result, never a panic or error across this
//! crate's boundary.

pub mod payload;
pub mod url;

pub use payload::{PlaygroundPayload, PAYLOAD_VERSION};
pub use url::{
    build_playground_url, compute_playground_hash, decode_playground_hash, extract_hash_from_url,
    validate_playground_url, PLAYGROUND_BASE_URL,
};
