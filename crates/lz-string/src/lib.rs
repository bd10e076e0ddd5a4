//! LZ-based string compression with Base64 output.
//!
//! The scheme works over UTF-16 code units with a growing phrase
//! dictionary and variable-width codes, so compress/decompress form an
//! exact inverse pair over the full Unicode range, and the encoded text
//! is safe inside a URL fragment without further escaping.

mod compress;
mod constants;
mod decompress;

pub use compress::compress_to_base64;
pub use constants::KEY_STR_BASE64;
pub use decompress::decompress_from_base64;
