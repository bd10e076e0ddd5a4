/// Base64 key string: the standard alphabet followed by the padding
/// character. Bit-stream values index into the first 64 entries; `=`
/// (value 64) only ever appears as trailing padding.
pub const KEY_STR_BASE64: &[u8; 65] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/=";

/// Bits packed into each output character.
pub const BASE64_BITS_PER_CHAR: u32 = 6;
