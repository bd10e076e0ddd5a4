//! Inverse of the LZ compressor: Base64 text back to the original string.

use crate::constants::KEY_STR_BASE64;

const fn build_reverse_table() -> [i8; 256] {
    let mut table = [-1i8; 256];
    let mut i = 0;
    while i < KEY_STR_BASE64.len() {
        table[KEY_STR_BASE64[i] as usize] = i as i8;
        i += 1;
    }
    table
}

/// Maps each Base64 byte back to its bit-stream value; -1 for bytes
/// outside the key string.
const REVERSE_TABLE: [i8; 256] = build_reverse_table();

fn base_value(byte: u8) -> Option<u32> {
    let value = REVERSE_TABLE[byte as usize];
    if value < 0 {
        None
    } else {
        Some(value as u32)
    }
}

/// Reads the bit stream back out of the encoded characters. Bits inside a
/// character are consumed most significant first; multi-bit values are
/// reassembled least significant bit first, mirroring the writer.
struct BitReader<'a> {
    bytes: &'a [u8],
    val: u32,
    position: u32,
    index: usize,
    reset_value: u32,
}

impl<'a> BitReader<'a> {
    fn new(bytes: &'a [u8], reset_value: u32) -> Option<Self> {
        let val = base_value(*bytes.first()?)?;
        Some(Self {
            bytes,
            val,
            position: reset_value,
            index: 1,
            reset_value,
        })
    }

    fn read(&mut self, count: u32) -> Option<u32> {
        let mut bits = 0u32;
        let mut power = 1u32;
        for _ in 0..count {
            if self.val & self.position != 0 {
                bits |= power;
            }
            self.position >>= 1;
            if self.position == 0 {
                self.position = self.reset_value;
                // Reads past the end supply zero bits; the caller's index
                // guard terminates the stream.
                self.val = match self.bytes.get(self.index) {
                    Some(&b) => base_value(b)?,
                    None => 0,
                };
                self.index += 1;
            }
            power <<= 1;
        }
        Some(bits)
    }
}

pub(crate) fn decompress(bytes: &[u8], reset_value: u32) -> Option<Vec<u16>> {
    let mut reader = BitReader::new(bytes, reset_value)?;
    // Codes 0 and 1 introduce literals, code 2 ends the stream; the
    // placeholder entries keep dictionary indices aligned with codes.
    let mut dictionary: Vec<Vec<u16>> = vec![Vec::new(), Vec::new(), Vec::new()];
    let mut enlarge_in: u64 = 4;
    let mut num_bits: u32 = 3;

    let first = match reader.read(2)? {
        0 => reader.read(8)? as u16,
        1 => reader.read(16)? as u16,
        2 => return Some(Vec::new()),
        _ => return None,
    };
    dictionary.push(vec![first]);
    let mut w = vec![first];
    let mut result = vec![first];

    loop {
        if reader.index > bytes.len() {
            return None;
        }

        let mut code = reader.read(num_bits)? as usize;
        match code {
            0 => {
                let literal = reader.read(8)? as u16;
                dictionary.push(vec![literal]);
                code = dictionary.len() - 1;
                enlarge_in -= 1;
            }
            1 => {
                let literal = reader.read(16)? as u16;
                dictionary.push(vec![literal]);
                code = dictionary.len() - 1;
                enlarge_in -= 1;
            }
            2 => return Some(result),
            _ => {}
        }

        if enlarge_in == 0 {
            enlarge_in = 1u64 << num_bits;
            num_bits += 1;
        }

        let entry = if let Some(entry) = dictionary.get(code) {
            entry.clone()
        } else if code == dictionary.len() {
            // The one phrase the compressor can reference before
            // completing it: the current phrase extended by its own
            // first code unit.
            let mut entry = w.clone();
            entry.push(w[0]);
            entry
        } else {
            return None;
        };
        result.extend_from_slice(&entry);

        let mut new_entry = w.clone();
        new_entry.push(entry[0]);
        dictionary.push(new_entry);
        enlarge_in -= 1;

        w = entry;

        if enlarge_in == 0 {
            enlarge_in = 1u64 << num_bits;
            num_bits += 1;
        }
    }
}

/// Decompresses Base64 text produced by [`compress_to_base64`].
///
/// Returns `None` for the empty string, for input containing bytes
/// outside the Base64 key string, for truncated or foreign bit streams,
/// and for streams that decode to invalid UTF-16.
///
/// [`compress_to_base64`]: crate::compress_to_base64
///
/// # Example
///
/// ```
/// use gleampark_lz_string::{compress_to_base64, decompress_from_base64};
///
/// let packed = compress_to_base64("let x = 1");
/// assert_eq!(decompress_from_base64(&packed).as_deref(), Some("let x = 1"));
/// ```
pub fn decompress_from_base64(input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    let units = decompress(input.as_bytes(), 32)?;
    String::from_utf16(&units).ok()
}
