//! Charset detection and decoding for template files.
//!
//! Mail templates exported from Outlook or Word arrive as UTF-16LE with a
//! byte order mark, while hand-edited ones are usually Windows-1252 or UTF-8.

use crate::error::{Error, Result};

/// Byte order mark for UTF-16 little-endian.
const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

/// Byte order mark for UTF-8.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Decodes raw template bytes, sniffing the encoding from the BOM.
///
/// Files starting with the UTF-16LE BOM decode as UTF-16LE, files with a
/// UTF-8 BOM decode as UTF-8, and everything else decodes as Windows-1252.
/// The BOM itself is stripped from the result.
///
/// # Errors
///
/// Returns an error if the bytes are not valid in the detected encoding.
pub fn decode_template_bytes(bytes: &[u8]) -> Result<String> {
    if let Some(rest) = bytes.strip_prefix(&UTF16LE_BOM) {
        return decode_utf16le(rest);
    }

    if let Some(rest) = bytes.strip_prefix(&UTF8_BOM) {
        return String::from_utf8(rest.to_vec())
            .map_err(|e| Error::InvalidEncoding(format!("invalid UTF-8: {e}")));
    }

    decode_windows_1252(bytes)
}

/// Decodes UTF-16 little-endian bytes (without a BOM).
///
/// # Errors
///
/// Returns an error on odd-length input or unpaired surrogates.
pub fn decode_utf16le(bytes: &[u8]) -> Result<String> {
    if bytes.len() % 2 != 0 {
        return Err(Error::InvalidEncoding(
            "UTF-16 stream has odd byte length".to_string(),
        ));
    }

    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));

    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::InvalidEncoding(format!("invalid UTF-16: {e}")))
}

/// Decodes Windows-1252 bytes.
///
/// # Errors
///
/// Returns an error if the input contains one of the five code points
/// undefined in Windows-1252.
pub fn decode_windows_1252(bytes: &[u8]) -> Result<String> {
    bytes.iter().map(|&byte| windows_1252_char(byte)).collect()
}

/// Maps a single Windows-1252 byte to its Unicode character.
///
/// The 0x80-0x9F range differs from Latin-1; the rest is an identity
/// mapping into U+0000-U+00FF.
fn windows_1252_char(byte: u8) -> Result<char> {
    let ch = match byte {
        0x80 => '\u{20AC}', // Euro sign
        0x82 => '\u{201A}',
        0x83 => '\u{0192}',
        0x84 => '\u{201E}',
        0x85 => '\u{2026}', // Horizontal ellipsis
        0x86 => '\u{2020}',
        0x87 => '\u{2021}',
        0x88 => '\u{02C6}',
        0x89 => '\u{2030}',
        0x8A => '\u{0160}',
        0x8B => '\u{2039}',
        0x8C => '\u{0152}',
        0x8E => '\u{017D}',
        0x91 => '\u{2018}', // Left single quotation mark
        0x92 => '\u{2019}',
        0x93 => '\u{201C}', // Left double quotation mark
        0x94 => '\u{201D}',
        0x95 => '\u{2022}', // Bullet
        0x96 => '\u{2013}', // En dash
        0x97 => '\u{2014}', // Em dash
        0x98 => '\u{02DC}',
        0x99 => '\u{2122}', // Trade mark sign
        0x9A => '\u{0161}',
        0x9B => '\u{203A}',
        0x9C => '\u{0153}',
        0x9E => '\u{017E}',
        0x9F => '\u{0178}',
        0x81 | 0x8D | 0x8F | 0x90 | 0x9D => {
            return Err(Error::InvalidEncoding(format!(
                "byte 0x{byte:02X} is undefined in Windows-1252"
            )));
        }
        _ => char::from(byte),
    };
    Ok(ch)
}
