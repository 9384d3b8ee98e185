//! Encoding gate for byte-stream input
//!
//! robots.txt is an ASCII-compatible single-byte format in practice.
//! Wide encodings are never legitimate and silently decoding them would
//! produce garbage directives, so UTF-16 and UTF-32 input is rejected
//! outright instead of heuristically recovered.

use crate::ParseError;

/// How many leading bytes to inspect for wide-encoding evidence
const SNIFF_LEN: usize = 512;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16_BE_BOM: &[u8] = &[0xFE, 0xFF];
const UTF16_LE_BOM: &[u8] = &[0xFF, 0xFE];
const UTF32_BE_BOM: &[u8] = &[0x00, 0x00, 0xFE, 0xFF];
const UTF32_LE_BOM: &[u8] = &[0xFF, 0xFE, 0x00, 0x00];

/// Decodes raw robots.txt bytes into text
///
/// Accepts UTF-8 (with or without a byte-order mark) and ASCII-compatible
/// single-byte encodings; bytes that are not valid UTF-8 fall back to
/// ISO-8859-1, whose code points map one-to-one onto U+0000..U+00FF.
///
/// # Arguments
///
/// * `bytes` - The raw document body
///
/// # Returns
///
/// * `Ok(String)` - The decoded text
/// * `Err(ParseError::RejectedEncoding)` - The input is UTF-16 or UTF-32,
///   detected by byte-order mark or by NUL bytes in the leading sample
pub fn decode(bytes: &[u8]) -> Result<String, ParseError> {
    // UTF-32LE shares its first two bytes with UTF-16LE; check it first
    if bytes.starts_with(UTF32_BE_BOM) || bytes.starts_with(UTF32_LE_BOM) {
        return Err(ParseError::RejectedEncoding(
            "UTF-32 byte order mark".to_string(),
        ));
    }
    if bytes.starts_with(UTF16_BE_BOM) || bytes.starts_with(UTF16_LE_BOM) {
        return Err(ParseError::RejectedEncoding(
            "UTF-16 byte order mark".to_string(),
        ));
    }

    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);

    // Wide encodings without a BOM encode ASCII text with interleaved NULs
    if body.iter().take(SNIFF_LEN).any(|&b| b == 0) {
        return Err(ParseError::RejectedEncoding(
            "NUL bytes in leading sample (UTF-16/UTF-32 without BOM)".to_string(),
        ));
    }

    match std::str::from_utf8(body) {
        Ok(text) => Ok(text.to_string()),
        Err(_) => Ok(body.iter().map(|&b| b as char).collect()),
    }
}
