//! Hex codec for command-line payloads

use crate::error::{Error, Result};

/// Decode a hex string into bytes.
///
/// Spaces between byte pairs are removed and surrounding whitespace is
/// trimmed before parsing, so both `"73 04 00"` and `"730400"` are
/// accepted. Digits may be upper or lower case.
///
/// # Errors
/// Returns an error if the sanitized string is empty or odd-length, or if
/// any character pair is not a valid base-16 byte.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    let sanitized = text.trim().replace(' ', "");

    if sanitized.is_empty() {
        return Err(Error::EmptyInput);
    }
    if sanitized.len() % 2 != 0 {
        return Err(Error::InvalidHexLength {
            length: sanitized.len(),
        });
    }

    let mut bytes = Vec::with_capacity(sanitized.len() / 2);
    for pair in sanitized.as_bytes().chunks(2) {
        let (Some(hi), Some(lo)) = (hex_value(pair[0]), hex_value(pair[1])) else {
            return Err(Error::InvalidHexDigit {
                pair: String::from_utf8_lossy(pair).into_owned(),
            });
        };
        bytes.push((hi << 4) | lo);
    }

    Ok(bytes)
}

/// Encode bytes as uppercase hex pairs joined by single spaces.
///
/// Empty input yields an empty string. Never fails.
pub fn encode(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|byte| format!("{byte:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

const fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
