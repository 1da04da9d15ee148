//! Hex token codec
//!
//! Captures reach us as `0xNN` token text and leave the same way. A token is
//! one or two hex digits with an optional `0x` prefix; rendered tokens are
//! always two uppercase digits.

use tracing::trace;

use super::{Error, Result};

const HEX_PREFIX: &str = "0x";

fn strip_prefix(token: &str) -> &str {
    token
        .strip_prefix(HEX_PREFIX)
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token)
}

fn digit_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

pub(crate) fn parse_token_at(token: &str, position: usize) -> Result<u8> {
    let digits = strip_prefix(token).as_bytes();

    // `u8::from_str_radix` would also take a leading '+', so decode by hand
    let value = match digits {
        [low] => digit_value(*low),
        [high, low] => digit_value(*high).zip(digit_value(*low)).map(|(h, l)| (h << 4) | l),
        _ => None,
    };

    value.ok_or_else(|| Error::malformed(token, position))
}

/// Parse one hex token (`"4C"`, `"0x4C"`, `"c"`) into a byte
pub fn token_to_byte(token: &str) -> Result<u8> {
    parse_token_at(token, 0)
}

/// Render a byte as two uppercase hex digits without prefix
#[must_use]
pub fn byte_to_token(byte: u8) -> String {
    format!("{byte:02X}")
}

/// Render a byte as a `0x`-prefixed token
#[must_use]
pub fn byte_to_prefixed_token(byte: u8) -> String {
    format!("{HEX_PREFIX}{byte:02X}")
}

/// Convert a token sequence to bytes, preserving order and length
pub fn tokens_to_bytes<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<u8>> {
    trace!(count = tokens.len(), "decoding hex tokens");
    tokens
        .iter()
        .enumerate()
        .map(|(position, token)| parse_token_at(token.as_ref(), position))
        .collect()
}

/// Convert bytes to tokens, optionally `0x`-prefixed
#[must_use]
pub fn bytes_to_tokens(bytes: &[u8], prefixed: bool) -> Vec<String> {
    let render = if prefixed {
        byte_to_prefixed_token
    } else {
        byte_to_token
    };
    bytes.iter().copied().map(render).collect()
}

/// Parse whitespace-separated token text such as `"0xF0 0x43 0x20"`
pub fn parse_token_stream(text: &str) -> Result<Vec<u8>> {
    text.split_whitespace()
        .enumerate()
        .map(|(position, token)| parse_token_at(token, position))
        .collect()
}

/// Parse tokens that may pack several bytes each (`"F04320 0x4C08"`)
///
/// Each whitespace-separated token carries an even number of hex digits,
/// two per byte. An odd digit count or a non-hex digit fails the whole parse.
pub fn parse_packed_hex(text: &str) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(text.len() / 2);

    for (position, token) in text.split_whitespace().enumerate() {
        let digits = strip_prefix(token).as_bytes();
        if digits.is_empty() || digits.len() % 2 != 0 {
            return Err(Error::malformed(token, position));
        }

        for pair in digits.chunks_exact(2) {
            let byte = digit_value(pair[0])
                .zip(digit_value(pair[1]))
                .map(|(h, l)| (h << 4) | l)
                .ok_or_else(|| Error::malformed(token, position))?;
            bytes.push(byte);
        }
    }

    trace!(len = bytes.len(), "decoded packed hex");
    Ok(bytes)
}
