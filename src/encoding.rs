//! # Text Encoding
//!
//! Ciphertext crosses the crate boundary only as standard Base64 (RFC 4648
//! alphabet, with padding).

use crate::consts::MIME_LINE_LENGTH;
use crate::error::SecureStorageError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::borrow::Cow;

/// Shape of the Base64 text produced on encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Base64Layout {
    /// One line, no line breaks.
    #[default]
    Standard,
    /// Lines of 76 characters, each terminated by `\n` (including the last).
    ///
    /// Matches the text written by older mobile clients of this format.
    Mime,
}

/// Encode bytes as single-line standard Base64.
#[inline]
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Encode bytes as standard Base64 in the requested layout.
pub fn encode_with(bytes: &[u8], layout: Base64Layout) -> String {
    match layout {
        Base64Layout::Standard => encode(bytes),
        Base64Layout::Mime => wrap_lines(&encode(bytes), MIME_LINE_LENGTH),
    }
}

/// Decode standard Base64 text.
///
/// ASCII whitespace is skipped, so both layouts decode. Padding is required.
///
/// # Errors
///
/// [`SecureStorageError::Encoding`] on invalid characters or bad padding.
pub fn decode(text: &str) -> Result<Vec<u8>, SecureStorageError> {
    let compact: Cow<'_, str> = if text.bytes().any(|b| b.is_ascii_whitespace()) {
        Cow::Owned(text.chars().filter(|c| !c.is_ascii_whitespace()).collect())
    } else {
        Cow::Borrowed(text)
    };

    Ok(STANDARD.decode(compact.as_bytes())?)
}

fn wrap_lines(text: &str, width: usize) -> String {
    let mut wrapped = String::with_capacity(text.len() + text.len() / width + 1);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 && i % width == 0 {
            wrapped.push('\n');
        }
        wrapped.push(ch);
    }
    if !text.is_empty() {
        wrapped.push('\n');
    }
    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_lines_breaks_every_width_chars() {
        assert_eq!(wrap_lines("abcdefg", 3), "abc\ndef\ng\n");
        assert_eq!(wrap_lines("abcdef", 3), "abc\ndef\n");
        assert_eq!(wrap_lines("", 3), "");
    }

    #[test]
    fn decode_skips_ascii_whitespace() {
        assert_eq!(decode("aGk=").unwrap(), b"hi");
        assert_eq!(decode(" aG\r\nk=\n").unwrap(), b"hi");
    }
}
