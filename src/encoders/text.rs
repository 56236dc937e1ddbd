//! UTF-8 text on top of the byte codec.

use super::algorithms::errors::DecodeError;
use super::radix::{decode, encode};
use crate::core::alphabet::Alphabet;

/// Encodes the UTF-8 bytes of `text`.
pub fn encode_text(text: &str, alphabet: &Alphabet) -> String {
    encode(text.as_bytes(), alphabet)
}

/// Decodes `encoded` back to a string, ignoring any whitespace in it.
///
/// Whitespace can never be an alphabet symbol, so wrapped or indented input
/// decodes the same as the unbroken text.
///
/// # Errors
///
/// `InvalidCharacter` for a non-whitespace character outside the alphabet
/// (positions refer to the stripped text), `InvalidUtf8` if the bytes are not
/// a UTF-8 string.
pub fn decode_text(encoded: &str, alphabet: &Alphabet) -> Result<String, DecodeError> {
    let compact = strip_whitespace(encoded);
    let bytes = decode(&compact, alphabet)?;
    Ok(String::from_utf8(bytes)?)
}

/// Removes every Unicode whitespace character.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Breaks `encoded` into lines of at most `width` characters.
///
/// A width of zero leaves the text on one line.
pub fn wrap(encoded: &str, width: usize) -> String {
    if width == 0 || encoded.len() <= width {
        return encoded.to_string();
    }
    let mut wrapped = String::with_capacity(encoded.len() + encoded.len() / width);
    for (i, c) in encoded.chars().enumerate() {
        if i > 0 && i % width == 0 {
            wrapped.push('\n');
        }
        wrapped.push(c);
    }
    wrapped
}
