use super::decoder::Decoder;
use super::encoder::Encoder;
use crate::core::alphabet::Alphabet;

pub use super::errors::DecodeError;

/// Encodes `data` as text in the given alphabet.
///
/// The output contains only alphabet characters and is never empty: the
/// empty input encodes to the alphabet's zero digit.
pub fn encode(data: &[u8], alphabet: &Alphabet) -> String {
    let mut encoder = Encoder::with_capacity(alphabet, data.len());
    encoder.update(data);
    encoder.finish()
}

/// Decodes text produced by [`encode`] with the same alphabet.
///
/// The empty string decodes to no bytes. Whitespace is not skipped; use
/// [`decode_text`](crate::decode_text) or strip it first.
///
/// # Errors
///
/// `InvalidCharacter` for the first character not in the alphabet. No bytes
/// are returned in that case.
pub fn decode(encoded: &str, alphabet: &Alphabet) -> Result<Vec<u8>, DecodeError> {
    let mut decoder = Decoder::new(alphabet);
    decoder.feed(encoded)?;
    Ok(decoder.finish())
}
