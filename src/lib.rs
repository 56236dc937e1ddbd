//! # base-k
//!
//! Binary-to-text encoding in any radix from 2 to 255.
//!
//! An [`Alphabet`] is any string of distinct, non-whitespace ASCII symbols. The
//! codec treats the input as a stream and converts it with a fixed-width range
//! coder instead of big-integer arithmetic, so memory use is bounded and the
//! output length stays within a couple of digits of `8n / log2(base)`.
//!
//! # Example
//!
//! ```
//! use base_k::{ALPHABET_94, Alphabet, decode, encode};
//!
//! let alphabet = Alphabet::new(&ALPHABET_94[..85]).unwrap();
//! let encoded = encode(b"Hello, world!", &alphabet);
//! assert!(encoded.chars().all(|c| alphabet.decode_char(c).is_some()));
//! assert_eq!(decode(&encoded, &alphabet).unwrap(), b"Hello, world!");
//! ```

mod core;
mod encoders;

#[cfg(feature = "wasm")]
pub mod wasm;

pub mod prelude;

pub use crate::core::alphabet::{ALPHABET_94, Alphabet, AlphabetSpec};
pub use crate::core::cache::{AlphabetCache, Resolved};
pub use crate::core::config::{AlphabetConfig, AlphabetRegistry, Settings};
pub use crate::encoders::algorithms::decoder::Decoder;
pub use crate::encoders::algorithms::encoder::Encoder;
pub use crate::encoders::algorithms::place_values::PlaceValues;
pub use crate::encoders::algorithms::{
    AlphabetError, AlphabetNotFoundError, DecodeError, Error, find_closest_alphabet,
};
pub use crate::encoders::radix::{decode, encode};
pub use crate::encoders::text::{decode_text, encode_text, strip_whitespace, wrap};

/// Encodes with an alphabet given either built or as raw text.
///
/// Raw text is validated on every call; use an [`AlphabetCache`] to reuse it.
pub fn encode_with<'a>(data: &[u8], spec: impl Into<AlphabetSpec<'a>>) -> Result<String, Error> {
    match spec.into() {
        AlphabetSpec::Built(alphabet) => Ok(encode(data, alphabet)),
        AlphabetSpec::Text(text) => Ok(encode(data, &Alphabet::new(text)?)),
    }
}

/// Decodes with an alphabet given either built or as raw text.
pub fn decode_with<'a>(
    encoded: &str,
    spec: impl Into<AlphabetSpec<'a>>,
) -> Result<Vec<u8>, Error> {
    match spec.into() {
        AlphabetSpec::Built(alphabet) => Ok(decode(encoded, alphabet)?),
        AlphabetSpec::Text(text) => Ok(decode(encoded, &Alphabet::new(text)?)?),
    }
}

/// [`encode_text`] with an alphabet given either built or as raw text.
pub fn encode_text_with<'a>(
    text: &str,
    spec: impl Into<AlphabetSpec<'a>>,
) -> Result<String, Error> {
    encode_with(text.as_bytes(), spec)
}

/// [`decode_text`] with an alphabet given either built or as raw text.
pub fn decode_text_with<'a>(
    encoded: &str,
    spec: impl Into<AlphabetSpec<'a>>,
) -> Result<String, Error> {
    match spec.into() {
        AlphabetSpec::Built(alphabet) => Ok(decode_text(encoded, alphabet)?),
        AlphabetSpec::Text(text) => Ok(decode_text(encoded, &Alphabet::new(text)?)?),
    }
}

#[cfg(test)]
mod tests;
