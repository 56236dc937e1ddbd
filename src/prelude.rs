//! Convenient re-exports for common usage.
//!
//! This module provides a single import for the most commonly used types
//! and functions in base-k.
//!
//! # Example
//!
//! ```
//! use base_k::prelude::*;
//!
//! let registry = AlphabetRegistry::load_default().unwrap();
//! let alphabet = registry.build_alphabet("base58").unwrap();
//! let encoded = encode(b"Hello", &alphabet);
//! assert_eq!(decode(&encoded, &alphabet).unwrap(), b"Hello");
//! ```

pub use crate::{
    ALPHABET_94,
    Alphabet,
    AlphabetCache,
    AlphabetError,
    // Config
    AlphabetRegistry,
    AlphabetSpec,
    DecodeError,
    Decoder,
    // Incremental
    Encoder,
    Error,
    // Core encoding/decoding
    decode,
    decode_text,
    decode_with,
    encode,
    encode_text,
    encode_with,
};
