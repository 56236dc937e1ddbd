//! WebAssembly bindings for base-k
//!
//! Provides a JavaScript-friendly API for encoding and decoding. Alphabets
//! passed as strings go through a per-thread [`AlphabetCache`], so repeated
//! calls with the same alphabet validate it once.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::core::alphabet::{ALPHABET_94, Alphabet};
use crate::core::cache::AlphabetCache;
use crate::core::config::AlphabetRegistry;
use crate::encoders::algorithms::errors::Error;
use crate::{decode as decode_internal, encode as encode_internal};

thread_local! {
    static CACHE: RefCell<AlphabetCache> = RefCell::new(AlphabetCache::with_default());
}

/// Error type for WASM operations
#[wasm_bindgen]
#[derive(Debug)]
pub struct WasmError {
    message: String,
    character: Option<char>,
}

#[wasm_bindgen]
impl WasmError {
    /// Get the error message
    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }

    /// The offending character, when the error names one
    #[wasm_bindgen(getter)]
    pub fn character(&self) -> Option<String> {
        self.character.map(String::from)
    }
}

impl From<Error> for WasmError {
    fn from(err: Error) -> Self {
        Self {
            character: err.character(),
            message: err.to_string(),
        }
    }
}

impl From<String> for WasmError {
    fn from(message: String) -> Self {
        Self {
            message,
            character: None,
        }
    }
}

/// A validated alphabet that can be reused without going through the cache
#[wasm_bindgen(js_name = Alphabet)]
pub struct WasmAlphabet {
    inner: Alphabet,
}

#[wasm_bindgen(js_class = Alphabet)]
impl WasmAlphabet {
    #[wasm_bindgen(constructor)]
    pub fn new(chars: &str) -> Result<WasmAlphabet, WasmError> {
        let inner = Alphabet::new(chars).map_err(Error::from)?;
        Ok(WasmAlphabet { inner })
    }

    #[wasm_bindgen(getter)]
    pub fn base(&self) -> usize {
        self.inner.base()
    }

    #[wasm_bindgen(getter)]
    pub fn chars(&self) -> String {
        self.inner.as_str().to_string()
    }

    pub fn encode(&self, data: &[u8]) -> String {
        encode_internal(data, &self.inner)
    }

    pub fn decode(&self, encoded: &str) -> Result<Vec<u8>, WasmError> {
        decode_internal(encoded, &self.inner).map_err(|e| Error::from(e).into())
    }
}

/// Accepts only values that arrived as JavaScript strings.
fn require_string(value: Option<String>, parameter: &'static str) -> Result<String, Error> {
    value.ok_or(Error::TypeMismatch { parameter })
}

fn with_cache<T>(f: impl FnOnce(&mut AlphabetCache) -> Result<T, Error>) -> Result<T, WasmError> {
    CACHE.with(|cache| f(&mut cache.borrow_mut())).map_err(WasmError::from)
}

/// Encode bytes with the alphabet given as a string
#[wasm_bindgen]
pub fn encode(data: &[u8], alphabet: &str) -> Result<String, WasmError> {
    with_cache(|cache| cache.encode(data, alphabet))
}

/// Decode text back to bytes
#[wasm_bindgen]
pub fn decode(encoded: &str, alphabet: &str) -> Result<Vec<u8>, WasmError> {
    with_cache(|cache| cache.decode(encoded, alphabet))
}

/// Encode a JavaScript string as UTF-8
#[wasm_bindgen(js_name = encodeText)]
pub fn encode_text(text: JsValue, alphabet: &str) -> Result<String, WasmError> {
    encode_text_value(text.as_string(), alphabet)
}

/// Decode to a JavaScript string, ignoring whitespace in the input
#[wasm_bindgen(js_name = decodeText)]
pub fn decode_text(encoded: JsValue, alphabet: &str) -> Result<String, WasmError> {
    decode_text_value(encoded.as_string(), alphabet)
}

fn encode_text_value(text: Option<String>, alphabet: &str) -> Result<String, WasmError> {
    let text = require_string(text, "text")?;
    with_cache(|cache| cache.encode_text(&text, alphabet))
}

fn decode_text_value(encoded: Option<String>, alphabet: &str) -> Result<String, WasmError> {
    let encoded = require_string(encoded, "text")?;
    with_cache(|cache| cache.decode_text(&encoded, alphabet))
}

/// The 94-character reference alphabet
#[wasm_bindgen(js_name = alphabet94)]
pub fn alphabet_94() -> String {
    ALPHABET_94.to_string()
}

/// Names of the built-in alphabets
#[wasm_bindgen(js_name = listAlphabets)]
pub fn list_alphabets() -> Result<Vec<String>, WasmError> {
    let registry = AlphabetRegistry::load_default()
        .map_err(|e| WasmError::from(format!("Failed to load registry: {}", e)))?;
    Ok(registry.names())
}

/// Characters of a built-in alphabet
#[wasm_bindgen(js_name = alphabetChars)]
pub fn alphabet_chars(name: &str) -> Result<String, WasmError> {
    let registry = AlphabetRegistry::load_default()
        .map_err(|e| WasmError::from(format!("Failed to load registry: {}", e)))?;
    let alphabet = registry
        .build_alphabet(name)
        .map_err(|e| WasmError::from(e.to_string()))?;
    Ok(alphabet.as_str().to_string())
}
