use super::alphabet::{Alphabet, AlphabetSpec};
use crate::encoders::algorithms::errors::Error;
use crate::encoders::radix::{decode, encode};
use crate::encoders::text::{decode_text, encode_text};
use std::ops::Deref;
use std::sync::Arc;

/// Remembers the most recently built alphabet.
///
/// Callers that keep passing the same alphabet text pay for validation once.
/// A different text replaces the slot. The cache is an ordinary value: keep one
/// per thread, or put it behind a lock to share it.
///
/// # Example
///
/// ```
/// use base_k::{ALPHABET_94, AlphabetCache};
///
/// let mut cache = AlphabetCache::new();
/// let text = cache.encode(b"\x00\x01", &ALPHABET_94[..85]).unwrap();
/// assert_eq!(cache.decode(&text, &ALPHABET_94[..85]).unwrap(), b"\x00\x01");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AlphabetCache {
    slot: Option<Arc<Alphabet>>,
}

/// An alphabet resolved from an [`AlphabetSpec`].
#[derive(Debug, Clone)]
pub enum Resolved<'a> {
    Borrowed(&'a Alphabet),
    Cached(Arc<Alphabet>),
}

impl Deref for Resolved<'_> {
    type Target = Alphabet;

    fn deref(&self) -> &Alphabet {
        match self {
            Resolved::Borrowed(alphabet) => alphabet,
            Resolved::Cached(alphabet) => alphabet,
        }
    }
}

impl AlphabetCache {
    /// An empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache primed with the default 85-symbol alphabet.
    pub fn with_default() -> Self {
        AlphabetCache {
            slot: Alphabet::from_prefix(85).ok().map(Arc::new),
        }
    }

    /// The alphabet currently held, if any.
    pub fn current(&self) -> Option<&Arc<Alphabet>> {
        self.slot.as_ref()
    }

    /// Returns a built alphabet as is, otherwise the cached alphabet when its
    /// text matches, otherwise builds and caches a new one.
    ///
    /// A failed build leaves the previous entry in place.
    pub fn resolve<'a>(&mut self, spec: impl Into<AlphabetSpec<'a>>) -> Result<Resolved<'a>, Error> {
        let text = match spec.into() {
            AlphabetSpec::Built(alphabet) => return Ok(Resolved::Borrowed(alphabet)),
            AlphabetSpec::Text(text) => text,
        };

        if let Some(cached) = &self.slot
            && cached.as_str() == text
        {
            return Ok(Resolved::Cached(Arc::clone(cached)));
        }

        let alphabet = Arc::new(Alphabet::new(text)?);
        self.slot = Some(Arc::clone(&alphabet));
        Ok(Resolved::Cached(alphabet))
    }

    pub fn encode<'a>(
        &mut self,
        data: &[u8],
        spec: impl Into<AlphabetSpec<'a>>,
    ) -> Result<String, Error> {
        let alphabet = self.resolve(spec)?;
        Ok(encode(data, &alphabet))
    }

    pub fn decode<'a>(
        &mut self,
        encoded: &str,
        spec: impl Into<AlphabetSpec<'a>>,
    ) -> Result<Vec<u8>, Error> {
        let alphabet = self.resolve(spec)?;
        Ok(decode(encoded, &alphabet)?)
    }

    pub fn encode_text<'a>(
        &mut self,
        text: &str,
        spec: impl Into<AlphabetSpec<'a>>,
    ) -> Result<String, Error> {
        let alphabet = self.resolve(spec)?;
        Ok(encode_text(text, &alphabet))
    }

    pub fn decode_text<'a>(
        &mut self,
        encoded: &str,
        spec: impl Into<AlphabetSpec<'a>>,
    ) -> Result<String, Error> {
        let alphabet = self.resolve(spec)?;
        Ok(decode_text(encoded, &alphabet)?)
    }
}
