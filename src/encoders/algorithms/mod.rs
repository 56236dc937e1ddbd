pub mod decoder;
pub mod encoder;
pub mod errors;
pub mod interval;
pub mod place_values;
pub mod radix;

// Re-export error types for public API
pub use errors::{AlphabetError, AlphabetNotFoundError, DecodeError, Error, find_closest_alphabet};
