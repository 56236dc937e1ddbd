use crate::encoders::algorithms::errors::AlphabetError;
use std::fmt;
use std::str::FromStr;

/// The 94 printable, non-space ASCII characters in their canonical order.
///
/// Any prefix of two or more characters is itself a valid alphabet; the first
/// 85 characters form the default `base85` alphabet.
pub const ALPHABET_94: &str = concat!(
    "0123456789",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcdefghijklmnopqrstuvwxyz",
    "-_|~^>.!()*+,;=@:[]{}'$#?/%<&\"\\`",
);

/// Marks an unused slot in the character-to-digit table.
const ABSENT: u8 = u8::MAX;

/// An ordered set of 2 to 255 distinct ASCII symbols defining one base-k encoding.
///
/// Digit `i` is written as the `i`-th character. Lookups in both directions are
/// table-driven. Immutable once built, so it can be shared freely across threads.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: String,
    char_to_digit: [u8; 256],
    digit_to_char: Vec<u8>,
}

impl Alphabet {
    /// Validates `chars` and builds both lookup tables.
    ///
    /// # Errors
    ///
    /// Scanning left to right, the first whitespace, non-ASCII or repeated
    /// character is reported. A string with fewer than two characters is
    /// rejected after the scan.
    pub fn new(chars: &str) -> Result<Self, AlphabetError> {
        let mut char_to_digit = [ABSENT; 256];
        let mut digit_to_char = Vec::with_capacity(chars.len());

        for c in chars.chars() {
            if c.is_whitespace() {
                return Err(AlphabetError::Whitespace(c));
            }
            if !c.is_ascii() {
                return Err(AlphabetError::NonAscii(c));
            }
            let byte = c as u8;
            if char_to_digit[byte as usize] != ABSENT {
                return Err(AlphabetError::Repeated(c));
            }
            char_to_digit[byte as usize] = digit_to_char.len() as u8;
            digit_to_char.push(byte);
        }

        if digit_to_char.len() < 2 {
            return Err(AlphabetError::TooShort(digit_to_char.len()));
        }

        Ok(Alphabet {
            chars: chars.to_string(),
            char_to_digit,
            digit_to_char,
        })
    }

    /// The alphabet made of the first `len` characters of [`ALPHABET_94`].
    pub fn from_prefix(len: usize) -> Result<Self, AlphabetError> {
        Self::new(&ALPHABET_94[..len.min(ALPHABET_94.len())])
    }

    /// Returns the base (radix) of the alphabet.
    pub fn base(&self) -> usize {
        self.digit_to_char.len()
    }

    /// The source text the alphabet was built from.
    pub fn as_str(&self) -> &str {
        &self.chars
    }

    /// 256-slot table from byte value to digit, `255` where absent.
    pub fn char_to_digit_map(&self) -> &[u8; 256] {
        &self.char_to_digit
    }

    /// Digit-indexed table of symbol bytes.
    pub fn digit_to_char_map(&self) -> &[u8] {
        &self.digit_to_char
    }

    /// Encodes a digit (0 to base-1) as a character.
    ///
    /// Returns `None` if the digit is out of range.
    pub fn encode_digit(&self, digit: usize) -> Option<char> {
        self.digit_to_char.get(digit).map(|&b| b as char)
    }

    /// Decodes a character back to its digit value.
    ///
    /// Returns `None` if the character is not in the alphabet.
    pub fn decode_char(&self, c: char) -> Option<usize> {
        if !c.is_ascii() {
            return None;
        }
        self.decode_byte(c as u8).map(usize::from)
    }

    #[inline]
    pub(crate) fn decode_byte(&self, byte: u8) -> Option<u8> {
        match self.char_to_digit[byte as usize] {
            ABSENT => None,
            digit => Some(digit),
        }
    }

    #[inline]
    pub(crate) fn symbol(&self, digit: u8) -> char {
        self.digit_to_char[digit as usize] as char
    }

    /// Characters accepted by the decoder, abbreviated for large alphabets.
    pub(crate) fn describe_valid(&self) -> String {
        if self.base() <= 64 {
            self.chars.clone()
        } else {
            format!("{} characters in alphabet", self.base())
        }
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("base", &self.base())
            .field("chars", &self.chars)
            .finish()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.chars)
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// An alphabet argument that is either already built or still raw text.
#[derive(Debug, Clone, Copy)]
pub enum AlphabetSpec<'a> {
    Built(&'a Alphabet),
    Text(&'a str),
}

impl<'a> From<&'a Alphabet> for AlphabetSpec<'a> {
    fn from(alphabet: &'a Alphabet) -> Self {
        AlphabetSpec::Built(alphabet)
    }
}

impl<'a> From<&'a str> for AlphabetSpec<'a> {
    fn from(text: &'a str) -> Self {
        AlphabetSpec::Text(text)
    }
}

impl<'a> From<&'a String> for AlphabetSpec<'a> {
    fn from(text: &'a String) -> Self {
        AlphabetSpec::Text(text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_94_shape() {
        assert_eq!(ALPHABET_94.len(), 94);
        assert!(ALPHABET_94.starts_with("0123456789ABC"));
        assert!(ALPHABET_94.ends_with("<&\"\\`"));
        let alphabet = Alphabet::new(ALPHABET_94).unwrap();
        assert_eq!(alphabet.base(), 94);
    }

    #[test]
    fn test_maps_are_inverse() {
        let alphabet = Alphabet::from_prefix(85).unwrap();
        let to_digit = alphabet.char_to_digit_map();
        for (digit, &byte) in alphabet.digit_to_char_map().iter().enumerate() {
            assert_eq!(to_digit[byte as usize] as usize, digit);
        }
        let present = to_digit.iter().filter(|&&d| d != ABSENT).count();
        assert_eq!(present, 85);
    }

    #[test]
    fn test_digit_lookup() {
        let alphabet = Alphabet::new("01").unwrap();
        assert_eq!(alphabet.encode_digit(1), Some('1'));
        assert_eq!(alphabet.encode_digit(2), None);
        assert_eq!(alphabet.decode_char('0'), Some(0));
        assert_eq!(alphabet.decode_char('Z'), None);
        assert_eq!(alphabet.decode_char('é'), None);
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(Alphabet::new("aa"), Err(AlphabetError::Repeated('a')));
        assert_eq!(Alphabet::new("a"), Err(AlphabetError::TooShort(1)));
        assert_eq!(Alphabet::new(""), Err(AlphabetError::TooShort(0)));
        assert_eq!(Alphabet::new("a b"), Err(AlphabetError::Whitespace(' ')));
        assert_eq!(Alphabet::new("ab\t"), Err(AlphabetError::Whitespace('\t')));
        assert_eq!(Alphabet::new("abé"), Err(AlphabetError::NonAscii('é')));
    }

    #[test]
    fn test_validation_order_is_left_to_right() {
        // The first bad character wins, whatever kind of fault it is
        assert_eq!(Alphabet::new("aa b"), Err(AlphabetError::Repeated('a')));
        assert_eq!(Alphabet::new("a ba"), Err(AlphabetError::Whitespace(' ')));
        // A single bad character is reported before the length check
        assert_eq!(Alphabet::new(" "), Err(AlphabetError::Whitespace(' ')));
    }

    #[test]
    fn test_every_prefix_is_valid() {
        for len in 2..=94 {
            let alphabet = Alphabet::from_prefix(len).unwrap();
            assert_eq!(alphabet.base(), len);
            assert_eq!(alphabet.as_str(), &ALPHABET_94[..len]);
        }
    }

    #[test]
    fn test_control_characters_are_accepted() {
        // Only whitespace is excluded from the ASCII range
        let alphabet = Alphabet::new("\u{1}\u{2}\u{7f}").unwrap();
        assert_eq!(alphabet.base(), 3);
        assert_eq!(alphabet.decode_char('\u{7f}'), Some(2));
    }

    #[test]
    fn test_from_str_and_display() {
        let alphabet: Alphabet = "xyz".parse().unwrap();
        assert_eq!(alphabet.to_string(), "xyz");
        assert!(format!("{:?}", alphabet).contains("base: 3"));
    }
}
