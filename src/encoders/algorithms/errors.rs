use std::fmt;
use std::string::FromUtf8Error;

/// Reasons an alphabet string is rejected.
///
/// Validation stops at the first offending character, scanning left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlphabetError {
    /// The alphabet contains a whitespace character
    Whitespace(char),
    /// The alphabet contains a character above U+007F
    NonAscii(char),
    /// The same character appears twice
    Repeated(char),
    /// Fewer than two characters
    TooShort(usize),
}

impl AlphabetError {
    /// The character that failed validation, if the error names one.
    pub fn character(&self) -> Option<char> {
        match self {
            AlphabetError::Whitespace(c)
            | AlphabetError::NonAscii(c)
            | AlphabetError::Repeated(c) => Some(*c),
            AlphabetError::TooShort(_) => None,
        }
    }
}

impl fmt::Display for AlphabetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlphabetError::Whitespace(c) => {
                write!(f, "alphabet cannot contain whitespace ({:?})", c)
            }
            AlphabetError::NonAscii(c) => write!(
                f,
                "alphabet cannot contain non-ASCII character '{}' (U+{:04X})",
                c, *c as u32
            ),
            AlphabetError::Repeated(c) => {
                write!(f, "alphabet cannot contain repeated character '{}'", c)
            }
            AlphabetError::TooShort(len) => write!(
                f,
                "alphabet must have at least 2 characters, got {}",
                len
            ),
        }
    }
}

impl std::error::Error for AlphabetError {}

/// Errors that can occur during decoding.
#[derive(Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a character not in the alphabet
    InvalidCharacter {
        char: char,
        /// Character index in the whole input, across streamed chunks
        position: usize,
        /// Excerpt of the input around the offending character
        input: String,
        /// Where the caret goes under `input`
        column: usize,
        valid_chars: String,
    },
    /// The decoded bytes are not UTF-8 (text decoding only)
    InvalidUtf8(FromUtf8Error),
}

impl DecodeError {
    /// Create an InvalidCharacter error with context.
    ///
    /// `position` is the character index of `c` within `input`.
    pub fn invalid_character(c: char, position: usize, input: &str, valid_chars: &str) -> Self {
        let (excerpt, column) = excerpt_around(input, position);

        DecodeError::InvalidCharacter {
            char: c,
            position,
            input: excerpt,
            column,
            valid_chars: truncate_chars(valid_chars, HINT_LEN),
        }
    }

    /// Shifts the reported position by `offset` characters read before `input`.
    /// The excerpt and caret are unchanged.
    pub fn offset_by(mut self, offset: usize) -> Self {
        if let DecodeError::InvalidCharacter { position, .. } = &mut self {
            *position += offset;
        }
        self
    }

    /// The offending character for `InvalidCharacter`.
    pub fn character(&self) -> Option<char> {
        match self {
            DecodeError::InvalidCharacter { char, .. } => Some(*char),
            DecodeError::InvalidUtf8(_) => None,
        }
    }
}

const EXCERPT_LEN: usize = 60;
const HINT_LEN: usize = 80;

/// Cuts `text` after `limit` characters, marking the cut with `...`.
fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// A window of at most `EXCERPT_LEN` characters of `input` that contains
/// character `index`, with the caret column inside that window.
fn excerpt_around(input: &str, index: usize) -> (String, usize) {
    if index < EXCERPT_LEN {
        return (truncate_chars(input, EXCERPT_LEN), index);
    }

    let start = index - EXCERPT_LEN / 2;
    let from = input
        .char_indices()
        .nth(start)
        .map_or(input.len(), |(byte, _)| byte);
    let window = truncate_chars(&input[from..], EXCERPT_LEN);
    (format!("...{}", window), index - start + 3)
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            DecodeError::InvalidCharacter {
                char: c,
                position,
                input,
                column,
                valid_chars,
            } => {
                if use_color {
                    writeln!(
                        f,
                        "\x1b[1;31merror:\x1b[0m invalid character {:?} at position {}",
                        c, position
                    )?;
                } else {
                    writeln!(f, "error: invalid character {:?} at position {}", c, position)?;
                }
                writeln!(f)?;

                writeln!(f, "  {}", input)?;
                write!(f, "  {}", " ".repeat(*column))?;
                if use_color {
                    writeln!(f, "\x1b[1;31m^\x1b[0m")?;
                } else {
                    writeln!(f, "^")?;
                }
                writeln!(f)?;

                if use_color {
                    write!(f, "\x1b[1;36mhint:\x1b[0m valid characters: {}", valid_chars)?;
                } else {
                    write!(f, "hint: valid characters: {}", valid_chars)?;
                }
                Ok(())
            }
            DecodeError::InvalidUtf8(err) => {
                if use_color {
                    write!(f, "\x1b[1;31merror:\x1b[0m decoded bytes are not valid UTF-8")?;
                } else {
                    write!(f, "error: decoded bytes are not valid UTF-8")?;
                }
                write!(f, " ({})", err.utf8_error())
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::InvalidUtf8(err) => Some(err),
            DecodeError::InvalidCharacter { .. } => None,
        }
    }
}

impl From<FromUtf8Error> for DecodeError {
    fn from(err: FromUtf8Error) -> Self {
        DecodeError::InvalidUtf8(err)
    }
}

/// Every failure the codec API can report.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// The alphabet text failed validation
    InvalidAlphabet(AlphabetError),
    /// The input could not be decoded
    Decode(DecodeError),
    /// A loosely typed caller passed the wrong kind of value
    TypeMismatch { parameter: &'static str },
}

impl Error {
    /// The character that caused the failure, when there is one.
    pub fn character(&self) -> Option<char> {
        match self {
            Error::InvalidAlphabet(err) => err.character(),
            Error::Decode(err) => err.character(),
            Error::TypeMismatch { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidAlphabet(err) => write!(f, "invalid alphabet: {}", err),
            Error::Decode(err) => write!(f, "{}", err),
            Error::TypeMismatch { parameter } => {
                write!(f, "parameter '{}' has the wrong type", parameter)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidAlphabet(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::TypeMismatch { .. } => None,
        }
    }
}

impl From<AlphabetError> for Error {
    fn from(err: AlphabetError) -> Self {
        Error::InvalidAlphabet(err)
    }
}

impl From<DecodeError> for Error {
    fn from(err: DecodeError) -> Self {
        Error::Decode(err)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Error when a named alphabet is not in the registry
#[derive(Debug)]
pub struct AlphabetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl AlphabetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for AlphabetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(f, "\x1b[1;31merror:\x1b[0m alphabet '{}' not found", self.name)?;
        } else {
            writeln!(f, "error: alphabet '{}' not found", self.name)?;
        }

        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`base-k list`\x1b[0m to see all alphabets"
            )
        } else {
            write!(f, "      run `base-k list` to see all alphabets")
        }
    }
}

impl std::error::Error for AlphabetNotFoundError {}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len2 = s2.chars().count();
    if s1.is_empty() {
        return len2;
    }
    if len2 == 0 {
        return s1.chars().count();
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching alphabet name
pub fn find_closest_alphabet(name: &str, available: &[String]) -> Option<String> {
    // 1-2 character typos for short names, up to 3 for longer ones
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)))
        .map(|(_, candidate)| candidate.clone())
}
