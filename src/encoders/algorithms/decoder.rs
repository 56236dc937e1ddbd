use super::errors::DecodeError;
use super::interval::{Interval, Step};
use super::place_values::PlaceValues;
use crate::core::alphabet::Alphabet;

/// Incremental text-to-bytes decoder.
///
/// Each [`feed`](Decoder::feed) call validates its whole chunk before any of
/// it is consumed. The most recent digit is held back until more input or
/// [`finish`](Decoder::finish) arrives, because only the final digit of a
/// stream carries the terminating meaning.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    alphabet: &'a Alphabet,
    pv: &'static PlaceValues,
    interval: Interval,
    /// Digits read so far but not yet shifted out, weighted by place value
    acc: u64,
    depth: usize,
    held: Option<u8>,
    position: usize,
    output: Vec<u8>,
}

impl<'a> Decoder<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        let pv = PlaceValues::for_base(alphabet.base());
        Decoder {
            alphabet,
            pv,
            interval: Interval::full(pv),
            acc: 0,
            depth: 0,
            held: None,
            position: 0,
            output: Vec::new(),
        }
    }

    /// Consumes a chunk of encoded text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCharacter` for the first character not in the alphabet,
    /// with its position counted across every chunk fed so far. The decoder
    /// state is left untouched in that case.
    pub fn feed(&mut self, text: &str) -> Result<(), DecodeError> {
        validate(text, self.alphabet, self.position)?;

        self.output.reserve(self.pv.decoded_len_hint(text.len()));
        let alphabet = self.alphabet;
        let digits = alphabet.char_to_digit_map();
        for byte in text.bytes() {
            if let Some(previous) = self.held.replace(digits[byte as usize]) {
                self.consume(previous, false);
            }
        }
        self.position += text.len();
        Ok(())
    }

    /// Bytes recovered so far.
    pub fn pending_output(&self) -> &[u8] {
        &self.output
    }

    /// Consumes the held final digit and returns every decoded byte.
    pub fn finish(mut self) -> Vec<u8> {
        if let Some(last) = self.held.take() {
            self.consume(last, true);
        }
        self.output
    }

    fn consume(&mut self, digit: u8, last: bool) {
        let pv = self.pv;
        debug_assert!(self.depth < pv.precision());
        self.acc += pv.get(self.depth + 1) * u64::from(digit);
        self.depth += 1;

        if last && digit == 0 {
            return;
        }

        loop {
            let window_end = self.acc + pv.get(self.depth) - 1;
            let byte = self.interval.slice_of(self.acc);
            if byte != self.interval.slice_of(window_end) {
                break;
            }

            self.output.push(byte as u8);
            if last {
                break;
            }

            self.interval.narrow(byte as u8);
            self.renormalize();
        }
    }

    /// Replays the encoder's renormalization on both the interval and the window.
    fn renormalize(&mut self) {
        let base = self.pv.base();
        let p1 = self.pv.get(1);
        let p2 = self.pv.get(2);

        loop {
            match self.interval.step(self.pv) {
                Step::Shifted(_) => {
                    self.acc = (self.acc % p1) * base;
                }
                Step::Folded(_) => {
                    self.acc = self.acc - self.acc % p1 + (self.acc % p2) * base;
                }
                Step::Settled => break,
            }
            self.depth -= 1;
        }
    }
}

/// Rejects the first character outside `alphabet`. `offset` shifts reported
/// positions for streamed input.
fn validate(text: &str, alphabet: &Alphabet, offset: usize) -> Result<(), DecodeError> {
    for (index, c) in text.chars().enumerate() {
        let known = c.is_ascii() && alphabet.decode_byte(c as u8).is_some();
        if !known {
            let err = DecodeError::invalid_character(c, index, text, &alphabet.describe_valid());
            return Err(err.offset_by(offset));
        }
    }
    Ok(())
}
