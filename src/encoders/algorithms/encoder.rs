use super::interval::{Interval, Step};
use super::place_values::PlaceValues;
use crate::core::alphabet::Alphabet;

/// Incremental bytes-to-text encoder.
///
/// Bytes may be fed in any number of [`update`](Encoder::update) calls; the
/// output after [`finish`](Encoder::finish) is identical to a single
/// [`encode`](crate::encode) over the concatenated input.
///
/// # Example
///
/// ```
/// use base_k::{Alphabet, Encoder, decode};
///
/// let alphabet = Alphabet::from_prefix(85).unwrap();
/// let mut encoder = Encoder::new(&alphabet);
/// encoder.update(b"Hello, ");
/// encoder.update(b"world!");
/// let text = encoder.finish();
/// assert_eq!(decode(&text, &alphabet).unwrap(), b"Hello, world!");
/// ```
#[derive(Debug, Clone)]
pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
    pv: &'static PlaceValues,
    interval: Interval,
    /// The interval before the most recent byte, in current digit coordinates.
    previous: Option<Interval>,
    deferred: usize,
    deferred_lead: u64,
    output: String,
}

impl<'a> Encoder<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self::with_capacity(alphabet, 0)
    }

    /// Starts an encoder sized for roughly `len` input bytes.
    pub fn with_capacity(alphabet: &'a Alphabet, len: usize) -> Self {
        let pv = PlaceValues::for_base(alphabet.base());
        Encoder {
            alphabet,
            pv,
            interval: Interval::full(pv),
            previous: None,
            deferred: 0,
            deferred_lead: 0,
            output: String::with_capacity(pv.encoded_len_hint(len)),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.output.reserve(self.pv.encoded_len_hint(data.len()) - 16);
        for &byte in data {
            self.push(byte);
        }
    }

    /// Narrows the interval by one byte and emits every settled digit.
    pub fn push(&mut self, byte: u8) {
        let mut previous = self.interval;
        self.interval.narrow(byte);

        loop {
            match self.interval.step(self.pv) {
                Step::Shifted(digit) => {
                    self.emit(digit);
                    previous.follow_shift(digit, self.pv);
                }
                Step::Folded(lead) => {
                    previous.follow_fold(lead, self.pv);
                    self.deferred += 1;
                    self.deferred_lead = lead;
                }
                Step::Settled => break,
            }
        }

        self.previous = Some(previous);
    }

    /// Digits emitted so far, excluding any still deferred.
    pub fn pending_output(&self) -> &str {
        &self.output
    }

    /// Writes the terminating digits and returns the encoded text.
    pub fn finish(mut self) -> String {
        let (block, depth, last) = self.tail();
        let n = self.pv.precision();
        for i in 0..depth {
            let digit = (block / self.pv.get(n + 1 + i - depth)) % self.pv.base();
            self.emit(digit);
        }
        debug_assert_eq!(self.deferred, 0);
        self.output.push(self.alphabet.symbol(last as u8));
        self.output
    }

    fn emit(&mut self, digit: u64) {
        self.output.push(self.alphabet.symbol(digit as u8));
        if self.deferred > 0 {
            // The deferred digits are all high or all low depending on which
            // side of the fold the resolved prefix landed
            let fill = if digit == self.deferred_lead {
                self.pv.base() - 1
            } else {
                0
            };
            let symbol = self.alphabet.symbol(fill as u8);
            self.output.extend(std::iter::repeat_n(symbol, self.deferred));
            self.deferred = 0;
        }
    }

    /// Finds the shortest tail that stops the decoder after the last byte.
    ///
    /// Returns the block index at `depth` digits and the final digit. A final
    /// `0` marks a block inside the current interval that straddles one of its
    /// slice boundaries, so the decoder can neither infer nor rule out anything
    /// further. A non-zero final digit marks a block that only pins down the
    /// interval before the last byte, whose child then selects the last byte.
    fn tail(&self) -> (u64, usize, u64) {
        let pv = self.pv;
        let base = pv.base();
        let current = self.interval;
        let first_depth = usize::from(self.deferred > 0);

        for depth in first_depth..pv.precision() {
            let size = pv.get(depth);

            for slice in 1..=255 {
                let boundary = current.slice_start(slice);
                if boundary % size != 0 {
                    let block = boundary / size;
                    if current.contains_block(block * size, size) {
                        return (block, depth, 0);
                    }
                }
            }

            if let Some(previous) = self.previous {
                let child = pv.get(depth + 1);
                for edge in [current.lo, current.hi] {
                    let block = edge / size;
                    let start = block * size;
                    if !previous.contains_block(start, size) || current.contains_block(start, size)
                    {
                        continue;
                    }
                    let first = current.lo.max(start).div_ceil(child);
                    let end = (current.hi.min(start + size - 1) + 1) / child;
                    for index in [first, first + 1] {
                        if index < end && index % base != 0 {
                            return (block, depth, index % base);
                        }
                    }
                }
            }
        }

        // A settled interval of width w has slices at most ceil(w / 256) wide,
        // so an aligned block of any size in (w / 256 + 1, w / 2] fits inside
        // it and crosses a slice boundary. For bases up to 127 some place value
        // lands in that range, and alphabets stop at 122 symbols.
        unreachable!("no terminating tail for interval {:?}", current)
    }
}
