use std::sync::OnceLock;

/// Largest modulus allowed for the coding interval.
///
/// Keeping every place value at or below `u64::MAX / 256` means the widest
/// product the coder forms, `256 * width`, never leaves `u64`.
const LIMIT: u64 = u64::MAX / 256;

/// Smallest and largest radix with a ladder.
pub const MIN_BASE: usize = 2;
pub const MAX_BASE: usize = 255;

/// Descending powers of one base: `P[0] = M`, `P[n] = 1`, `P[i] = base^(n - i)`.
///
/// `M` is the largest power of `base` not exceeding [`LIMIT`], so `n` is the
/// number of digits the coding interval carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceValues {
    base: u64,
    powers: Vec<u64>,
}

impl PlaceValues {
    fn build(base: u64) -> Self {
        let mut powers = vec![1u64];
        let mut p = 1u64;
        while base * p <= LIMIT {
            p *= base;
            powers.push(p);
        }
        powers.reverse();
        PlaceValues { base, powers }
    }

    /// The shared ladder for `base`, computed once per process for all bases.
    ///
    /// # Panics
    ///
    /// Panics if `base` is outside `2..=255`; every [`Alphabet`](crate::Alphabet)
    /// satisfies this.
    pub fn for_base(base: usize) -> &'static PlaceValues {
        static TABLE: OnceLock<Vec<PlaceValues>> = OnceLock::new();
        assert!(
            (MIN_BASE..=MAX_BASE).contains(&base),
            "no place values for base {}",
            base
        );
        let table = TABLE.get_or_init(|| {
            (MIN_BASE..=MAX_BASE)
                .map(|b| PlaceValues::build(b as u64))
                .collect()
        });
        &table[base - MIN_BASE]
    }

    #[inline]
    pub fn base(&self) -> u64 {
        self.base
    }

    /// Number of digits in the interval, `n`.
    #[inline]
    pub fn precision(&self) -> usize {
        self.powers.len() - 1
    }

    /// The interval modulus `M = P[0]`.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.powers[0]
    }

    /// `P[i]`.
    #[inline]
    pub fn get(&self, index: usize) -> u64 {
        self.powers[index]
    }

    /// All place values, largest first.
    pub fn as_slice(&self) -> &[u64] {
        &self.powers
    }

    /// Output digits carried per input byte, `8 / log2(base)`.
    pub fn size_factor(&self) -> f64 {
        8.0 / (self.base as f64).log2()
    }

    /// Initial capacity for encoding `len` bytes.
    pub fn encoded_len_hint(&self, len: usize) -> usize {
        (len as f64 * self.size_factor()).ceil() as usize + 16
    }

    /// Initial capacity for decoding `len` digits.
    pub fn decoded_len_hint(&self, len: usize) -> usize {
        (len as f64 / self.size_factor()).ceil() as usize + 1
    }
}
