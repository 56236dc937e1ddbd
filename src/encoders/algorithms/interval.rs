//! The coding interval shared by the encoder and the decoder.
//!
//! Both directions replay the exact same sequence of narrowings, shifts and
//! folds, which is what keeps them in lockstep.

use super::place_values::PlaceValues;

/// Closed range `[lo, hi]` of `n`-digit values, `0 <= lo <= hi < M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub lo: u64,
    pub hi: u64,
}

/// Outcome of one renormalization step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Both ends agreed on the leading digit, which was shifted out.
    Shifted(u64),
    /// The ends straddled a leading-digit boundary by one unit; the second
    /// digit was folded away. Carries the low end's leading digit.
    Folded(u64),
    /// The interval is wide enough to take another byte.
    Settled,
}

impl Interval {
    /// The whole coding range `[0, M - 1]`.
    pub fn full(pv: &PlaceValues) -> Self {
        Interval {
            lo: 0,
            hi: pv.modulus() - 1,
        }
    }

    #[inline]
    pub fn width(&self) -> u64 {
        self.hi - self.lo + 1
    }

    /// Keeps the `byte`-th of 256 near-equal slices.
    #[inline]
    pub fn narrow(&mut self, byte: u8) {
        let width = self.width();
        let start = u64::from(byte) * width;
        self.hi = self.lo + (start + width).div_ceil(256) - 1;
        self.lo += start.div_ceil(256);
    }

    /// First value of slice `slice` (`1..=255`); slice 0 starts at `lo`.
    #[inline]
    pub fn slice_start(&self, slice: u64) -> u64 {
        self.lo + (slice * self.width()).div_ceil(256)
    }

    /// Which slice `value` falls in. `value` must lie within the interval.
    #[inline]
    pub fn slice_of(&self, value: u64) -> u64 {
        (value - self.lo) * 256 / self.width()
    }

    #[inline]
    pub fn contains_block(&self, start: u64, size: u64) -> bool {
        start >= self.lo && start + size - 1 <= self.hi
    }

    /// Performs one renormalization step.
    pub fn step(&mut self, pv: &PlaceValues) -> Step {
        let base = pv.base();
        let p1 = pv.get(1);
        let p2 = pv.get(2);
        let lead_lo = self.lo / p1;
        let lead_hi = self.hi / p1;

        if lead_lo == lead_hi {
            self.lo = (self.lo % p1) * base;
            self.hi = (self.hi % p1) * base + base - 1;
            return Step::Shifted(lead_lo);
        }

        if lead_hi - lead_lo == 1 && self.hi / p2 - self.lo / p2 == 1 {
            self.lo = lead_lo * p1 + (self.lo % p2) * base;
            self.hi = lead_hi * p1 + (self.hi % p2) * base + base - 1;
            return Step::Folded(lead_lo);
        }

        Step::Settled
    }

    /// Maps an enclosing interval through a shift of digit `digit`, clamping to
    /// the values that remain representable.
    pub fn follow_shift(&mut self, digit: u64, pv: &PlaceValues) {
        let base = pv.base();
        let p1 = pv.get(1);
        let floor = digit * p1;
        let ceiling = floor + p1 - 1;

        self.lo = if self.lo < floor {
            0
        } else {
            (self.lo - floor) * base
        };
        self.hi = if self.hi > ceiling {
            pv.modulus() - 1
        } else {
            (self.hi - floor) * base + base - 1
        };
    }

    /// Maps an enclosing interval through a fold whose low leading digit was
    /// `lead`, clamping to the values the fold keeps.
    pub fn follow_fold(&mut self, lead: u64, pv: &PlaceValues) {
        let base = pv.base();
        let p1 = pv.get(1);
        let p2 = pv.get(2);

        let lo = self.lo.max(lead * p1 + (base - 1) * p2);
        let hi = self.hi.min((lead + 1) * p1 + p2 - 1);
        self.lo = (lo / p1) * p1 + (lo % p2) * base;
        self.hi = (hi / p1) * p1 + (hi % p2) * base + base - 1;
    }
}
