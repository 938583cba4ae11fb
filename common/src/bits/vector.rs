//! Fixed-width bit vectors backing the multiplier's registers.
//!
//! A [`BitVector`] is an ordered sequence of `width` bits stored in the low bits of a
//! `u128`. Index 0 is the most significant (sign) bit. The width never changes after
//! construction: every operation below either preserves it or builds a new vector whose
//! width is stated explicitly.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::constants::MAX_VECTOR_WIDTH;
use crate::error::WidthError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitVector {
    bits: u128,
    width: u32,
}

#[inline]
fn mask(width: u32) -> u128 {
    if width >= MAX_VECTOR_WIDTH {
        u128::MAX
    } else {
        (1u128 << width) - 1
    }
}

fn check_width(width: u32) -> Result<(), WidthError> {
    if width == 0 || width > MAX_VECTOR_WIDTH {
        return Err(WidthError::Unsupported {
            width,
            max: MAX_VECTOR_WIDTH,
        });
    }
    Ok(())
}

impl BitVector {
    /// Builds a vector from the low `width` bits of `bits`; higher bits are discarded.
    pub fn new(bits: u128, width: u32) -> Result<Self, WidthError> {
        check_width(width)?;
        Ok(Self {
            bits: bits & mask(width),
            width,
        })
    }

    pub fn zeros(width: u32) -> Result<Self, WidthError> {
        Self::new(0, width)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// The bits read as an unsigned integer.
    pub fn as_u128(&self) -> u128 {
        self.bits
    }

    /// Returns bit `index`, counting from the most significant bit.
    pub fn bit(&self, index: u32) -> Option<bool> {
        if index >= self.width {
            return None;
        }
        Some((self.bits >> (self.width - 1 - index)) & 1 == 1)
    }

    pub fn msb(&self) -> bool {
        (self.bits >> (self.width - 1)) & 1 == 1
    }

    pub fn lsb(&self) -> bool {
        self.bits & 1 == 1
    }

    /// Ones' complement within the vector's width.
    pub fn invert(&self) -> Self {
        Self {
            bits: !self.bits & mask(self.width),
            width: self.width,
        }
    }

    /// Adds `rhs` modulo `2^width`. `rhs` is reduced to `self`'s width first, so the
    /// result always has `self`'s width.
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        debug_assert_eq!(self.width, rhs.width);
        Self {
            bits: self.bits.wrapping_add(rhs.bits) & mask(self.width),
            width: self.width,
        }
    }

    /// Two's-complement negation modulo `2^width`. The most negative value maps to itself.
    pub fn wrapping_neg(&self) -> Self {
        Self {
            bits: self.bits.wrapping_neg() & mask(self.width),
            width: self.width,
        }
    }

    /// Shifts right by one, placing `fill` in the vacated most significant bit.
    ///
    /// Returns the shifted vector together with the bit that fell off the bottom.
    pub fn shift_right_in(&self, fill: bool) -> (Self, bool) {
        let top = (fill as u128) << (self.width - 1);
        let shifted = Self {
            bits: (self.bits >> 1) | top,
            width: self.width,
        };
        (shifted, self.lsb())
    }

    /// Concatenates `self` (high half) with `low`.
    pub fn concat(&self, low: &Self) -> Result<Self, WidthError> {
        let width = self.width + low.width;
        check_width(width)?;
        let high = if low.width >= MAX_VECTOR_WIDTH {
            0
        } else {
            self.bits << low.width
        };
        Ok(Self {
            bits: high | low.bits,
            width,
        })
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = format!("{:0width$b}", self.bits, width = self.width as usize);
        f.pad(&s)
    }
}

impl Serialize for BitVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
