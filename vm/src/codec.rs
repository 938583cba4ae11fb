//! Conversion between signed integers and fixed-width two's-complement bit vectors.
//!
//! Non-negative values are stored as their plain binary expansion, negative values as
//! `2^width + value`. Widths range over `1..=128`, so every `i128` has a representation
//! at width 128.

use booth_common::{constants::MAX_VECTOR_WIDTH, BitVector, WidthError};

/// Smallest and largest values representable in `width` bits.
pub fn range(width: u32) -> Result<(i128, i128), WidthError> {
    if width == 0 || width > MAX_VECTOR_WIDTH {
        return Err(WidthError::Unsupported {
            width,
            max: MAX_VECTOR_WIDTH,
        });
    }
    let max = ((u128::MAX >> (MAX_VECTOR_WIDTH - width)) >> 1) as i128;
    Ok((-max - 1, max))
}

/// Encodes `value` in `width`-bit two's complement.
///
/// Fails with [`WidthError::Overflow`] when `value` lies outside
/// `[-2^(width-1), 2^(width-1) - 1]`.
pub fn encode(value: i128, width: u32) -> Result<BitVector, WidthError> {
    let (min, max) = range(width)?;
    if value < min || value > max {
        return Err(WidthError::Overflow { value, width });
    }
    BitVector::new(value as u128, width)
}

/// Encodes `value` modulo `2^width`, the way loading it into a `width`-bit register would.
pub fn encode_wrapping(value: i128, width: u32) -> Result<BitVector, WidthError> {
    BitVector::new(value as u128, width)
}

/// Reads `bits` as a signed two's-complement integer. Total: every vector has exactly one value.
pub fn decode(bits: &BitVector) -> i128 {
    let unused = MAX_VECTOR_WIDTH - bits.width();
    ((bits.as_u128() << unused) as i128) >> unused
}

/// Two's-complement negation in the same width.
///
/// The most negative value of a width, `-2^(width-1)`, has no positive counterpart and
/// negates to itself, as a hardware negation would.
pub fn negate(bits: &BitVector) -> BitVector {
    bits.wrapping_neg()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_positive() {
        assert_eq!(encode(5, 4).unwrap().to_string(), "0101");
        assert_eq!(encode(0, 1).unwrap().to_string(), "0");
        assert_eq!(encode(15, 5).unwrap().to_string(), "01111");
    }

    #[test]
    fn test_encode_negative() {
        assert_eq!(encode(-3, 5).unwrap().to_string(), "11101");
        assert_eq!(encode(-1, 1).unwrap().to_string(), "1");
        assert_eq!(encode(-8, 4).unwrap().to_string(), "1000");
    }

    #[test]
    fn test_encode_overflow() {
        assert_eq!(encode(8, 4), Err(WidthError::Overflow { value: 8, width: 4 }));
        assert_eq!(encode(-9, 4), Err(WidthError::Overflow { value: -9, width: 4 }));
        assert_eq!(encode(1, 1), Err(WidthError::Overflow { value: 1, width: 1 }));
        assert_eq!(
            encode(0, 0),
            Err(WidthError::Unsupported { width: 0, max: 128 })
        );
    }

    #[test]
    fn test_range_edges() {
        assert_eq!(range(1).unwrap(), (-1, 0));
        assert_eq!(range(4).unwrap(), (-8, 7));
        assert_eq!(range(64).unwrap(), (i64::MIN as i128, i64::MAX as i128));
        assert_eq!(range(128).unwrap(), (i128::MIN, i128::MAX));
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode(&BitVector::new(0b0111, 4).unwrap()), 7);
        assert_eq!(decode(&BitVector::new(0b1000, 4).unwrap()), -8);
        assert_eq!(decode(&BitVector::new(0b1111, 4).unwrap()), -1);
        assert_eq!(decode(&BitVector::new(1, 1).unwrap()), -1);
        assert_eq!(decode(&BitVector::new(u128::MAX, 128).unwrap()), -1);
        assert_eq!(decode(&BitVector::new(1 << 127, 128).unwrap()), i128::MIN);
    }

    #[test]
    fn test_round_trip_extremes() {
        for width in [1, 2, 7, 64, 127, 128] {
            let (min, max) = range(width).unwrap();
            for value in [min, min + 1, -1, 0, max - 1, max] {
                if value < min || value > max {
                    continue;
                }
                assert_eq!(decode(&encode(value, width).unwrap()), value);
            }
        }
    }

    #[test]
    fn test_negate() {
        let m = encode(15, 5).unwrap();
        assert_eq!(decode(&negate(&m)), -15);
        assert_eq!(negate(&m).to_string(), "10001");

        let zero = encode(0, 4).unwrap();
        assert_eq!(negate(&zero), zero);
    }

    #[test]
    fn test_negate_most_negative_wraps() {
        let min = encode(-8, 4).unwrap();
        assert_eq!(decode(&negate(&min)), -8);
    }

    #[test]
    fn test_encode_wrapping() {
        assert_eq!(decode(&encode_wrapping(200, 8).unwrap()), -56);
        assert_eq!(decode(&encode_wrapping(-129, 8).unwrap()), 127);
        assert_eq!(decode(&encode_wrapping(7, 3).unwrap()), -1);
        assert_eq!(encode_wrapping(5, 4), encode(5, 4));
    }
}
