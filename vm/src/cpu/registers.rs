use std::fmt::Display;

use booth_common::{constants::MAX_REGISTER_WIDTH, BitVector, WidthError};
use serde::Serialize;

/// The multiplier's three registers: accumulator `A`, multiplier `Q` and the history bit
/// `Q_-1`. `A` and `Q` always share one width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct RegisterState {
    a: BitVector,
    q: BitVector,
    q_minus_1: bool,
}

impl RegisterState {
    /// Initial state for a run: `A = 0`, `Q = multiplier`, `Q_-1 = 0`.
    pub fn new(multiplier: BitVector) -> Result<Self, WidthError> {
        let width = multiplier.width();
        if width > MAX_REGISTER_WIDTH {
            return Err(WidthError::Unsupported {
                width,
                max: MAX_REGISTER_WIDTH,
            });
        }
        Ok(Self {
            a: BitVector::zeros(width)?,
            q: multiplier,
            q_minus_1: false,
        })
    }

    pub fn width(&self) -> u32 {
        self.q.width()
    }

    pub fn a(&self) -> &BitVector {
        &self.a
    }

    pub fn q(&self) -> &BitVector {
        &self.q
    }

    pub fn q_minus_1(&self) -> bool {
        self.q_minus_1
    }

    /// The pair `(Q[last], Q_-1)` that Booth's rule inspects.
    pub fn recoding_pair(&self) -> (bool, bool) {
        (self.q.lsb(), self.q_minus_1)
    }

    pub(crate) fn set_a(&mut self, a: BitVector) {
        debug_assert_eq!(a.width(), self.width());
        self.a = a;
    }

    /// Arithmetic right shift of `A‖Q‖Q_-1` by one with `sign` entering the top of `A`.
    ///
    /// `sign` is `A`'s sign bit unless the preceding add or subtract overflowed the
    /// register, in which case it is the sign of the exact sum.
    pub(crate) fn shift_right(&mut self, sign: bool) {
        let (a, a_out) = self.a.shift_right_in(sign);
        let (q, q_out) = self.q.shift_right_in(a_out);
        self.a = a;
        self.q = q;
        self.q_minus_1 = q_out;
    }

    /// `A‖Q` as one double-width vector, `A` in the high half.
    pub fn combined(&self) -> BitVector {
        self.a
            .concat(&self.q)
            .expect("registers are at most 64 bits wide, so A‖Q fits in 128")
    }
}

impl Display for RegisterState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A={} Q={} Q_-1={}",
            self.a, self.q, self.q_minus_1 as u8
        )
    }
}
