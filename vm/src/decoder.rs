//! Interpretation of the final register pair as a signed product.

use crate::{codec, cpu::RegisterState};

/// Reads `A‖Q` as one `2n`-bit two's-complement number, `A` being the high half.
pub fn decode(state: &RegisterState) -> i128 {
    codec::decode(&state.combined())
}
