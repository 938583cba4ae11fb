use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WidthError {
    // Value does not fit the requested two's-complement width
    #[error("Width overflow: {value} cannot be represented in {width}-bit two's complement")]
    Overflow { value: i128, width: u32 },

    // Width outside of what a register or vector can hold
    #[error("Unsupported width {width}: must be between 1 and {max}")]
    Unsupported { width: u32, max: u32 },

    // Two registers of one machine disagree on width
    #[error("Width mismatch: {left} != {right}")]
    Mismatch { left: u32, right: u32 },
}
