use std::{backtrace::Backtrace, fmt::Display, panic::Location};

pub use booth_common::error::*;

use thiserror::Error;

#[derive(Debug)]
pub struct VMError {
    pub source: VMErrorKind,
    pub location: &'static Location<'static>,
    pub backtrace: Backtrace,
}

impl Display for VMError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} at ", self.source)?;
        writeln!(f, "Location: {}", self.location)?;
        write!(f, "Backtrace: {}", self.backtrace)?;
        Ok(())
    }
}

impl core::error::Error for VMError {}

impl<T> From<T> for VMError
where
    T: Into<VMErrorKind>,
{
    #[track_caller]
    fn from(source: T) -> Self {
        VMError {
            source: source.into(),
            location: Location::caller(),
            backtrace: Backtrace::capture(),
        }
    }
}

/// Errors raised while configuring a multiplier run.
#[derive(Debug, Error, PartialEq)]
pub enum VMErrorKind {
    #[error("Wrapped WidthError: {0}")]
    WidthError(#[from] WidthError),

    // Operand rejected under the strict overflow policy.
    #[error("Operand {operand} = {value} does not fit in {width} bits")]
    OperandOverflow {
        operand: Operand,
        value: i64,
        width: u32,
    },
}

/// Names the operand an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Multiplicand,
    Multiplier,
}

impl Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Multiplicand => write!(f, "M"),
            Operand::Multiplier => write!(f, "Q"),
        }
    }
}

impl VMErrorKind {
    /// True for every flavour of the width-overflow failure.
    pub fn is_width_overflow(&self) -> bool {
        matches!(
            self,
            VMErrorKind::OperandOverflow { .. }
                | VMErrorKind::WidthError(WidthError::Overflow { .. })
        )
    }
}

/// Result type for VM functions that can produce errors.
pub type Result<T, E = VMError> = std::result::Result<T, E>;
