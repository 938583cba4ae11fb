//! The Booth multiplier state machine.
//!
//! A [`BoothMachine`] owns the registers of one multiplication and advances them one
//! cycle at a time. Each cycle has two sub-steps:
//!
//! 1. Decide: inspect `(Q[last], Q_-1)` and add `M`, subtract `M`, or do nothing to `A`.
//! 2. Shift: arithmetic right shift across `A‖Q‖Q_-1`.
//!
//! After exactly `width` cycles `A‖Q` holds the double-width product.
//!
//! ## Examples
//!
//! ```rust
//! use booth_vm::codec::encode;
//! use booth_vm::cpu::{BoothMachine, Phase};
//!
//! let m = encode(15, 5).unwrap();
//! let q = encode(-3, 5).unwrap();
//!
//! let mut machine = BoothMachine::new(m, q).unwrap();
//! let steps = machine.run_to_completion();
//!
//! assert_eq!(steps.len(), 5);
//! assert_eq!(machine.phase(), Phase::Done);
//! assert_eq!(machine.result(), Some(-45));
//! ```

use std::fmt::Display;

use booth_common::{BitVector, WidthError};
use serde::Serialize;

use super::registers::RegisterState;
use crate::{codec, decoder, trace::StepSnapshot};

/// Arithmetic performed on `A` during the decide sub-step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Action {
    Add,
    Subtract,
    NoOp,
}

impl Action {
    /// Booth's recoding rule: `10` starts a run of ones, `01` ends one.
    pub fn from_pair(q_lsb: bool, q_minus_1: bool) -> Self {
        match (q_lsb, q_minus_1) {
            (true, false) => Action::Subtract,
            (false, true) => Action::Add,
            _ => Action::NoOp,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Add => f.pad("Add M"),
            Action::Subtract => f.pad("Subtract M"),
            Action::NoOp => f.pad("No operation"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No cycle has run yet.
    Init,
    /// `n` cycles have completed and more remain.
    Running(u32),
    Done,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoothMachine {
    multiplicand: BitVector,
    negated_multiplicand: BitVector,
    state: RegisterState,
    cycles: u32,
}

impl BoothMachine {
    /// Loads `multiplier` into `Q` and clears `A` and `Q_-1`.
    ///
    /// Both operands must already be encoded in the same register width.
    pub fn new(multiplicand: BitVector, multiplier: BitVector) -> Result<Self, WidthError> {
        if multiplicand.width() != multiplier.width() {
            return Err(WidthError::Mismatch {
                left: multiplicand.width(),
                right: multiplier.width(),
            });
        }
        let state = RegisterState::new(multiplier)?;

        Ok(Self {
            multiplicand,
            negated_multiplicand: codec::negate(&multiplicand),
            state,
            cycles: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.state.width()
    }

    pub fn multiplicand(&self) -> &BitVector {
        &self.multiplicand
    }

    /// `-M` in the register width; wraps for the most negative multiplicand.
    pub fn negated_multiplicand(&self) -> &BitVector {
        &self.negated_multiplicand
    }

    pub fn state(&self) -> &RegisterState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        match self.cycles {
            0 => Phase::Init,
            n if n >= self.width() => Phase::Done,
            n => Phase::Running(n),
        }
    }

    pub fn is_done(&self) -> bool {
        self.phase() == Phase::Done
    }

    /// The action the next cycle will take.
    pub fn decide(&self) -> Action {
        let (q_lsb, q_minus_1) = self.state.recoding_pair();
        Action::from_pair(q_lsb, q_minus_1)
    }

    /// Runs one decide/shift cycle. Returns `None` once the machine is done.
    pub fn step(&mut self) -> Option<StepSnapshot> {
        if self.is_done() {
            return None;
        }

        let before = self.state;
        let action = self.decide();

        let a = codec::decode(self.state.a());
        let exact = match action {
            Action::Add => a + codec::decode(&self.multiplicand),
            Action::Subtract => a - codec::decode(&self.multiplicand),
            Action::NoOp => a,
        };
        match action {
            Action::Add => self.state.set_a(self.state.a().wrapping_add(&self.multiplicand)),
            Action::Subtract => self
                .state
                .set_a(self.state.a().wrapping_add(&self.negated_multiplicand)),
            Action::NoOp => {}
        }
        let after_arithmetic = self.state;

        // only subtracting the most negative multiplicand can overflow `A`.
        self.state.shift_right(exact < 0);
        self.cycles += 1;

        tracing::debug!(
            step = self.cycles,
            %action,
            registers = %self.state,
            "booth cycle"
        );

        Some(StepSnapshot {
            step: self.cycles,
            before,
            action,
            after_arithmetic,
            after_shift: self.state,
        })
    }

    /// Runs every remaining cycle and returns their snapshots in order.
    pub fn run_to_completion(&mut self) -> Vec<StepSnapshot> {
        self.by_ref().collect()
    }

    /// The signed product, once every cycle has run.
    pub fn result(&self) -> Option<i128> {
        self.is_done().then(|| decoder::decode(&self.state))
    }
}

impl Iterator for BoothMachine {
    type Item = StepSnapshot;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.width().saturating_sub(self.cycles) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoothMachine {}
