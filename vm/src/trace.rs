use serde::Serialize;

use crate::cpu::{Action, RegisterState};

/// One decide/shift cycle of the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepSnapshot {
    /// Cycle number, starting at 1.
    pub step: u32,
    /// Registers before the decide sub-step.
    pub before: RegisterState,
    /// Arithmetic applied to `A`.
    pub action: Action,
    /// Registers after the arithmetic, before the shift.
    pub after_arithmetic: RegisterState,
    /// Registers after the arithmetic right shift.
    pub after_shift: RegisterState,
}

impl StepSnapshot {
    /// The `(Q[last], Q_-1)` pair that selected [`StepSnapshot::action`].
    pub fn recoding_pair(&self) -> (bool, bool) {
        self.before.recoding_pair()
    }
}

/// The full record of a run, in cycle order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trace {
    /// Register width used for the run.
    pub width: u32,
    /// Registers before the first cycle.
    pub initial: RegisterState,
    pub steps: Vec<StepSnapshot>,
}

impl Trace {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StepSnapshot> + '_ {
        self.steps.iter()
    }

    /// Registers after the last cycle.
    pub fn last_state(&self) -> &RegisterState {
        self.steps
            .last()
            .map_or(&self.initial, |step| &step.after_shift)
    }

    /// Number of cycles that performed an add or subtract.
    pub fn arithmetic_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.action != Action::NoOp)
            .count()
    }
}
