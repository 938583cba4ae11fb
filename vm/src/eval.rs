//! Driving a complete multiplication: width selection, operand loading, the cycle loop
//! and decoding of the result.

use booth_common::{
    constants::{DEFAULT_MIN_WIDTH, MAX_REGISTER_WIDTH},
    BitVector, WidthError,
};
use booth_config::{MachineConfig, OverflowPolicy};
use serde::Serialize;

use crate::{
    codec,
    cpu::BoothMachine,
    decoder,
    error::{Operand, Result, VMErrorKind},
    trace::Trace,
    width,
};

/// Inputs of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    pub multiplicand: i64,
    pub multiplier: i64,
    /// Register width. Selected from the operands when `None`.
    pub bit_size: Option<u32>,
    /// Floor for automatically selected widths.
    pub min_width: u32,
    pub policy: OverflowPolicy,
}

impl RunConfig {
    pub fn new(multiplicand: i64, multiplier: i64) -> Self {
        Self {
            multiplicand,
            multiplier,
            bit_size: None,
            min_width: DEFAULT_MIN_WIDTH,
            policy: OverflowPolicy::Strict,
        }
    }

    pub fn with_bit_size(mut self, bit_size: u32) -> Self {
        self.bit_size = Some(bit_size);
        self
    }

    pub fn with_min_width(mut self, min_width: u32) -> Self {
        self.min_width = min_width;
        self
    }

    pub fn with_policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Applies machine-wide defaults read from the environment.
    pub fn with_machine_config(self, config: &MachineConfig) -> Self {
        self.with_min_width(config.min_width).with_policy(config.policy)
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub width: u32,
    /// `M` as loaded into the machine.
    pub multiplicand: BitVector,
    /// `Q` as loaded into the machine.
    pub multiplier: BitVector,
    pub negated_multiplicand: BitVector,
    /// Whether an operand was reduced to fit the register width.
    pub wrapped: bool,
    #[serde(with = "crate::wide_serde")]
    pub product: i128,
    /// `A‖Q` after the last cycle.
    pub product_bits: BitVector,
    pub trace: Trace,
}

/// Multiplies the configured operands with Booth's algorithm.
///
/// Fails before any cycle runs when the width is unusable, or when an explicit width
/// cannot hold an operand under [`OverflowPolicy::Strict`].
pub fn run(config: &RunConfig) -> Result<Outcome> {
    let width = resolve_width(config)?;

    let (multiplicand, m_wrapped) = load(
        Operand::Multiplicand,
        config.multiplicand,
        width,
        config.policy,
    )?;
    let (multiplier, q_wrapped) =
        load(Operand::Multiplier, config.multiplier, width, config.policy)?;

    let mut machine = BoothMachine::new(multiplicand, multiplier)?;
    let initial = *machine.state();
    let steps = machine.run_to_completion();

    let product = decoder::decode(machine.state());
    tracing::info!(
        multiplicand = config.multiplicand,
        multiplier = config.multiplier,
        width,
        product,
        "multiplication finished"
    );

    Ok(Outcome {
        width,
        multiplicand,
        multiplier,
        negated_multiplicand: *machine.negated_multiplicand(),
        wrapped: m_wrapped || q_wrapped,
        product,
        product_bits: machine.state().combined(),
        trace: Trace {
            width,
            initial,
            steps,
        },
    })
}

fn resolve_width(config: &RunConfig) -> Result<u32> {
    let width = match config.bit_size {
        Some(width) => {
            tracing::info!(width, "using explicit register width");
            width
        }
        None => {
            let width = width::select_width(
                [config.multiplicand as i128, config.multiplier as i128],
                config.min_width,
            );
            tracing::info!(width, floor = config.min_width, "selected register width");
            width
        }
    };

    if width == 0 || width > MAX_REGISTER_WIDTH {
        return Err(WidthError::Unsupported {
            width,
            max: MAX_REGISTER_WIDTH,
        }
        .into());
    }
    Ok(width)
}

/// Encodes one operand, returning whether it had to be wrapped.
fn load(
    operand: Operand,
    value: i64,
    width: u32,
    policy: OverflowPolicy,
) -> Result<(BitVector, bool)> {
    match codec::encode(value as i128, width) {
        Ok(bits) => Ok((bits, false)),
        Err(WidthError::Overflow { .. }) if policy == OverflowPolicy::Wrapping => {
            let bits = codec::encode_wrapping(value as i128, width)?;
            tracing::warn!(
                %operand,
                value,
                width,
                loaded = codec::decode(&bits) as i64,
                "operand wrapped to register width"
            );
            Ok((bits, true))
        }
        Err(WidthError::Overflow { .. }) => Err(VMErrorKind::OperandOverflow {
            operand,
            value,
            width,
        }
        .into()),
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::Action;

    #[test]
    fn test_explicit_width() {
        let outcome = run(&RunConfig::new(15, -3).with_bit_size(5)).unwrap();

        assert_eq!(outcome.width, 5);
        assert_eq!(outcome.product, -45);
        assert_eq!(outcome.trace.len(), 5);
        assert_eq!(outcome.multiplicand.to_string(), "01111");
        assert_eq!(outcome.multiplier.to_string(), "11101");
        assert_eq!(outcome.negated_multiplicand.to_string(), "10001");
        assert_eq!(outcome.product_bits.to_string(), "1111010011");
        assert!(!outcome.wrapped);
    }

    #[test]
    fn test_zero_multiplicand() {
        let outcome = run(&RunConfig::new(0, 5)).unwrap();

        assert_eq!(outcome.width, 4);
        assert_eq!(outcome.product, 0);
        assert_eq!(outcome.trace.len(), 4);
        // with M = 0 every add or subtract leaves A at zero.
        assert!(outcome.trace.iter().all(|s| s.after_arithmetic.a().as_u128() == 0));
    }

    #[test]
    fn test_zero_multiplier_is_all_noop() {
        let outcome = run(&RunConfig::new(5, 0)).unwrap();

        assert_eq!(outcome.product, 0);
        assert!(outcome.trace.iter().all(|s| s.action == Action::NoOp));
        assert_eq!(outcome.trace.arithmetic_count(), 0);
    }

    #[test]
    fn test_auto_width_negative_powers_of_two() {
        let outcome = run(&RunConfig::new(-8, -8)).unwrap();

        assert_eq!(outcome.width, 5);
        assert_eq!(outcome.product, 64);
    }

    #[test]
    fn test_explicit_width_too_small() {
        let err = run(&RunConfig::new(7, 3).with_bit_size(3)).unwrap_err();

        assert!(err.source.is_width_overflow());
        assert_eq!(
            err.source,
            VMErrorKind::OperandOverflow {
                operand: Operand::Multiplicand,
                value: 7,
                width: 3,
            }
        );
    }

    #[test]
    fn test_explicit_width_reports_multiplier() {
        let err = run(&RunConfig::new(1, -100).with_bit_size(6)).unwrap_err();
        assert_eq!(
            err.source,
            VMErrorKind::OperandOverflow {
                operand: Operand::Multiplier,
                value: -100,
                width: 6,
            }
        );
    }

    #[test]
    fn test_most_negative_multiplicand() {
        let outcome = run(&RunConfig::new(-8, 1).with_bit_size(4)).unwrap();

        assert_eq!(outcome.negated_multiplicand.to_string(), "1000");
        assert_eq!(outcome.product, -8);
    }

    #[test]
    fn test_unsupported_widths() {
        let err = run(&RunConfig::new(1, 1).with_bit_size(0)).unwrap_err();
        assert_eq!(
            err.source,
            VMErrorKind::WidthError(WidthError::Unsupported { width: 0, max: 64 })
        );

        let err = run(&RunConfig::new(1, 1).with_bit_size(65)).unwrap_err();
        assert_eq!(
            err.source,
            VMErrorKind::WidthError(WidthError::Unsupported { width: 65, max: 64 })
        );

        // i64::MIN needs a sign bit beyond its 64-bit magnitude under auto sizing.
        let err = run(&RunConfig::new(i64::MIN, 1)).unwrap_err();
        assert_eq!(
            err.source,
            VMErrorKind::WidthError(WidthError::Unsupported { width: 65, max: 64 })
        );
    }

    #[test]
    fn test_explicit_full_width_extremes() {
        let outcome = run(&RunConfig::new(i64::MIN, i64::MAX).with_bit_size(64)).unwrap();
        assert_eq!(outcome.product, (i64::MIN as i128) * (i64::MAX as i128));
        assert_eq!(outcome.product_bits.width(), 128);
    }

    #[test]
    fn test_min_width_floor() {
        let outcome = run(&RunConfig::new(1, 1).with_min_width(8)).unwrap();
        assert_eq!(outcome.width, 8);
        assert_eq!(outcome.trace.len(), 8);

        let outcome = run(&RunConfig::new(100, 1).with_min_width(2)).unwrap();
        assert_eq!(outcome.width, 8);
    }

    #[test]
    fn test_wrapping_policy() {
        let config = RunConfig::new(7, 3)
            .with_bit_size(3)
            .with_policy(OverflowPolicy::Wrapping);
        let outcome = run(&config).unwrap();

        // 7 loads as -1 in three bits.
        assert!(outcome.wrapped);
        assert_eq!(outcome.multiplicand.to_string(), "111");
        assert_eq!(outcome.product, -3);
    }

    #[test]
    fn test_wrapping_policy_leaves_fitting_operands() {
        let config = RunConfig::new(3, 2)
            .with_bit_size(4)
            .with_policy(OverflowPolicy::Wrapping);
        let outcome = run(&config).unwrap();

        assert!(!outcome.wrapped);
        assert_eq!(outcome.product, 6);
    }

    #[test]
    fn test_wrapping_policy_never_applies_to_auto_width() {
        let config = RunConfig::new(1000, -1000).with_policy(OverflowPolicy::Wrapping);
        let outcome = run(&config).unwrap();

        assert!(!outcome.wrapped);
        assert_eq!(outcome.product, -1_000_000);
    }

    #[test]
    fn test_machine_config_defaults() {
        let machine = MachineConfig {
            min_width: 6,
            policy: OverflowPolicy::Wrapping,
        };
        let config = RunConfig::new(2, 3).with_machine_config(&machine);

        assert_eq!(config.min_width, 6);
        assert_eq!(config.policy, OverflowPolicy::Wrapping);
        assert_eq!(run(&config).unwrap().width, 6);
    }

    #[test]
    fn test_trace_chains_from_initial_state() {
        let outcome = run(&RunConfig::new(-6, 5)).unwrap();
        let trace = &outcome.trace;

        assert_eq!(trace.initial.a().as_u128(), 0);
        assert_eq!(trace.steps[0].before, trace.initial);
        assert_eq!(trace.last_state().combined(), outcome.product_bits);
        assert_eq!(outcome.product, -30);
    }

    #[test]
    fn test_outcome_serializes() {
        let outcome = run(&RunConfig::new(3, -2)).unwrap();
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["width"], 4);
        assert_eq!(json["product"], -6);
        assert_eq!(json["multiplier"], "1110");
        assert_eq!(json["trace"]["steps"][0]["action"], "NoOp");
        assert_eq!(json["trace"]["steps"][1]["action"], "Subtract");
        assert_eq!(json["trace"]["steps"][0]["before"]["a"], "0000");
    }
}
