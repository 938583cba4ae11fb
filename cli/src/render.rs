//! Text rendering of a completed run: operand summary, the step table and the decoded
//! product.

use std::fmt::Write;

use booth_vm::{codec, cpu::Action, trace::StepSnapshot, Outcome};

const STEP_COL: usize = 5;
const OP_COL: usize = 15;
const BIT_COL: usize = 6;

pub fn render(outcome: &Outcome) -> String {
    let mut out = String::new();
    write_outcome(&mut out, outcome).expect("formatting into a String never fails");
    out
}

fn write_outcome(out: &mut String, outcome: &Outcome) -> std::fmt::Result {
    let width = outcome.width;
    let m = codec::decode(&outcome.multiplicand);
    let q = codec::decode(&outcome.multiplier);

    writeln!(out, "\n--- Booth's Algorithm for Signed Multiplication ---")?;
    writeln!(out, "Multiplying {m} by {q} using {width} bits.")?;
    writeln!(out, "M (Multiplicand)           = {m} (binary: {})", outcome.multiplicand)?;
    writeln!(out, "Q (Multiplier)             = {q} (binary: {})", outcome.multiplier)?;
    write!(
        out,
        "-M (Negative Multiplicand) = {} (binary: {})",
        -m, outcome.negated_multiplicand
    )?;
    if codec::decode(&outcome.negated_multiplicand) != -m {
        write!(out, " [wraps: -M is not representable in {width} bits]")?;
    }
    writeln!(out)?;
    if outcome.wrapped {
        writeln!(
            out,
            "Note: operands were reduced modulo 2^{width} to fit the registers."
        )?;
    }

    let col = (width as usize).max(1);
    let rule = "-".repeat(STEP_COL + OP_COL + 2 * col + BIT_COL + 13 + 24);

    writeln!(out, "\n--- Booth's Algorithm Steps ---")?;
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{:^STEP_COL$} | {:^OP_COL$} | {:^col$} | {:^col$} | {:^BIT_COL$} | Explanation",
        "Step", "Operation", "A", "Q", "Q_-1"
    )?;
    writeln!(out, "{rule}")?;

    let initial = &outcome.trace.initial;
    writeln!(
        out,
        "{:^STEP_COL$} | {:^OP_COL$} | {:^col$} | {:^col$} | {:^BIT_COL$} | Initial values",
        "Init",
        "",
        initial.a(),
        initial.q(),
        initial.q_minus_1() as u8
    )?;

    for step in outcome.trace.iter() {
        write_step(out, step, col)?;
    }
    writeln!(out, "{rule}")?;

    let bits = &outcome.product_bits;
    writeln!(
        out,
        "\nFinal Result (A+Q) in binary ({} bits): {bits}",
        bits.width()
    )?;
    writeln!(out, "Final Result in decimal: {}", outcome.product)?;

    if bits.msb() {
        let inverted = bits.invert();
        let magnitude = bits.wrapping_neg();
        writeln!(out, "\n--- Detailed 2's Complement to Decimal Conversion ---")?;
        writeln!(out, "Binary 2's complement: {bits}")?;
        writeln!(out, "1. Invert bits:        {inverted}")?;
        writeln!(out, "2. Add 1:              {magnitude}")?;
        writeln!(out, "3. Convert to decimal: {}", magnitude.as_u128())?;
        writeln!(out, "Therefore, the decimal value is -{}.", magnitude.as_u128())?;
    }
    Ok(())
}

fn write_step(out: &mut String, step: &StepSnapshot, col: usize) -> std::fmt::Result {
    let arith = &step.after_arithmetic;
    writeln!(
        out,
        "{:^STEP_COL$} | {:^OP_COL$} | {:^col$} | {:^col$} | {:^BIT_COL$} | {}",
        step.step,
        step.action,
        arith.a(),
        arith.q(),
        arith.q_minus_1() as u8,
        explain(step)
    )?;

    let shifted = &step.after_shift;
    let explanation = if shifted.a().msb() != arith.a().msb() {
        "Arithmetic right shift (A overflowed; sign taken from the exact sum)"
    } else {
        "Arithmetic right shift"
    };
    writeln!(
        out,
        "{:^STEP_COL$} | {:^OP_COL$} | {:^col$} | {:^col$} | {:^BIT_COL$} | {explanation}",
        "",
        "Shift right",
        shifted.a(),
        shifted.q(),
        shifted.q_minus_1() as u8
    )
}

fn explain(step: &StepSnapshot) -> String {
    let (q_lsb, q_minus_1) = step.recoding_pair();
    let pair = format!("{}{}", q_lsb as u8, q_minus_1 as u8);
    match step.action {
        Action::Subtract => format!("Q_LSB Q_-1 = {pair} (start of a run of 1s)"),
        Action::Add => format!("Q_LSB Q_-1 = {pair} (end of a run of 1s)"),
        Action::NoOp => format!("Q_LSB Q_-1 = {pair} (no transition)"),
    }
}
