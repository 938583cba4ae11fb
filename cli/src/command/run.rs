use std::io::{self, Write};

use clap::Args;

use booth_config::{Config, MachineConfig, OverflowPolicy};
use booth_vm::{run, RunConfig};

use crate::{input, render};

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Multiplicand (M). Read from stdin when omitted.
    pub multiplicand: Option<i64>,

    /// Multiplier (Q). Read from stdin when omitted.
    pub multiplier: Option<i64>,

    /// Register width in bits. Selected from the operands when omitted.
    #[arg(short, long)]
    pub bits: Option<u32>,

    /// Smallest width automatic selection may pick.
    #[arg(long)]
    pub min_width: Option<u32>,

    /// How to treat operands that do not fit an explicit width.
    #[arg(long, value_enum)]
    pub policy: Option<OverflowPolicy>,

    /// Print the outcome and full trace as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn handle_command(args: RunArgs) -> anyhow::Result<()> {
    let machine = MachineConfig::from_env()?;

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout().lock();

    let multiplicand = match args.multiplicand {
        Some(value) => value,
        None => input::prompt_operand(&mut reader, &mut stdout, "Multiplicand (M)")?,
    };
    let multiplier = match args.multiplier {
        Some(value) => value,
        None => input::prompt_operand(&mut reader, &mut stdout, "Multiplier (Q)")?,
    };

    let config = build_config(&args, multiplicand, multiplier, &machine);
    let outcome = run(&config).map_err(|err| anyhow::Error::new(err.source))?;

    if args.json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&outcome)?)?;
    } else {
        write!(stdout, "{}", render::render(&outcome))?;
    }
    Ok(())
}

/// Command-line flags take precedence over the environment defaults.
fn build_config(
    args: &RunArgs,
    multiplicand: i64,
    multiplier: i64,
    machine: &MachineConfig,
) -> RunConfig {
    let mut config = RunConfig::new(multiplicand, multiplier).with_machine_config(machine);
    if let Some(bits) = args.bits {
        config = config.with_bit_size(bits);
    }
    if let Some(min_width) = args.min_width {
        config = config.with_min_width(min_width);
    }
    if let Some(policy) = args.policy {
        config = config.with_policy(policy);
    }
    config
}
