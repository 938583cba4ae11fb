//! # booth
//!
//! Command-line front end for the Booth multiplier simulator.
//!
//! ## Usage
//! ```sh
//! booth 15 -3 --bits 5
//! ```
//!
//! Operands left off the command line are read from stdin. Pass `--json` to get the full
//! register trace as JSON instead of a table.

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod command;
pub mod input;
pub mod render;

#[derive(Debug, Parser)]
#[command(name = "booth", bin_name = "booth")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    #[command(flatten)]
    pub run: command::run::RunArgs,
}

pub fn setup_logger() -> tracing::subscriber::DefaultGuard {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
                .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
                .pretty()
                .with_file(false)
                .with_line_number(false),
        )
        .with(filter)
        .set_default()
}

/// Default environment variables for machine configuration.
const ENV: &str = r#"
BOOTH_MACHINE_MINWIDTH=4
BOOTH_MACHINE_POLICY=strict
"#;
