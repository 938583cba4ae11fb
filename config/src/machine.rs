use std::fmt;

use serde::Deserialize;

use super::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct MachineConfig {
    /// Readability floor for automatically selected register widths.
    #[serde(rename = "minwidth")]
    pub min_width: u32,
    pub policy: OverflowPolicy,
}

/// What to do when an operand does not fit an explicitly requested register width.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[cfg_attr(feature = "clap_derive", derive(clap::ValueEnum))]
pub enum OverflowPolicy {
    /// Reject the run before any cycle executes.
    #[default]
    #[serde(rename = "strict")]
    #[cfg_attr(feature = "clap_derive", value(name = "strict"))]
    Strict,

    /// Load the operand modulo `2^width`, like a fixed-width hardware register would.
    #[serde(rename = "wrapping")]
    #[cfg_attr(feature = "clap_derive", value(name = "wrapping"))]
    Wrapping,
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowPolicy::Strict => write!(f, "strict"),
            OverflowPolicy::Wrapping => write!(f, "wrapping"),
        }
    }
}

impl Config for MachineConfig {
    const PREFIX: &'static str = "MACHINE";
}
