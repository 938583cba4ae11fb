//! A cycle-accurate model of a Booth multiplier.
//!
//! Operands are encoded into fixed-width two's-complement registers, the machine runs one
//! decide/shift cycle per register bit, and the final `A‖Q` pair is read back as the signed
//! product. Every cycle is recorded in a [`trace::Trace`] for presentation layers to render.
//!
//! ```rust
//! use booth_vm::{run, RunConfig};
//!
//! let outcome = run(&RunConfig::new(15, -3).with_bit_size(5)).unwrap();
//! assert_eq!(outcome.product, -45);
//! assert_eq!(outcome.trace.len(), 5);
//! ```

pub mod codec;
pub mod cpu;
pub mod decoder;
pub mod error;
pub mod eval;
pub mod trace;
pub mod width;

mod wide_serde;

pub use booth_config::OverflowPolicy;
pub use eval::{run, Outcome, RunConfig};
