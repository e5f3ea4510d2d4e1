//! Parameterizable-width ALU model.
//!
//! This crate implements the combinational arithmetic-logic unit of a small
//! processor datapath, with the following:
//! 1. **ALU:** A pure transfer function from `(A, B, func)` to a result word and
//!    the zero, carry, negative, overflow and signed flags.
//! 2. **Configuration:** Width and policy settings, deserializable from JSON.
//! 3. **Simulation:** A stimulus driver that owns inter-step carry state, and
//!    trace sinks (memory, JSON Lines, VCD).
//! 4. **Statistics:** Operation mix and flag activity over a run.

/// Combinational ALU (dispatch, arithmetic, logic, shifts, flags).
pub mod alu;
/// Common types (word width helpers, error types).
pub mod common;
/// ALU configuration (width, `CLC`/`CLV` policy, carry chaining).
pub mod config;
/// Stimulus driver and trace sinks.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;

/// The ALU; construct with `Alu::new(width)`.
pub use crate::alu::{Alu, AluFunc, AluOutput, evaluate};
/// Root configuration type; use `AluConfig::default()` or `AluConfig::from_json`.
pub use crate::config::{AluConfig, ClearResult};
/// Validated word width.
pub use crate::common::Width;
