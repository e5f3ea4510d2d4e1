//! Stimulus driving and trace output.
//!
//! This module hosts everything that surrounds the combinational ALU during a
//! simulation run. It provides:
//! 1. **Driver:** Applies stimulus steps and owns the carry fed into the rotates.
//! 2. **Trace sinks:** In-memory, JSON Lines and VCD recording of every evaluation.

/// Stimulus steps and the driver applying them.
pub mod driver;

/// Trace sink trait and the in-memory and JSON Lines sinks.
pub mod trace;

/// Value Change Dump writer.
pub mod vcd;

pub use driver::{Driver, Record, Step, Stimulus};
pub use trace::{JsonLinesTrace, MemoryTrace, NullTrace, TraceFanout, TraceSink};
pub use vcd::VcdTrace;
