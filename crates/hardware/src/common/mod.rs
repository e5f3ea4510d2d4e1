//! Common utilities and types used throughout the ALU model.
//!
//! This module provides the building blocks shared by the datapath, the
//! configuration layer and the stimulus driver. It includes:
//! 1. **Word Helpers:** A validated width type with masking and bit extraction.
//! 2. **Error Handling:** Configuration, selector and simulation error types.

/// Error types for configuration, selectors and simulation.
pub mod error;

/// Width-parameterized word helpers.
pub mod word;

pub use error::{ConfigError, FuncError, SimError};
pub use word::{MAX_WIDTH, Width, bit};
