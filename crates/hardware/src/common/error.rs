//! Error definitions.
//!
//! This module defines the error types reported at the boundaries of the ALU model. It provides:
//! 1. **Configuration Errors:** Invalid widths rejected before any evaluation takes place.
//! 2. **Selector Errors:** Unknown operation codes or mnemonics when parsing a selector.
//! 3. **Simulation Errors:** Stimulus parsing and trace output failures in the driver layer.
//!
//! The combinational core itself never fails; unknown selectors evaluated through
//! [`Alu::execute_code`](crate::alu::Alu::execute_code) fall back to pass-through.

use std::io;

use thiserror::Error;

/// Errors raised while building or loading an ALU configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested width was zero; every word needs at least a sign bit.
    #[error("ALU width must be at least 1 bit")]
    ZeroWidth,

    /// The requested width does not fit the 64-bit word backing.
    #[error("ALU width {width} exceeds the supported maximum of {max} bits")]
    WidthTooLarge {
        /// Requested width in bits.
        width: u32,
        /// Largest supported width in bits.
        max: u32,
    },

    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Errors raised when converting raw codes or mnemonics into an [`AluFunc`](crate::alu::AluFunc).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FuncError {
    /// The numeric code is not part of the operation enumeration.
    #[error("unknown ALU function code {0}")]
    UnknownCode(u8),

    /// The mnemonic does not name any operation.
    #[error("unknown ALU function mnemonic `{0}`")]
    UnknownMnemonic(String),
}

/// Errors raised by the stimulus driver and trace sinks.
#[derive(Debug, Error)]
pub enum SimError {
    /// Stimulus or configuration JSON was malformed.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A stimulus step named an operation that does not exist.
    #[error(transparent)]
    Func(#[from] FuncError),

    /// The configuration embedded in a run was invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing a trace or reading a stimulus file failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
