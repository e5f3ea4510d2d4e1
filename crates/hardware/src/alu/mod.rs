//! Arithmetic Logic Unit (ALU).
//!
//! This module implements a width-parameterized combinational ALU. Given two
//! operands and an operation selector it produces a result word and the
//! status flags zero, carry, negative, overflow and signed. There is no state:
//! every evaluation is independent, and the carry fed into the rotates is an
//! explicit input owned by the caller.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Neg (bitwise NOT), And, Or
//! - [`shifts`]:     Rol, Ror, Lsl, Lsr, Asr
//!
//! Operands wider than the configured width are masked before evaluation.

/// Addition and subtraction with carry and signed overflow.
pub mod arithmetic;

/// Operation selector enumeration.
pub mod func;

/// Bitwise NOT, AND and OR.
pub mod logic;

/// Result word and status flags.
pub mod output;

/// Single-bit shifts and rotates through carry.
pub mod shifts;

pub use func::AluFunc;
pub use output::{AluOutput, Datapath};

use crate::common::{ConfigError, Width};
use crate::config::{AluConfig, ClearResult};

/// Arithmetic Logic Unit of a fixed width.
///
/// The width is fixed at construction and applies to every evaluation.
/// `Alu` is `Copy`, holds no mutable state and can be shared freely
/// between threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alu {
    width: Width,
    clear_result: ClearResult,
}

impl Alu {
    /// Creates an ALU of `width` bits with the default `CLC`/`CLV` policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroWidth`] or [`ConfigError::WidthTooLarge`]
    /// if `width` is outside `1..=64`.
    pub fn new(width: u32) -> Result<Self, ConfigError> {
        Ok(Self::with_width(Width::new(width)?))
    }

    /// Creates an ALU from an already validated width.
    pub fn with_width(width: Width) -> Self {
        tracing::debug!(width = width.bits(), "ALU configured");
        Self {
            width,
            clear_result: ClearResult::default(),
        }
    }

    /// Creates an ALU from a configuration.
    ///
    /// # Errors
    ///
    /// Returns the width errors of [`AluConfig::validate`].
    pub fn from_config(config: &AluConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_width(config.validate()?).with_clear_result(config.clear_result))
    }

    /// Replaces the `OUT` policy for `CLC` and `CLV`.
    #[must_use]
    pub const fn with_clear_result(mut self, policy: ClearResult) -> Self {
        self.clear_result = policy;
        self
    }

    /// Configured word width.
    pub const fn width(&self) -> Width {
        self.width
    }

    /// Configured `OUT` policy for `CLC` and `CLV`.
    pub const fn clear_result(&self) -> ClearResult {
        self.clear_result
    }

    /// Executes an operation with the incoming carry low.
    ///
    /// # Examples
    ///
    /// ```
    /// use alusim_core::alu::{Alu, AluFunc};
    ///
    /// let alu = Alu::new(8).unwrap();
    ///
    /// let result = alu.execute(AluFunc::Add, 0x01, 0x55);
    /// assert_eq!(result.out, 0x56);
    /// assert!(!result.carry && !result.overflow);
    ///
    /// // Signed overflow: 127 + 1 wraps to -128.
    /// let result = alu.execute(AluFunc::Add, 0x7F, 0x01);
    /// assert_eq!(result.out, 0x80);
    /// assert!(result.overflow && result.negative && !result.signed);
    ///
    /// // NEG is one's complement.
    /// assert_eq!(alu.execute(AluFunc::Neg, 0x01, 0).out, 0xFE);
    /// ```
    pub fn execute(&self, func: AluFunc, a: u64, b: u64) -> AluOutput {
        self.execute_with_carry(func, a, b, false)
    }

    /// Executes an operation.
    ///
    /// # Arguments
    ///
    /// * `func`     - The operation to perform
    /// * `a`        - First operand; bits above the width are ignored
    /// * `b`        - Second operand; bits above the width are ignored
    /// * `carry_in` - Carry shifted into `ROL`/`ROR`; ignored by every other operation
    ///
    /// # Returns
    ///
    /// The result word with all five flags.
    pub fn execute_with_carry(&self, func: AluFunc, a: u64, b: u64, carry_in: bool) -> AluOutput {
        let width = self.width;
        let a = width.truncate(a);
        let b = width.truncate(b);

        let raw = match func {
            AluFunc::Add | AluFunc::Sub => arithmetic::execute(func, a, b, width),

            AluFunc::Neg | AluFunc::And | AluFunc::Or => logic::execute(func, a, b, width),

            AluFunc::Rol | AluFunc::Ror | AluFunc::Lsl | AluFunc::Lsr | AluFunc::Asr => {
                shifts::execute(func, a, carry_in, width)
            }

            // Carry and overflow both drop to zero; only OUT depends on the policy.
            AluFunc::Clc | AluFunc::Clv => Datapath::word(match self.clear_result {
                ClearResult::Reset => 0,
                ClearResult::PassThrough => a,
            }),

            AluFunc::None => Datapath::word(a),
        };

        let output = AluOutput::new(width, raw);
        tracing::trace!(%func, a, b, carry_in, %output, "alu");
        output
    }

    /// Executes a raw selector code.
    ///
    /// Codes outside the enumeration take the default arm: `OUT = A` with
    /// carry and overflow low. This never fails.
    pub fn execute_code(&self, code: u8, a: u64, b: u64, carry_in: bool) -> AluOutput {
        let func = AluFunc::from_code(code).unwrap_or_else(|| {
            tracing::trace!(code, "unrecognized ALU code, passing A through");
            AluFunc::None
        });
        self.execute_with_carry(func, a, b, carry_in)
    }
}

/// Evaluates a single operation on a freshly configured ALU.
///
/// # Errors
///
/// Returns a [`ConfigError`] if `width` is outside `1..=64`.
///
/// # Examples
///
/// ```
/// use alusim_core::alu::{evaluate, AluFunc};
///
/// let result = evaluate(4, 0b0111, 0b0001, AluFunc::Add).unwrap();
/// assert_eq!(result.out, 0b1000);
/// assert!(result.overflow);
/// ```
pub fn evaluate(width: u32, a: u64, b: u64, func: AluFunc) -> Result<AluOutput, ConfigError> {
    Ok(Alu::new(width)?.execute(func, a, b))
}
