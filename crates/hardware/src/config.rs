//! Configuration system for the ALU model.
//!
//! This module defines the configuration structures used to parameterize an ALU instance. It provides:
//! 1. **Defaults:** Baseline width and policy constants.
//! 2. **Structures:** The root [`AluConfig`] consumed by [`Alu::from_config`](crate::alu::Alu::from_config)
//!    and [`Driver::from_config`](crate::sim::Driver::from_config).
//! 3. **Enums:** The [`ClearResult`] policy governing `OUT` for the flag-clearing operations.
//!
//! Configuration is supplied as JSON (CLI `--config`) or built with `AluConfig::default()`.

use serde::{Deserialize, Serialize};

use crate::common::{ConfigError, Width};

/// Default configuration constants.
mod defaults {
    /// Default datapath width in bits.
    pub const WIDTH: u32 = 8;

    /// Feed the carry produced by one step into the rotates of the next.
    pub const CHAIN_CARRY: bool = true;
}

/// Value driven on `OUT` by the flag-clearing operations `CLC` and `CLV`.
///
/// Neither operation assigns the result in the reference model, which leaves
/// `OUT` at its declared reset value of zero. That differs from the explicit
/// pass-through of the default arm, so the choice is exposed here instead of
/// being fixed silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClearResult {
    /// `OUT` is the reset value `0`.
    #[default]
    #[serde(alias = "Reset")]
    Reset,
    /// `OUT` mirrors operand `A`, like the default arm.
    #[serde(alias = "PassThrough")]
    PassThrough,
}

/// Root configuration for an ALU instance and its stimulus driver.
///
/// # Examples
///
/// ```
/// use alusim_core::config::{AluConfig, ClearResult};
///
/// let config = AluConfig::default();
/// assert_eq!(config.width, 8);
/// assert_eq!(config.clear_result, ClearResult::Reset);
///
/// let config = AluConfig::from_json(r#"{ "width": 16, "clear_result": "pass-through" }"#).unwrap();
/// assert_eq!(config.width, 16);
/// assert_eq!(config.clear_result, ClearResult::PassThrough);
/// assert!(config.chain_carry);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AluConfig {
    /// Word width in bits (`1..=64`).
    #[serde(default = "AluConfig::default_width")]
    pub width: u32,

    /// `OUT` policy for `CLC` and `CLV`.
    #[serde(default)]
    pub clear_result: ClearResult,

    /// Whether the driver feeds the previous carry into `ROL`/`ROR`.
    #[serde(default = "AluConfig::default_chain_carry")]
    pub chain_carry: bool,
}

impl AluConfig {
    const fn default_width() -> u32 {
        defaults::WIDTH
    }

    const fn default_chain_carry() -> bool {
        defaults::CHAIN_CARRY
    }

    /// Parses a JSON document and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields and
    /// the width errors of [`Width::new`] for an out-of-range width.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        let _ = config.validate()?;
        Ok(config)
    }

    /// Checks the configured width.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroWidth`] or [`ConfigError::WidthTooLarge`].
    pub const fn validate(&self) -> Result<Width, ConfigError> {
        Width::new(self.width)
    }
}

impl Default for AluConfig {
    fn default() -> Self {
        Self {
            width: defaults::WIDTH,
            clear_result: ClearResult::default(),
            chain_carry: defaults::CHAIN_CARRY,
        }
    }
}
