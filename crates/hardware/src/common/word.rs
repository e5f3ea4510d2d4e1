//! Width-parameterized word helpers.
//!
//! Words are stored in a `u64` regardless of the configured width. Every value
//! leaving the datapath is truncated to the width with [`Width::truncate`], and
//! arithmetic that needs the carry-out bit is carried out in `u128` so bit `W`
//! is directly observable.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Largest supported word width in bits.
pub const MAX_WIDTH: u32 = u64::BITS;

/// Returns bit `n` of `value`.
#[inline(always)]
pub const fn bit(value: u64, n: u32) -> bool {
    (value >> n) & 1 == 1
}

/// A validated word width in bits (`1..=64`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Width(u32);

impl Width {
    /// Eight-bit width used by the reference datapath.
    pub const BYTE: Self = Self(8);

    /// Validates and wraps a width.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroWidth`] for `0` and
    /// [`ConfigError::WidthTooLarge`] for anything above [`MAX_WIDTH`].
    pub const fn new(bits: u32) -> Result<Self, ConfigError> {
        if bits == 0 {
            Err(ConfigError::ZeroWidth)
        } else if bits > MAX_WIDTH {
            Err(ConfigError::WidthTooLarge {
                width: bits,
                max: MAX_WIDTH,
            })
        } else {
            Ok(Self(bits))
        }
    }

    /// Number of bits in a word.
    #[inline(always)]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Index of the sign bit (`W - 1`).
    #[inline(always)]
    pub const fn msb_index(self) -> u32 {
        self.0 - 1
    }

    /// Mask with the low `W` bits set.
    #[inline(always)]
    pub const fn mask(self) -> u64 {
        u64::MAX >> (MAX_WIDTH - self.0)
    }

    /// Truncates `value` to `W` bits.
    #[inline(always)]
    pub const fn truncate(self, value: u64) -> u64 {
        value & self.mask()
    }

    /// Sign bit (bit `W - 1`) of `value`.
    #[inline(always)]
    pub const fn sign_bit(self, value: u64) -> bool {
        bit(value, self.msb_index())
    }

    /// Carry-out bit (bit `W`) of a result computed in `W + 1` or more bits.
    #[inline(always)]
    pub const fn carry_bit(self, wide: u128) -> bool {
        (wide >> self.0) & 1 == 1
    }
}

impl Default for Width {
    fn default() -> Self {
        Self::BYTE
    }
}

impl TryFrom<u32> for Width {
    type Error = ConfigError;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        Self::new(bits)
    }
}

impl From<Width> for u32 {
    fn from(width: Width) -> Self {
        width.0
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.0)
    }
}
