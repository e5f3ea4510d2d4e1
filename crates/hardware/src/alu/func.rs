//! ALU operation selector.
//!
//! The selector is a closed, flat enumeration. Codes 3..=7 and everything
//! above 17 are reserved; they have no variant here and are handled by the
//! pass-through arm of [`Alu::execute_code`](super::Alu::execute_code).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::FuncError;

/// ALU operation codes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum AluFunc {
    /// Pass operand `A` through unchanged.
    #[default]
    None = 0,

    /// Addition with carry-out and signed overflow.
    Add = 1,

    /// Subtraction with borrow and signed overflow.
    Sub = 2,

    /// One's complement of `A`. Despite the name this is bitwise NOT, not arithmetic negation.
    Neg = 8,

    /// Bitwise AND.
    And = 9,

    /// Bitwise OR.
    Or = 10,

    /// Rotate left through carry.
    Rol = 11,

    /// Rotate right through carry.
    Ror = 12,

    /// Logical shift left by one.
    Lsl = 13,

    /// Logical shift right by one.
    Lsr = 14,

    /// Arithmetic shift right by one, keeping the sign bit.
    Asr = 15,

    /// Clear the carry flag.
    Clc = 16,

    /// Clear the overflow flag.
    Clv = 17,
}

impl AluFunc {
    /// Every defined operation, in code order.
    pub const ALL: [Self; 13] = [
        Self::None,
        Self::Add,
        Self::Sub,
        Self::Neg,
        Self::And,
        Self::Or,
        Self::Rol,
        Self::Ror,
        Self::Lsl,
        Self::Lsr,
        Self::Asr,
        Self::Clc,
        Self::Clv,
    ];

    /// Raw selector code.
    #[inline(always)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up the operation for a raw code.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::None),
            1 => Some(Self::Add),
            2 => Some(Self::Sub),
            8 => Some(Self::Neg),
            9 => Some(Self::And),
            10 => Some(Self::Or),
            11 => Some(Self::Rol),
            12 => Some(Self::Ror),
            13 => Some(Self::Lsl),
            14 => Some(Self::Lsr),
            15 => Some(Self::Asr),
            16 => Some(Self::Clc),
            17 => Some(Self::Clv),
            _ => None,
        }
    }

    /// Upper-case assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Neg => "NEG",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Rol => "ROL",
            Self::Ror => "ROR",
            Self::Lsl => "LSL",
            Self::Lsr => "LSR",
            Self::Asr => "ASR",
            Self::Clc => "CLC",
            Self::Clv => "CLV",
        }
    }

    /// Whether the operation consumes the incoming carry.
    pub const fn uses_carry_in(self) -> bool {
        matches!(self, Self::Rol | Self::Ror)
    }
}

impl TryFrom<u8> for AluFunc {
    type Error = FuncError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(FuncError::UnknownCode(code))
    }
}

impl From<AluFunc> for u8 {
    fn from(func: AluFunc) -> Self {
        func.code()
    }
}

impl FromStr for AluFunc {
    type Err = FuncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|func| func.mnemonic().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FuncError::UnknownMnemonic(s.to_owned()))
    }
}

impl fmt::Display for AluFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
