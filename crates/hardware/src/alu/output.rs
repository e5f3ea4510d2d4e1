//! ALU result and status flags.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::common::Width;

/// Result word and carry/overflow produced by one operation, before the
/// derived flags are computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Datapath {
    /// Result truncated to the word width.
    pub out: u64,
    /// Operation-specific carry-out.
    pub carry: bool,
    /// Operation-specific signed overflow.
    pub overflow: bool,
}

impl Datapath {
    /// Result with both carry and overflow low.
    #[inline(always)]
    pub const fn word(out: u64) -> Self {
        Self {
            out,
            carry: false,
            overflow: false,
        }
    }

    /// Result of a shift or rotate: carry-out set, overflow low.
    #[inline(always)]
    pub const fn shifted(out: u64, carry: bool) -> Self {
        Self {
            out,
            carry,
            overflow: false,
        }
    }
}

/// Complete output of one evaluation.
///
/// `zero`, `negative` and `signed` are derived from `out` and `overflow` by
/// [`AluOutput::new`], so outputs produced by the ALU always agree.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AluOutput {
    /// Result word (`OUT`).
    pub out: u64,
    /// `OUT == 0`.
    pub zero: bool,
    /// Operation-specific carry-out.
    pub carry: bool,
    /// Bit `W - 1` of `OUT`.
    pub negative: bool,
    /// Operation-specific signed overflow.
    pub overflow: bool,
    /// `negative XOR overflow`.
    pub signed: bool,
}

impl AluOutput {
    /// Derives the flag set for a datapath result.
    #[inline(always)]
    pub const fn new(width: Width, raw: Datapath) -> Self {
        let negative = width.sign_bit(raw.out);
        Self {
            out: raw.out,
            zero: raw.out == 0,
            carry: raw.carry,
            negative,
            overflow: raw.overflow,
            signed: negative ^ raw.overflow,
        }
    }

    /// Flags packed as `0b000S_VNCZ` (zero in bit 0).
    pub const fn flag_bits(&self) -> u8 {
        (self.zero as u8)
            | ((self.carry as u8) << 1)
            | ((self.negative as u8) << 2)
            | ((self.overflow as u8) << 3)
            | ((self.signed as u8) << 4)
    }
}

impl fmt::Display for AluOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "OUT={:#x} [{}{}{}{}{}]",
            self.out,
            flag(self.zero, 'Z'),
            flag(self.carry, 'C'),
            flag(self.negative, 'N'),
            flag(self.overflow, 'V'),
            flag(self.signed, 'S'),
        )
    }
}
