//! ALU shift and rotate operations.
//!
//! Every operation moves `A` by exactly one bit; operand `B` is ignored.
//! The bit shifted out becomes the carry. Rotates are rotate-through-carry:
//! the incoming carry fills the vacated bit.
//!
//! `ASR` shifts only bits `0..W-1` (the magnitude) and places the original
//! sign bit back at `W - 1`. Bit `W - 2` of the result is therefore always
//! zero; the sign is kept, not replicated.

use super::func::AluFunc;
use super::output::Datapath;
use crate::common::{Width, bit};

/// Executes a shift or rotate.
///
/// # Arguments
///
/// * `func`     - The operation (`Rol`, `Ror`, `Lsl`, `Lsr` or `Asr`).
/// * `a`        - Value to shift, already truncated to `width`.
/// * `carry_in` - Incoming carry for the rotates.
/// * `width`    - Word width.
///
/// # Returns
///
/// The truncated result with the shifted-out bit as carry. Non-shift
/// selectors pass `a` through.
pub const fn execute(func: AluFunc, a: u64, carry_in: bool, width: Width) -> Datapath {
    let msb = width.msb_index();
    match func {
        AluFunc::Rol => Datapath::shifted(
            width.truncate((a << 1) | carry_in as u64),
            bit(a, msb),
        ),
        AluFunc::Ror => Datapath::shifted((a >> 1) | ((carry_in as u64) << msb), bit(a, 0)),
        AluFunc::Lsl => Datapath::shifted(width.truncate(a << 1), bit(a, msb)),
        AluFunc::Lsr => Datapath::shifted(a >> 1, bit(a, 0)),
        AluFunc::Asr => {
            let magnitude = a & (width.mask() >> 1);
            let sign = (width.sign_bit(a) as u64) << msb;
            Datapath::shifted((magnitude >> 1) | sign, bit(a, 0))
        }
        _ => Datapath::word(a),
    }
}
