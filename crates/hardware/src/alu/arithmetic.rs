//! ALU arithmetic operations.
//!
//! Implements addition and subtraction. Both are computed in `u128` so the
//! carry-out (bit `W`) survives, then truncated to `W` bits for `OUT`.
//!
//! Subtraction reports the raw bit `W` of `A - B`, which is set when the
//! subtraction borrows (`A < B` as unsigned values).

use super::func::AluFunc;
use super::output::Datapath;
use crate::common::Width;

/// Executes an arithmetic operation.
///
/// # Arguments
///
/// * `func`  - The operation (must be `Add` or `Sub`).
/// * `a`     - First operand, already truncated to `width`.
/// * `b`     - Second operand, already truncated to `width`.
/// * `width` - Word width.
///
/// # Returns
///
/// The truncated result with carry and signed overflow. Non-arithmetic
/// selectors pass `a` through.
pub const fn execute(func: AluFunc, a: u64, b: u64, width: Width) -> Datapath {
    match func {
        AluFunc::Add => {
            let wide = a as u128 + b as u128;
            let out = width.truncate(wide as u64);
            let sign_a = width.sign_bit(a);
            Datapath {
                out,
                carry: width.carry_bit(wide),
                overflow: sign_a == width.sign_bit(b) && sign_a != width.sign_bit(out),
            }
        }
        AluFunc::Sub => {
            let wide = (a as u128).wrapping_sub(b as u128);
            let out = width.truncate(wide as u64);
            let sign_a = width.sign_bit(a);
            Datapath {
                out,
                carry: width.carry_bit(wide),
                overflow: sign_a != width.sign_bit(b) && sign_a != width.sign_bit(out),
            }
        }
        _ => Datapath::word(a),
    }
}
