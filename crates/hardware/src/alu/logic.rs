//! ALU bitwise operations.
//!
//! Implements NOT (selected as `NEG`), AND and OR. None of them touch carry or
//! overflow.

use super::func::AluFunc;
use super::output::Datapath;
use crate::common::Width;

/// Executes a bitwise operation.
///
/// `NEG` is the one's complement of `a`, truncated to `width`; it is not
/// two's-complement negation. Non-logic selectors pass `a` through.
pub const fn execute(func: AluFunc, a: u64, b: u64, width: Width) -> Datapath {
    match func {
        AluFunc::Neg => Datapath::word(width.truncate(!a)),
        AluFunc::And => Datapath::word(a & b),
        AluFunc::Or => Datapath::word(a | b),
        _ => Datapath::word(a),
    }
}
