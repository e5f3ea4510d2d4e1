//! ALU Arithmetic Operation Tests
//!
//! Deterministic edge-case vectors for ADD and SUB covering:
//!   - The reference test bench values (0x01 + 0x55, 0x7F + 0x01)
//!   - Unsigned carry-out and borrow
//!   - Signed overflow in both directions
//!   - The narrowest (1-bit) and widest (64-bit) words

use alusim_core::AluFunc;
use rstest::rstest;

use crate::common::eval;

// ─── Constants ───────────────────────────────────────────────────────────────

const I64_MAX: u64 = i64::MAX as u64; // 0x7FFF_FFFF_FFFF_FFFF
const I64_MIN: u64 = i64::MIN as u64; // 0x8000_0000_0000_0000

// ═════════════════════════════════════════════════════════════════════════════
//  ADD
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case::bench_small_sum(0x01, 0x55, 0x56, false, false)]
#[case::bench_signed_overflow(0b0111_1111, 0b0000_0001, 0b1000_0000, false, true)]
#[case::unsigned_wrap(0xFF, 0x01, 0x00, true, false)]
#[case::min_plus_min(0x80, 0x80, 0x00, true, true)]
#[case::neg_plus_neg_no_overflow(0xFF, 0xFF, 0xFE, true, false)]
#[case::pos_plus_neg(0x10, 0xF0, 0x00, true, false)]
#[case::zero_plus_zero(0x00, 0x00, 0x00, false, false)]
fn add_8bit(
    #[case] a: u64,
    #[case] b: u64,
    #[case] out: u64,
    #[case] carry: bool,
    #[case] overflow: bool,
) {
    let result = eval(8, AluFunc::Add, a, b);
    assert_eq!(result.out, out);
    assert_eq!(result.carry, carry, "carry");
    assert_eq!(result.overflow, overflow, "overflow");
}

#[test]
fn add_signed_overflow_sets_negative_and_clears_signed() {
    let result = eval(8, AluFunc::Add, 0x7F, 0x01);
    assert!(result.negative);
    assert!(result.overflow);
    // negative XOR overflow: the true sum (+128) is positive.
    assert!(!result.signed);
    assert!(!result.zero);
}

#[test]
fn add_bench_values_raise_no_flags() {
    let result = eval(8, AluFunc::Add, 0x01, 0x55);
    assert_eq!(result.flag_bits(), 0);
}

#[test]
fn add_1bit_one_plus_one() {
    // 1 + 1 = 0b10: OUT = 0, carry out; -1 + -1 = -2 does not fit in 1 bit.
    let result = eval(1, AluFunc::Add, 1, 1);
    assert_eq!(result.out, 0);
    assert!(result.carry);
    assert!(result.overflow);
    assert!(result.zero);
    assert!(result.signed);
}

#[test]
fn add_4bit_overflow() {
    let result = eval(4, AluFunc::Add, 0b0111, 0b0001);
    assert_eq!(result.out, 0b1000);
    assert!(!result.carry);
    assert!(result.overflow);
}

#[test]
fn add_64bit_unsigned_wrap() {
    let result = eval(64, AluFunc::Add, u64::MAX, 1);
    assert_eq!(result.out, 0);
    assert!(result.carry);
    assert!(!result.overflow);
    assert!(result.zero);
}

#[test]
fn add_64bit_signed_overflow() {
    let result = eval(64, AluFunc::Add, I64_MAX, 1);
    assert_eq!(result.out, I64_MIN);
    assert!(!result.carry);
    assert!(result.overflow);
    assert!(result.negative);
}

#[test]
fn add_is_commutative_on_flags() {
    let ab = eval(8, AluFunc::Add, 0x9C, 0x3A);
    let ba = eval(8, AluFunc::Add, 0x3A, 0x9C);
    assert_eq!(ab, ba);
}

// ═════════════════════════════════════════════════════════════════════════════
//  SUB
// ═════════════════════════════════════════════════════════════════════════════

#[rstest]
#[case::bench_borrow(0x01, 0x55, 0xAC, true, false)]
#[case::no_borrow(0x55, 0x01, 0x54, false, false)]
#[case::equal_operands(0x42, 0x42, 0x00, false, false)]
#[case::min_minus_one(0x80, 0x01, 0x7F, false, true)]
#[case::max_minus_minus_one(0x7F, 0xFF, 0x80, true, true)]
#[case::zero_minus_one(0x00, 0x01, 0xFF, true, false)]
#[case::neg_minus_neg(0xF0, 0xF8, 0xF8, true, false)]
fn sub_8bit(
    #[case] a: u64,
    #[case] b: u64,
    #[case] out: u64,
    #[case] carry: bool,
    #[case] overflow: bool,
) {
    let result = eval(8, AluFunc::Sub, a, b);
    assert_eq!(result.out, out);
    assert_eq!(result.carry, carry, "carry");
    assert_eq!(result.overflow, overflow, "overflow");
}

#[test]
fn sub_equal_operands_sets_zero() {
    let result = eval(8, AluFunc::Sub, 0x42, 0x42);
    assert!(result.zero);
    assert!(!result.negative);
}

#[test]
fn sub_bench_values_are_negative_and_signed() {
    // 1 - 85 = -84, no signed overflow, so `signed` follows `negative`.
    let result = eval(8, AluFunc::Sub, 0x01, 0x55);
    assert!(result.negative);
    assert!(!result.overflow);
    assert!(result.signed);
}

#[test]
fn sub_overflow_flips_signed() {
    // -128 - 1 = -129 wraps to +127; signed still reports "less than".
    let result = eval(8, AluFunc::Sub, 0x80, 0x01);
    assert!(!result.negative);
    assert!(result.overflow);
    assert!(result.signed);
}

#[test]
fn sub_64bit_borrow() {
    let result = eval(64, AluFunc::Sub, 0, 1);
    assert_eq!(result.out, u64::MAX);
    assert!(result.carry);
    assert!(!result.overflow);
}

#[test]
fn sub_64bit_signed_overflow() {
    let result = eval(64, AluFunc::Sub, I64_MIN, 1);
    assert_eq!(result.out, I64_MAX);
    assert!(!result.carry);
    assert!(result.overflow);
}

#[test]
fn sub_1bit() {
    // 0 - 1 borrows; 0 - (-1) = +1 does not fit.
    let result = eval(1, AluFunc::Sub, 0, 1);
    assert_eq!(result.out, 1);
    assert!(result.carry);
    assert!(result.overflow);
}

// ═════════════════════════════════════════════════════════════════════════════
//  Compile-time evaluation
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn datapath_evaluates_in_const_context() {
    use alusim_core::Width;
    use alusim_core::alu::{Datapath, arithmetic};

    const SUM: Datapath = arithmetic::execute(AluFunc::Add, 0x7F, 0x01, Width::BYTE);
    const BORROW: Datapath = arithmetic::execute(AluFunc::Sub, 0x01, 0x55, Width::BYTE);

    assert_eq!(
        SUM,
        Datapath {
            out: 0x80,
            carry: false,
            overflow: true
        }
    );
    assert_eq!(
        BORROW,
        Datapath {
            out: 0xAC,
            carry: true,
            overflow: false
        }
    );
}
