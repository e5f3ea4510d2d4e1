//! Operation selector tests: codes, mnemonics and serde forms.

use alusim_core::AluFunc;
use alusim_core::common::FuncError;

#[test]
fn codes_match_the_selector_table() {
    let expected = [
        (AluFunc::None, 0),
        (AluFunc::Add, 1),
        (AluFunc::Sub, 2),
        (AluFunc::Neg, 8),
        (AluFunc::And, 9),
        (AluFunc::Or, 10),
        (AluFunc::Rol, 11),
        (AluFunc::Ror, 12),
        (AluFunc::Lsl, 13),
        (AluFunc::Lsr, 14),
        (AluFunc::Asr, 15),
        (AluFunc::Clc, 16),
        (AluFunc::Clv, 17),
    ];
    for (func, code) in expected {
        assert_eq!(func.code(), code);
        assert_eq!(u8::from(func), code);
        assert_eq!(AluFunc::from_code(code), Some(func));
    }
}

#[test]
fn all_is_in_code_order() {
    assert!(AluFunc::ALL.windows(2).all(|w| w[0].code() < w[1].code()));
}

#[test]
fn reserved_codes_have_no_variant() {
    for code in (3..=7).chain(18..=u8::MAX) {
        assert_eq!(AluFunc::from_code(code), None);
        assert_eq!(AluFunc::try_from(code), Err(FuncError::UnknownCode(code)));
    }
}

#[test]
fn default_is_none() {
    assert_eq!(AluFunc::default(), AluFunc::None);
}

#[test]
fn mnemonics_parse_case_insensitively() {
    assert_eq!("add".parse::<AluFunc>(), Ok(AluFunc::Add));
    assert_eq!(" Rol ".parse::<AluFunc>(), Ok(AluFunc::Rol));
    assert_eq!("CLV".parse::<AluFunc>(), Ok(AluFunc::Clv));
    assert_eq!(
        "MUL".parse::<AluFunc>(),
        Err(FuncError::UnknownMnemonic("MUL".to_owned()))
    );
}

#[test]
fn display_round_trips_through_from_str() {
    for func in AluFunc::ALL {
        assert_eq!(func.to_string().parse::<AluFunc>(), Ok(func));
    }
}

#[test]
fn only_rotates_use_carry_in() {
    let users: Vec<_> = AluFunc::ALL.into_iter().filter(|f| f.uses_carry_in()).collect();
    assert_eq!(users, vec![AluFunc::Rol, AluFunc::Ror]);
}

#[test]
fn serde_uses_upper_case_mnemonics() {
    assert_eq!(serde_json::to_string(&AluFunc::Asr).unwrap(), "\"ASR\"");
    let func: AluFunc = serde_json::from_str("\"CLC\"").unwrap();
    assert_eq!(func, AluFunc::Clc);
}
