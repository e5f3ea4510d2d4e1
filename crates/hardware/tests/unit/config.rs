//! # Configuration Tests
//!
//! Defaults, deserialization and validation of [`AluConfig`].

use alusim_core::Alu;
use alusim_core::common::ConfigError;
use alusim_core::config::*;
use pretty_assertions::assert_eq;

#[test]
fn test_config_default() {
    let config = AluConfig::default();
    assert_eq!(config.width, 8);
    assert_eq!(config.clear_result, ClearResult::Reset);
    assert!(config.chain_carry);
    assert_eq!(config.validate().unwrap().bits(), 8);
}

#[test]
fn test_empty_document_uses_defaults() {
    assert_eq!(AluConfig::from_json("{}").unwrap(), AluConfig::default());
}

#[test]
fn test_full_document() {
    let config = AluConfig::from_json(
        r#"{ "width": 32, "clear_result": "pass-through", "chain_carry": false }"#,
    )
    .unwrap();
    assert_eq!(
        config,
        AluConfig {
            width: 32,
            clear_result: ClearResult::PassThrough,
            chain_carry: false,
        }
    );
}

#[test]
fn test_clear_result_aliases() {
    let config = AluConfig::from_json(r#"{ "clear_result": "PassThrough" }"#).unwrap();
    assert_eq!(config.clear_result, ClearResult::PassThrough);
    let config = AluConfig::from_json(r#"{ "clear_result": "Reset" }"#).unwrap();
    assert_eq!(config.clear_result, ClearResult::Reset);
}

#[test]
fn test_zero_width_rejected() {
    assert!(matches!(
        AluConfig::from_json(r#"{ "width": 0 }"#),
        Err(ConfigError::ZeroWidth)
    ));
}

#[test]
fn test_oversized_width_rejected() {
    assert!(matches!(
        AluConfig::from_json(r#"{ "width": 128 }"#),
        Err(ConfigError::WidthTooLarge { width: 128, max: 64 })
    ));
}

#[test]
fn test_unknown_field_rejected() {
    assert!(matches!(
        AluConfig::from_json(r#"{ "widht": 8 }"#),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_malformed_json_rejected() {
    assert!(matches!(
        AluConfig::from_json("{ width: 8"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_serialize_round_trip() {
    let config = AluConfig {
        width: 12,
        clear_result: ClearResult::PassThrough,
        chain_carry: false,
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains("\"pass-through\""));
    assert_eq!(AluConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_alu_from_config() {
    let config = AluConfig {
        width: 16,
        clear_result: ClearResult::PassThrough,
        chain_carry: true,
    };
    let alu = Alu::from_config(&config).unwrap();
    assert_eq!(alu.width().bits(), 16);
    assert_eq!(alu.clear_result(), ClearResult::PassThrough);

    let bad = AluConfig { width: 0, ..config };
    assert!(Alu::from_config(&bad).is_err());
}
