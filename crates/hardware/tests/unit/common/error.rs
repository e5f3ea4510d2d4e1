//! # Error Tests
//!
//! Display messages and conversions of the crate error types.

use std::io;

use alusim_core::common::{ConfigError, FuncError, SimError};

#[test]
fn config_error_display() {
    assert_eq!(
        ConfigError::ZeroWidth.to_string(),
        "ALU width must be at least 1 bit"
    );
    assert_eq!(
        ConfigError::WidthTooLarge { width: 65, max: 64 }.to_string(),
        "ALU width 65 exceeds the supported maximum of 64 bits"
    );
}

#[test]
fn config_error_from_json() {
    let err = serde_json::from_str::<u32>("nope").unwrap_err();
    let err = ConfigError::from(err);
    assert!(err.to_string().starts_with("invalid configuration:"));
}

#[test]
fn func_error_display() {
    assert_eq!(
        FuncError::UnknownCode(5).to_string(),
        "unknown ALU function code 5"
    );
    assert_eq!(
        FuncError::UnknownMnemonic("MUL".into()).to_string(),
        "unknown ALU function mnemonic `MUL`"
    );
}

#[test]
fn sim_error_wraps_sources() {
    let err = SimError::from(FuncError::UnknownCode(3));
    assert_eq!(err.to_string(), "unknown ALU function code 3");

    let err = SimError::from(ConfigError::ZeroWidth);
    assert_eq!(err.to_string(), "ALU width must be at least 1 bit");

    let err = SimError::from(io::Error::other("disk full"));
    assert_eq!(err.to_string(), "I/O error: disk full");
}
