//! Tests for core error types

use yumlgen::core::YumlError;

#[test]
fn test_config_error() {
    let error = YumlError::config_error("Invalid style - \"fancy\"".to_string());
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Configuration error"));
    assert!(error_msg.contains("Invalid style"));
}

#[test]
fn test_lookup_error() {
    let error = YumlError::lookup_error("Specified application not found: shop".to_string());
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Lookup error"));
    assert!(error_msg.contains("shop"));
}

#[test]
fn test_schema_error() {
    let error = YumlError::schema_error("invalid model reference \"User\"".to_string());
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("Schema error"));
    assert!(error_msg.contains("User"));
}

#[test]
fn test_io_error_conversion() {
    use std::io;
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
    let error: YumlError = io_err.into();
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("IO error"));
    assert!(error_msg.contains("Permission denied"));
}

#[test]
fn test_errors_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<YumlError>();
}
