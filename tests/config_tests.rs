use session_client::config::Config;
use session_client::utils::config::{get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn with_credentials_populates_all_fields() {
    let config = Config::with_credentials(
        "https://mgmt.example.com/api/v1",
        "admin",
        "secret",
        true,
        "corp",
    );

    assert_eq!(config.rest_api.base_url, "https://mgmt.example.com/api/v1");
    assert!(config.rest_api.skip_tls_verify);
    assert_eq!(config.credentials.username, "admin");
    assert_eq!(config.credentials.password, "secret");
    assert_eq!(config.credentials.domain, "corp");
}

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("SESSION_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("SESSION_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("SESSION_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("SESSION_TEST_MISSING_VAR");
        let result: String = get_env_or_default("SESSION_TEST_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("SESSION_TEST_VAR_INVALID", "not_a_bool");
        let result: bool = get_env_or_default("SESSION_TEST_VAR_INVALID", true);
        assert!(result); // Should return default
        env::remove_var("SESSION_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none_with_existing_var() {
    unsafe {
        env::set_var("SESSION_TEST_VAR_OPTION", "123");
        let result: Option<i32> = get_env_or_none("SESSION_TEST_VAR_OPTION");
        assert_eq!(result, Some(123));
        env::remove_var("SESSION_TEST_VAR_OPTION");
    }
}

#[test]
fn test_get_env_or_none_with_missing_var() {
    unsafe {
        env::remove_var("SESSION_TEST_MISSING_VAR_OPTION");
        let result: Option<i32> = get_env_or_none("SESSION_TEST_MISSING_VAR_OPTION");
        assert_eq!(result, None);
    }
}
