// Unit tests for credentials and configuration validation.

use crate::config::{BrokerConfig, Credentials};
use crate::error::config::ConfigError;
use crate::{BROKER_ENDPOINT_SANDBOX_URL, BROKER_ENDPOINT_URL};

use serial_test::serial;

fn credentials() -> Credentials {
    Credentials::new("seller-1", "0123456789abcdef").unwrap()
}

#[test]
fn given_empty_key_or_secret_when_constructed_then_missing_credentials() {
    assert!(matches!(
        Credentials::new("", "secret"),
        Err(ConfigError::MissingCredentials { .. })
    ));
    assert!(matches!(
        Credentials::new("key", ""),
        Err(ConfigError::MissingCredentials { .. })
    ));
}

/// **VALUE**: Verifies the password-derived secret is the SHA-1 hex
/// digest of the password (known vector).
///
/// **WHY THIS MATTERS**: The Broker stores and compares SHA-1 digests;
/// a different digest or encoding authenticates nothing, silently.
#[test]
fn given_login_pair_when_constructed_then_secret_is_sha1_hex_digest() {
    let credentials = Credentials::from_login("user", "password").unwrap();

    assert_eq!(credentials.key(), "user");
    assert_eq!(
        credentials.secret().as_str(),
        "5baa61e4c9b93f3f0682250b6cf8331b7ee68fd8"
    );
}

#[test]
fn given_empty_password_when_constructed_then_missing_credentials() {
    assert!(matches!(
        Credentials::from_login("user", ""),
        Err(ConfigError::MissingCredentials { .. })
    ));
}

#[test]
fn given_default_config_when_constructed_then_production_endpoint_validates() {
    let config = BrokerConfig::new(credentials()).unwrap();

    assert_eq!(config.endpoint.as_str(), BROKER_ENDPOINT_URL);
    config.validate().unwrap();
}

#[test]
fn given_sandbox_config_when_constructed_then_sandbox_endpoint_is_used() {
    let config = BrokerConfig::sandbox(credentials()).unwrap();

    assert_eq!(config.endpoint.as_str(), BROKER_ENDPOINT_SANDBOX_URL);
    config.validate().unwrap();
}

/// **VALUE**: Verifies the https-only policy is a validation failure,
/// not a downgrade or a warning.
///
/// **BUG THIS CATCHES**: Would catch validation accepting `http://`
/// endpoints, which would send Basic credentials in the clear.
#[test]
fn given_http_endpoint_when_validated_then_insecure_endpoint_error() {
    let config = BrokerConfig::new(credentials())
        .unwrap()
        .with_endpoint("http://api.ledgia.com/broker/v1")
        .unwrap();

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InsecureEndpoint { .. })
    ));
}

#[test]
fn given_malformed_endpoint_when_replaced_then_url_parse_error() {
    let result = BrokerConfig::new(credentials())
        .unwrap()
        .with_endpoint("not a url");

    assert!(matches!(result, Err(ConfigError::UrlParse { .. })));
}

#[test]
#[serial]
fn given_complete_environment_when_loaded_then_config_uses_overrides() {
    unsafe {
        std::env::set_var("LEDGIA_API_KEY", "env-key");
        std::env::set_var("LEDGIA_API_SECRET", "env-secret");
        std::env::set_var("LEDGIA_ENDPOINT_URL", "https://broker.test/api/v1");
    }

    let config = BrokerConfig::from_env().unwrap();

    assert_eq!(config.credentials.key(), "env-key");
    assert_eq!(config.endpoint.as_str(), "https://broker.test/api/v1");

    unsafe {
        std::env::remove_var("LEDGIA_API_KEY");
        std::env::remove_var("LEDGIA_API_SECRET");
        std::env::remove_var("LEDGIA_ENDPOINT_URL");
    }
}

#[test]
#[serial]
fn given_missing_required_variable_when_loaded_then_environment_error() {
    unsafe {
        std::env::remove_var("LEDGIA_API_KEY");
        std::env::remove_var("LEDGIA_API_SECRET");
    }

    let result = BrokerConfig::from_env();

    match result.unwrap_err() {
        ConfigError::Environment { variable, .. } => assert_eq!(variable, "LEDGIA_API_KEY"),
        other => panic!("expected Environment error, got {other:?}"),
    }
}
