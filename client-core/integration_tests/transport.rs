//! Transport policy tests.

use client_core::BrokerClient;
use client_core::config::{BrokerConfig, Credentials};
use client_core::error::CoreError;
use client_core::error::config::ConfigError;

use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> Credentials {
    Credentials::new("seller-1", "0123456789abcdef").unwrap()
}

/// **VALUE**: Verifies the https-only policy holds against a live,
/// perfectly functional plaintext endpoint.
///
/// **WHY THIS MATTERS**: The policy exists to keep Basic credentials off
/// the wire in the clear. A client that "helpfully" fell back to http
/// would leak the secret to anyone on the path.
///
/// **BUG THIS CATCHES**: Would catch construction skipping validation,
/// or validation consulting anything other than the scheme.
#[tokio::test]
async fn given_reachable_http_endpoint_when_client_is_built_then_refused_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let config = BrokerConfig::new(credentials())
        .unwrap()
        .with_endpoint(&server.uri())
        .unwrap();

    let result = BrokerClient::new(config);

    assert!(matches!(
        result,
        Err(CoreError::Config(ConfigError::InsecureEndpoint { .. }))
    ));
    // Refusal happened before any network activity.
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_valid_config_when_client_is_built_then_construction_succeeds() {
    let config = BrokerConfig::sandbox(credentials()).unwrap();

    assert!(BrokerClient::new(config).is_ok());
}
