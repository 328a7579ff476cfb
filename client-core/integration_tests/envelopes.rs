//! Envelope classification over a real socket.
//!
//! The classifier is pure, but the envelopes it sees in production
//! arrive through an HTTP stack. These tests serve each envelope shape
//! from a live wiremock server and classify the bytes as received.

use client_core::broker_client::response::classify;
use client_core::error::api::ApiError;

use common::HttpStatusCode;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn fetch(server: &MockServer, resource: &str) -> (HttpStatusCode, String) {
    let response = reqwest::get(format!("{}/{resource}", server.uri()))
        .await
        .expect("mock server is reachable");
    let status = HttpStatusCode::from(response.status().as_u16());
    let body = response.text().await.expect("body is readable");
    (status, body)
}

#[tokio::test]
async fn given_success_envelope_over_the_wire_when_classified_then_data_survives() {
    let server = MockServer::start().await;
    let vouchers = json!([{ "vid": 42, "gid": "g1" }]);
    Mock::given(method("GET"))
        .and(path("/vouchers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": vouchers })))
        .mount(&server)
        .await;

    let (status, body) = fetch(&server, "vouchers").await;
    let data = classify(status, &body).unwrap();

    assert_eq!(data, vouchers);
}

#[tokio::test]
async fn given_error_envelope_over_the_wire_when_classified_then_kind_matches_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/vouchers/x"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "voucher.get flag missing",
            "context": "Forbidden",
        })))
        .mount(&server)
        .await;

    let (status, body) = fetch(&server, "vouchers/x").await;
    let error = classify(status, &body).unwrap_err();

    assert!(matches!(error, ApiError::Forbidden { .. }));
    assert_eq!(error.message(), "voucher.get flag missing");
}

#[tokio::test]
async fn given_html_error_page_over_the_wire_when_classified_then_raw_body_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let (status, body) = fetch(&server, "down").await;
    let error = classify(status, &body).unwrap_err();

    assert!(matches!(error, ApiError::General { .. }));
    assert_eq!(error.code(), HttpStatusCode::from(502));
    assert_eq!(error.message(), "<html>Bad Gateway</html>");
}
