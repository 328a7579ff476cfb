//! The authenticated Broker client.
//!
//! [`BrokerClient`] owns the transport call: it enforces the https-only
//! endpoint policy, attaches HTTP Basic credentials, performs exactly
//! one round trip per call and hands the raw outcome to the response
//! classifier. The domain operations live in sibling modules as thin
//! wrappers over [`BrokerClient::execute`].
//!
//! The client is stateless across calls beyond its immutable
//! configuration; it can be shared and called concurrently without
//! locking.

pub mod response;

mod account;
mod orders;
mod purchases;
mod registry;
mod vouchers;

use crate::config::BrokerConfig;
use crate::error::CoreError;
use crate::error::api::ApiError;

use common::HttpStatusCode;

use std::time::Duration;

use log::{debug, warn};
use reqwest::{Client, Method};
use serde_json::Value;
use url::Url;

/// Timeout applied to every request, fixed at client construction.
const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

/// Message surfaced for any transport-level failure. Deliberately the
/// same wording for connection, protocol and body-read failures; the
/// underlying cause goes to the log, not to the caller.
const TRANSPORT_FAILURE_MESSAGE: &str = "HTTP request failed (network error? installation error?)";

/// Authenticated client for the Broker API.
#[derive(Debug, Clone)]
pub struct BrokerClient {
    config: BrokerConfig,
    client: Client,
}

impl BrokerClient {
    /// Create a client over the given configuration.
    ///
    /// Validation happens here, before any request can exist: both
    /// credential halves must be non-empty and the endpoint scheme must
    /// be https.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](crate::error::ConfigError) when
    /// validation fails, or an internal [`ApiError`] if the underlying
    /// HTTP client cannot be constructed.
    pub fn new(config: BrokerConfig) -> Result<Self, CoreError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .build()
            .map_err(|error| ApiError::internal(format!("HTTP client construction failed: {error}")))?;

        Ok(Self { config, client })
    }

    /// The configuration the client was built with.
    pub fn config(&self) -> &BrokerConfig {
        &self.config
    }

    /// Perform one authenticated request and classify its response.
    ///
    /// `resource` is a relative path as produced by
    /// [`ResourcePath`](crate::resource::ResourcePath) or
    /// [`safe_format`](crate::safe_format::safe_format); it is joined
    /// onto the endpoint's base path. A `body`, when present, is sent as
    /// a JSON document.
    ///
    /// Exactly one network round trip per call: no retry, no caching, no
    /// idempotency tracking.
    ///
    /// # Errors
    ///
    /// A configuration error when the client's invariants no longer
    /// hold, an internal-kind [`ApiError`] for transport failures, or
    /// whatever typed error the classifier derives from a completed
    /// response.
    pub async fn execute(
        &self,
        method: Method,
        resource: &str,
        body: Option<Value>,
    ) -> Result<Value, CoreError> {
        self.config.validate()?;

        let url = self.request_url(resource)?;
        debug!("{method} {url}");

        let mut request = self.client.request(method, url).basic_auth(
            self.config.credentials.key(),
            Some(self.config.credentials.secret().as_str()),
        );
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|error| {
            warn!("Transport failure talking to the Broker: {error}");
            ApiError::internal(TRANSPORT_FAILURE_MESSAGE)
        })?;

        let status = HttpStatusCode::from(response.status().as_u16());
        let raw_body = response.text().await.map_err(|error| {
            warn!("Failed reading Broker response body: {error}");
            ApiError::internal(TRANSPORT_FAILURE_MESSAGE)
        })?;

        response::classify(status, &raw_body).map_err(CoreError::from)
    }

    /// Join a resource path onto the endpoint's base path.
    fn request_url(&self, resource: &str) -> Result<Url, ApiError> {
        let mut base = self.config.endpoint.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        base.join(resource)
            .map_err(|error| ApiError::invalid_data(format!("invalid resource path '{resource}': {error}")))
    }

    /// Absolute frontend URL for a path assembled by an operation.
    fn frontend_url(&self, path: &str) -> Result<String, ApiError> {
        self.config
            .frontend
            .join(path)
            .map(|url| url.to_string())
            .map_err(|error| ApiError::invalid_data(format!("invalid frontend path '{path}': {error}")))
    }
}
