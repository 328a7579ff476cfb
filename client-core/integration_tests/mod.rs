//! Integration tests for the Broker client core.
//!
//! These run against a live local HTTP server (wiremock): response
//! envelopes are served over a real socket, and the https-only transport
//! policy is exercised against a real plaintext endpoint.

mod envelopes;
mod logging;
mod transport;
