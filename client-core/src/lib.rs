//! Client library for the Ledgia Broker API.
//!
//! The Broker is the REST backend of the Ledgia monetary/voucher
//! transaction service. This crate owns the protocol layer - request
//! authentication, response classification, resource-path building - and
//! exposes the domain operations (objects, orders, purchases, vouchers,
//! accounts) as thin methods over it.

pub mod broker_client;
pub mod config;
pub mod duration;
pub mod error;
pub mod logger;
pub mod resource;
pub mod safe_format;

#[cfg(test)]
mod tests;

pub use broker_client::BrokerClient;
pub use config::{BrokerConfig, Credentials};
pub use error::CoreError;

/// Hostname of the Broker API.
pub const BROKER_API_HOST: &str = "api.ledgia.com";

/// Production Broker endpoint.
pub const BROKER_ENDPOINT_URL: &str =
    const_format::concatcp!("https://", BROKER_API_HOST, "/broker/v1");

/// Sandbox Broker endpoint.
pub const BROKER_ENDPOINT_SANDBOX_URL: &str =
    const_format::concatcp!("https://", BROKER_API_HOST, "/sandbox/broker/v1");

/// Production user frontend, where buyers complete purchases and redeem
/// vouchers.
pub const FRONTEND_URL: &str = "https://www.ledgia.com";

/// Sandbox user frontend.
pub const FRONTEND_SANDBOX_URL: &str = "https://www.sandbox.ledgia.com";
