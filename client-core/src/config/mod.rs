//! Client configuration: credentials and endpoints.
//!
//! Configuration is an explicit value passed to [`BrokerClient::new`];
//! there is no module-level mutable state. Defaults point at the
//! production endpoints; [`BrokerConfig::sandbox`] switches both the API
//! endpoint and the frontend to the sandbox environment.
//!
//! [`BrokerClient::new`]: crate::BrokerClient::new

use crate::error::config::ConfigError;
use crate::{
    BROKER_ENDPOINT_SANDBOX_URL, BROKER_ENDPOINT_URL, FRONTEND_SANDBOX_URL, FRONTEND_URL,
};

use common::{ErrorLocation, RedactedSecret};

use std::panic::Location;

use log::{info, warn};
use sha1::{Digest, Sha1};
use url::Url;

/// Environment variables read by [`BrokerConfig::from_env`].
const ENV_API_KEY: &str = "LEDGIA_API_KEY";
const ENV_API_SECRET: &str = "LEDGIA_API_SECRET";
const ENV_ENDPOINT: &str = "LEDGIA_ENDPOINT_URL";
const ENV_FRONTEND: &str = "LEDGIA_FRONTEND_URL";

/// The only scheme a Broker endpoint may use. Hard policy, never
/// negotiated or downgraded.
const SECURE_SCHEME: &str = "https";

/// An identifier/secret pair authenticating every Broker request.
///
/// The secret is either provided directly (API key/secret pair) or
/// derived from a password, in which case it becomes the SHA-1 hex
/// digest of the password - the form the Broker stores and compares.
#[derive(Debug, Clone)]
pub struct Credentials {
    key: String,
    secret: RedactedSecret,
}

impl Credentials {
    /// Build credentials from an explicit key/secret pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if either half is
    /// empty.
    #[track_caller]
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        let secret = secret.into();

        if key.is_empty() || secret.is_empty() {
            return Err(ConfigError::MissingCredentials {
                message: String::from("API key/username and/or API secret/password undefined"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            key,
            secret: RedactedSecret::new(secret),
        })
    }

    /// Build credentials from a username/password login pair.
    ///
    /// The raw password never leaves this constructor; only its SHA-1
    /// hex digest is kept.
    #[track_caller]
    pub fn from_login(
        username: impl Into<String>,
        password: &str,
    ) -> Result<Self, ConfigError> {
        if password.is_empty() {
            return Err(ConfigError::MissingCredentials {
                message: String::from("API key/username and/or API secret/password undefined"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let digest = hex::encode(Sha1::digest(password.as_bytes()));
        Self::new(username, digest)
    }

    /// The account identifier half.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The secret half, still wrapped. Call `as_str()` on it only at the
    /// point of authentication.
    pub fn secret(&self) -> &RedactedSecret {
        &self.secret
    }
}

/// Endpoint and credential configuration for a [`BrokerClient`].
///
/// [`BrokerClient`]: crate::BrokerClient
#[derive(Debug, Clone)]
pub struct BrokerConfig {
    /// Base URL of the Broker API. Must be https.
    pub endpoint: Url,
    /// Base URL of the user frontend, used to assemble purchase/redeem
    /// URLs returned to callers.
    pub frontend: Url,
    pub credentials: Credentials,
}

impl BrokerConfig {
    /// Configuration against the production environment.
    pub fn new(credentials: Credentials) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: Url::parse(BROKER_ENDPOINT_URL)?,
            frontend: Url::parse(FRONTEND_URL)?,
            credentials,
        })
    }

    /// Configuration against the sandbox environment.
    pub fn sandbox(credentials: Credentials) -> Result<Self, ConfigError> {
        Ok(Self {
            endpoint: Url::parse(BROKER_ENDPOINT_SANDBOX_URL)?,
            frontend: Url::parse(FRONTEND_SANDBOX_URL)?,
            credentials,
        })
    }

    /// Replace the API endpoint.
    ///
    /// The URL only has to parse here; the https policy is enforced by
    /// [`validate`](Self::validate) before any request is issued.
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
        self.endpoint = Url::parse(endpoint)?;
        Ok(self)
    }

    /// Replace the frontend base URL.
    pub fn with_frontend(mut self, frontend: &str) -> Result<Self, ConfigError> {
        self.frontend = Url::parse(frontend)?;
        Ok(self)
    }

    /// Load configuration from the environment (and a `.env` file when
    /// present).
    ///
    /// `LEDGIA_API_KEY` and `LEDGIA_API_SECRET` are required;
    /// `LEDGIA_ENDPOINT_URL` and `LEDGIA_FRONTEND_URL` override the
    /// production defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Environment`] when a required variable is
    /// absent, or a parse/credential error for malformed values.
    #[track_caller]
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(error) = dotenvy::dotenv() {
            if !error.not_found() {
                warn!("Failed to load .env file: {error}");
            }
        }

        let key = require_env(ENV_API_KEY)?;
        let secret = require_env(ENV_API_SECRET)?;

        let mut config = Self::new(Credentials::new(key, secret)?)?;
        if let Ok(endpoint) = std::env::var(ENV_ENDPOINT) {
            config.endpoint = Url::parse(&endpoint)?;
        }
        if let Ok(frontend) = std::env::var(ENV_FRONTEND) {
            config.frontend = Url::parse(&frontend)?;
        }

        info!("Broker configuration loaded from environment");
        Ok(config)
    }

    /// Check the invariants every request depends on.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] for an empty key or
    /// secret, [`ConfigError::InsecureEndpoint`] for a non-https
    /// endpoint. Both fail before any network activity.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.credentials.key().is_empty() || self.credentials.secret().is_empty() {
            return Err(ConfigError::MissingCredentials {
                message: String::from("Broker authentication credentials undefined"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.endpoint.scheme() != SECURE_SCHEME {
            return Err(ConfigError::InsecureEndpoint {
                url: self.endpoint.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}

#[track_caller]
fn require_env(variable: &str) -> Result<String, ConfigError> {
    std::env::var(variable).map_err(|error| ConfigError::Environment {
        variable: variable.to_owned(),
        message: error.to_string(),
        location: ErrorLocation::from(Location::caller()),
    })
}
