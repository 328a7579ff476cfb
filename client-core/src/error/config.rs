use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing Credentials Error: {message} {location}")]
    MissingCredentials {
        message: String,
        location: ErrorLocation,
    },

    #[error("Insecure Endpoint Error: '{url}' - the Broker endpoint scheme must be https {location}")]
    InsecureEndpoint {
        url: String,
        location: ErrorLocation,
    },

    #[error("Url Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Environment Error: {variable}: {message} {location}")]
    Environment {
        variable: String,
        message: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for ConfigError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        ConfigError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
