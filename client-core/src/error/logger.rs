use common::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Log File Error: {path}: {source} {location}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Logger Init Error: {message} {location}")]
    Init {
        message: String,
        location: ErrorLocation,
    },
}

impl From<log::SetLoggerError> for LoggerError {
    #[track_caller]
    fn from(error: log::SetLoggerError) -> Self {
        LoggerError::Init {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
