pub mod api;
pub mod config;
pub mod format;
pub mod logger;

pub use api::ApiError;
pub use config::ConfigError;
pub use format::FormatError;
pub use logger::LoggerError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Api(#[from] api::ApiError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Format(#[from] format::FormatError),

    #[error(transparent)]
    Logger(#[from] logger::LoggerError),
}
