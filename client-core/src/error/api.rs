//! The Broker's application error taxonomy.
//!
//! Key design decisions:
//! - Five fixed kinds, one per class of application failure
//! - Context labels and status codes default per kind but can be
//!   overridden by the error envelope
//! - Errors are constructed once at classification time and never
//!   mutated afterwards
//! - `#[track_caller]` for automatic location capture

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Default context labels, one per kind.
const CONTEXT_GENERAL: &str = "Error";
const CONTEXT_INVALID_DATA: &str = "Invalid data";
const CONTEXT_FORBIDDEN: &str = "Forbidden";
const CONTEXT_NOT_FOUND: &str = "Not found";
const CONTEXT_INTERNAL: &str = "Internal error";

/// A typed application error from the Broker.
///
/// Every non-2xx response with a well-formed error envelope maps onto
/// exactly one of these kinds; transport failures and malformed
/// envelopes are folded into `Internal` and `InvalidData` respectively.
#[derive(Debug, ThisError)]
pub enum ApiError {
    /// A Broker error was caught, but reasons/details were not
    /// understood or propagated well enough for a sharper kind.
    #[error("{context}: {message} {location}")]
    General {
        message: String,
        context: String,
        code: HttpStatusCode,
        location: ErrorLocation,
    },

    /// Verification of user-supplied data failed.
    #[error("{context}: {message} {location}")]
    InvalidData {
        message: String,
        context: String,
        code: HttpStatusCode,
        location: ErrorLocation,
    },

    /// The request asked for a forbidden action and was cancelled.
    #[error("{context}: {message} {location}")]
    Forbidden {
        message: String,
        context: String,
        code: HttpStatusCode,
        location: ErrorLocation,
    },

    /// The request did not yield any reasonable result.
    #[error("{context}: {message} {location}")]
    NotFound {
        message: String,
        context: String,
        code: HttpStatusCode,
        location: ErrorLocation,
    },

    /// Broker-side failure, including transport-level failures reaching
    /// the Broker at all.
    #[error("{context}: {message} {location}")]
    Internal {
        message: String,
        context: String,
        code: HttpStatusCode,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn general(message: impl Into<String>) -> Self {
        Self::general_with(message, CONTEXT_GENERAL)
    }

    #[track_caller]
    pub fn general_with(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::general_with_status(message, context, HttpStatusCode::CONFLICT)
    }

    #[track_caller]
    pub fn general_with_status(
        message: impl Into<String>,
        context: impl Into<String>,
        code: HttpStatusCode,
    ) -> Self {
        ApiError::General {
            message: message.into(),
            context: context.into(),
            code,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::invalid_data_with(message, CONTEXT_INVALID_DATA)
    }

    #[track_caller]
    pub fn invalid_data_with(message: impl Into<String>, context: impl Into<String>) -> Self {
        ApiError::InvalidData {
            message: message.into(),
            context: context.into(),
            code: HttpStatusCode::BAD_REQUEST,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::forbidden_with(message, CONTEXT_FORBIDDEN)
    }

    #[track_caller]
    pub fn forbidden_with(message: impl Into<String>, context: impl Into<String>) -> Self {
        ApiError::Forbidden {
            message: message.into(),
            context: context.into(),
            code: HttpStatusCode::FORBIDDEN,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::not_found_with(message, CONTEXT_NOT_FOUND)
    }

    #[track_caller]
    pub fn not_found_with(message: impl Into<String>, context: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            context: context.into(),
            code: HttpStatusCode::NOT_FOUND,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::internal_with(message, CONTEXT_INTERNAL)
    }

    #[track_caller]
    pub fn internal_with(message: impl Into<String>, context: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
            context: context.into(),
            code: HttpStatusCode::INTERNAL_SERVER_ERROR,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Human message, without the context label.
    pub fn message(&self) -> &str {
        match self {
            ApiError::General { message, .. }
            | ApiError::InvalidData { message, .. }
            | ApiError::Forbidden { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Internal { message, .. } => message,
        }
    }

    /// Context label (per-kind default unless the envelope supplied one).
    pub fn context(&self) -> &str {
        match self {
            ApiError::General { context, .. }
            | ApiError::InvalidData { context, .. }
            | ApiError::Forbidden { context, .. }
            | ApiError::NotFound { context, .. }
            | ApiError::Internal { context, .. } => context,
        }
    }

    /// Status code the error was classified from.
    pub fn code(&self) -> HttpStatusCode {
        match self {
            ApiError::General { code, .. }
            | ApiError::InvalidData { code, .. }
            | ApiError::Forbidden { code, .. }
            | ApiError::NotFound { code, .. }
            | ApiError::Internal { code, .. } => *code,
        }
    }
}
