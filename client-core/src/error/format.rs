use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

/// Failures of the type-validated formatter (and with it, of resource
/// path building - no path segment is produced without it).
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Unknown Format Type Error: '{name}' {location}")]
    UnknownType {
        name: String,
        location: ErrorLocation,
    },

    #[error("Format Index Error: placeholder {index} with {supplied} argument(s) {location}")]
    IndexOutOfBounds {
        index: usize,
        supplied: usize,
        location: ErrorLocation,
    },

    #[error("Format Conversion Error: '{value}' is not a valid {kind} {location}")]
    Conversion {
        value: String,
        kind: &'static str,
        location: ErrorLocation,
    },
}

impl FormatError {
    #[track_caller]
    pub(crate) fn unknown_type(name: &str) -> Self {
        FormatError::UnknownType {
            name: name.to_owned(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn index_out_of_bounds(index: usize, supplied: usize) -> Self {
        FormatError::IndexOutOfBounds {
            index,
            supplied,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub(crate) fn conversion(value: String, kind: &'static str) -> Self {
        FormatError::Conversion {
            value,
            kind,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
