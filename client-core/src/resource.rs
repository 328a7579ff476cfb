//! Hierarchical resource paths with optional filter chains.
//!
//! Broker listing resources take their filters as ordered path segments
//! (`vouchers/from=42/gid=g1`), not query strings. The backend parses
//! the segments positionally, so the order in which combinators are
//! chained is part of the wire contract.
//!
//! A filter is appended only when its value is present: `None` is
//! absent, and so are an integer 0 and an empty string. Filter value 0
//! is therefore unrepresentable - a known limitation of the wire format,
//! kept as-is rather than silently fixed.
//!
//! Every embedded value passes through [`safe_format`]; there is no way
//! to splice an unvalidated string into a path through this type.

use crate::error::format::FormatError;
use crate::safe_format::safe_format;

/// Incrementally built resource path.
#[derive(Debug, Clone)]
pub struct ResourcePath {
    path: String,
}

impl ResourcePath {
    /// Start from a base resource name (may itself contain `/`).
    pub fn new(base: impl Into<String>) -> Self {
        Self { path: base.into() }
    }

    fn push_segment(mut self, segment: &str) -> Self {
        self.path.push('/');
        self.path.push_str(segment);
        self
    }

    /// Append a positional integer segment (`objects/42`).
    pub fn int(self, value: i64) -> Result<Self, FormatError> {
        let segment = safe_format("{:int}", &[&value])?;
        Ok(self.push_segment(&segment))
    }

    /// Append a positional integer segment when present and non-zero.
    pub fn maybe_int(self, value: Option<i64>) -> Result<Self, FormatError> {
        match value {
            Some(value) if value != 0 => self.int(value),
            _ => Ok(self),
        }
    }

    /// Append a positional identifier segment.
    pub fn ident(self, value: &str) -> Result<Self, FormatError> {
        let segment = safe_format("{:ident}", &[&value])?;
        Ok(self.push_segment(&segment))
    }

    /// Append a positional identifier segment when present and non-empty.
    pub fn maybe_ident(self, value: Option<&str>) -> Result<Self, FormatError> {
        match value {
            Some(value) if !value.is_empty() => self.ident(value),
            _ => Ok(self),
        }
    }

    /// Append a positional hexadecimal segment (token ids).
    pub fn hex(self, value: &str) -> Result<Self, FormatError> {
        let segment = safe_format("{:hex}", &[&value])?;
        Ok(self.push_segment(&segment))
    }

    /// Append a literal segment. For trusted compile-time constants only;
    /// caller-supplied values go through the typed combinators.
    pub fn raw(self, segment: &str) -> Self {
        self.push_segment(segment)
    }

    /// Append a `key=value` integer filter; 0 counts as not specified.
    pub fn filter_int(self, key: &str, value: Option<i64>) -> Result<Self, FormatError> {
        match value {
            Some(value) if value != 0 => {
                let segment = safe_format("{0:ident}={1:int}", &[&key, &value])?;
                Ok(self.push_segment(&segment))
            }
            _ => Ok(self),
        }
    }

    /// Append a `key=value` identifier filter; empty counts as not
    /// specified.
    pub fn filter_ident(self, key: &str, value: Option<&str>) -> Result<Self, FormatError> {
        match value {
            Some(value) if !value.is_empty() => {
                let segment = safe_format("{0:ident}={1:ident}", &[&key, &value])?;
                Ok(self.push_segment(&segment))
            }
            _ => Ok(self),
        }
    }

    /// Append a `key=value` timestamp filter.
    ///
    /// Timestamps travel in ISO 8601 *basic* format, which the `ident`
    /// class covers; the extended form's `:` separators were never legal
    /// inside a path segment.
    pub fn filter_stamp(self, key: &str, value: Option<&str>) -> Result<Self, FormatError> {
        self.filter_ident(key, value)
    }

    /// Finish, yielding the wire path.
    pub fn build(self) -> String {
        self.path
    }
}
