//! Filter structs for the Broker's listing resources.
//!
//! Each struct mirrors one resource's documented filter chain. Field
//! order here matches the wire order the path builder emits; the backend
//! parses the segments positionally, so the order is part of the
//! contract, not a style choice.
//!
//! A numeric filter set to 0 is indistinguishable from "not specified"
//! and is omitted from the path. Filter value 0 is therefore
//! unrepresentable; this is a known limitation of the wire format.

use std::panic::Location;
use std::str::FromStr;

use common::ErrorLocation;

use crate::ModelError;

/// Filters for `registry/objects` listings.
#[derive(Debug, Clone, Default)]
pub struct ObjectFilter {
    /// Object ID; selects a single object.
    pub oid: Option<i64>,
    /// Only objects newer than this ISO 8601 basic timestamp.
    pub since: Option<String>,
    /// Only objects older than this ISO 8601 basic timestamp.
    pub until: Option<String>,
    /// Return only the `n` oldest matches.
    pub first: Option<i64>,
    /// Return only the `n` newest matches.
    pub last: Option<i64>,
}

/// Filters for `orders` listings.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Restrict to orders for this object.
    pub oid: Option<i64>,
    /// Also fetch expired orders.
    pub include_expired: bool,
    /// Order ID; selects a single order.
    pub order_id: Option<i64>,
}

/// Filters for `vouchers` listings and revocation.
#[derive(Debug, Clone, Default)]
pub struct VoucherFilter {
    /// Voucher ID as an encoded string with CRC.
    pub vid_encoded: Option<String>,
    /// Filter by source account UID.
    pub uid_from: Option<i64>,
    /// Filter by destination account UID.
    pub uid_to: Option<i64>,
    /// Filter by voucher group ID (localized to `uid_from`).
    pub gid: Option<String>,
    /// Voucher has to be valid after this ISO 8601 basic timestamp.
    pub valid_after: Option<String>,
    /// Voucher was valid until this ISO 8601 basic timestamp.
    pub valid_before: Option<String>,
    /// Return only the `n` oldest matches.
    pub first: Option<i64>,
    /// Return only the `n` newest matches.
    pub last: Option<i64>,
}

/// Filters for `vouchers/history` listings.
#[derive(Debug, Clone, Default)]
pub struct VoucherHistoryFilter {
    /// Voucher ID as an encoded string with CRC.
    pub vid_encoded: Option<String>,
    /// Voucher ID in integer form.
    pub vid: Option<i64>,
    /// Restrict to one action kind.
    pub action: Option<VoucherAction>,
    /// Filter by source account UID.
    pub uid_from: Option<i64>,
    /// Filter by destination account UID.
    pub uid_to: Option<i64>,
    /// Filter by voucher group ID (localized to `uid_from`).
    pub gid: Option<String>,
    /// Voucher has to be valid after this ISO 8601 basic timestamp.
    pub valid_after: Option<String>,
    /// Voucher was valid until this ISO 8601 basic timestamp.
    pub valid_before: Option<String>,
    /// Voucher has to be created after this ISO 8601 basic timestamp.
    pub create_after: Option<String>,
    /// Voucher was created until this ISO 8601 basic timestamp.
    pub create_before: Option<String>,
    /// Return only the `n` oldest matches.
    pub first: Option<i64>,
    /// Return only the `n` newest matches.
    pub last: Option<i64>,
}

/// The closed set of actions a voucher history entry can record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoucherAction {
    Add,
    Use,
    Revoke,
    Expire,
}

impl VoucherAction {
    /// Wire form of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            VoucherAction::Add => "add",
            VoucherAction::Use => "use",
            VoucherAction::Revoke => "revoke",
            VoucherAction::Expire => "expire",
        }
    }
}

impl std::fmt::Display for VoucherAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoucherAction {
    type Err = ModelError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(VoucherAction::Add),
            "use" => Ok(VoucherAction::Use),
            "revoke" => Ok(VoucherAction::Revoke),
            "expire" => Ok(VoucherAction::Expire),
            other => Err(ModelError::Validation {
                message: format!("unknown voucher action: '{other}'"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
