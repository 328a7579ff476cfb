//! Assembled results for voucher creation.

use serde::Serialize;
use serde_json::Value;

use crate::AccessUrls;

/// A freshly created voucher: the backend's full description plus the
/// frontend URLs where it can be redeemed.
#[derive(Debug, Clone, Serialize)]
pub struct NewVoucher {
    /// Voucher description exactly as returned by the backend
    /// (`vid`, `amount_vouched`, `ts_valid_until`, ...).
    pub raw: Value,
    /// Voucher ID as an encoded string with CRC, extracted from `raw`.
    pub vid_encoded: String,
    pub urls: AccessUrls,
}
