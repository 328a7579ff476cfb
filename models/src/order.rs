//! Assembled results for order creation.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Frontend URLs for completing a purchase or redeeming a voucher.
///
/// `redirect` is the failsafe full-page mode; `popup` the overlay mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessUrls {
    pub redirect: String,
    pub popup: String,
}

/// The object an order was opened for, with the agreed price in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderedObject {
    pub id: i64,
    pub price: i64,
}

/// A freshly created order, combined with the frontend URLs a buyer can
/// be sent to.
#[derive(Debug, Clone, Serialize)]
pub struct NewOrder {
    pub id: i64,
    pub expires: DateTime<Utc>,
    pub context: Option<String>,
    pub object: OrderedObject,
    pub urls: AccessUrls,
}
