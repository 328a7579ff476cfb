//! Order operations.

use crate::broker_client::BrokerClient;
use crate::broker_client::response::extract_id;
use crate::error::CoreError;
use crate::resource::ResourcePath;
use crate::safe_format::safe_format;

use models::{AccessUrls, Expiry, NewOrder, OrderFilter, OrderedObject, TimeOffset};

use chrono::Utc;
use reqwest::Method;
use serde_json::{Value, json};

/// Default validity window for orders created without an explicit
/// expiry.
pub const DEFAULT_ORDER_EXPIRY_MINUTES: u64 = 15;

impl BrokerClient {
    /// Create a single order for object `oid` at `price` cents, valid
    /// until `expires` (default: 15 minutes from now).
    ///
    /// `context` is an arbitrary purchase context string handed back on
    /// purchase verification. The returned [`NewOrder`] combines the
    /// order id with the frontend URLs a buyer can be sent to (full-page
    /// redirect and popup modes).
    ///
    /// Resource: `objects/<oid>/orders/`
    pub async fn create_order(
        &self,
        oid: i64,
        price: i64,
        context: Option<&str>,
        expires: Option<Expiry>,
    ) -> Result<NewOrder, CoreError> {
        let expires = expires
            .unwrap_or_else(|| Expiry::In(TimeOffset::minutes(DEFAULT_ORDER_EXPIRY_MINUTES)))
            .resolve(Utc::now());

        let resource = safe_format("objects/{:int}/orders/", &[&oid])?;
        let data = self
            .execute(
                Method::POST,
                &resource,
                Some(json!({
                    "price": price,
                    "order_expires": expires.to_rfc3339(),
                    "context": context,
                })),
            )
            .await?;
        let order_id = extract_id(&data, "id")?;

        Ok(NewOrder {
            id: order_id,
            expires,
            context: context.map(str::to_owned),
            object: OrderedObject { id: oid, price },
            urls: AccessUrls {
                redirect: self.frontend_url(&safe_format("/orders/{:int}/add/", &[&order_id])?)?,
                popup: self
                    .frontend_url(&safe_format("/popup/orders/{:int}/add/", &[&order_id])?)?,
            },
        })
    }

    /// Fetch filtered orders.
    ///
    /// With `filter.order_id` set exactly one order is returned (or a
    /// not-found error); otherwise a list.
    ///
    /// Resource: `[objects/<oid>/]orders[/all][/<orderid>]`
    pub async fn get_orders(&self, filter: &OrderFilter) -> Result<Value, CoreError> {
        let base = match filter.oid {
            Some(oid) if oid != 0 => safe_format("objects/{:int}/orders", &[&oid])?,
            _ => String::from("orders"),
        };

        let mut path = ResourcePath::new(base);
        if filter.include_expired {
            path = path.raw("all");
        }
        let resource = path.maybe_int(filter.order_id)?.build();
        self.execute(Method::GET, &resource, None).await
    }

    /// Fetch a single order, failing with a not-found error when it does
    /// not exist.
    ///
    /// Resource: `orders/<orderid>`
    pub async fn get_order(&self, order_id: i64) -> Result<Value, CoreError> {
        let filter = OrderFilter {
            order_id: Some(order_id),
            ..OrderFilter::default()
        };
        self.get_orders(&filter).await
    }
}
