//! Purchase verification and settlement.

use crate::broker_client::BrokerClient;
use crate::error::CoreError;
use crate::safe_format::safe_format;

use reqwest::Method;
use serde_json::{Value, json};

impl BrokerClient {
    /// Verify token `tid` and return the token data bound to object
    /// `oid`, decrementing the entitlement validity counter for the
    /// `oid`/`uid` pair behind the token.
    ///
    /// The returned token data carries the object name at purchase time,
    /// the buyer's `huid` (`null` for anonymous purchases - the huid is
    /// only ever meaningful to this seller), and the purchase `context`
    /// set when the order was created.
    ///
    /// Resource: `objects/<oid>/tokens/<tid>`
    /// Access: the authenticated user must be the object's owner.
    pub async fn verify_purchase(&self, oid: i64, tid: &str) -> Result<Value, CoreError> {
        let resource = safe_format("objects/{0:int}/tokens/{1:hex}", &[&oid, &tid])?;
        self.execute(Method::GET, &resource, None).await
    }

    /// Declare the purchase `purchase_id` (bound to transfer
    /// `transfer_id`) as finished, granting the buyer access.
    ///
    /// A purchase the seller never commits is refunded to the buyer in
    /// full.
    ///
    /// Resource: `purchases/<purchaseid>`
    pub async fn commit_purchase(
        &self,
        purchase_id: i64,
        transfer_id: i64,
    ) -> Result<Value, CoreError> {
        let resource = safe_format("purchases/{:int}", &[&purchase_id])?;
        self.execute(
            Method::PUT,
            &resource,
            Some(json!({ "transferid": transfer_id })),
        )
        .await
    }

    /// Delegated (pre-authorized) purchase of `oid` in the name of
    /// `huid`, at price `price`, committed immediately.
    ///
    /// Resource: `objects/<oid>/purchases`
    /// Access: requires the `purchase.object.authorize` ACL flag plus
    /// the `purchase.object` delegate permission from the user.
    pub async fn authorized_purchase_object(
        &self,
        oid: i64,
        price: i64,
        huid: &str,
    ) -> Result<Value, CoreError> {
        let resource = safe_format("objects/{:int}/purchases", &[&oid])?;
        self.execute(
            Method::POST,
            &resource,
            Some(json!({ "price": price, "huid": huid, "autocommit": true })),
        )
        .await
    }
}
