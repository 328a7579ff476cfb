//! Voucher operations.
//!
//! Vouchers preallocate an amount from the issuing account until they
//! are redeemed, revoked or expire.

use crate::broker_client::BrokerClient;
use crate::error::CoreError;
use crate::error::api::ApiError;
use crate::error::format::FormatError;
use crate::resource::ResourcePath;
use crate::safe_format::safe_format;

use models::{AccessUrls, Expiry, NewVoucher, TimeOffset, VoucherFilter, VoucherHistoryFilter};

use chrono::Utc;
use reqwest::Method;
use serde_json::{Value, json};

/// Default validity window for vouchers created without an explicit
/// expiry.
pub const DEFAULT_VOUCHER_EXPIRY_DAYS: u64 = 7;

impl BrokerClient {
    /// Create a preallocated voucher over `amount` cents, reserved until
    /// `expires` (default: 7 days from now).
    ///
    /// `message` is shown to the user on redeem; `gid` puts the voucher
    /// in a group, of which a single user can redeem at most one.
    ///
    /// Resource: `vouchers/`
    /// Access: requires the `voucher.add` ACL flag.
    pub async fn create_voucher(
        &self,
        amount: i64,
        expires: Option<Expiry>,
        message: Option<&str>,
        gid: Option<&str>,
    ) -> Result<NewVoucher, CoreError> {
        let until = expires
            .unwrap_or_else(|| Expiry::In(TimeOffset::days(DEFAULT_VOUCHER_EXPIRY_DAYS)))
            .resolve(Utc::now());

        let data = self
            .execute(
                Method::POST,
                "vouchers/",
                Some(json!({
                    "amount": amount,
                    "until": until.to_rfc3339(),
                    "message": message.unwrap_or(""),
                    "gid": gid,
                })),
            )
            .await?;

        let vid_encoded = data
            .get("vid_encoded")
            .and_then(Value::as_str)
            .ok_or_else(|| ApiError::invalid_data("missing 'vid_encoded' in voucher response"))?
            .to_owned();

        Ok(NewVoucher {
            urls: AccessUrls {
                redirect: self
                    .frontend_url(&safe_format("/vouchers/{:ident}", &[&vid_encoded])?)?,
                popup: self
                    .frontend_url(&safe_format("/popup/vouchers/{:ident}", &[&vid_encoded])?)?,
            },
            vid_encoded,
            raw: data,
        })
    }

    /// Fetch a filtered list of vouchers.
    ///
    /// With `filter.vid_encoded` set a single voucher description is
    /// returned instead of a list. When `first`/`last` are used the list
    /// is sorted by creation time, otherwise alphabetically by
    /// `vid_encoded`.
    ///
    /// Resource: `vouchers[/<vid_encoded>][/from=][/to=][/gid=][/valid_after=][/valid_before=][/first=][/last=]`
    /// Access: requires the `voucher.get` ACL flag.
    pub async fn get_vouchers(&self, filter: &VoucherFilter) -> Result<Value, CoreError> {
        let resource = voucher_resource(filter)?;
        self.execute(Method::GET, &resource, None).await
    }

    /// Fetch a filtered list of voucher log entries.
    ///
    /// Resource: `vouchers/history[/<vid_encoded>][/vid=][/action=][/from=][/to=][/gid=][/valid_after=][/valid_before=][/create_after=][/create_before=][/first=][/last=]`
    /// Access: requires the `voucher.history` ACL flag.
    pub async fn get_vouchers_history(
        &self,
        filter: &VoucherHistoryFilter,
    ) -> Result<Value, CoreError> {
        let resource = ResourcePath::new("vouchers/history")
            .maybe_ident(filter.vid_encoded.as_deref())?
            .filter_int("vid", filter.vid)?
            .filter_ident("action", filter.action.map(|action| action.as_str()))?
            .filter_int("from", filter.uid_from)?
            .filter_int("to", filter.uid_to)?
            .filter_ident("gid", filter.gid.as_deref())?
            .filter_stamp("valid_after", filter.valid_after.as_deref())?
            .filter_stamp("valid_before", filter.valid_before.as_deref())?
            .filter_stamp("create_after", filter.create_after.as_deref())?
            .filter_stamp("create_before", filter.create_before.as_deref())?
            .filter_int("first", filter.first)?
            .filter_int("last", filter.last)?
            .build();
        self.execute(Method::GET, &resource, None).await
    }

    /// Revoke every voucher matching the filter, returning the map of
    /// `vid_encoded` to refund transfer id for each revoked voucher.
    ///
    /// Filters only ever narrow the set, which starts as the complete
    /// voucher collection: an empty filter revokes ALL unused vouchers,
    /// valid and expired alike.
    ///
    /// Resource: `vouchers[...]` as for [`get_vouchers`](Self::get_vouchers)
    /// Access: requires the `voucher.revoke` ACL flag.
    pub async fn revoke_vouchers(&self, filter: &VoucherFilter) -> Result<Value, CoreError> {
        let resource = voucher_resource(filter)?;
        self.execute(Method::DELETE, &resource, Some(json!({ "revoke": true })))
            .await
    }
}

/// Filter chain shared by listing and revocation; order is part of the
/// wire contract.
fn voucher_resource(filter: &VoucherFilter) -> Result<String, FormatError> {
    Ok(ResourcePath::new("vouchers")
        .maybe_ident(filter.vid_encoded.as_deref())?
        .filter_int("from", filter.uid_from)?
        .filter_int("to", filter.uid_to)?
        .filter_ident("gid", filter.gid.as_deref())?
        .filter_stamp("valid_after", filter.valid_after.as_deref())?
        .filter_stamp("valid_before", filter.valid_before.as_deref())?
        .filter_int("first", filter.first)?
        .filter_int("last", filter.last)?
        .build())
}
