//! Account, user and reward operations.

use crate::broker_client::BrokerClient;
use crate::broker_client::response::coerce_int;
use crate::error::CoreError;
use crate::error::api::ApiError;
use crate::safe_format::safe_format;

use reqwest::Method;
use serde_json::{Value, json};

impl BrokerClient {
    /// Fetch the profile of the authenticated user.
    ///
    /// Resource: `id/users`
    pub async fn get_user_profile(&self) -> Result<Value, CoreError> {
        self.execute(Method::GET, "id/users", None).await
    }

    /// Fetch the account balance of the authenticated user, in cents.
    ///
    /// Resource: `fort/accounts`
    pub async fn get_account_balance(&self) -> Result<i64, CoreError> {
        let data = self.execute(Method::GET, "fort/accounts", None).await?;
        balance_of(&data)
    }

    /// Fetch the account balance of the user behind `huid`, in cents.
    ///
    /// Resource: `fort/accounts/<huid>`
    /// Access: requires the `get.account.balance` delegate permission
    /// from the user.
    pub async fn authorized_get_account_balance(&self, huid: &str) -> Result<i64, CoreError> {
        let resource = safe_format("fort/accounts/{:ident}", &[&huid])?;
        let data = self.execute(Method::GET, &resource, None).await?;
        balance_of(&data)
    }

    /// Create a Broker user (profile and account), link it with the
    /// provided identities, and set the delegate-user permissions, the
    /// creator being the delegate. Returns the new user's `huid`.
    ///
    /// `identities` maps identity providers to handles, e.g.
    /// `{"facebook": "12312312", "mail": "user@example.com"}`; `primary`
    /// names the entry the account is keyed on.
    ///
    /// Resource: `id/users/`
    /// Access: requires the `user.create` ACL flag.
    pub async fn authorized_create_user(
        &self,
        identities: &Value,
        primary: &str,
        permissions: Option<&[&str]>,
    ) -> Result<String, CoreError> {
        let data = self
            .execute(
                Method::POST,
                "id/users/",
                Some(json!({
                    "identities": identities,
                    "primary_identity": primary,
                    "delegate_permissions": permissions,
                })),
            )
            .await?;

        data.as_str()
            .map(str::to_owned)
            .ok_or_else(|| ApiError::invalid_data("non-string huid in user creation response").into())
    }

    /// Transfer `amount` cents from the authenticated user's account to
    /// the user behind `huid_to`. Returns the fort transfer id wrapped
    /// in a dict (`{"transfer_id": ...}`).
    ///
    /// Resource: `rewards`
    /// Access: requires the `transfer.outbound` ACL flag.
    pub async fn reward_user(
        &self,
        huid_to: &str,
        amount: i64,
        description: Option<&str>,
    ) -> Result<Value, CoreError> {
        self.execute(
            Method::POST,
            "rewards",
            Some(json!({
                "huid_to": huid_to,
                "amount": amount,
                "description": description,
            })),
        )
        .await
    }
}

/// Pull the integer `balance` field out of an account response.
fn balance_of(data: &Value) -> Result<i64, CoreError> {
    data.get("balance")
        .and_then(coerce_int)
        .ok_or_else(|| ApiError::invalid_data("missing integer 'balance' in account response").into())
}
