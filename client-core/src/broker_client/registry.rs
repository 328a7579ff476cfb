//! Object registry operations.
//!
//! Objects are the sellable resources a seller registers with the
//! Broker: a name plus a callback URL pointing back at the seller's own
//! server.

use crate::broker_client::BrokerClient;
use crate::broker_client::response::extract_id;
use crate::error::CoreError;
use crate::resource::ResourcePath;
use crate::safe_format::safe_format;

use models::ObjectFilter;

use reqwest::Method;
use serde_json::{Value, json};

impl BrokerClient {
    /// Create a single object in the Broker object registry.
    ///
    /// `url` is the callback URL - the object's resource location on the
    /// seller's server. Returns the object ID of the newly created
    /// object.
    ///
    /// Resource: `registry/objects/`
    pub async fn create_object(&self, name: &str, url: &str) -> Result<i64, CoreError> {
        let body = json!({ "description": { "name": name, "url": url } });
        let data = self
            .execute(Method::POST, "registry/objects/", Some(body))
            .await?;
        extract_id(&data, "oid").map_err(CoreError::from)
    }

    /// Update a single object in the Broker object registry.
    ///
    /// Returns the object ID of the updated object. The authenticated
    /// user must be the object owner.
    ///
    /// Resource: `registry/objects/<oid>/`
    pub async fn update_object(&self, oid: i64, name: &str, url: &str) -> Result<i64, CoreError> {
        let resource = safe_format("registry/objects/{:int}/", &[&oid])?;
        let body = json!({ "description": { "name": name, "url": url } });
        let data = self.execute(Method::PUT, &resource, Some(body)).await?;
        extract_id(&data, "oid").map_err(CoreError::from)
    }

    /// Fetch a filtered collection of objects created by the
    /// authenticated user.
    ///
    /// If `filter.oid` is set, a single object description is returned
    /// instead of a list.
    ///
    /// Resource: `registry/objects[/<oid>][/since=<since>][/until=<until>][/first=<first>][/last=<last>]`
    pub async fn get_objects(&self, filter: &ObjectFilter) -> Result<Value, CoreError> {
        let resource = ResourcePath::new("registry/objects")
            .maybe_int(filter.oid)?
            .filter_stamp("since", filter.since.as_deref())?
            .filter_stamp("until", filter.until.as_deref())?
            .filter_int("first", filter.first)?
            .filter_int("last", filter.last)?
            .build();
        self.execute(Method::GET, &resource, None).await
    }

    /// Fetch a single object, referenced by its `oid`.
    ///
    /// Resource: `registry/objects/<oid>`
    pub async fn get_object(&self, oid: i64) -> Result<Value, CoreError> {
        let resource = safe_format("registry/objects/{:int}", &[&oid])?;
        self.execute(Method::GET, &resource, None).await
    }
}
