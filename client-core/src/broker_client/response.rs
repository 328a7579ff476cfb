//! Response classification and the created-identifier shim.

use crate::error::api::ApiError;

use common::HttpStatusCode;

use serde_json::Value;

/// Classify one completed HTTP exchange into data or a typed error.
///
/// A 2xx status requires a `{"data": ...}` envelope and yields the
/// `data` value unchanged. Any other status requires a
/// `{"message": ..., "context": ...}` envelope and maps onto exactly one
/// error kind. A body that is not JSON at all produces a general error
/// carrying the raw body and status - the one case where the unparsed
/// body is surfaced, since no structured envelope could be read.
pub fn classify(status: HttpStatusCode, raw_body: &str) -> Result<Value, ApiError> {
    let parsed: Value = match serde_json::from_str(raw_body) {
        Ok(value) => value,
        Err(_) => {
            return Err(ApiError::general_with_status(
                raw_body,
                "Non-JSON server response",
                status,
            ));
        }
    };

    if status.is_success() {
        return match parsed.get("data") {
            Some(data) => Ok(data.clone()),
            None => Err(ApiError::invalid_data("Invalid server DATA response format!")),
        };
    }

    let message = parsed.get("message").and_then(Value::as_str);
    let context = parsed.get("context").and_then(Value::as_str);
    let (Some(message), Some(context)) = (message, context) else {
        return Err(ApiError::invalid_data("Invalid server ERROR response format!"));
    };

    Err(match status {
        HttpStatusCode::BAD_REQUEST => ApiError::invalid_data_with(message, context),
        HttpStatusCode::FORBIDDEN => ApiError::forbidden_with(message, context),
        HttpStatusCode::NOT_FOUND => ApiError::not_found_with(message, context),
        HttpStatusCode::INTERNAL_SERVER_ERROR => ApiError::internal_with(message, context),
        HttpStatusCode::CONFLICT => ApiError::general_with(message, context),
        other => ApiError::general_with_status(message, context, other),
    })
}

/// Extract the created-resource identifier from either of the two
/// historical response shapes.
///
/// The batch shape (a pluralized `<name>s` list plus an `errors` list)
/// predates the simplified single-field shape; this shim bridges the
/// transition and can be deleted wholesale once the backend stops
/// emitting lists.
///
/// # Errors
///
/// A general error built from the first batch error's `desc` when the
/// batch reported failures; an invalid-data error when the identifier is
/// missing or not coercible to an integer.
pub fn extract_id(response: &Value, name: &str) -> Result<i64, ApiError> {
    let plural = format!("{name}s");

    let raw = if let Some(batch) = response.get(&plural) {
        if let Some(first_error) = response
            .get("errors")
            .and_then(Value::as_array)
            .and_then(|errors| errors.first())
        {
            let desc = first_error
                .get("desc")
                .and_then(Value::as_str)
                .unwrap_or("unspecified batch error");
            return Err(ApiError::general(desc));
        }
        batch
            .get(0)
            .ok_or_else(|| ApiError::invalid_data(format!("empty '{plural}' list in creation response")))?
    } else {
        response
            .get(name)
            .ok_or_else(|| ApiError::invalid_data(format!("missing '{name}' field in creation response")))?
    };

    coerce_int(raw)
        .ok_or_else(|| ApiError::invalid_data(format!("non-integer identifier in creation response: {raw}")))
}

/// Lenient integer coercion: the Broker sometimes serializes integers as
/// JSON strings.
pub(crate) fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(string) => string.trim().parse().ok(),
        _ => None,
    }
}
