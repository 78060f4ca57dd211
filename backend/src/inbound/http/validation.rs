//! Request body, path and query helpers shared by the resource handlers.

use serde_json::{Value, json};
use tracing::debug;

use crate::domain::{Error, RecordId, ValidationErrors};

/// Parse a request body as JSON.
///
/// The body is read as raw bytes so malformed JSON produces the domain's
/// `invalid_request` envelope instead of actix's plain-text rejection.
pub(crate) fn parse_json_body(body: &[u8]) -> Result<Value, Error> {
    serde_json::from_slice(body).map_err(|err| {
        debug!(error = %err, "request body is not valid JSON");
        Error::invalid_request("Invalid JSON body").with_details(json!({
            "reason": err.to_string(),
        }))
    })
}

/// Wrap field violations in the `Validation failed` envelope.
pub(crate) fn validation_failed(errors: ValidationErrors) -> Error {
    Error::invalid_request("Validation failed").with_details(json!(errors))
}

/// Parse a path identifier; anything that is not a UUID cannot name a
/// stored record, so it is reported with the caller's not-found message.
pub(crate) fn record_id_or_not_found(raw: &str, message: &'static str) -> Result<RecordId, Error> {
    raw.parse().map_err(|_| Error::not_found(message))
}

/// Raw `key=value` pairs of a query string, in request order.
///
/// Extracting pairs never fails, so odd query strings cannot escape the
/// list endpoints' 200/500 contract.
pub(crate) type QueryPairs = Vec<(String, String)>;

/// The value of `key` when it appears exactly once.
///
/// A repeated key has no single value and is treated as absent, like a key
/// that was never sent.
pub(crate) fn single_query_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    let mut values = pairs.iter().filter(|(name, _)| name == key);
    match (values.next(), values.next()) {
        (Some((_, value)), None) => Some(value.clone()),
        _ => None,
    }
}
