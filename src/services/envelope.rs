use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, ViewError};
use crate::models::envelope::{Envelope, ErrorBody, Metadata, RawEnvelope};

use super::api_client::{ApiClient, ApiRequest, ApiResponse};

/// Issue `request` and decode its envelope into `T`.
///
/// `fallback` is the message shown when the request fails without a usable
/// error message of its own.
pub async fn fetch<T: DeserializeOwned>(
    client: &dyn ApiClient,
    request: &ApiRequest,
    fallback: &str,
) -> Result<Envelope<T>> {
    let response = client
        .get(request)
        .await
        .map_err(|err| ViewError::Unreachable {
            fallback: fallback.to_string(),
            reason: err.to_string(),
        })?;
    decode(&response, fallback)
}

/// Validate a settled response and decode its payload.
pub fn decode<T: DeserializeOwned>(response: &ApiResponse, fallback: &str) -> Result<Envelope<T>> {
    if !response.is_success() {
        return Err(ViewError::Http {
            status: response.status,
            message: error_message(&response.body, fallback),
        });
    }

    let raw: RawEnvelope = serde_json::from_str(&response.body).map_err(|err| {
        log::error!("Response body is not an envelope: {}", err);
        ViewError::InvalidResponse
    })?;

    if !matches!(raw.success, Some(Value::Bool(true))) {
        return Err(ViewError::InvalidResponse);
    }
    let data = match raw.data {
        Some(data) if !is_falsy(&data) => data,
        _ => return Err(ViewError::InvalidResponse),
    };
    let data = serde_json::from_value(data).map_err(|err| {
        log::error!("Envelope payload has an unexpected shape: {}", err);
        ViewError::InvalidResponse
    })?;
    let metadata = raw
        .metadata
        .and_then(|metadata| serde_json::from_value::<Metadata>(metadata).ok())
        .unwrap_or_default();

    Ok(Envelope {
        data,
        message: raw.message,
        metadata,
    })
}

/// The `message` of an error body, or `fallback` when there is none.
pub fn error_message(body: &str, fallback: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|error| error.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

// Empty arrays and objects are present data; empty scalars are not.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
