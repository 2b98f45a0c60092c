//! Turns a raw status + body into a sequence of JSON records.

use crate::client::{ApiError, ApiResult};
use log::{trace, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decoded body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Always a sequence, even when the service sent a single object.
    Records(Vec<Value>),
    /// 200 body that was not JSON, passed through untouched.
    Text(String),
}

impl Payload {
    pub fn records(&self) -> &[Value] {
        match self {
            Payload::Records(records) => records,
            Payload::Text(_) => &[],
        }
    }

    /// Deserialize every record into `T`. Fails on plain text and on the
    /// service's in-band `{"Error": "..."}` objects.
    pub fn into_typed<T: DeserializeOwned>(self) -> ApiResult<Vec<T>> {
        match self {
            Payload::Text(text) => Err(ApiError::Unstructured(text)),
            Payload::Records(records) => records
                .into_iter()
                .map(|record| {
                    if let Some(message) = upstream_error(&record) {
                        return Err(ApiError::Upstream(message));
                    }
                    Ok(serde_json::from_value(record)?)
                })
                .collect(),
        }
    }
}

pub fn decode_response(status: u16, body: &str) -> ApiResult<Payload> {
    if status != 200 {
        return Err(ApiError::Status { status, body: body.to_owned() });
    }

    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(records)) => {
            trace!("decoded {} records", records.len());
            Ok(Payload::Records(records))
        }
        Ok(single) => Ok(Payload::Records(vec![single])),
        Err(e) => {
            warn!("response body is not JSON ({e}), passing text through");
            Ok(Payload::Text(body.to_owned()))
        }
    }
}

fn upstream_error(record: &Value) -> Option<String> {
    match record.get("Error")? {
        Value::String(message) => Some(message.clone()),
        other => Some(other.to_string()),
    }
}
