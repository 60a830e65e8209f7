//! Narrowing untyped JSON into declared shapes
//!
//! The transport layer hands response bodies through [`narrow`] (or
//! [`narrow_str`] for raw text) and builds request bodies with
//! [`to_request_body`]. Optional fields that are unset never appear in the
//! produced body.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Validate and narrow a JSON value into one of the declared shapes
pub fn narrow<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| {
        log::debug!("failed to narrow JSON value: {e}");
        e.into()
    })
}

/// Validate and narrow raw JSON text into one of the declared shapes
pub fn narrow_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| {
        log::debug!("failed to narrow JSON text: {e}");
        e.into()
    })
}

/// Serialize a create/update options value into an outbound request body
pub fn to_request_body<T: Serialize>(options: &T) -> Result<Value> {
    serde_json::to_value(options).map_err(|e| {
        log::debug!("failed to serialize request body: {e}");
        e.into()
    })
}
