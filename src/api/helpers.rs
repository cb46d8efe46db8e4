//! Shared helpers for WASM API operations
//!
//! Conversion between JS values and pitch tuples, with the error logging
//! every exported function relies on.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::Pitch;

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Serialize a value to JavaScript with automatic error handling.
///
/// `None` becomes `null`, not `undefined`.
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    value.serialize(&serializer).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

// ============================================================================
// Pitch Helpers
// ============================================================================

/// Read a pitch argument; `null` and `undefined` are an absent pitch
pub fn pitch_arg(value: JsValue, name: &str) -> Result<Option<Pitch>, JsValue> {
    deserialize(value, &format!("Invalid pitch for '{}'", name))
}

/// Write a pitch result; an absent pitch is `null`
pub fn pitch_result(pitch: Option<Pitch>) -> Result<JsValue, JsValue> {
    serialize(&pitch, "Failed to serialize pitch")
}
