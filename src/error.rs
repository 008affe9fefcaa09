//! Application Errors
//!
//! None of these are fatal: load errors become the error view, storage
//! errors are logged and swallowed.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Browser window is not available")]
    NoWindow,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected HTTP status {0}")]
    HttpStatus(u16),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Duplicate item id {0}")]
    DuplicateId(u32),

    #[error("Local storage is not available")]
    StorageUnavailable,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::MalformedPayload(e.to_string())
    }
}

/// Best-effort human readable text for a rejected JS promise or thrown value
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
