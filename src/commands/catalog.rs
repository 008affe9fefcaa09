//! Catalog Fetch
//!
//! Retrieves the drink list from the static data file.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::catalog::parse_catalog;
use crate::error::{describe_js_error, AppError};
use crate::models::Item;

/// Fetch and parse the catalog document at `path`
pub async fn fetch_catalog(path: &str) -> Result<Vec<Item>, AppError> {
    let window = web_sys::window().ok_or(AppError::NoWindow)?;

    let response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| AppError::Network(describe_js_error(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| AppError::Network(describe_js_error(&e)))?;

    if !response.ok() {
        return Err(AppError::HttpStatus(response.status()));
    }

    let body = response
        .text()
        .map_err(|e| AppError::Network(describe_js_error(&e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| AppError::Network(describe_js_error(&e)))?
        .as_string()
        .ok_or_else(|| AppError::MalformedPayload("response body is not text".to_string()))?;

    parse_catalog(&body)
}
