//! Local Storage
//!
//! `FavoriteStorage` backed by `window.localStorage`.

use crate::error::{describe_js_error, AppError};
use crate::favorites::FavoriteStorage;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, AppError> {
        web_sys::window()
            .ok_or(AppError::NoWindow)?
            .local_storage()
            .map_err(|e| AppError::Storage(describe_js_error(&e)))?
            .ok_or(AppError::StorageUnavailable)
    }
}

impl FavoriteStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|e| AppError::Storage(describe_js_error(&e)))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| AppError::Storage(describe_js_error(&e)))
    }
}
