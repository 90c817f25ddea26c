//! `window.sessionStorage` binding for the wizard's persistence port.
//!
//! The handle is looked up on every call, so the store is a zero-sized
//! value that can live inside reactive signals.

use must_admissions::core::apply::{SessionStore, StorageError};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?
            .session_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Unavailable("sessionStorage is disabled".to_string()))
    }

    /// Whether this browsing context exposes `sessionStorage` at all
    pub fn is_available() -> bool {
        Self::storage().is_ok()
    }
}

fn js_error(value: JsValue) -> StorageError {
    StorageError::Unavailable(
        value
            .as_string()
            .unwrap_or_else(|| format!("{:?}", value)),
    )
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?.remove_item(key).map_err(js_error)
    }
}
