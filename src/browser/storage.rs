//! localStorage Backend
//!
//! `KeyValueStore` over `window.localStorage`. Opening fails quietly (private
//! mode, disabled storage) and the caller falls back to no persistence.

use beer_client::{KeyValueStore, StorageError};
use web_sys::Storage;

use super::js_message;

pub struct BrowserStorage {
    storage: Storage,
}

impl BrowserStorage {
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable, favorites will not persist");
        }
        storage.map(|storage| Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Backend(js_message(&e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Backend(js_message(&e)))
    }
}
