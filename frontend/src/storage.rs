//! `localStorage` adapter for the roster store.

use common::error::StorageError;
use common::roster::{KeyValueStorage, MemoryStorage};
use log::warn;
use wasm_bindgen::JsValue;
use web_sys::Storage;

pub enum BrowserStorage {
    Local(Storage),
    /// Private browsing modes can deny `localStorage`; the page still works
    /// but forgets the roster on reload.
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn open() -> Self {
        match web_sys::window().map(|w| w.local_storage()) {
            Some(Ok(Some(storage))) => BrowserStorage::Local(storage),
            _ => {
                warn!("localStorage unavailable, attendees will not survive a reload");
                BrowserStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

fn js_error(err: JsValue) -> StorageError {
    StorageError(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).map_err(js_error),
            BrowserStorage::Memory(memory) => memory.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStorage::Local(storage) => storage.set_item(key, value).map_err(js_error),
            BrowserStorage::Memory(memory) => memory.set(key, value),
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        match self {
            BrowserStorage::Local(storage) => storage.remove_item(key).map_err(js_error),
            BrowserStorage::Memory(memory) => memory.remove(key),
        }
    }
}
