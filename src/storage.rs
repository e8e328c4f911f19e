//! Browser Storage
//!
//! `KeyValueStore` backed by `window.localStorage`.

use calorie_core::{KeyValueStore, MemoryStore, TrackerError, TrackerResult};
use wasm_bindgen::JsValue;

pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Open the page's localStorage
    pub fn local() -> TrackerResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| TrackerError::Storage("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| TrackerError::Storage("localStorage unavailable".to_string()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        self.storage.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> TrackerResult<()> {
        self.storage.set_item(key, value).map_err(js_error)
    }
}

/// localStorage, or a session-only store when the browser refuses it
pub fn open_storage() -> Box<dyn KeyValueStore> {
    match BrowserStorage::local() {
        Ok(storage) => Box::new(storage),
        Err(err) => {
            log::warn!("{}; items will not survive a reload", err);
            Box::new(MemoryStore::new())
        }
    }
}

fn js_error(err: JsValue) -> TrackerError {
    TrackerError::Storage(format!("{:?}", err))
}
