use shared::KeyValueStore;
use web_sys::{window, Storage};

/// `window.localStorage`, or nothing when the browser refuses access.
#[derive(Debug, Clone, Default)]
pub struct BrowserStore {
    storage: Option<Storage>,
}

impl BrowserStore {
    pub fn local() -> Self {
        let storage = window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable; device flags will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStore for BrowserStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if storage.set_item(key, value).is_err() {
                log::error!("failed to write {} to localStorage", key);
            }
        }
    }

    fn remove_item(&mut self, key: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.remove_item(key);
        }
    }
}
