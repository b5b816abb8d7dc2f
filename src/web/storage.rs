//! `localStorage`-backed theme preference.

use web_sys::{Storage, Window};

use crate::error::BehaviorError;
use crate::prefs::{MemoryStore, PreferenceStore, Theme, theme_from_read};

pub struct LocalStorage {
    storage: Storage,
    key: String,
}

impl LocalStorage {
    pub fn open(window: &Window, key: &str) -> Result<Self, BehaviorError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage, key: key.to_owned() }),
            Ok(None) | Err(_) => Err(BehaviorError::StorageUnavailable),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn get(&self) -> Theme {
        theme_from_read(self.storage.get_item(&self.key))
    }

    fn set(&mut self, theme: Theme) {
        if let Err(err) = self.storage.set_item(&self.key, theme.as_str()) {
            log::warn!("writing {} failed: {err:?}", self.key);
        }
    }
}

/// `localStorage` when available, otherwise an in-memory store for the
/// lifetime of the page.
pub fn open_or_memory(window: &Window, key: &str) -> Box<dyn PreferenceStore> {
    match LocalStorage::open(window, key) {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::warn!("{err}; theme preference will not persist");
            Box::new(MemoryStore::new())
        }
    }
}
