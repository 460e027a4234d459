use log::warn;
use thiserror::Error;
use web_sys::window;

#[derive(Debug, Error, PartialEq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to write '{key}' to local storage")]
    WriteRejected { key: String },
}

/// String key-value store that survives page reloads.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// The browser's `localStorage` for the current origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().ok()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::WriteRejected { key: key.to_string() })
    }
}

/// Writes `value` and logs instead of failing. Used where a lost write only
/// costs the user a repeated prompt.
pub fn set_or_warn(store: &impl KeyValueStore, key: &str, value: &str) {
    if let Err(e) = store.set(key, value) {
        warn!("{}", e);
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;

#[cfg(test)]
mod memory {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Debug, Default)]
    pub struct MemoryStorage {
        items: RefCell<HashMap<String, String>>,
        writes: RefCell<usize>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_item(key: &str, value: &str) -> Self {
            let storage = Self::new();
            storage.items.borrow_mut().insert(key.to_string(), value.to_string());
            storage
        }

        pub fn write_count(&self) -> usize {
            *self.writes.borrow()
        }
    }

    impl KeyValueStore for MemoryStorage {
        fn get(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            *self.writes.borrow_mut() += 1;
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DeniedStorage;

    impl KeyValueStore for DeniedStorage {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn memory_storage_reads_back_last_write() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("language"), None);

        storage.set("language", "en").unwrap();
        storage.set("language", "ar").unwrap();

        assert_eq!(storage.get("language").as_deref(), Some("ar"));
        assert_eq!(storage.write_count(), 2);
    }

    #[test]
    fn set_or_warn_swallows_denied_writes() {
        set_or_warn(&DeniedStorage, "cookieConsent", "all");
        assert_eq!(DeniedStorage.get("cookieConsent"), None);
    }
}
