//! Web Key-Value Storage
//!
//! A tiny string-to-string storage contract with two backends:
//! - `LocalStorage`: the browser's `window.localStorage`
//! - `MemoryStore`: a shared in-process map (tests, private browsing fallback)

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use wasm_bindgen::JsValue;

/// Storage errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("storage call failed: {0}")]
    Js(String),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        StorageError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String key-value store
///
/// Writes overwrite. Removing a missing key is not an error.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
}

// ========================
// Browser localStorage
// ========================

/// Handle to `window.localStorage`
///
/// Holds no JS object; the storage is looked up on every call so the handle
/// stays `Send + Sync` and can live inside reactive values.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    /// Probe that local storage exists (it does not in private modes of some browsers)
    pub fn open() -> StorageResult<Self> {
        Self::storage()?;
        Ok(LocalStorage)
    }

    fn storage() -> StorageResult<web_sys::Storage> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        window.local_storage()?.ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(Self::storage()?.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Ok(Self::storage()?.set_item(key, value)?)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        Ok(Self::storage()?.remove_item(key)?)
    }
}

// ========================
// In-memory store
// ========================

/// In-memory store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // Entries are plain strings, a poisoned map is still consistent
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.lock().remove(key);
        Ok(())
    }
}

/// Browser storage when available, otherwise a fresh in-memory store
pub fn browser_or_memory() -> Box<dyn KeyValueStore> {
    match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            log::warn!("[KV] localStorage unavailable ({}), state will not survive reload", e);
            Box::new(MemoryStore::new())
        }
    }
}
