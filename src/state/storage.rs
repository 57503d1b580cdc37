//! JSON-over-key-value persistence with best-effort semantics.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every store persists one JSON blob under one key. In the browser the
//! backend is `localStorage`; during SSR or native tests there is no such
//! thing, so the backend is swappable.
//!
//! ERROR HANDLING
//! ==============
//! Reads degrade to the caller's default and writes are dropped. Failures are
//! logged and never returned, because the app stays usable without storage.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors raised by a [`StorageBackend`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The host has no persistent storage (SSR, private mode, native build).
    #[error("storage unavailable")]
    Unavailable,

    /// Reading the raw value failed.
    #[error("storage read failed: {0}")]
    Read(String),

    /// Writing or deleting the raw value failed (quota exceeded, read-only).
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Raw string key-value storage.
pub trait StorageBackend: Send + Sync {
    /// Fetch the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key` if present.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the delete.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Browser `localStorage`, looked up on every call.
///
/// Outside the `hydrate` build every call reports [`StorageError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn js_error_text(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl StorageBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| StorageError::Read(js_error_text(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Write(js_error_text(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| StorageError::Write(js_error_text(&e)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-memory backend shared between clones.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A view over the same map that rejects every write, like a full quota.
    pub fn read_only(&self) -> Self {
        Self { items: Arc::clone(&self.items), read_only: true }
    }

    /// Raw value under `key`, bypassing JSON decoding.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.lock().ok().and_then(|items| items.get(key).cloned())
    }

    /// Seed a raw value, bypassing JSON encoding and the read-only flag.
    pub fn seed(&self, key: &str, raw: &str) {
        if let Ok(mut items) = self.items.lock() {
            items.insert(key.to_owned(), raw.to_owned());
        }
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().map_err(|e| StorageError::Read(e.to_string()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write("quota exceeded".to_owned()));
        }
        let mut items = self.items.lock().map_err(|e| StorageError::Write(e.to_string()))?;
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write("read-only storage".to_owned()));
        }
        let mut items = self.items.lock().map_err(|e| StorageError::Write(e.to_string()))?;
        items.remove(key);
        Ok(())
    }
}

/// Typed JSON access over a shared [`StorageBackend`].
#[derive(Clone)]
pub struct LocalStore {
    backend: Arc<dyn StorageBackend>,
}

impl LocalStore {
    pub fn new<B: StorageBackend + 'static>(backend: B) -> Self {
        Self { backend: Arc::new(backend) }
    }

    /// Store backed by the browser's `localStorage`.
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }

    /// Read and decode the value under `key`, or `default` on any failure.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(StorageError::Unavailable) => return default,
            Err(e) => {
                leptos::logging::warn!("storage: reading {key} failed: {e}");
                return default;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                leptos::logging::warn!("storage: discarding corrupt value under {key}: {e}");
                default
            }
        }
    }

    /// Encode and write `value` under `key`. Failures are logged and dropped.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                leptos::logging::warn!("storage: serializing {key} failed: {e}");
                return;
            }
        };
        match self.backend.set_item(key, &raw) {
            Ok(()) | Err(StorageError::Unavailable) => {}
            Err(e) => leptos::logging::warn!("storage: writing {key} failed: {e}"),
        }
    }

    /// Delete `key`. Failures are logged and dropped.
    pub fn remove(&self, key: &str) {
        match self.backend.remove_item(key) {
            Ok(()) | Err(StorageError::Unavailable) => {}
            Err(e) => leptos::logging::warn!("storage: removing {key} failed: {e}"),
        }
    }
}

impl std::fmt::Debug for LocalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalStore").finish_non_exhaustive()
    }
}
