//! Preference store adapter.
//!
//! `PreferenceStore` is the synchronous key-value seam the controllers read
//! and write through. The browser implementation wraps `localStorage`; the
//! in-memory one backs native tests and stands in when storage is disabled.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::str::FromStr;

use crate::error::{FolioError, Result};

/// Synchronous, persistent string key-value store.
pub trait PreferenceStore {
    /// Read `key`. `Ok(None)` means the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Read `key` and parse it, falling back to `default` when the entry is
/// absent or holds a value that does not parse.
///
/// Store failures are returned unchanged.
pub fn load_or<T>(store: &impl PreferenceStore, key: &str, default: T) -> Result<T>
where
    T: FromStr<Err = FolioError>,
{
    match store.get(key)? {
        None => Ok(default),
        Some(raw) => match raw.parse::<T>() {
            Ok(value) => Ok(value),
            Err(err) => {
                log::warn!("ignoring stored {key}: {err}");
                Ok(default)
            }
        },
    }
}

/// Process-local store. Contents are lost when it is dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with existing entries.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { entries: entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Browser `localStorage` for the page's origin.
#[cfg(feature = "hydrate")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStorage {
    /// Open the window's `localStorage`.
    ///
    /// Fails when there is no window, or when the browser denies storage
    /// (private browsing modes, disabled cookies).
    pub fn open() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| FolioError::Storage("no window".into()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(FolioError::Storage("localStorage unavailable".into())),
            Err(err) => Err(FolioError::storage("localStorage", &err)),
        }
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|err| FolioError::storage(&format!("get {key}"), &err))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|err| FolioError::storage(&format!("set {key}"), &err))
    }
}
