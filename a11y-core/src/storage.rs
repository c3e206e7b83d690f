//! Preference persistence over a synchronous key-value store.

use crate::constants::STORAGE_KEY;
use crate::prefs::Preferences;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Synchronous string key-value storage, shaped after the browser's
/// `Storage` interface.
///
/// Platform-specific implementations should provide this.
pub trait KeyValueStorage {
    type Error: std::error::Error + 'static;

    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Remove `key` if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the removal.
    fn remove_item(&self, key: &str) -> Result<(), Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Loads and saves [`Preferences`] under [`STORAGE_KEY`].
///
/// Reading never fails: an absent, unreadable or malformed record yields the
/// defaults. Writing through [`PreferenceStore::save`] logs and swallows
/// errors so a full or disabled store never interrupts the page.
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> PreferenceStore<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn load(&self) -> Preferences {
        let raw = match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Preferences::default(),
            Err(err) => {
                log::warn!("preferences unreadable, using defaults: {err}");
                return Preferences::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            log::debug!("stored preferences malformed, using defaults: {err}");
            Preferences::default()
        })
    }

    /// Serialize and write `prefs`, overwriting the stored record.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the storage rejects the write.
    pub fn try_save(&self, prefs: &Preferences) -> Result<(), PrefsError> {
        let raw = serde_json::to_string(prefs)?;
        self.storage
            .set_item(STORAGE_KEY, &raw)
            .map_err(|err| PrefsError::Storage(err.to_string()))
    }

    pub fn save(&self, prefs: &Preferences) {
        if let Err(err) = self.try_save(prefs) {
            log::warn!("preferences not persisted: {err}");
        }
    }

    /// Forget the stored record so the next load yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage rejects the removal.
    pub fn clear(&self) -> Result<(), PrefsError> {
        self.storage
            .remove_item(STORAGE_KEY)
            .map_err(|err| PrefsError::Storage(err.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MemoryStorageError {
    #[error("storage unavailable")]
    Unavailable,
}

/// In-memory [`KeyValueStorage`] for native targets and tests.
///
/// Clones share the same map, so a test can keep a handle while the store
/// owns another. Writes can be switched off to simulate a full or disabled
/// browser store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<BTreeMap<String, String>>>,
    reject_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    type Error = MemoryStorageError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.reject_writes.get() {
            return Err(MemoryStorageError::Unavailable);
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        if self.reject_writes.get() {
            return Err(MemoryStorageError::Unavailable);
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
