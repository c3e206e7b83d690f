//! `localStorage`-backed key-value storage.

use crate::dom;
use a11y_core::KeyValueStorage;
use web_sys::Storage;

#[derive(Debug, thiserror::Error)]
pub enum BrowserStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Web-specific storage using `window.localStorage`.
///
/// A page where storage is disabled still gets a value; every call then
/// reports [`BrowserStorageError::Unavailable`] and the preference store
/// degrades to defaults.
#[derive(Debug, Clone)]
pub struct BrowserStorage {
    inner: Result<Storage, String>,
}

impl BrowserStorage {
    #[must_use]
    pub fn local() -> Self {
        let inner = dom::local_storage().map_err(|err| dom::js_error_message(&err));
        if let Err(reason) = &inner {
            log::warn!("preferences will not persist: {reason}");
        }
        Self { inner }
    }

    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.inner.is_ok()
    }

    fn storage(&self) -> Result<&Storage, BrowserStorageError> {
        self.inner
            .as_ref()
            .map_err(|reason| BrowserStorageError::Unavailable(reason.clone()))
    }
}

impl KeyValueStorage for BrowserStorage {
    type Error = BrowserStorageError;

    fn get_item(&self, key: &str) -> Result<Option<String>, Self::Error> {
        self.storage()?
            .get_item(key)
            .map_err(|err| BrowserStorageError::Storage(dom::js_error_message(&err)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.storage()?
            .set_item(key, value)
            .map_err(|err| BrowserStorageError::Storage(dom::js_error_message(&err)))
    }

    fn remove_item(&self, key: &str) -> Result<(), Self::Error> {
        self.storage()?
            .remove_item(key)
            .map_err(|err| BrowserStorageError::Storage(dom::js_error_message(&err)))
    }
}
