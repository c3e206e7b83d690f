//! Accessibility preference core
//!
//! Platform-agnostic logic behind the page accessibility controls: the
//! persisted preference record, its mutators, the storage abstraction and the
//! scroll-to-top visibility state. This crate has no browser dependencies.

pub mod constants;
pub mod prefs;
pub mod scroll;
pub mod service;
pub mod storage;

// Re-export commonly used types
pub use prefs::{Preferences, clamp_font_size};
pub use scroll::{ScrollTopTracker, ScrollTopVisibility};
pub use service::{ContrastLabel, PageSurface, PreferenceService};
pub use storage::{KeyValueStorage, MemoryStorage, MemoryStorageError, PreferenceStore, PrefsError};
