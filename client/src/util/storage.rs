//! Browser `localStorage` backing for the theme preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the hydrate-only storage glue so theme rules stay generic over
//! `PreferenceStore`. Without a browser, or with storage blocked, an in-memory
//! store stands in and the preference lasts for the current page only.

use crate::state::preference::{MemoryStore, PreferenceStore};

/// `window.localStorage` adapter.
#[cfg(feature = "hydrate")]
pub struct LocalStore {
    storage: web_sys::Storage,
}

#[cfg(feature = "hydrate")]
impl LocalStore {
    /// Open the origin's `localStorage`, if the browser allows it.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        Some(Self { storage })
    }
}

#[cfg(feature = "hydrate")]
impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.set_item(key, value) {
            leptos::logging::warn!("localStorage write failed for {key}: {err:?}");
        }
    }
}

/// Best available preference store for this environment.
pub fn open_store() -> Box<dyn PreferenceStore> {
    #[cfg(feature = "hydrate")]
    {
        if let Some(store) = LocalStore::open() {
            return Box::new(store);
        }
        leptos::logging::warn!("localStorage unavailable; theme preference will not persist");
    }
    Box::new(MemoryStore::default())
}
