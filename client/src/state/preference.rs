//! Persisted theme preference.
//!
//! Two origin-scoped string keys survive between visits: the last applied
//! theme and the dark-mode flag. Both are rewritten on every theme change and
//! never removed.
//!
//! TRADE-OFFS
//! ==========
//! An older revision of the site stored the mode as `darkMode = "enabled"`.
//! That key is only consulted when `isDarkMode` is missing and is never
//! written back, so the first change after an upgrade moves the visitor onto
//! the current scheme without deleting anything.

#[cfg(test)]
#[path = "preference_test.rs"]
mod preference_test;

use std::cell::RefCell;
use std::collections::HashMap;

use super::theme::ThemeMode;

pub const CURRENT_THEME_KEY: &str = "currentTheme";
pub const IS_DARK_MODE_KEY: &str = "isDarkMode";
pub const LEGACY_DARK_MODE_KEY: &str = "darkMode";

/// String key-value storage the preference lives in.
///
/// The browser implementation wraps `localStorage`; writes are best-effort.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory store used when `localStorage` is unavailable (private
/// browsing, SSR) and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

/// Preference as read at page load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredPreference {
    /// Theme applied during the previous visit, if any.
    pub theme: Option<String>,
    pub mode: ThemeMode,
}

/// Read the stored theme and mode.
pub fn load<S: PreferenceStore + ?Sized>(store: &S) -> StoredPreference {
    let mode = match store.get(IS_DARK_MODE_KEY) {
        Some(flag) => ThemeMode::from_flag(Some(&flag)),
        None => legacy_mode(store.get(LEGACY_DARK_MODE_KEY).as_deref()),
    };
    let theme = store.get(CURRENT_THEME_KEY).filter(|t| !t.is_empty());
    StoredPreference { theme, mode }
}

/// Persist the applied theme and mode.
pub fn save<S: PreferenceStore + ?Sized>(store: &S, theme: &str, mode: ThemeMode) {
    store.set(CURRENT_THEME_KEY, theme);
    store.set(IS_DARK_MODE_KEY, mode.as_flag());
}

fn legacy_mode(raw: Option<&str>) -> ThemeMode {
    match raw {
        None | Some("enabled") => ThemeMode::Dark,
        Some(_) => ThemeMode::Light,
    }
}
