//! Host configuration from the process environment.
//!
//! `PORT` and `SITE_ASSETS_DIR` are read here; Leptos reads its own
//! `LEPTOS_*` settings separately. Unset or blank values take the defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use crate::error::StartupError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ASSETS_DIR: &str = "public";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    /// TCP port bound on all interfaces.
    pub port: u16,
    /// Directory served for every path not claimed by another route.
    pub assets_dir: PathBuf,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, assets_dir: PathBuf::from(DEFAULT_ASSETS_DIR) }
    }
}

impl HostConfig {
    /// Load from the real environment.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::InvalidPort`] if `PORT` does not parse.
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::InvalidPort`] if `PORT` does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, StartupError> {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match value("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| StartupError::InvalidPort { value: raw })?,
            None => DEFAULT_PORT,
        };
        let assets_dir = value("SITE_ASSETS_DIR").map_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR), PathBuf::from);

        Ok(Self { port, assets_dir })
    }
}
