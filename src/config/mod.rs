// SPDX-License-Identifier: MPL-2.0
//! The persistent key-value store backing the settings panel.
//!
//! Settings are a flat mapping from string keys to boolean or string
//! values, persisted as a `settings.toml` table under the platform config
//! directory. Every write lands immediately (last write wins); reads that
//! find nothing fall back to the defaults in [`defaults`].
//!
//! The store is externally owned: controllers hold a cloneable
//! [`StoreHandle`] rather than the store itself.

pub mod defaults;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "OverlayShell";

/// A single setting value: form toggles are booleans, everything else is
/// free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Text(String),
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        SettingValue::Bool(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        SettingValue::Text(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        SettingValue::Text(value)
    }
}

/// Interface the overlay controllers consume.
pub trait SettingsStore: Send {
    fn get(&self, key: &str) -> Option<SettingValue>;
    fn set(&mut self, key: &str, value: SettingValue);
}

/// TOML-file-backed store. Without a path it behaves as a plain in-memory
/// map, which tests use freely.
#[derive(Debug, Default)]
pub struct FileStore {
    values: BTreeMap<String, SettingValue>,
    path: Option<PathBuf>,
}

impl FileStore {
    /// Loads the store from the platform config directory, starting empty
    /// when no file exists yet.
    pub fn load() -> Result<Self> {
        match default_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            Some(path) => Ok(Self {
                values: BTreeMap::new(),
                path: Some(path),
            }),
            None => Ok(Self::in_memory()),
        }
    }

    /// A store that never touches the filesystem.
    pub fn in_memory() -> Self {
        Self::default()
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let values = toml::from_str(&content).unwrap_or_default();
        Ok(Self {
            values,
            path: Some(path.to_path_buf()),
        })
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(&self.values)
            .map_err(|err| Error::Store(err.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn persist(&self) {
        if let Some(path) = &self.path {
            if let Err(err) = self.save_to_path(path) {
                tracing::warn!(%err, "failed to persist settings");
            }
        }
    }
}

impl SettingsStore for FileStore {
    fn get(&self, key: &str) -> Option<SettingValue> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: SettingValue) {
        self.values.insert(key.to_string(), value);
        self.persist();
    }
}

/// Cloneable handle to an externally owned store.
#[derive(Clone)]
pub struct StoreHandle {
    inner: Arc<Mutex<Box<dyn SettingsStore>>>,
}

impl StoreHandle {
    pub fn new(store: impl SettingsStore + 'static) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Box::new(store))),
        }
    }

    pub fn get(&self, key: &str) -> Option<SettingValue> {
        self.lock().get(key)
    }

    pub fn set(&self, key: &str, value: SettingValue) {
        self.lock().set(key, value);
    }

    /// Boolean read with a fallback for keys the store has never seen or
    /// that hold a non-boolean value.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(SettingValue::Bool(value)) => value,
            _ => default,
        }
    }

    /// Text read with a fallback, mirroring [`get_bool`](Self::get_bool).
    pub fn get_text(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Some(SettingValue::Text(value)) => value,
            _ => default.to_string(),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Box<dyn SettingsStore>> {
        // A poisoned store only means a writer panicked mid-set; the map
        // itself is still usable.
        self.inner.lock().unwrap_or_else(|err| err.into_inner())
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_values() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("nested").join("settings.toml");

        let mut store = FileStore::in_memory();
        store.set("adBlocker", SettingValue::Bool(true));
        store.set("language", SettingValue::Text("pt-BR".into()));
        store.save_to_path(&path).expect("failed to save store");

        let loaded = FileStore::load_from_path(&path).expect("failed to load store");
        assert_eq!(loaded.get("adBlocker"), Some(SettingValue::Bool(true)));
        assert_eq!(
            loaded.get("language"),
            Some(SettingValue::Text("pt-BR".into()))
        );
    }

    #[test]
    fn invalid_toml_falls_back_to_empty() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "not = valid = toml").expect("failed to write file");

        let loaded = FileStore::load_from_path(&path).expect("load should not error");
        assert_eq!(loaded.get("theme"), None);
    }

    #[test]
    fn set_persists_through_the_configured_path() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");

        let mut store = FileStore::in_memory();
        store.save_to_path(&path).expect("failed to seed file");
        let mut store = FileStore::load_from_path(&path).expect("failed to load store");
        store.set("proxyEnabled", SettingValue::Bool(true));

        let reloaded = FileStore::load_from_path(&path).expect("failed to reload");
        assert_eq!(
            reloaded.get("proxyEnabled"),
            Some(SettingValue::Bool(true))
        );
    }

    #[test]
    fn handle_defaults_cover_missing_and_mistyped_values() {
        let handle = StoreHandle::new(FileStore::in_memory());
        assert!(handle.get_bool("missing", true));
        assert_eq!(handle.get_text("theme", defaults::THEME), "dark");

        handle.set("theme", SettingValue::Bool(true));
        // A boolean under a text key falls back rather than misreading.
        assert_eq!(handle.get_text("theme", defaults::THEME), "dark");
    }

    #[test]
    fn handle_clones_share_one_store() {
        let handle = StoreHandle::new(FileStore::in_memory());
        let clone = handle.clone();
        clone.set("displayButtons", SettingValue::Bool(true));
        assert!(handle.get_bool("displayButtons", false));
    }
}
