// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! In-memory config store fake standing in for browser storage or the
//! filesystem.

use naboo_theme_core::config::{ConfigError, ConfigStore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// In-memory implementation of [`ConfigStore`] for testing.
///
/// Clones share state, so a test can keep a handle while the code under test
/// owns another. Failures can be injected per operation to simulate
/// unavailable storage (private browsing, quota exceeded).
///
/// # Example
///
/// ```
/// use naboo_dry_tests::InMemoryConfigStore;
/// use naboo_theme_core::{PreferenceStore, PREFS_KEY};
///
/// let raw = InMemoryConfigStore::new();
/// raw.seed(PREFS_KEY, "{not json");
/// let store = PreferenceStore::new(raw.clone());
///
/// assert!(store.load().is_none());
/// assert_eq!(raw.load_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryConfigStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    data: HashMap<String, Vec<u8>>,
    load_count: usize,
    save_count: usize,
    remove_count: usize,
    fail_on_load: bool,
    fail_on_save: bool,
    fail_on_remove: bool,
}

impl InMemoryConfigStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Write raw content directly, bypassing counters and failure flags.
    pub fn seed(&self, key: &str, content: impl AsRef<[u8]>) {
        self.lock()
            .data
            .insert(key.to_owned(), content.as_ref().to_vec());
    }

    /// Raw content under `key`, as UTF-8 text.
    pub fn raw_text(&self, key: &str) -> Option<String> {
        self.lock()
            .data
            .get(key)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Configure the store to fail on load operations.
    pub fn set_fail_on_load(&self, fail: bool) {
        self.lock().fail_on_load = fail;
    }

    /// Configure the store to fail on save operations.
    pub fn set_fail_on_save(&self, fail: bool) {
        self.lock().fail_on_save = fail;
    }

    /// Configure the store to fail on remove operations.
    pub fn set_fail_on_remove(&self, fail: bool) {
        self.lock().fail_on_remove = fail;
    }

    /// Simulate storage that is entirely unavailable.
    pub fn set_unavailable(&self, unavailable: bool) {
        let mut inner = self.lock();
        inner.fail_on_load = unavailable;
        inner.fail_on_save = unavailable;
        inner.fail_on_remove = unavailable;
    }

    /// Number of `load_raw` attempts (including failed ones).
    pub fn load_count(&self) -> usize {
        self.lock().load_count
    }

    /// Number of `save_raw` attempts (including failed ones).
    pub fn save_count(&self) -> usize {
        self.lock().save_count
    }

    /// Number of `remove_raw` attempts (including failed ones).
    pub fn remove_count(&self) -> usize {
        self.lock().remove_count
    }

    /// Check if a key exists in the store.
    pub fn contains_key(&self, key: &str) -> bool {
        self.lock().data.contains_key(key)
    }

    /// Return all keys currently present in the store.
    pub fn keys(&self) -> Vec<String> {
        self.lock().data.keys().cloned().collect()
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        let mut inner = self.lock();
        inner.load_count += 1;

        if inner.fail_on_load {
            return Err(ConfigError::Other("simulated load failure".into()));
        }

        inner.data.get(key).cloned().ok_or(ConfigError::NotFound)
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let mut inner = self.lock();
        inner.save_count += 1;

        if inner.fail_on_save {
            return Err(ConfigError::Other("simulated quota exceeded".into()));
        }

        inner.data.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn remove_raw(&self, key: &str) -> Result<(), ConfigError> {
        let mut inner = self.lock();
        inner.remove_count += 1;

        if inner.fail_on_remove {
            return Err(ConfigError::Other("simulated remove failure".into()));
        }

        inner.data.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_save_load() {
        let store = InMemoryConfigStore::new();
        store.save_raw("theme", b"{}").unwrap();
        assert_eq!(store.load_raw("theme").unwrap(), b"{}");
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load_count(), 1);
    }

    #[test]
    fn load_missing_key_returns_not_found() {
        let store = InMemoryConfigStore::new();
        assert!(matches!(store.load_raw("missing"), Err(ConfigError::NotFound)));
    }

    #[test]
    fn seed_bypasses_counters() {
        let store = InMemoryConfigStore::new();
        store.seed("theme", "{\"font\":\"Aeonik\"}");
        assert_eq!(store.save_count(), 0);
        assert_eq!(store.raw_text("theme").as_deref(), Some("{\"font\":\"Aeonik\"}"));
    }

    #[test]
    fn remove_deletes_key_and_tolerates_missing() {
        let store = InMemoryConfigStore::new();
        store.seed("theme", "{}");
        store.remove_raw("theme").unwrap();
        store.remove_raw("theme").unwrap();
        assert!(!store.contains_key("theme"));
        assert_eq!(store.remove_count(), 2);
    }

    #[test]
    fn unavailable_fails_every_operation_and_keeps_data() {
        let store = InMemoryConfigStore::new();
        store.seed("theme", "{}");
        store.set_unavailable(true);

        assert!(matches!(store.load_raw("theme"), Err(ConfigError::Other(_))));
        assert!(store.save_raw("theme", b"[]").is_err());
        assert!(store.remove_raw("theme").is_err());
        assert_eq!(store.raw_text("theme").as_deref(), Some("{}"));

        store.set_unavailable(false);
        assert!(store.load_raw("theme").is_ok());
    }

    #[test]
    fn clones_share_state() {
        let a = InMemoryConfigStore::new();
        let b = a.clone();
        a.save_raw("theme", b"{}").unwrap();
        b.set_fail_on_load(true);

        assert!(b.contains_key("theme"));
        assert!(a.load_raw("theme").is_err());
        assert_eq!(b.save_count(), 1);
        assert_eq!(a.keys(), vec!["theme".to_owned()]);
    }
}
