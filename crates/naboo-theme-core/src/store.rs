// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Preference store: sole reader/writer of the durable theme record.
//!
//! The store is a best-effort cache. Storage failures and malformed content
//! are logged and then treated as "no preferences"; nothing propagates.

use crate::config::{ConfigService, ConfigStore};
use crate::config_port::PreferencePort;
use crate::prefs::{PersistedRecord, ThemePrefs, PREFS_KEY};
use tracing::{debug, warn};

/// Reads, writes, and clears the theme record in one keyed slot.
pub struct PreferenceStore<S> {
    service: ConfigService<S>,
    key: &'static str,
}

impl<S> PreferenceStore<S> {
    /// Store the record under the well-known [`PREFS_KEY`].
    pub const fn new(store: S) -> Self {
        Self {
            service: ConfigService::new(store),
            key: PREFS_KEY,
        }
    }
}

impl<S> PreferenceStore<S>
where
    S: ConfigStore,
{
    /// Read the record. Missing, unreadable, or malformed content yields `None`.
    pub fn load(&self) -> Option<ThemePrefs> {
        match self.service.load::<PersistedRecord>(self.key) {
            Ok(Some(record)) => {
                debug!(key = %self.key, "loaded theme preferences");
                Some(ThemePrefs::from(record))
            }
            Ok(None) => None,
            Err(err) => {
                warn!(key = %self.key, error = %err, "ignoring unreadable theme preferences");
                None
            }
        }
    }

    /// Replace the stored record with `prefs`. Failures are swallowed.
    pub fn save(&self, prefs: &ThemePrefs) {
        match self.service.save(self.key, &prefs.to_record()) {
            Ok(()) => debug!(key = %self.key, "saved theme preferences"),
            Err(err) => warn!(key = %self.key, error = %err, "failed to save theme preferences"),
        }
    }

    /// Remove the slot entirely. Failures are swallowed.
    pub fn clear(&self) {
        match self.service.remove(self.key) {
            Ok(()) => debug!(key = %self.key, "cleared theme preferences"),
            Err(err) => warn!(key = %self.key, error = %err, "failed to clear theme preferences"),
        }
    }
}

impl<S> PreferencePort for PreferenceStore<S>
where
    S: ConfigStore,
{
    fn load_prefs(&self) -> Option<ThemePrefs> {
        self.load()
    }

    fn save_prefs(&self, prefs: &ThemePrefs) {
        self.save(prefs);
    }

    fn clear_prefs(&self) {
        self.clear();
    }
}
