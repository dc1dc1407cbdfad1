// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Preference port shared by the pre-paint bootstrap and the palette editor.

use crate::prefs::ThemePrefs;

/// Config-facing port for the single theme preference record.
///
/// Implementations are best-effort: they never report failure to the
/// caller and may log errors internally.
pub trait PreferencePort {
    /// Load the record (returns `None` if missing, unreadable, or malformed).
    fn load_prefs(&self) -> Option<ThemePrefs>;
    /// Persist the whole record, replacing any prior content.
    fn save_prefs(&self, prefs: &ThemePrefs);
    /// Remove the record entirely.
    fn clear_prefs(&self);
}

impl<P> PreferencePort for &P
where
    P: PreferencePort + ?Sized,
{
    fn load_prefs(&self) -> Option<ThemePrefs> {
        (**self).load_prefs()
    }

    fn save_prefs(&self, prefs: &ThemePrefs) {
        (**self).save_prefs(prefs);
    }

    fn clear_prefs(&self) {
        (**self).clear_prefs();
    }
}
