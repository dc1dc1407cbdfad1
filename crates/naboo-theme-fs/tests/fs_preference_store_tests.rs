// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Preference store behavior on top of real files.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use naboo_theme_core::{ColorVar, FontChoice, PreferenceStore, ThemePrefs, PREFS_KEY};
use naboo_theme_fs::FsConfigStore;
use std::fs;

#[test]
fn record_persists_across_store_instances() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = ThemePrefs {
        colors: [(ColorVar::Border, "#cccccc".to_owned())].into(),
        font: Some(FontChoice::Aeonik),
        ..ThemePrefs::default()
    };
    PreferenceStore::new(FsConfigStore::at(dir.path()).unwrap()).save(&prefs);

    let reopened = PreferenceStore::new(FsConfigStore::at(dir.path()).unwrap());
    assert_eq!(reopened.load(), Some(prefs));
}

#[test]
fn record_file_uses_wire_shape() {
    let dir = tempfile::tempdir().unwrap();
    let raw = FsConfigStore::at(dir.path()).unwrap();
    let path = raw.path_for(PREFS_KEY);
    PreferenceStore::new(raw).save(&ThemePrefs {
        font: Some(FontChoice::TwkLausanne),
        ..ThemePrefs::default()
    });

    let text = fs::read_to_string(path).unwrap();
    assert_eq!(text, r#"{"font":"TWK Lausanne"}"#);
}

#[test]
fn truncated_file_loads_as_absent() {
    let dir = tempfile::tempdir().unwrap();
    let raw = FsConfigStore::at(dir.path()).unwrap();
    fs::write(raw.path_for(PREFS_KEY), r##"{"colors":{"--primary":"#11"##).unwrap();

    assert!(PreferenceStore::new(raw).load().is_none());
}

#[test]
fn clear_removes_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let raw = FsConfigStore::at(dir.path()).unwrap();
    let path = raw.path_for(PREFS_KEY);
    let store = PreferenceStore::new(raw);

    store.save(&ThemePrefs::default());
    assert!(path.exists());
    store.clear();
    assert!(!path.exists());
    store.clear();
    assert!(store.load().is_none());
}
