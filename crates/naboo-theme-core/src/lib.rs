// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Theme preference core for the Naboo venue app: catalog tables, the
//! persisted record, the preference store, the style applicator, the
//! pre-paint bootstrap, and the palette editor.
//! Keeps browser/filesystem adapters thin and framework-agnostic.

pub mod bootstrap;
pub mod catalog;
pub mod clipboard_port;
pub mod config;
pub mod config_port;
pub mod editor;
pub mod prefs;
pub mod store;
pub mod style;

pub use bootstrap::{inline_script, pre_paint};
pub use catalog::{ColorVar, FontChoice, LetterSpacing, PaletteColor, Preset, PRESETS};
pub use config_port::PreferencePort;
pub use editor::{PaletteEditor, PaletteState};
pub use prefs::{PersistedRecord, ThemePrefs, PREFS_KEY};
pub use store::PreferenceStore;
pub use style::{compute_style_mutations, InlineStyle, StyleApplicator, StyleMutation, StyleScope};
