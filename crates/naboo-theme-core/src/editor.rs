// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Palette editor: keeps the panel mirror, the live document, and the
//! persisted record in sync.
//!
//! Every change handler runs the same three steps in order:
//!
//! 1. write the changed value to the document through the applicator,
//! 2. update the in-memory [`PaletteState`],
//! 3. persist the *whole* state through the [`PreferencePort`].
//!
//! The store therefore never merges partial updates.

use crate::catalog::{ColorVar, FontChoice, LetterSpacing, PaletteColor, Preset};
use crate::clipboard_port::ClipboardPort;
use crate::config_port::PreferencePort;
use crate::prefs::ThemePrefs;
use crate::style::{StyleApplicator, StyleScope};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Full panel mirror: every control has a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteState {
    colors: BTreeMap<ColorVar, String>,
    custom_colors: BTreeMap<PaletteColor, String>,
    font: FontChoice,
    letter_spacing: LetterSpacing,
}

impl Default for PaletteState {
    fn default() -> Self {
        Self {
            colors: ColorVar::ALL
                .into_iter()
                .map(|var| (var, var.default_value().to_owned()))
                .collect(),
            custom_colors: PaletteColor::ALL
                .into_iter()
                .map(|color| (color, color.default_value().to_owned()))
                .collect(),
            font: FontChoice::default(),
            letter_spacing: LetterSpacing::default(),
        }
    }
}

impl PaletteState {
    /// Defaults overlaid with whatever `prefs` carries.
    pub fn merged(prefs: &ThemePrefs) -> Self {
        let mut state = Self::default();
        state.colors.extend(prefs.colors.clone());
        state.custom_colors.extend(prefs.custom_colors.clone());
        if let Some(font) = prefs.font {
            state.font = font;
        }
        if let Some(spacing) = prefs.letter_spacing {
            state.letter_spacing = spacing;
        }
        state
    }

    /// Current value of a color variable.
    pub fn color(&self, var: ColorVar) -> &str {
        self.colors
            .get(&var)
            .map_or_else(|| var.default_value(), String::as_str)
    }

    /// Current value of a palette color.
    pub fn custom_color(&self, color: PaletteColor) -> &str {
        self.custom_colors
            .get(&color)
            .map_or_else(|| color.default_value(), String::as_str)
    }

    /// Selected font.
    pub fn font(&self) -> FontChoice {
        self.font
    }

    /// Selected letter spacing.
    pub fn letter_spacing(&self) -> LetterSpacing {
        self.letter_spacing
    }

    /// Snapshot with every field present.
    pub fn to_prefs(&self) -> ThemePrefs {
        ThemePrefs {
            colors: self.colors.clone(),
            custom_colors: self.custom_colors.clone(),
            font: Some(self.font),
            letter_spacing: Some(self.letter_spacing),
        }
    }

    /// Pretty JSON for pasting into a config file.
    ///
    /// Keys: `font`, `letterSpacing`, `cssVariables`, `customColors`, with map
    /// entries in panel display order.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Export {
            font: self.font.id(),
            letter_spacing: self.letter_spacing.id(),
            css_variables: KeyedBy(&self.colors, ColorVar::property),
            custom_colors: KeyedBy(&self.custom_colors, PaletteColor::name),
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Export<'a> {
    font: &'static str,
    letter_spacing: &'static str,
    css_variables: KeyedBy<'a, ColorVar>,
    custom_colors: KeyedBy<'a, PaletteColor>,
}

/// Serializes an enum-keyed map under the keys' wire names, in key order.
struct KeyedBy<'a, K>(&'a BTreeMap<K, String>, fn(K) -> &'static str);

impl<K: Copy> Serialize for KeyedBy<'_, K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| ((self.1)(*k), v)))
    }
}

/// Interactive editing panel over a preference port and a style scope.
pub struct PaletteEditor<P, S> {
    prefs: P,
    applicator: StyleApplicator<S>,
    state: PaletteState,
    open: bool,
}

impl<P, S> PaletteEditor<P, S>
where
    P: PreferencePort,
    S: StyleScope,
{
    /// Mount the editor: seed the mirror from the persisted record and
    /// re-apply that record to the document. The panel starts closed.
    pub fn mount(prefs: P, applicator: StyleApplicator<S>) -> Self {
        let state = match prefs.load_prefs() {
            Some(saved) => {
                applicator.apply_all(&saved);
                PaletteState::merged(&saved)
            }
            None => PaletteState::default(),
        };
        Self {
            prefs,
            applicator,
            state,
            open: false,
        }
    }

    /// Current mirror.
    pub fn state(&self) -> &PaletteState {
        &self.state
    }

    /// Whether the panel is visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show the panel.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the panel.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Flip visibility; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    fn persist(&self) {
        self.prefs.save_prefs(&self.state.to_prefs());
    }

    /// Change a color variable.
    pub fn set_color(&mut self, var: ColorVar, value: &str) {
        self.applicator.apply_color(var, value);
        self.state.colors.insert(var, value.to_owned());
        self.persist();
    }

    /// Change a custom palette color.
    pub fn set_custom_color(&mut self, color: PaletteColor, value: &str) {
        self.applicator.apply_custom_color(color, value);
        self.state.custom_colors.insert(color, value.to_owned());
        self.persist();
    }

    /// Select a font; also updates the bold weight.
    pub fn select_font(&mut self, font: FontChoice) {
        self.applicator.apply_font(font);
        self.state.font = font;
        self.persist();
    }

    /// Select a letter spacing.
    pub fn select_letter_spacing(&mut self, spacing: LetterSpacing) {
        self.applicator.apply_letter_spacing(spacing);
        self.state.letter_spacing = spacing;
        self.persist();
    }

    /// Apply a quick preset as one edit.
    pub fn apply_preset(&mut self, preset: &Preset) {
        let updates = preset.updates();
        for (var, value) in updates {
            self.applicator.apply_color(var, value);
        }
        for (var, value) in updates {
            self.state.colors.insert(var, value.to_owned());
        }
        self.persist();
        debug!(preset = preset.name, "applied palette preset");
    }

    /// Restore defaults on the document, drop the persisted record, and
    /// reset the mirror.
    pub fn reset(&mut self) {
        self.applicator.reset_to_defaults();
        self.prefs.clear_prefs();
        self.state = PaletteState::default();
    }

    /// Export the current mirror as pretty JSON.
    pub fn export_json(&self) -> Result<String, serde_json::Error> {
        self.state.export_json()
    }

    /// Copy the export to the clipboard. Best-effort.
    pub fn copy_to_clipboard<C>(&self, clipboard: &C)
    where
        C: ClipboardPort + ?Sized,
    {
        match self.export_json() {
            Ok(json) => clipboard.write_text(&json),
            Err(err) => warn!(error = %err, "failed to export palette"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::style::InlineStyle;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct SlotPort {
        slot: RefCell<Option<ThemePrefs>>,
        saves: Cell<usize>,
    }

    impl PreferencePort for SlotPort {
        fn load_prefs(&self) -> Option<ThemePrefs> {
            self.slot.borrow().clone()
        }

        fn save_prefs(&self, prefs: &ThemePrefs) {
            self.saves.set(self.saves.get() + 1);
            *self.slot.borrow_mut() = Some(prefs.clone());
        }

        fn clear_prefs(&self) {
            *self.slot.borrow_mut() = None;
        }
    }

    #[test]
    fn every_edit_persists_the_full_snapshot() {
        let port = SlotPort::default();
        let style = InlineStyle::new();
        let mut editor = PaletteEditor::mount(&port, StyleApplicator::new(&style));

        editor.set_color(ColorVar::Border, "#cccccc");
        let saved = port.load_prefs().unwrap();
        assert_eq!(saved.colors.len(), ColorVar::ALL.len());
        assert_eq!(saved.custom_colors.len(), PaletteColor::ALL.len());
        assert_eq!(saved.font, Some(FontChoice::GoogleSans));
        assert_eq!(saved.letter_spacing, Some(LetterSpacing::Tight));

        editor.select_letter_spacing(LetterSpacing::None);
        let saved = port.load_prefs().unwrap();
        assert_eq!(saved.colors.get(&ColorVar::Border).map(String::as_str), Some("#cccccc"));
        assert_eq!(saved.letter_spacing, Some(LetterSpacing::None));
        assert_eq!(port.saves.get(), 2);
    }

    #[test]
    fn edits_only_touch_their_own_properties() {
        let port = SlotPort::default();
        let style = InlineStyle::new();
        let mut editor = PaletteEditor::mount(&port, StyleApplicator::new(&style));

        editor.set_custom_color(PaletteColor::Grey, "#999999");
        assert_eq!(style.len(), 1);
        assert_eq!(style.get("--color-grey").as_deref(), Some("#999999"));

        editor.select_font(FontChoice::Aeonik);
        assert_eq!(style.len(), 3);
        assert_eq!(style.get("--font-weight-bold").as_deref(), Some("500"));
    }

    #[test]
    fn mount_seeds_mirror_and_document_from_record() {
        let port = SlotPort::default();
        port.save_prefs(&ThemePrefs {
            colors: [(ColorVar::Primary, "#2d7255".to_owned())].into(),
            font: Some(FontChoice::TwkLausanne),
            ..ThemePrefs::default()
        });
        let style = InlineStyle::new();
        let editor = PaletteEditor::mount(&port, StyleApplicator::new(&style));

        assert!(!editor.is_open());
        assert_eq!(editor.state().color(ColorVar::Primary), "#2d7255");
        assert_eq!(editor.state().color(ColorVar::Ring), "#D3D676");
        assert_eq!(editor.state().font(), FontChoice::TwkLausanne);
        assert_eq!(editor.state().letter_spacing(), LetterSpacing::Tight);
        assert_eq!(style.get("--primary").as_deref(), Some("#2d7255"));
        assert_eq!(style.get("--letter-spacing"), None);
    }

    #[test]
    fn preset_updates_both_primary_slots_in_one_save() {
        let port = SlotPort::default();
        let style = InlineStyle::new();
        let mut editor = PaletteEditor::mount(&port, StyleApplicator::new(&style));

        editor.apply_preset(Preset::find("Purple").unwrap());
        assert_eq!(port.saves.get(), 1);
        assert_eq!(editor.state().color(ColorVar::Primary), "#7c3aed");
        assert_eq!(editor.state().color(ColorVar::PrimaryForeground), "#ffffff");
        assert_eq!(style.get("--primary-foreground").as_deref(), Some("#ffffff"));
    }

    #[test]
    fn reset_clears_slot_and_restores_defaults() {
        let port = SlotPort::default();
        let style = InlineStyle::new();
        let mut editor = PaletteEditor::mount(&port, StyleApplicator::new(&style));
        editor.set_custom_color(PaletteColor::Info, "#000000");
        editor.select_font(FontChoice::Aeonik);

        editor.reset();

        assert!(port.load_prefs().is_none());
        assert_eq!(editor.state(), &PaletteState::default());
        assert_eq!(style, InlineStyle::with_defaults());
    }

    #[test]
    fn toggle_flips_visibility() {
        let port = SlotPort::default();
        let mut editor = PaletteEditor::mount(&port, StyleApplicator::new(InlineStyle::new()));
        assert!(editor.toggle());
        editor.close();
        assert!(!editor.is_open());
        editor.open();
        assert!(editor.is_open());
    }

    #[test]
    fn export_uses_display_order_and_wire_names() {
        let mut state = PaletteState::default();
        state.font = FontChoice::Aeonik;
        let json = state.export_json().unwrap();

        let font = json.find("\"font\"").unwrap();
        let spacing = json.find("\"letterSpacing\"").unwrap();
        let vars = json.find("\"cssVariables\"").unwrap();
        let custom = json.find("\"customColors\"").unwrap();
        assert!(font < spacing && spacing < vars && vars < custom);

        let primary = json.find("\"--primary\"").unwrap();
        let ring = json.find("\"--ring\"").unwrap();
        assert!(primary < ring);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["font"], "Aeonik");
        assert_eq!(value["letterSpacing"], "-1%");
        assert_eq!(value["customColors"]["Grey Light"], "#f1f1f1");
        assert!(json.contains('\n'));
    }
}
