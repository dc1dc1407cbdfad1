// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! wasm-bindgen bindings for the Naboo theme core.
//!
//! Module instantiation is asynchronous, so the first paint is covered by
//! the classic script from [`bootstrap_script`], inlined into `<head>`.
//! Instantiating the module re-applies the record (idempotent) and the
//! [`ThemePanel`] class drives the palette editor from the presentation
//! layer.
#![deny(missing_docs)]

pub mod adapters;

use adapters::{DocumentStyleScope, LocalStorageStore, NavigatorClipboard};
use naboo_theme_core::{
    inline_script, pre_paint, ColorVar, FontChoice, LetterSpacing, PaletteColor, PaletteEditor,
    PreferenceStore, Preset, StyleApplicator, PRESETS,
};
use wasm_bindgen::prelude::*;

type BrowserEditor = PaletteEditor<PreferenceStore<LocalStorageStore>, DocumentStyleScope>;

/// Module start hook: install the panic hook (if enabled) and re-apply the
/// persisted theme. First paint is covered by [`bootstrap_script`].
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console-panic")]
    console_error_panic_hook::set_once();
    bootstrap_theme();
}

/// Apply the persisted theme to the document. Returns whether a record was
/// found. Never throws.
#[wasm_bindgen(js_name = bootstrapTheme)]
pub fn bootstrap_theme() -> bool {
    let store = PreferenceStore::new(LocalStorageStore::new());
    pre_paint(&store, &StyleApplicator::new(DocumentStyleScope::new()))
}

/// Classic inline script that applies the persisted theme before first paint.
///
/// Intended for build-time templating into a plain `<script>` in `<head>`.
#[wasm_bindgen(js_name = bootstrapScript)]
pub fn bootstrap_script() -> String {
    inline_script()
}

/// Catalog tables as JSON, for rendering the panel controls.
#[wasm_bindgen(js_name = themeCatalog)]
pub fn theme_catalog() -> String {
    let colors: Vec<_> = ColorVar::ALL
        .iter()
        .map(|v| {
            serde_json::json!({
                "name": v.label(),
                "cssVar": v.property(),
                "defaultValue": v.default_value(),
            })
        })
        .collect();
    let custom: Vec<_> = PaletteColor::ALL
        .iter()
        .map(|c| serde_json::json!({ "name": c.name(), "defaultValue": c.default_value() }))
        .collect();
    let fonts: Vec<_> = FontChoice::ALL
        .iter()
        .map(|f| {
            serde_json::json!({
                "label": f.label(),
                "value": f.id(),
                "fontFamily": f.style().stack,
            })
        })
        .collect();
    let spacing: Vec<_> = LetterSpacing::ALL
        .iter()
        .map(|s| serde_json::json!({ "label": s.id(), "value": s.id(), "cssValue": s.css_value() }))
        .collect();
    let presets: Vec<_> = PRESETS
        .iter()
        .map(|p| {
            serde_json::json!({
                "name": p.name,
                "primary": p.primary,
                "primaryForeground": p.primary_foreground,
            })
        })
        .collect();
    serde_json::json!({
        "colors": colors,
        "customColors": custom,
        "fonts": fonts,
        "letterSpacing": spacing,
        "presets": presets,
    })
    .to_string()
}

/// Palette editing panel bound to `localStorage` and the document root.
///
/// Setters take wire identifiers and return `false` (doing nothing) when the
/// identifier is not in the catalog.
#[wasm_bindgen]
pub struct ThemePanel {
    editor: BrowserEditor,
}

#[wasm_bindgen]
impl ThemePanel {
    /// Mount the panel, seeding it from the persisted record.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            editor: PaletteEditor::mount(
                PreferenceStore::new(LocalStorageStore::new()),
                StyleApplicator::new(DocumentStyleScope::new()),
            ),
        }
    }

    /// Whether the panel is visible.
    #[wasm_bindgen(getter, js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.editor.is_open()
    }

    /// Show the panel.
    pub fn open(&mut self) {
        self.editor.open();
    }

    /// Hide the panel.
    pub fn close(&mut self) {
        self.editor.close();
    }

    /// Flip visibility; returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.editor.toggle()
    }

    /// Current value of a color variable (e.g. `--primary`).
    pub fn color(&self, css_var: &str) -> Option<String> {
        ColorVar::from_property(css_var).map(|v| self.editor.state().color(v).to_owned())
    }

    /// Current value of a palette color (e.g. `Grey Light`).
    #[wasm_bindgen(js_name = customColor)]
    pub fn custom_color(&self, name: &str) -> Option<String> {
        PaletteColor::from_name(name).map(|c| self.editor.state().custom_color(c).to_owned())
    }

    /// Selected font identifier.
    #[wasm_bindgen(getter)]
    pub fn font(&self) -> String {
        self.editor.state().font().id().to_owned()
    }

    /// Selected letter-spacing identifier.
    #[wasm_bindgen(getter, js_name = letterSpacing)]
    pub fn letter_spacing(&self) -> String {
        self.editor.state().letter_spacing().id().to_owned()
    }

    /// Change a color variable.
    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&mut self, css_var: &str, value: &str) -> bool {
        let Some(var) = ColorVar::from_property(css_var) else {
            return false;
        };
        self.editor.set_color(var, value);
        true
    }

    /// Change a palette color.
    #[wasm_bindgen(js_name = setCustomColor)]
    pub fn set_custom_color(&mut self, name: &str, value: &str) -> bool {
        let Some(color) = PaletteColor::from_name(name) else {
            return false;
        };
        self.editor.set_custom_color(color, value);
        true
    }

    /// Select a font by identifier.
    #[wasm_bindgen(js_name = selectFont)]
    pub fn select_font(&mut self, id: &str) -> bool {
        let Some(font) = FontChoice::from_id(id) else {
            return false;
        };
        self.editor.select_font(font);
        true
    }

    /// Select a letter spacing by identifier.
    #[wasm_bindgen(js_name = selectLetterSpacing)]
    pub fn select_letter_spacing(&mut self, id: &str) -> bool {
        let Some(spacing) = LetterSpacing::from_id(id) else {
            return false;
        };
        self.editor.select_letter_spacing(spacing);
        true
    }

    /// Apply a quick preset by name.
    #[wasm_bindgen(js_name = applyPreset)]
    pub fn apply_preset(&mut self, name: &str) -> bool {
        let Some(preset) = Preset::find(name) else {
            return false;
        };
        self.editor.apply_preset(preset);
        true
    }

    /// Restore defaults and clear the persisted record.
    pub fn reset(&mut self) {
        self.editor.reset();
    }

    /// Current settings as pretty JSON.
    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Option<String> {
        self.editor.export_json().ok()
    }

    /// Copy the export to the system clipboard (best-effort).
    #[wasm_bindgen(js_name = copyToClipboard)]
    pub fn copy_to_clipboard(&self) {
        self.editor.copy_to_clipboard(&NavigatorClipboard);
    }
}

impl Default for ThemePanel {
    fn default() -> Self {
        Self::new()
    }
}
