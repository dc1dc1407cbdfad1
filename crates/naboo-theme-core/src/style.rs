// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Style applicator: projects theme preferences onto a document style scope.
//!
//! All writes go through [`StyleScope`]; nothing else touches the live
//! document. Preferences are first turned into a flat list of
//! [`StyleMutation`]s by [`compute_style_mutations`], then applied. Each
//! mutation targets a distinct property, so application order never matters.

use crate::catalog::{
    ColorVar, FontChoice, LetterSpacing, PaletteColor, FONT_SANS_PROPERTY,
    FONT_WEIGHT_BOLD_PROPERTY, LETTER_SPACING_PROPERTY,
};
use crate::prefs::ThemePrefs;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Write-only port onto a document's custom-property scope.
///
/// Implementations are best-effort and may log failures internally.
pub trait StyleScope {
    /// Set `property` to `value`.
    fn set_property(&self, property: &str, value: &str);
    /// Remove `property` so it falls back to the stylesheet value.
    fn remove_property(&self, property: &str);
}

impl<S> StyleScope for &S
where
    S: StyleScope + ?Sized,
{
    fn set_property(&self, property: &str, value: &str) {
        (**self).set_property(property, value);
    }

    fn remove_property(&self, property: &str) {
        (**self).remove_property(property);
    }
}

/// A single write against the style scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleMutation {
    /// Set a custom property.
    Set {
        /// Custom property name.
        property: &'static str,
        /// New value.
        value: String,
    },
    /// Remove a custom property.
    Remove {
        /// Custom property name.
        property: &'static str,
    },
}

impl StyleMutation {
    fn set(property: &'static str, value: impl Into<String>) -> Self {
        Self::Set {
            property,
            value: value.into(),
        }
    }

    /// Property this mutation targets.
    pub fn property(&self) -> &'static str {
        match self {
            Self::Set { property, .. } | Self::Remove { property } => *property,
        }
    }

    /// Apply to `scope`.
    pub fn apply_to<S: StyleScope + ?Sized>(&self, scope: &S) {
        match self {
            Self::Set { property, value } => scope.set_property(property, value),
            Self::Remove { property } => scope.remove_property(property),
        }
    }
}

/// Mutations for a single color variable.
pub fn color_mutation(var: ColorVar, value: &str) -> StyleMutation {
    StyleMutation::set(var.property(), value)
}

/// Mutations for a single custom palette color.
pub fn palette_mutation(color: PaletteColor, value: &str) -> StyleMutation {
    StyleMutation::set(color.property(), value)
}

/// Font stack and bold weight are always written together.
pub fn font_mutations(font: FontChoice) -> [StyleMutation; 2] {
    let style = font.style();
    [
        StyleMutation::set(FONT_SANS_PROPERTY, style.stack),
        StyleMutation::set(FONT_WEIGHT_BOLD_PROPERTY, style.bold_weight),
    ]
}

/// Mutation for a letter-spacing choice.
pub fn letter_spacing_mutation(spacing: LetterSpacing) -> StyleMutation {
    StyleMutation::set(LETTER_SPACING_PROPERTY, spacing.css_value())
}

/// Pure projection of `prefs` onto style writes.
///
/// Only properties governed by present fields appear in the output.
pub fn compute_style_mutations(prefs: &ThemePrefs) -> Vec<StyleMutation> {
    let mut out = Vec::with_capacity(prefs.colors.len() + prefs.custom_colors.len() + 3);
    out.extend(
        prefs
            .colors
            .iter()
            .map(|(var, value)| color_mutation(*var, value)),
    );
    out.extend(
        prefs
            .custom_colors
            .iter()
            .map(|(color, value)| palette_mutation(*color, value)),
    );
    if let Some(font) = prefs.font {
        out.extend(font_mutations(font));
    }
    if let Some(spacing) = prefs.letter_spacing {
        out.push(letter_spacing_mutation(spacing));
    }
    out
}

/// Writes that restore the compiled-in defaults.
///
/// Color variables, font, bold weight, and spacing are set explicitly;
/// palette properties are removed so the stylesheet defaults apply.
pub fn reset_mutations() -> Vec<StyleMutation> {
    let mut out: Vec<StyleMutation> = ColorVar::ALL
        .into_iter()
        .map(|var| color_mutation(var, var.default_value()))
        .collect();
    out.extend(PaletteColor::ALL.into_iter().map(|color| StyleMutation::Remove {
        property: color.property(),
    }));
    out.extend(font_mutations(FontChoice::default()));
    out.push(letter_spacing_mutation(LetterSpacing::default()));
    out
}

/// Single entry point for every style-scope write.
pub struct StyleApplicator<S> {
    scope: S,
}

impl<S> StyleApplicator<S>
where
    S: StyleScope,
{
    /// Wrap a style scope.
    pub fn new(scope: S) -> Self {
        Self { scope }
    }

    /// Apply a batch of mutations.
    pub fn apply(&self, mutations: &[StyleMutation]) {
        for mutation in mutations {
            mutation.apply_to(&self.scope);
        }
    }

    /// Apply every present field of `prefs`. Idempotent.
    pub fn apply_all(&self, prefs: &ThemePrefs) {
        self.apply(&compute_style_mutations(prefs));
    }

    /// Restore compiled-in defaults in one pass.
    pub fn reset_to_defaults(&self) {
        self.apply(&reset_mutations());
    }

    /// Write one color variable.
    pub fn apply_color(&self, var: ColorVar, value: &str) {
        color_mutation(var, value).apply_to(&self.scope);
    }

    /// Write one palette color.
    pub fn apply_custom_color(&self, color: PaletteColor, value: &str) {
        palette_mutation(color, value).apply_to(&self.scope);
    }

    /// Write font stack and bold weight.
    pub fn apply_font(&self, font: FontChoice) {
        self.apply(&font_mutations(font));
    }

    /// Write letter spacing.
    pub fn apply_letter_spacing(&self, spacing: LetterSpacing) {
        letter_spacing_mutation(spacing).apply_to(&self.scope);
    }
}

/// In-memory style scope, e.g. a document's inline `style` attribute.
///
/// Renders as a `:root { ... }` block with properties sorted by name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InlineStyle {
    properties: RefCell<BTreeMap<String, String>>,
}

impl InlineStyle {
    /// Empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope pre-filled with every compiled-in default that reset writes.
    pub fn with_defaults() -> Self {
        let style = Self::new();
        for mutation in reset_mutations() {
            mutation.apply_to(&style);
        }
        style
    }

    /// Current value of `property`.
    pub fn get(&self, property: &str) -> Option<String> {
        self.properties.borrow().get(property).cloned()
    }

    /// Snapshot of all set properties.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.properties.borrow().clone()
    }

    /// Number of set properties.
    pub fn len(&self) -> usize {
        self.properties.borrow().len()
    }

    /// True when nothing is set.
    pub fn is_empty(&self) -> bool {
        self.properties.borrow().is_empty()
    }

    /// Render as a `:root` rule.
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (property, value) in self.properties.borrow().iter() {
            let _ = writeln!(css, "  {property}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

impl StyleScope for InlineStyle {
    fn set_property(&self, property: &str, value: &str) {
        self.properties
            .borrow_mut()
            .insert(property.to_owned(), value.to_owned());
    }

    fn remove_property(&self, property: &str) {
        self.properties.borrow_mut().remove(property);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefs_with_font(font: FontChoice) -> ThemePrefs {
        ThemePrefs {
            font: Some(font),
            ..ThemePrefs::default()
        }
    }

    #[test]
    fn empty_prefs_produce_no_writes() {
        assert!(compute_style_mutations(&ThemePrefs::default()).is_empty());
    }

    #[test]
    fn each_mutation_targets_a_distinct_property() {
        let prefs = ThemePrefs {
            colors: ColorVar::ALL.iter().map(|v| (*v, "#000".to_owned())).collect(),
            custom_colors: PaletteColor::ALL
                .iter()
                .map(|c| (*c, "#111".to_owned()))
                .collect(),
            font: Some(FontChoice::TwkLausanne),
            letter_spacing: Some(LetterSpacing::None),
        };
        let mutations = compute_style_mutations(&prefs);
        let mut props: Vec<_> = mutations.iter().map(StyleMutation::property).collect();
        let total = props.len();
        props.sort_unstable();
        props.dedup();
        assert_eq!(props.len(), total);
        assert_eq!(total, 6 + 4 + 2 + 1);
    }

    #[test]
    fn aeonik_writes_medium_bold_weight() {
        let style = InlineStyle::new();
        StyleApplicator::new(&style).apply_all(&prefs_with_font(FontChoice::Aeonik));
        assert_eq!(
            style.get(FONT_SANS_PROPERTY).as_deref(),
            Some("'Aeonik Medium', 'Aeonik', system-ui, sans-serif")
        );
        assert_eq!(style.get(FONT_WEIGHT_BOLD_PROPERTY).as_deref(), Some("500"));
    }

    #[test]
    fn other_fonts_write_semibold_weight() {
        let style = InlineStyle::new();
        let applicator = StyleApplicator::new(&style);
        applicator.apply_all(&prefs_with_font(FontChoice::Aeonik));
        applicator.apply_all(&prefs_with_font(FontChoice::GoogleSans));
        assert_eq!(style.get(FONT_WEIGHT_BOLD_PROPERTY).as_deref(), Some("600"));
    }

    #[test]
    fn apply_order_does_not_matter() {
        let prefs = ThemePrefs {
            colors: [(ColorVar::Border, "#abcabc".to_owned())].into(),
            custom_colors: [(PaletteColor::Black, "#010101".to_owned())].into(),
            font: Some(FontChoice::Aeonik),
            letter_spacing: Some(LetterSpacing::Tighter),
        };
        let forward = InlineStyle::new();
        let reverse = InlineStyle::new();
        let mutations = compute_style_mutations(&prefs);
        StyleApplicator::new(&forward).apply(&mutations);
        let reversed: Vec<_> = mutations.into_iter().rev().collect();
        StyleApplicator::new(&reverse).apply(&reversed);
        assert_eq!(forward, reverse);
    }

    #[test]
    fn reset_removes_palette_overrides() {
        let style = InlineStyle::new();
        let applicator = StyleApplicator::new(&style);
        applicator.apply_custom_color(PaletteColor::Info, "#123456");
        applicator.reset_to_defaults();
        assert_eq!(style.get("--color-info"), None);
        assert_eq!(style.get("--primary").as_deref(), Some("#D3D676"));
        assert_eq!(style.get(LETTER_SPACING_PROPERTY).as_deref(), Some("-0.01em"));
        assert_eq!(style, InlineStyle::with_defaults());
    }

    #[test]
    fn css_rendering_is_sorted() {
        let style = InlineStyle::new();
        style.set_property("--ring", "#000");
        style.set_property("--border", "#fff");
        assert_eq!(style.to_css(), ":root {\n  --border: #fff;\n  --ring: #000;\n}\n");
    }
}
