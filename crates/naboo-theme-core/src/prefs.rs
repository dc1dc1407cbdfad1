// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Theme preference record: the persisted wire shape and its typed view.

use crate::catalog::{ColorVar, FontChoice, LetterSpacing, PaletteColor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key of the single durable slot holding the record.
pub const PREFS_KEY: &str = "colorPaletteSettings";

/// Persisted record exactly as stored (JSON object, all fields optional).
///
/// Decoding is lenient per field: a field holding the wrong JSON type is
/// dropped, and non-string map entries are dropped, so one bad field never
/// discards the rest of the record. Only a non-object document fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedRecord {
    /// Custom property name -> color value.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::string_map"
    )]
    pub colors: Option<BTreeMap<String, String>>,
    /// Semantic palette name -> color value.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::string_map"
    )]
    pub custom_colors: Option<BTreeMap<String, String>>,
    /// Font identifier.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::string"
    )]
    pub font: Option<String>,
    /// Letter-spacing identifier.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient::string"
    )]
    pub letter_spacing: Option<String>,
}

mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;
    use std::collections::BTreeMap;

    pub(super) fn string<'de, D>(de: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(de)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    pub(super) fn string_map<'de, D>(de: D) -> Result<Option<BTreeMap<String, String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(de)? {
            Value::Object(map) => Some(
                map.into_iter()
                    .filter_map(|(k, v)| match v {
                        Value::String(s) => Some((k, s)),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => None,
        })
    }
}

/// Typed, optional-complete theme preferences.
///
/// Each field is independently optional; an absent field leaves the
/// properties it governs untouched when applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemePrefs {
    /// Color variable overrides.
    pub colors: BTreeMap<ColorVar, String>,
    /// Custom palette overrides.
    pub custom_colors: BTreeMap<PaletteColor, String>,
    /// Selected font, if any.
    pub font: Option<FontChoice>,
    /// Selected letter spacing, if any.
    pub letter_spacing: Option<LetterSpacing>,
}

impl ThemePrefs {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.custom_colors.is_empty()
            && self.font.is_none()
            && self.letter_spacing.is_none()
    }

    /// Convert to the wire shape.
    ///
    /// Empty maps are omitted, so a record with no overrides round-trips
    /// to an empty object.
    pub fn to_record(&self) -> PersistedRecord {
        let colors: BTreeMap<String, String> = self
            .colors
            .iter()
            .map(|(var, value)| (var.property().to_owned(), value.clone()))
            .collect();
        let custom_colors: BTreeMap<String, String> = self
            .custom_colors
            .iter()
            .map(|(color, value)| (color.name().to_owned(), value.clone()))
            .collect();
        PersistedRecord {
            colors: (!colors.is_empty()).then_some(colors),
            custom_colors: (!custom_colors.is_empty()).then_some(custom_colors),
            font: self.font.map(|f| f.id().to_owned()),
            letter_spacing: self.letter_spacing.map(|s| s.id().to_owned()),
        }
    }
}

impl From<&PersistedRecord> for ThemePrefs {
    /// Unknown keys and unrecognized identifiers are silently dropped.
    fn from(record: &PersistedRecord) -> Self {
        // TODO: count dropped entries so a typo in a hand-edited record can be surfaced at debug level.
        let colors = record
            .colors
            .iter()
            .flatten()
            .filter_map(|(k, v)| ColorVar::from_property(k).map(|var| (var, v.clone())))
            .collect();
        let custom_colors = record
            .custom_colors
            .iter()
            .flatten()
            .filter_map(|(k, v)| PaletteColor::from_name(k).map(|c| (c, v.clone())))
            .collect();
        Self {
            colors,
            custom_colors,
            font: record.font.as_deref().and_then(FontChoice::from_id),
            letter_spacing: record
                .letter_spacing
                .as_deref()
                .and_then(LetterSpacing::from_id),
        }
    }
}

impl From<PersistedRecord> for ThemePrefs {
    fn from(record: PersistedRecord) -> Self {
        Self::from(&record)
    }
}
