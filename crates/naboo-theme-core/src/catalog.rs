// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Compiled-in theme tables: color variables, custom palette, fonts,
//! letter spacing, and quick presets.
//!
//! Every lookup from a wire identifier is total over the closed set and
//! returns `None` for anything else; callers skip unknown entries.

/// Custom property carrying the sans-serif font stack.
pub const FONT_SANS_PROPERTY: &str = "--font-sans";
/// Custom property carrying the bold font weight.
pub const FONT_WEIGHT_BOLD_PROPERTY: &str = "--font-weight-bold";
/// Custom property carrying the global letter spacing.
pub const LETTER_SPACING_PROPERTY: &str = "--letter-spacing";

/// Themeable color custom properties exposed by the editing panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorVar {
    /// `--primary`
    Primary,
    /// `--primary-foreground`
    PrimaryForeground,
    /// `--background`
    Background,
    /// `--foreground`
    Foreground,
    /// `--border`
    Border,
    /// `--ring`
    Ring,
}

impl ColorVar {
    /// All color variables in panel display order.
    pub const ALL: [Self; 6] = [
        Self::Primary,
        Self::PrimaryForeground,
        Self::Background,
        Self::Foreground,
        Self::Border,
        Self::Ring,
    ];

    /// Custom property name, including the leading `--`.
    pub const fn property(self) -> &'static str {
        match self {
            Self::Primary => "--primary",
            Self::PrimaryForeground => "--primary-foreground",
            Self::Background => "--background",
            Self::Foreground => "--foreground",
            Self::Border => "--border",
            Self::Ring => "--ring",
        }
    }

    /// Human-readable label shown in the panel.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::PrimaryForeground => "Primary Foreground",
            Self::Background => "Background",
            Self::Foreground => "Foreground",
            Self::Border => "Border",
            Self::Ring => "Ring",
        }
    }

    /// Compiled-in default value.
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::Primary | Self::Ring => "#D3D676",
            Self::PrimaryForeground | Self::Foreground => "#212724",
            Self::Background => "#fdfdfd",
            Self::Border => "#e0e0e0",
        }
    }

    /// Resolve a custom property name (e.g. `--primary`).
    pub fn from_property(property: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.property() == property)
    }
}

/// Semantic colors of the custom palette, each backed by its own custom property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PaletteColor {
    /// "Grey"
    Grey,
    /// "Grey Light"
    GreyLight,
    /// "Info"
    Info,
    /// "Black"
    Black,
}

impl PaletteColor {
    /// All palette colors in panel display order.
    pub const ALL: [Self; 4] = [Self::Grey, Self::GreyLight, Self::Info, Self::Black];

    /// Semantic name as persisted.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Grey => "Grey",
            Self::GreyLight => "Grey Light",
            Self::Info => "Info",
            Self::Black => "Black",
        }
    }

    /// Custom property this name maps to.
    pub const fn property(self) -> &'static str {
        match self {
            Self::Grey => "--color-grey",
            Self::GreyLight => "--color-grey-light",
            Self::Info => "--color-info",
            Self::Black => "--color-black",
        }
    }

    /// Initial value shown by the panel.
    ///
    /// Never written to the style scope on reset; the property is removed
    /// instead so the stylesheet value wins.
    pub const fn default_value(self) -> &'static str {
        match self {
            Self::Grey => "#737876",
            Self::GreyLight => "#f1f1f1",
            Self::Info => "#3452bd",
            Self::Black => "#212724",
        }
    }

    /// Resolve a persisted semantic name (e.g. `Grey Light`).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Font stack plus the bold weight it requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontStyle {
    /// Value for `--font-sans`.
    pub stack: &'static str,
    /// Value for `--font-weight-bold`.
    pub bold_weight: &'static str,
}

/// Selectable font families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontChoice {
    /// Google Sans.
    #[default]
    GoogleSans,
    /// Aeonik (medium cut; bold renders at 500).
    Aeonik,
    /// TWK Lausanne.
    TwkLausanne,
}

impl FontChoice {
    /// All font choices in panel display order.
    pub const ALL: [Self; 3] = [Self::GoogleSans, Self::Aeonik, Self::TwkLausanne];

    /// Wire identifier.
    pub const fn id(self) -> &'static str {
        match self {
            Self::GoogleSans => "Google Sans",
            Self::Aeonik => "Aeonik",
            Self::TwkLausanne => "TWK Lausanne",
        }
    }

    /// Panel label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::GoogleSans => "Google Sans",
            Self::Aeonik => "Aeonik Medium",
            Self::TwkLausanne => "TWK Lausanne",
        }
    }

    /// Resolve stack and bold weight together.
    pub const fn style(self) -> FontStyle {
        match self {
            Self::GoogleSans => FontStyle {
                stack: "'Google Sans', system-ui, sans-serif",
                bold_weight: "600",
            },
            Self::Aeonik => FontStyle {
                stack: "'Aeonik Medium', 'Aeonik', system-ui, sans-serif",
                bold_weight: "500",
            },
            Self::TwkLausanne => FontStyle {
                stack: "'TWK Lausanne', system-ui, sans-serif",
                bold_weight: "600",
            },
        }
    }

    /// Resolve a wire identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.id() == id)
    }
}

/// Selectable letter-spacing steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterSpacing {
    /// `0%`
    None,
    /// `-1%`
    #[default]
    Tight,
    /// `-2%`
    Tighter,
}

impl LetterSpacing {
    /// All spacing choices in panel display order.
    pub const ALL: [Self; 3] = [Self::None, Self::Tight, Self::Tighter];

    /// Wire identifier (also the panel label).
    pub const fn id(self) -> &'static str {
        match self {
            Self::None => "0%",
            Self::Tight => "-1%",
            Self::Tighter => "-2%",
        }
    }

    /// CSS length written to `--letter-spacing`.
    pub const fn css_value(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Tight => "-0.01em",
            Self::Tighter => "-0.02em",
        }
    }

    /// Resolve a wire identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// One-click primary color pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    /// Button label.
    pub name: &'static str,
    /// Value for `--primary`.
    pub primary: &'static str,
    /// Value for `--primary-foreground`.
    pub primary_foreground: &'static str,
}

impl Preset {
    /// Color-variable writes this preset performs.
    pub const fn updates(&self) -> [(ColorVar, &'static str); 2] {
        [
            (ColorVar::Primary, self.primary),
            (ColorVar::PrimaryForeground, self.primary_foreground),
        ]
    }

    /// Look up a preset by name, ignoring ASCII case.
    pub fn find(name: &str) -> Option<&'static Self> {
        PRESETS.iter().find(|p| {
            p.name.eq_ignore_ascii_case(name)
                || p.name
                    .split_once(' ')
                    .is_some_and(|(short, _)| short.eq_ignore_ascii_case(name))
        })
    }
}

const fn preset(
    name: &'static str,
    primary: &'static str,
    primary_foreground: &'static str,
) -> Preset {
    Preset {
        name,
        primary,
        primary_foreground,
    }
}

/// Quick presets in panel display order.
pub const PRESETS: [Preset; 10] = [
    preset("Yellow (Default)", "#D3D676", "#212724"),
    preset("Lime", "#d2d65c", "#212724"),
    preset("Gold", "#F4D686", "#212724"),
    preset("Sand", "#F0D58A", "#212724"),
    preset("Spring", "#C6E278", "#212724"),
    preset("Green", "#2d7255", "#ffffff"),
    preset("Blue", "#3452bd", "#ffffff"),
    preset("Red", "#e11d48", "#ffffff"),
    preset("Purple", "#7c3aed", "#ffffff"),
    preset("Dark", "#212724", "#ffffff"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aeonik_is_the_only_font_with_medium_bold() {
        for font in FontChoice::ALL {
            let expected = if font == FontChoice::Aeonik { "500" } else { "600" };
            assert_eq!(font.style().bold_weight, expected, "{font:?}");
        }
    }

    #[test]
    fn wire_identifiers_resolve_back() {
        for var in ColorVar::ALL {
            assert_eq!(ColorVar::from_property(var.property()), Some(var));
        }
        for color in PaletteColor::ALL {
            assert_eq!(PaletteColor::from_name(color.name()), Some(color));
        }
        for font in FontChoice::ALL {
            assert_eq!(FontChoice::from_id(font.id()), Some(font));
        }
        for spacing in LetterSpacing::ALL {
            assert_eq!(LetterSpacing::from_id(spacing.id()), Some(spacing));
        }
    }

    #[test]
    fn unknown_identifiers_are_rejected() {
        assert_eq!(ColorVar::from_property("--accent"), None);
        assert_eq!(ColorVar::from_property("primary"), None);
        assert_eq!(PaletteColor::from_name("grey"), None);
        assert_eq!(FontChoice::from_id("Aeonik Medium"), None);
        assert_eq!(LetterSpacing::from_id("-3%"), None);
    }

    #[test]
    fn defaults_match_panel_initial_state() {
        assert_eq!(FontChoice::default(), FontChoice::GoogleSans);
        assert_eq!(LetterSpacing::default().css_value(), "-0.01em");
    }

    #[test]
    fn presets_resolve_by_full_or_short_name() {
        assert_eq!(Preset::find("blue").map(|p| p.primary), Some("#3452bd"));
        assert_eq!(
            Preset::find("Yellow (Default)").map(|p| p.primary),
            Some("#D3D676")
        );
        assert_eq!(Preset::find("yellow").map(|p| p.name), Some("Yellow (Default)"));
        assert!(Preset::find("magenta").is_none());
    }
}
