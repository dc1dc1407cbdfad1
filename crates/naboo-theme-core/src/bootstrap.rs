// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Pre-paint bootstrap: apply persisted preferences before the first frame.
//!
//! [`pre_paint`] runs against any [`PreferencePort`]. Browsers cannot block
//! first paint on a wasm module, so [`inline_script`] renders the same
//! resolution as a classic script for the document `<head>`.

use crate::catalog::{
    ColorVar, FontChoice, LetterSpacing, PaletteColor, FONT_SANS_PROPERTY,
    FONT_WEIGHT_BOLD_PROPERTY, LETTER_SPACING_PROPERTY,
};
use crate::config_port::PreferencePort;
use crate::prefs::PREFS_KEY;
use crate::style::{StyleApplicator, StyleScope};
use serde_json::json;
use tracing::debug;

/// Load the persisted record and apply it to the document.
///
/// Runs synchronously and never fails: a missing, unreadable, or malformed
/// record leaves the document at its stylesheet defaults. Returns whether a
/// record was applied.
pub fn pre_paint<P, S>(prefs: &P, applicator: &StyleApplicator<S>) -> bool
where
    P: PreferencePort + ?Sized,
    S: StyleScope,
{
    let Some(record) = prefs.load_prefs() else {
        debug!("no theme preferences to apply");
        return false;
    };
    applicator.apply_all(&record);
    debug!(
        colors = record.colors.len(),
        custom_colors = record.custom_colors.len(),
        "applied theme preferences before paint"
    );
    true
}

/// Lookup tables the inline script resolves persisted identifiers against.
///
/// Rendered from the catalog so the script and [`compute_style_mutations`]
/// share a single source of truth.
///
/// [`compute_style_mutations`]: crate::style::compute_style_mutations
pub fn script_table() -> serde_json::Value {
    let palette: serde_json::Map<String, serde_json::Value> = PaletteColor::ALL
        .into_iter()
        .map(|c| (c.name().to_owned(), c.property().into()))
        .collect();
    let fonts: serde_json::Map<String, serde_json::Value> = FontChoice::ALL
        .into_iter()
        .map(|f| {
            let style = f.style();
            (f.id().to_owned(), json!([style.stack, style.bold_weight]))
        })
        .collect();
    let spacing: serde_json::Map<String, serde_json::Value> = LetterSpacing::ALL
        .into_iter()
        .map(|s| (s.id().to_owned(), s.css_value().into()))
        .collect();
    json!({
        "key": PREFS_KEY,
        "colors": ColorVar::ALL.map(ColorVar::property),
        "palette": palette,
        "fonts": fonts,
        "spacing": spacing,
        "fontSans": FONT_SANS_PROPERTY,
        "fontWeightBold": FONT_WEIGHT_BOLD_PROPERTY,
        "letterSpacing": LETTER_SPACING_PROPERTY,
    })
}

const SCRIPT_BODY: &str = r#";var r=JSON.parse(localStorage.getItem(t.key)||"null");if(!r||typeof r!=="object")return;var s=document.documentElement.style,h=function(o,k){return Object.prototype.hasOwnProperty.call(o,k)},str=function(v){return typeof v==="string"},k;if(r.colors&&typeof r.colors==="object")for(k in r.colors)if(h(r.colors,k)&&t.colors.indexOf(k)>=0&&str(r.colors[k]))s.setProperty(k,r.colors[k]);if(r.customColors&&typeof r.customColors==="object")for(k in r.customColors)if(h(r.customColors,k)&&h(t.palette,k)&&str(r.customColors[k]))s.setProperty(t.palette[k],r.customColors[k]);if(str(r.font)&&h(t.fonts,r.font)){s.setProperty(t.fontSans,t.fonts[r.font][0]);s.setProperty(t.fontWeightBold,t.fonts[r.font][1])}if(str(r.letterSpacing)&&h(t.spacing,r.letterSpacing))s.setProperty(t.letterSpacing,t.spacing[r.letterSpacing])}catch(e){}})();"#;

/// Classic inline script performing the pre-paint bootstrap.
///
/// Embed it in a plain `<script>` (no `type="module"`, `defer`, or `async`)
/// in `<head>` so the browser runs it before the first paint. Any failure
/// is swallowed and leaves the stylesheet defaults in place.
pub fn inline_script() -> String {
    // `<` is escaped so a stored value can never close the script element.
    let table = script_table().to_string().replace('<', "\\u003c");
    format!("(function(){{try{{var t={table}{SCRIPT_BODY}")
}
