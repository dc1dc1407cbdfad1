// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Naboo theme CLI
//!
//! Inspects and edits the persisted theme record through the same editor the
//! browser panel uses, so every edit persists a full snapshot.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use naboo_theme_core::{
    inline_script, ColorVar, FontChoice, InlineStyle, LetterSpacing, PaletteColor, PaletteEditor,
    PreferenceStore, Preset, StyleApplicator, PRESETS,
};
use naboo_theme_fs::FsConfigStore;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect and edit Naboo theme preferences")]
struct Args {
    /// Directory holding the preference file (defaults to the platform config dir)
    #[arg(long, env = "NABOO_CONFIG_DIR", global = true)]
    config_dir: Option<PathBuf>,
    /// Command to execute
    #[command(subcommand)]
    cmd: Command,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Print the persisted record (`{}` when none)
    Show,
    /// Set a color variable, e.g. `primary '#2d7255'`
    SetColor {
        /// Variable name, with or without the leading `--`
        #[arg(allow_hyphen_values = true)]
        var: String,
        /// Color value
        value: String,
    },
    /// Set a custom palette color, e.g. `'Grey Light' '#eeeeee'`
    SetPalette {
        /// Semantic palette name
        name: String,
        /// Color value
        value: String,
    },
    /// Select the font family
    Font {
        /// Google Sans, Aeonik, or TWK Lausanne
        name: String,
    },
    /// Select the letter spacing
    Spacing {
        /// 0%, -1%, or -2%
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Apply a quick preset by name
    Preset {
        /// Preset name, e.g. Blue
        name: String,
    },
    /// List quick presets
    Presets,
    /// Drop the persisted record
    Reset,
    /// Print the export JSON the panel copies to the clipboard
    Export,
    /// Print the resulting `:root` stylesheet
    Css,
    /// Print the inline `<head>` script that applies the record before first paint
    BootstrapScript,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let raw = match &args.config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    }
    .context("opening config directory")?;
    debug!(base = %raw.base().display(), "using config directory");

    let store = PreferenceStore::new(raw);
    let stdout = io::stdout();
    run(args.cmd, &store, &mut stdout.lock())
}

fn run<W: Write>(
    cmd: Command,
    store: &PreferenceStore<FsConfigStore>,
    out: &mut W,
) -> Result<()> {
    if let Command::Show = cmd {
        let record = store.load().map(|p| p.to_record()).unwrap_or_default();
        writeln!(out, "{}", serde_json::to_string_pretty(&record)?)?;
        return Ok(());
    }
    if let Command::Presets = cmd {
        writeln!(out, "{}", presets_table())?;
        return Ok(());
    }
    if let Command::BootstrapScript = cmd {
        writeln!(out, "<script>{}</script>", inline_script())?;
        return Ok(());
    }

    let document = InlineStyle::with_defaults();
    let mut editor = PaletteEditor::mount(store, StyleApplicator::new(&document));
    match cmd {
        Command::SetColor { var, value } => {
            let property = if var.starts_with("--") {
                var
            } else {
                format!("--{var}")
            };
            let var = ColorVar::from_property(&property).ok_or_else(|| {
                unknown("color variable", &property, ColorVar::ALL.map(ColorVar::property))
            })?;
            editor.set_color(var, &value);
        }
        Command::SetPalette { name, value } => {
            let color = find_ignore_case(&PaletteColor::ALL, PaletteColor::name, &name)
                .ok_or_else(|| {
                    unknown("palette color", &name, PaletteColor::ALL.map(PaletteColor::name))
                })?;
            editor.set_custom_color(color, &value);
        }
        Command::Font { name } => {
            let font = find_ignore_case(&FontChoice::ALL, FontChoice::id, &name)
                .ok_or_else(|| unknown("font", &name, FontChoice::ALL.map(FontChoice::id)))?;
            editor.select_font(font);
        }
        Command::Spacing { value } => {
            let spacing = LetterSpacing::from_id(&value).ok_or_else(|| {
                unknown("letter spacing", &value, LetterSpacing::ALL.map(LetterSpacing::id))
            })?;
            editor.select_letter_spacing(spacing);
        }
        Command::Preset { name } => {
            let preset = Preset::find(&name)
                .ok_or_else(|| unknown("preset", &name, PRESETS.map(|p| p.name)))?;
            editor.apply_preset(preset);
        }
        Command::Reset => editor.reset(),
        Command::Export => writeln!(out, "{}", editor.export_json()?)?,
        Command::Css => write!(out, "{}", document.to_css())?,
        Command::Show | Command::Presets | Command::BootstrapScript => {}
    }
    Ok(())
}

fn find_ignore_case<T: Copy>(all: &[T], id: fn(T) -> &'static str, name: &str) -> Option<T> {
    all.iter().copied().find(|v| id(*v).eq_ignore_ascii_case(name))
}

fn unknown<const N: usize>(kind: &str, got: &str, expected: [&str; N]) -> anyhow::Error {
    anyhow!("unknown {kind} `{got}` (expected one of: {})", expected.join(", "))
}

fn presets_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(["Preset", "--primary", "--primary-foreground"]);
    for preset in &PRESETS {
        table.add_row([preset.name, preset.primary, preset.primary_foreground]);
    }
    table
}
