// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Port trait for exporting text to the system clipboard without depending
//! on a specific platform API.

/// Minimal clipboard port; implementations are best-effort and silently
/// drop the write when the clipboard is unavailable.
pub trait ClipboardPort {
    /// Replace the clipboard contents with `text`.
    fn write_text(&self, text: &str);
}
