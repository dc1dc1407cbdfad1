// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Clipboard fake that records writes.

use naboo_theme_core::clipboard_port::ClipboardPort;
use std::sync::{Arc, Mutex};

/// Records every clipboard write; clones share the same log.
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl RecordingClipboard {
    /// Create an empty clipboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes, oldest first.
    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Most recent write.
    pub fn last(&self) -> Option<String> {
        self.writes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }
}

impl ClipboardPort for RecordingClipboard {
    fn write_text(&self, text: &str) {
        self.writes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(text.to_owned());
    }
}
