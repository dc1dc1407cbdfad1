// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared test doubles for Naboo theme crates.
#![forbid(unsafe_code)]
//!
//! # Modules
//!
//! - [`config`] - In-memory config store fake with failure injection
//! - [`clipboard`] - Clipboard fake that records every write

pub mod clipboard;
pub mod config;

pub use clipboard::RecordingClipboard;
pub use config::InMemoryConfigStore;
