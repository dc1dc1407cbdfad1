// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! web-sys backed implementations of the core ports.

use naboo_theme_core::clipboard_port::ClipboardPort;
use naboo_theme_core::config::{ConfigError, ConfigStore};
use naboo_theme_core::style::StyleScope;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, HtmlElement, Storage};

fn js_error(context: &str, err: &JsValue) -> ConfigError {
    ConfigError::Other(format!("{context}: {err:?}"))
}

/// `window.localStorage` as a raw config store.
///
/// When storage is blocked (private browsing, sandboxed iframe) every
/// operation fails with [`ConfigError::Other`]; the preference store turns
/// that into a no-op.
pub struct LocalStorageStore {
    storage: Option<Storage>,
}

impl LocalStorageStore {
    /// Bind to the current window's `localStorage`, if reachable.
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, ConfigError> {
        self.storage
            .as_ref()
            .ok_or_else(|| ConfigError::Other("localStorage unavailable".into()))
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for LocalStorageStore {
    fn load_raw(&self, key: &str) -> Result<Vec<u8>, ConfigError> {
        match self.storage()?.get_item(key) {
            Ok(Some(text)) => Ok(text.into_bytes()),
            Ok(None) => Err(ConfigError::NotFound),
            Err(err) => Err(js_error("getItem", &err)),
        }
    }

    fn save_raw(&self, key: &str, data: &[u8]) -> Result<(), ConfigError> {
        let text = std::str::from_utf8(data).map_err(|e| ConfigError::Other(e.to_string()))?;
        self.storage()?
            .set_item(key, text)
            .map_err(|err| js_error("setItem", &err))
    }

    fn remove_raw(&self, key: &str) -> Result<(), ConfigError> {
        self.storage()?
            .remove_item(key)
            .map_err(|err| js_error("removeItem", &err))
    }
}

/// Inline style of `document.documentElement`.
pub struct DocumentStyleScope {
    style: Option<CssStyleDeclaration>,
}

impl DocumentStyleScope {
    /// Bind to the root element's style, if a document is present.
    pub fn new() -> Self {
        let style = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| el.style());
        Self { style }
    }
}

impl Default for DocumentStyleScope {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleScope for DocumentStyleScope {
    fn set_property(&self, property: &str, value: &str) {
        let Some(style) = &self.style else {
            return;
        };
        if let Err(err) = style.set_property(property, value) {
            warn!(property, error = ?err, "setProperty failed");
        }
    }

    fn remove_property(&self, property: &str) {
        let Some(style) = &self.style else {
            return;
        };
        if let Err(err) = style.remove_property(property) {
            warn!(property, error = ?err, "removeProperty failed");
        }
    }
}

/// `navigator.clipboard.writeText`, fire-and-forget.
///
/// Looked up reflectively so insecure contexts (no `navigator.clipboard`)
/// degrade to a silent no-op.
pub struct NavigatorClipboard;

impl ClipboardPort for NavigatorClipboard {
    fn write_text(&self, text: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let navigator: JsValue = window.navigator().into();
        let Ok(clipboard) = js_sys::Reflect::get(&navigator, &"clipboard".into()) else {
            return;
        };
        if clipboard.is_undefined() || clipboard.is_null() {
            return;
        }
        let Ok(write) = js_sys::Reflect::get(&clipboard, &"writeText".into()) else {
            return;
        };
        let Ok(write) = write.dyn_into::<js_sys::Function>() else {
            return;
        };
        // The returned promise is dropped; a rejection is not surfaced.
        if let Err(err) = write.call1(&clipboard, &JsValue::from_str(text)) {
            warn!(error = ?err, "clipboard write failed");
        }
    }
}
