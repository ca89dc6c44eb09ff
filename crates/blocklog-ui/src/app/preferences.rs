//! Persistence and environment helpers for the app shell.

use crate::core::config::{API_BASE_ATTR, ASSETS_BASE_ATTR, ViewerConfig};
use crate::core::theme::{PreferenceError, PreferenceStore, ThemeMode, load_theme};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::{document, window};

pub(crate) const ROOT_ID: &str = "root";

/// Browser `localStorage`, written as raw strings.
pub(crate) struct LocalPreferenceStore;

impl PreferenceStore for LocalPreferenceStore {
    fn read(&self, key: &str) -> Option<String> {
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|err| PreferenceError {
                key: key.to_string(),
                detail: format!("{err:?}"),
            })
    }
}

pub(crate) fn load_theme_mode() -> ThemeMode {
    load_theme(&LocalPreferenceStore)
}

pub(crate) fn log_storage_error(err: &PreferenceError) {
    console::error!("storage operation failed", err.to_string());
}

/// Endpoint config with overrides from the mount element's `data-*` attributes.
pub(crate) fn load_config() -> ViewerConfig {
    let root = document().get_element_by_id(ROOT_ID);
    let attr = |name: &str| root.as_ref().and_then(|el| el.get_attribute(name));
    ViewerConfig::with_overrides(
        attr(API_BASE_ATTR).as_deref(),
        attr(ASSETS_BASE_ATTR).as_deref(),
    )
}

pub(crate) fn apply_theme(theme: ThemeMode) {
    if let Some(document) = window().document() {
        if let Some(body) = document.body() {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
    }
}
