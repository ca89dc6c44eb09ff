//! Display preference (dark/light) and its persistence boundary.

use std::collections::HashMap;
use thiserror::Error;

/// Storage key holding `"true"` when dark mode is enabled.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    #[default]
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Value written under [`DARK_MODE_KEY`].
    #[must_use]
    pub const fn stored_value(self) -> &'static str {
        match self {
            Self::Light => "false",
            Self::Dark => "true",
        }
    }

    /// Parse a stored value; anything unrecognised yields `None`.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value.trim() {
            "true" => Some(Self::Dark),
            "false" => Some(Self::Light),
            _ => None,
        }
    }
}

/// Failure writing a preference.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("preference write failed for {key}: {detail}")]
pub struct PreferenceError {
    /// Key that could not be written.
    pub key: String,
    /// Backend-provided detail.
    pub detail: String,
}

/// Key-value store that preferences are persisted through.
pub trait PreferenceStore {
    /// Read a raw value.
    fn read(&self, key: &str) -> Option<String>;

    /// Write a raw value.
    ///
    /// # Errors
    /// Returns [`PreferenceError`] when the backend rejects the write.
    fn write(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory store for tests and non-browser hosts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryPreferenceStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Restore the persisted mode, defaulting to dark.
#[must_use]
pub fn load_theme(store: &impl PreferenceStore) -> ThemeMode {
    store
        .read(DARK_MODE_KEY)
        .and_then(|value| ThemeMode::from_stored(&value))
        .unwrap_or_default()
}

/// Flip the mode and persist the new value.
///
/// The flip always happens; the returned error only reports the failed write.
///
/// # Errors
/// Returns [`PreferenceError`] when persisting the new value fails.
pub fn toggle_theme(
    mode: &mut ThemeMode,
    store: &mut impl PreferenceStore,
) -> Result<(), PreferenceError> {
    *mode = mode.toggled();
    store.write(DARK_MODE_KEY, mode.stored_value())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&mut self, key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError {
                key: key.to_string(),
                detail: "quota exceeded".into(),
            })
        }
    }

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn toggling_twice_restores_and_persists() {
        let mut store = MemoryPreferenceStore::default();
        let mut mode = ThemeMode::Dark;

        toggle_theme(&mut mode, &mut store).expect("write succeeds");
        assert_eq!(mode, ThemeMode::Light);
        assert_eq!(store.read(DARK_MODE_KEY).as_deref(), Some("false"));

        toggle_theme(&mut mode, &mut store).expect("write succeeds");
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(store.read(DARK_MODE_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn load_defaults_to_dark() {
        let mut store = MemoryPreferenceStore::default();
        assert_eq!(load_theme(&store), ThemeMode::Dark);
        store.write(DARK_MODE_KEY, "garbage").expect("write succeeds");
        assert_eq!(load_theme(&store), ThemeMode::Dark);
        store.write(DARK_MODE_KEY, "false").expect("write succeeds");
        assert_eq!(load_theme(&store), ThemeMode::Light);
    }

    #[test]
    fn failed_writes_still_flip() {
        let mut mode = ThemeMode::Light;
        let err = toggle_theme(&mut mode, &mut FailingStore).expect_err("write fails");
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(err.key, DARK_MODE_KEY);
    }
}
