//! Endpoint configuration for the viewer.
//!
//! # Design
//! - Defaults point at the public API and asset hosts.
//! - The mount element may override either base through `data-*` attributes.
//! - Every request URL is built here so callers never concatenate paths.

use crate::core::logic::LogSource;

/// Default base URL of the log API.
pub const DEFAULT_API_BASE: &str = "https://api.lincolnsmp.xyz";
/// Default base URL of the block icon host.
pub const DEFAULT_ASSETS_BASE: &str = "https://assets.lincolnsmp.xyz";
/// Mount element attribute overriding [`DEFAULT_API_BASE`].
pub const API_BASE_ATTR: &str = "data-api-base";
/// Mount element attribute overriding [`DEFAULT_ASSETS_BASE`].
pub const ASSETS_BASE_ATTR: &str = "data-assets-base";

/// Resolved endpoint bases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerConfig {
    api_base: String,
    assets_base: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            assets_base: DEFAULT_ASSETS_BASE.to_string(),
        }
    }
}

impl ViewerConfig {
    /// Build a config from optional overrides; blank values keep the defaults.
    #[must_use]
    pub fn with_overrides(api_base: Option<&str>, assets_base: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            api_base: normalize_base(api_base).unwrap_or(defaults.api_base),
            assets_base: normalize_base(assets_base).unwrap_or(defaults.assets_base),
        }
    }

    /// Base URL of the log API without a trailing slash.
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Base URL of the icon host without a trailing slash.
    #[must_use]
    pub fn assets_base(&self) -> &str {
        &self.assets_base
    }

    /// Absolute URL of the log endpoint for `source`.
    #[must_use]
    pub fn logs_url(&self, source: &LogSource) -> String {
        format!("{}{}", self.api_base, source.path())
    }

    /// Absolute URL of the PNG icon for a lowercase block slug.
    #[must_use]
    pub fn icon_url(&self, slug: &str) -> String {
        format!(
            "{}/images/{}.png",
            self.assets_base,
            urlencoding::encode(slug)
        )
    }
}

fn normalize_base(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
