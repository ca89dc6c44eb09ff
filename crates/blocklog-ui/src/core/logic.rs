//! Pure UI helpers extracted from components for non-wasm testing.

use crate::core::error::LoadError;
use chrono::DateTime;

/// Query parameter that selects the log set to load.
pub const SELECTOR_PARAM: &str = "d";
/// Selector value that maps to the fixed diagnostic endpoint.
pub const TESTING_SELECTOR: &str = "testing";

/// Which remote log set the page loads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogSource {
    /// Fixed diagnostic endpoint.
    Testing,
    /// Logs for a single identifier.
    Player(String),
}

impl LogSource {
    /// Map the raw query selector onto a source.
    ///
    /// # Errors
    /// Returns [`LoadError::MissingSelector`] when the selector is absent or blank.
    pub fn from_selector(selector: Option<&str>) -> Result<Self, LoadError> {
        match selector.map(str::trim) {
            None | Some("") => Err(LoadError::MissingSelector),
            Some(TESTING_SELECTOR) => Ok(Self::Testing),
            Some(id) => Ok(Self::Player(id.to_string())),
        }
    }

    /// API path (relative to the API base) for the source.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Testing => "/api/testing".to_string(),
            Self::Player(id) => format!("/api/logs/{}", urlencoding::encode(id)),
        }
    }
}

/// Turn `oak_planks` into `Oak Planks`.
#[must_use]
pub fn format_block_name(block: &str) -> String {
    if block.is_empty() {
        return String::new();
    }
    block
        .to_lowercase()
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Lowercase slug used to key and fetch block icons.
#[must_use]
pub fn block_slug(block: &str) -> String {
    block.to_lowercase()
}

/// Coordinate line shown on each card.
#[must_use]
pub fn format_coordinates(x: i64, y: i64, z: i64) -> String {
    format!("X: {x}, Y: {y}, Z: {z}")
}

/// UTC rendering of an epoch-millisecond timestamp, used when the browser
/// cannot produce a localized string.
#[must_use]
pub fn format_timestamp_utc(epoch_ms: i64) -> String {
    DateTime::from_timestamp_millis(epoch_ms).map_or_else(
        || "Invalid Date".to_string(),
        |at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_names_are_title_cased() {
        assert_eq!(format_block_name("oak_planks"), "Oak Planks");
        assert_eq!(format_block_name("stone"), "Stone");
        assert_eq!(format_block_name(""), "");
        assert_eq!(format_block_name("POLISHED_DEEPSLATE_STAIRS"), "Polished Deepslate Stairs");
    }

    #[test]
    fn block_names_keep_empty_segments() {
        assert_eq!(format_block_name("a__b"), "A  B");
    }

    #[test]
    fn testing_selector_targets_fixed_endpoint() {
        let source = LogSource::from_selector(Some("testing")).expect("selector present");
        assert_eq!(source, LogSource::Testing);
        assert_eq!(source.path(), "/api/testing");
    }

    #[test]
    fn other_selectors_are_interpolated() {
        let source = LogSource::from_selector(Some("abc123")).expect("selector present");
        assert_eq!(source.path(), "/api/logs/abc123");

        let spaced = LogSource::from_selector(Some("a b/c")).expect("selector present");
        assert_eq!(spaced.path(), "/api/logs/a%20b%2Fc");
    }

    #[test]
    fn missing_selector_is_rejected() {
        assert_eq!(
            LogSource::from_selector(None),
            Err(LoadError::MissingSelector)
        );
        assert_eq!(
            LogSource::from_selector(Some("  ")),
            Err(LoadError::MissingSelector)
        );
    }

    #[test]
    fn slugs_are_lowercase() {
        assert_eq!(block_slug("OAK_Planks"), "oak_planks");
    }

    #[test]
    fn coordinates_render_all_axes() {
        assert_eq!(format_coordinates(10, -64, 3), "X: 10, Y: -64, Z: 3");
    }

    #[test]
    fn utc_timestamps_render() {
        assert_eq!(format_timestamp_utc(0), "1970-01-01 00:00:00 UTC");
        assert_eq!(format_timestamp_utc(i64::MAX), "Invalid Date");
    }
}
