//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the page header.
pub const APP_NAME: &str = "vidtree";

// =============================================================================
// Network Configuration
// =============================================================================

/// Backend endpoint paths (relative to [`ApiConfig::base_url`]).
pub mod endpoints {
    /// Library listing, optionally filtered with `?search=`.
    pub const TREE: &str = "/api/tree";
    /// Media byte stream for `?path=`.
    pub const STREAM: &str = "/api/stream";
    /// Rename (POST, JSON body).
    pub const RENAME: &str = "/api/rename";
}

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: u32 = 10000;

/// Runtime API location.
///
/// The default targets the serving origin, which is how the backend ships
/// the page. A non-empty base (e.g. `http://127.0.0.1:9898`) is prepended to
/// every endpoint path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Full URL for an endpoint path.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

// =============================================================================
// Playback Configuration
// =============================================================================

/// Keyboard seek steps in seconds.
pub mod seek {
    /// ArrowLeft / ArrowRight.
    pub const ARROW_STEP_SECS: f64 = 5.0;
    /// z / x.
    pub const SHORT_STEP_SECS: f64 = 3.0;
}

/// Hover preview settings.
pub mod preview {
    /// Minimum real time between two preview seeks.
    pub const SEEK_THROTTLE_MS: f64 = 60.0;
    /// Gap kept between the preview canvas and the player edge.
    pub const MARGIN_PX: f64 = 6.0;
}

// =============================================================================
// Library Tree Configuration
// =============================================================================

pub mod tree {
    /// Delay before scrolling a selected row into view, so the folder
    /// expand animation has settled.
    pub const SCROLL_SETTLE_MS: u32 = 120;
    /// Inline message shown when the listing request fails.
    pub const LOAD_ERROR_TEXT: &str = "Failed to load library";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// - `Bootstrap` - filled glyphs (default)
/// - `Lucide` - thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// Initial volume of the active player.
pub const DEFAULT_VOLUME: f64 = 1.0;

// =============================================================================
// URL Fragment
// =============================================================================

/// Prefix accepted (and stripped) when reading older bookmark fragments.
pub const LEGACY_FRAGMENT_PREFIX: &str = "path=";

// =============================================================================
// DOM Element Ids
// =============================================================================

/// Ids of elements looked up outside the component tree.
pub mod dom_ids {
    /// Mount point for the application.
    pub const APP_ROOT: &str = "app";
    /// Rename dialog text input.
    pub const RENAME_INPUT: &str = "newName";
    /// Player container used for fullscreen.
    pub const PLAYER_WRAP: &str = "playerWrap";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_url() {
        assert_eq!(ApiConfig::default().url(endpoints::TREE), "/api/tree");
        assert_eq!(
            ApiConfig::new("http://127.0.0.1:9898/").url(endpoints::RENAME),
            "http://127.0.0.1:9898/api/rename"
        );
    }
}
