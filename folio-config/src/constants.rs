//! Environment variable names and compiled defaults.

/// Path to a TOML or JSON config file.
pub const CONFIG_PATH_VAR: &str = "FOLIO_CONFIG_PATH";
/// Inline JSON config.
pub const CONFIG_JSON_VAR: &str = "FOLIO_CONFIG_JSON";
/// Overrides `api.base_url`.
pub const API_URL_VAR: &str = "FOLIO_API_URL";
/// Overrides `api.timeout` (humantime, e.g. `15s`).
pub const API_TIMEOUT_VAR: &str = "FOLIO_API_TIMEOUT";

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Files probed, relative to the search root, when no explicit path is set.
pub const DEFAULT_CONFIG_CANDIDATES: &[&str] = &[
    "folio.toml",
    "folio.json",
    "config/folio.toml",
    "config/folio.json",
];

/// Carousel motion defaults shared by every preset.
pub mod carousel {
    /// Cover-art strip speed (px/frame).
    pub const COVER_ART_SPEED: f64 = 1.7;
    /// Gallery strip speed (px/frame).
    pub const GALLERY_SPEED: f64 = 1.0;
    pub const REPEAT_FACTOR: usize = 3;
    pub const DAMPING: f64 = 0.05;
    pub const DEADZONE: f64 = 0.2;
    pub const ZONE_GAIN: f64 = 3.0;
    pub const COVER_ART_GAP_PX: f64 = 32.0;
    pub const GALLERY_GAP_PX: f64 = 16.0;
    /// Minimum copies on the track when motion is strictly forward.
    pub const MIN_REPEAT_FORWARD: usize = 2;
    /// Minimum copies on the track when the pointer can reverse motion.
    pub const MIN_REPEAT_REVERSIBLE: usize = 3;
}
