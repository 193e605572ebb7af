use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{constants, error::ConfigLoadError};

/// Top-level configuration handed to hosts at start-up.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub carousels: CarouselPresets,
}

impl Config {
    /// Guard rails that would otherwise surface as confusing runtime
    /// behaviour (a carousel that never moves, requests without a scheme).
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        self.api.validate()?;
        self.carousels.cover_arts.validate("cover_arts")?;
        self.carousels
            .representative_works
            .validate("representative_works")?;
        self.carousels
            .research_highlights
            .validate("research_highlights")?;
        Ok(())
    }
}

/// REST backend settings. Replaces the module-level API base URL the web
/// front-end read from its build environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the backend. Relative media paths are resolved against it.
    pub base_url: Url,
    /// Per-request timeout, written as a humantime string (`30s`, `1m`).
    #[serde(with = "duration_str")]
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(constants::DEFAULT_API_BASE_URL)
                .expect("default api base url parses"),
            timeout: Duration::from_secs(constants::DEFAULT_API_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.base_url.scheme() {
            "http" | "https" => {}
            _ => {
                return Err(ConfigLoadError::UnsupportedScheme(
                    self.base_url.to_string(),
                ));
            }
        }
        if self.timeout.is_zero() {
            return Err(ConfigLoadError::ZeroTimeout);
        }
        Ok(())
    }
}

/// How a carousel reacts to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MotionKind {
    /// Constant forward motion, optionally pausing while hovered.
    Auto,
    /// Pointer position steers speed and direction.
    #[default]
    HoverZone,
    /// Eases to a stop while hovered and back up on leave.
    Damped,
}

impl MotionKind {
    /// Fewest item-list copies that keep the loop seam out of view.
    pub fn min_repeat_factor(self) -> usize {
        match self {
            MotionKind::HoverZone => constants::carousel::MIN_REPEAT_REVERSIBLE,
            MotionKind::Auto | MotionKind::Damped => {
                constants::carousel::MIN_REPEAT_FORWARD
            }
        }
    }
}

/// Tunables for one carousel. Missing fields take the gallery defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselPreset {
    pub mode: MotionKind,
    /// Forward speed in px per frame.
    pub base_speed: f64,
    /// Copies of the item list laid end to end on the track.
    pub repeat_factor: usize,
    /// Only consulted in `auto` mode.
    pub pause_on_hover: bool,
    /// Fraction of the velocity gap closed per frame in `damped` mode.
    pub damping: f64,
    /// Half-width of the dead band around the centre in `hover-zone` mode.
    pub deadzone: f64,
    /// Speed multiplier at the container edge in `hover-zone` mode.
    pub zone_gain: f64,
    pub gap_px: f64,
}

impl Default for CarouselPreset {
    fn default() -> Self {
        use constants::carousel as c;
        Self {
            mode: MotionKind::HoverZone,
            base_speed: c::GALLERY_SPEED,
            repeat_factor: c::REPEAT_FACTOR,
            pause_on_hover: false,
            damping: c::DAMPING,
            deadzone: c::DEADZONE,
            zone_gain: c::ZONE_GAIN,
            gap_px: c::GALLERY_GAP_PX,
        }
    }
}

impl CarouselPreset {
    /// The eased cover-art strip.
    pub fn cover_arts() -> Self {
        use constants::carousel as c;
        Self {
            mode: MotionKind::Damped,
            base_speed: c::COVER_ART_SPEED,
            gap_px: c::COVER_ART_GAP_PX,
            ..Self::default()
        }
    }

    /// Pointer-steered gallery with no gap between cards.
    pub fn research_highlights() -> Self {
        Self {
            gap_px: 0.0,
            ..Self::default()
        }
    }

    pub fn validate(
        &self,
        preset: &'static str,
    ) -> Result<(), ConfigLoadError> {
        let fail = |message: String| {
            Err(ConfigLoadError::InvalidPreset { preset, message })
        };
        if !self.base_speed.is_finite() || self.base_speed <= 0.0 {
            return fail(format!(
                "base_speed must be a positive number, got {}",
                self.base_speed
            ));
        }
        let min_repeat = self.mode.min_repeat_factor();
        if self.repeat_factor < min_repeat {
            return fail(format!(
                "repeat_factor must be at least {min_repeat} for {:?} motion, got {}",
                self.mode, self.repeat_factor
            ));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return fail(format!(
                "damping must be in (0, 1], got {}",
                self.damping
            ));
        }
        if !(0.0..1.0).contains(&self.deadzone) {
            return fail(format!(
                "deadzone must be in [0, 1), got {}",
                self.deadzone
            ));
        }
        if !self.zone_gain.is_finite() || self.zone_gain <= 0.0 {
            return fail(format!(
                "zone_gain must be a positive number, got {}",
                self.zone_gain
            ));
        }
        if !self.gap_px.is_finite() || self.gap_px < 0.0 {
            return fail(format!(
                "gap_px must be non-negative, got {}",
                self.gap_px
            ));
        }
        Ok(())
    }
}

/// One preset per carousel on the site.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CarouselPresets {
    pub cover_arts: CarouselPreset,
    pub representative_works: CarouselPreset,
    pub research_highlights: CarouselPreset,
}

impl Default for CarouselPresets {
    fn default() -> Self {
        Self {
            cover_arts: CarouselPreset::cover_arts(),
            representative_works: CarouselPreset::default(),
            research_highlights: CarouselPreset::research_highlights(),
        }
    }
}

mod duration_str {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(
        value: &Duration,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer
            .serialize_str(&humantime::format_duration(*value).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(raw.trim()).map_err(serde::de::Error::custom)
    }
}
