//! Shared types for the carousel module

use folio_config::{CarouselPreset, MotionKind};
use folio_model::ContentKind;

use crate::{constants::motion, error::CarouselError};

/// Key identifying a carousel on a page. Hosts that keep several carousels
/// alive use it to scope per-instance state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselKey {
    CoverArts,
    RepresentativeWorks,
    ResearchHighlights,
}

impl From<ContentKind> for CarouselKey {
    fn from(kind: ContentKind) -> Self {
        match kind {
            ContentKind::CoverArts => CarouselKey::CoverArts,
            ContentKind::RepresentativeWorks => {
                CarouselKey::RepresentativeWorks
            }
            ContentKind::ResearchHighlights => CarouselKey::ResearchHighlights,
        }
    }
}

/// Interaction mode. A carousel runs exactly one for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Constant forward speed. With `pause_on_hover` the speed drops to zero
    /// while hovered and comes back on leave, without easing.
    Auto { pause_on_hover: bool },
    /// The pointer's offset from the container centre, in [-1, 1], steers
    /// speed and direction. Offsets inside `deadzone` stop the track;
    /// elsewhere speed is `base * gain * |offset|` in the offset's direction.
    HoverZone { deadzone: f64, gain: f64 },
    /// Eases toward zero while hovered and back to the base speed on leave,
    /// closing `damping` of the remaining gap each frame. Hovered speeds
    /// below `epsilon` snap to exactly zero.
    Damped { damping: f64, epsilon: f64 },
}

impl Mode {
    pub const fn auto(pause_on_hover: bool) -> Self {
        Mode::Auto { pause_on_hover }
    }

    pub const fn hover_zone() -> Self {
        Mode::HoverZone {
            deadzone: motion::DEADZONE,
            gain: motion::ZONE_GAIN,
        }
    }

    pub const fn damped() -> Self {
        Mode::Damped {
            damping: motion::DAMPING,
            epsilon: motion::SNAP_EPSILON,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Auto { .. } => "auto",
            Mode::HoverZone { .. } => "hover-zone",
            Mode::Damped { .. } => "damped",
        }
    }

    /// Whether pointer input can drive the track backwards.
    pub fn reverses(&self) -> bool {
        matches!(self, Mode::HoverZone { .. })
    }

    /// Fewest item-list copies that keep the seam out of view.
    pub fn min_repeat_factor(&self) -> usize {
        if self.reverses() {
            motion::MIN_REPEAT_REVERSIBLE
        } else {
            motion::MIN_REPEAT_FORWARD
        }
    }

    fn validate(&self) -> Result<(), CarouselError> {
        match *self {
            Mode::Auto { .. } => Ok(()),
            Mode::HoverZone { deadzone, gain } => {
                if !(0.0..1.0).contains(&deadzone) {
                    return Err(CarouselError::InvalidDeadzone(deadzone));
                }
                if !gain.is_finite() || gain <= 0.0 {
                    return Err(CarouselError::InvalidGain(gain));
                }
                Ok(())
            }
            Mode::Damped { damping, epsilon } => {
                if !(damping > 0.0 && damping <= 1.0) {
                    return Err(CarouselError::InvalidDamping(damping));
                }
                if !epsilon.is_finite() || epsilon <= 0.0 {
                    return Err(CarouselError::InvalidEpsilon(epsilon));
                }
                Ok(())
            }
        }
    }
}

/// Construction parameters for a carousel instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    /// Forward speed in px per frame.
    pub base_speed: f64,
    /// Copies of the item list on the track.
    pub repeat_factor: usize,
    pub mode: Mode,
}

impl CarouselConfig {
    /// Config with the default repeat factor (3), valid for every mode.
    pub const fn new(base_speed: f64, mode: Mode) -> Self {
        Self {
            base_speed,
            repeat_factor: motion::REPEAT_FACTOR,
            mode,
        }
    }

    pub const fn with_repeat_factor(mut self, repeat_factor: usize) -> Self {
        self.repeat_factor = repeat_factor;
        self
    }

    pub fn validate(&self) -> Result<(), CarouselError> {
        if !self.base_speed.is_finite() || self.base_speed <= 0.0 {
            return Err(CarouselError::InvalidSpeed(self.base_speed));
        }
        let min = self.mode.min_repeat_factor();
        if self.repeat_factor < min {
            return Err(CarouselError::RepeatFactorTooLow {
                got: self.repeat_factor,
                min,
                mode: self.mode.name(),
            });
        }
        self.mode.validate()
    }
}

impl TryFrom<&CarouselPreset> for CarouselConfig {
    type Error = CarouselError;

    fn try_from(preset: &CarouselPreset) -> Result<Self, Self::Error> {
        let mode = match preset.mode {
            MotionKind::Auto => Mode::Auto {
                pause_on_hover: preset.pause_on_hover,
            },
            MotionKind::HoverZone => Mode::HoverZone {
                deadzone: preset.deadzone,
                gain: preset.zone_gain,
            },
            MotionKind::Damped => Mode::Damped {
                damping: preset.damping,
                epsilon: motion::SNAP_EPSILON,
            },
        };
        let config = CarouselConfig::new(preset.base_speed, mode)
            .with_repeat_factor(preset.repeat_factor);
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directional_mode_needs_three_copies() {
        let config = CarouselConfig::new(1.0, Mode::hover_zone())
            .with_repeat_factor(2);
        assert_eq!(
            config.validate(),
            Err(CarouselError::RepeatFactorTooLow {
                got: 2,
                min: 3,
                mode: "hover-zone",
            })
        );

        for mode in [Mode::auto(false), Mode::damped()] {
            let forward = CarouselConfig::new(1.0, mode).with_repeat_factor(2);
            assert!(forward.validate().is_ok(), "{mode:?}");
        }
    }

    #[test]
    fn presets_that_load_always_convert() {
        for kind in [MotionKind::Auto, MotionKind::HoverZone, MotionKind::Damped]
        {
            let preset = CarouselPreset {
                mode: kind,
                repeat_factor: kind.min_repeat_factor(),
                ..CarouselPreset::default()
            };
            preset.validate("gallery").expect("preset loads");
            let config = CarouselConfig::try_from(&preset).expect("converts");
            assert_eq!(
                config.mode.min_repeat_factor(),
                kind.min_repeat_factor()
            );
        }
    }

    #[test]
    fn rejects_non_positive_speed() {
        for speed in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = CarouselConfig::new(speed, Mode::auto(false));
            assert!(matches!(
                config.validate(),
                Err(CarouselError::InvalidSpeed(_))
            ));
        }
    }

    #[test]
    fn rejects_out_of_range_mode_parameters() {
        let damped = CarouselConfig::new(
            1.0,
            Mode::Damped {
                damping: 0.0,
                epsilon: 0.001,
            },
        );
        assert_eq!(damped.validate(), Err(CarouselError::InvalidDamping(0.0)));

        let zone = CarouselConfig::new(
            1.0,
            Mode::HoverZone {
                deadzone: 1.0,
                gain: 3.0,
            },
        );
        assert_eq!(zone.validate(), Err(CarouselError::InvalidDeadzone(1.0)));
    }

    #[test]
    fn preset_conversion_carries_mode_parameters() {
        let preset = CarouselPreset::cover_arts();
        let config = CarouselConfig::try_from(&preset).unwrap();
        assert_eq!(config.base_speed, 1.7);
        assert_eq!(config.repeat_factor, 3);
        assert_eq!(
            config.mode,
            Mode::Damped {
                damping: 0.05,
                epsilon: 0.001,
            }
        );
    }
}
