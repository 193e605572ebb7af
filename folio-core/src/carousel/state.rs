//! Scroll state and the wrap rule.

use super::{motion::PointerInfo, types::Mode};

/// Position and velocity of one mounted carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    /// Offset into the current lap, in px. Kept in `[0, pass_width)` after
    /// every frame.
    pub position: f64,
    /// Velocity applied on the last frame, in px per frame. Negative values
    /// move the track backwards.
    pub velocity: f64,
    pub mode: Mode,
}

impl ScrollState {
    /// Fresh state at the start of the first lap, already moving at the base
    /// speed.
    pub fn new(mode: Mode, base_speed: f64) -> Self {
        Self {
            position: 0.0,
            velocity: base_speed,
            mode,
        }
    }

    /// One frame: velocity from the mode, integrate, wrap. Returns the new
    /// position.
    pub fn advance(
        &mut self,
        base_speed: f64,
        pointer: &PointerInfo,
        pass_width: f64,
    ) -> f64 {
        self.velocity =
            self.mode.next_velocity(self.velocity, base_speed, pointer);
        self.position =
            wrap_position(self.position + self.velocity, pass_width);
        self.position
    }
}

/// Bring `position` back into `[0, pass_width)`.
///
/// A single-lap step behaves like subtracting or adding one pass width. The
/// Euclidean remainder also covers positions that are several laps out,
/// which happens when the pass width shrinks under a remeasure.
pub fn wrap_position(position: f64, pass_width: f64) -> f64 {
    if !pass_width.is_finite() || pass_width <= 0.0 || !position.is_finite() {
        return 0.0;
    }
    if (0.0..pass_width).contains(&position) {
        return position;
    }
    let wrapped = position.rem_euclid(pass_width);
    // rem_euclid can round up to the modulus for tiny negative inputs.
    if wrapped >= pass_width { 0.0 } else { wrapped }
}
