//! Pointer state and per-mode velocity functions.
//!
//! Pointer events only ever write [`PointerInfo`]. The frame loop reads it
//! when computing the next velocity, so an event arriving between frames can
//! never tear a position update.

use super::types::Mode;

/// Latest pointer state over the carousel container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerInfo {
    pub hovering: bool,
    /// Horizontal offset from the container centre in [-1, 1]. `None` until
    /// the pointer has moved inside the container.
    pub relative_x: Option<f64>,
}

impl PointerInfo {
    /// Map a pointer x (relative to the container's left edge) to [-1, 1].
    /// Returns `None` for a container that has not been laid out.
    pub fn relative_offset(x: f64, container_width: f64) -> Option<f64> {
        if !container_width.is_finite()
            || container_width <= 0.0
            || !x.is_finite()
        {
            return None;
        }
        let center = container_width / 2.0;
        Some(((x - center) / center).clamp(-1.0, 1.0))
    }
}

impl Mode {
    /// Velocity (px per frame) for the next frame, given the velocity used on
    /// the previous frame.
    pub fn next_velocity(
        &self,
        current: f64,
        base_speed: f64,
        pointer: &PointerInfo,
    ) -> f64 {
        match *self {
            Mode::Auto { pause_on_hover } => {
                if pause_on_hover && pointer.hovering {
                    0.0
                } else {
                    base_speed
                }
            }
            Mode::HoverZone { deadzone, gain } => {
                if !pointer.hovering {
                    return base_speed;
                }
                // Entering without a move keeps whatever speed was running.
                let Some(offset) = pointer.relative_x else {
                    return current;
                };
                if offset.abs() < deadzone {
                    0.0
                } else {
                    base_speed * gain * offset.abs() * offset.signum()
                }
            }
            Mode::Damped { damping, epsilon } => {
                let target = if pointer.hovering { 0.0 } else { base_speed };
                let next = current + (target - current) * damping;
                if pointer.hovering && next.abs() < epsilon {
                    0.0
                } else {
                    next
                }
            }
        }
    }
}
