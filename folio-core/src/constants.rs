//! Carousel motion constants.
//!
//! Tunables shared with presets live in `folio_config::constants::carousel`
//! and are re-exported here so engine code has a single import path.

pub mod motion {
    pub use folio_config::constants::carousel::{
        DAMPING, DEADZONE, MIN_REPEAT_FORWARD, MIN_REPEAT_REVERSIBLE,
        REPEAT_FACTOR, ZONE_GAIN,
    };

    /// While hovered in damped mode, speeds below this snap to zero.
    pub const SNAP_EPSILON: f64 = 0.001;
}
