//! Auto-scrolling carousel engine.
//!
//! An infinitely looping horizontal marquee. The item list is laid out
//! `repeat_factor` times end to end (the track) and a scroll position is
//! advanced once per display frame, wrapping by exactly one pass width so the
//! duplicated copies hide the seam. Pointer interaction is folded into a
//! per-mode velocity function (see [`Mode`]).
//!
//! Module map:
//! - `types`: construction parameters and modes
//! - `motion`: pointer state and the per-mode velocity functions
//! - `state`: scroll position/velocity and the wrap rule
//! - `metrics`: pass width measurement from host layout reports
//! - `track`: slot layout of the repeated item list
//! - `frame`: the frame scheduler seam and a deterministic scheduler
//! - `render`: cells handed back to the host
//! - `engine`: lifecycle, event handling and the frame loop

pub mod engine;
pub mod frame;
pub mod metrics;
pub mod motion;
pub mod render;
pub mod state;
pub mod track;
pub mod types;

pub use engine::{CarouselEngine, Phase};
pub use frame::{FrameHandle, FrameScheduler, ManualScheduler};
pub use metrics::{Layout, PassMetrics};
pub use motion::PointerInfo;
pub use render::{Cell, CellKey, TrackView};
pub use state::{ScrollState, wrap_position};
pub use track::Track;
pub use types::{CarouselConfig, CarouselKey, Mode};
