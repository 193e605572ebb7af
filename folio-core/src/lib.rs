//! Folio core: the auto-scrolling carousel engine plus the small set of
//! collaborators a host needs to feed it (REST client, media URL resolution,
//! link classification).
//!
//! The engine is toolkit agnostic. A host wires three things into it: a frame
//! scheduler (its display-synced callback), layout measurements of the
//! rendered track, and pointer events. In return it gets a translation to
//! apply to the track and a list of cells to draw.
#![allow(missing_docs)]

pub mod api;
pub mod carousel;
pub mod constants;
pub mod error;
pub mod links;
pub mod media;

pub use api::ContentClient;
pub use carousel::{
    CarouselConfig, CarouselEngine, FrameHandle, FrameScheduler, Layout,
    ManualScheduler, Mode, Phase, PointerInfo,
};
pub use error::{ApiError, CarouselError, MeasureError};
pub use links::{LinkTarget, classify_link, normalize_link};
pub use media::ImageResolver;
