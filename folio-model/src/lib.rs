//! Core data model definitions shared across Folio crates.
#![allow(missing_docs)]

pub mod content;
pub mod content_kind;
pub mod error;
pub mod ids;
pub mod item;

pub use content::{CoverArt, RepresentativeWork, ResearchHighlight};
pub use content_kind::ContentKind;
pub use error::{ModelError, Result as ModelResult};
pub use ids::ContentId;
pub use item::CarouselItem;
