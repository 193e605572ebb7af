//! Configuration library for Folio hosts.
//!
//! The configuration is assembled once at start-up from defaults, an optional
//! `.env` file, a TOML/JSON file and a handful of environment overrides, and
//! is then passed by reference to the collaborators that need it (the REST
//! client, the carousel presets). Nothing in this crate keeps global state.
#![allow(missing_docs)]

pub mod constants;
pub mod error;
pub mod loader;
pub mod models;

pub use error::ConfigLoadError;
pub use loader::{ConfigLoad, ConfigLoader, ConfigSource};
pub use models::{
    ApiConfig, CarouselPreset, CarouselPresets, Config, MotionKind,
};
