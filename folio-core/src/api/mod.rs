//! REST collaborator that supplies carousel items.

pub mod client;

pub use client::ContentClient;
