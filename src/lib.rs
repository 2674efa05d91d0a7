//! Client-side slideshow for a web media gallery.
//!
//! The engine in [`slideshow`] is platform independent and drives any
//! [`slideshow::SlideshowHost`]. The browser host and the page listeners
//! live in `web` and only build for `wasm32`.

pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod slideshow;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::SlideshowConfig;
pub use error::SlideshowError;
pub use models::{MediaItem, MediaKind, SlideshowInput};
