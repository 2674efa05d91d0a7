//! The components module contains all shared components for the slideshow page.

mod app;
mod controls;
mod icons;
mod stage;
mod upload;

pub use app::*;
pub use controls::*;
pub use icons::*;
pub use stage::*;
pub use upload::*;
