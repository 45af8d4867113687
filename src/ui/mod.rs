//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Scroll offsets and the rows visible on screen
//! - the frame renderer and the status bar

pub mod viewport;

mod render;
mod status;

pub use render::render;
