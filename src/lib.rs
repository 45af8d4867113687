// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::BufferError)
    clippy::module_name_repetitions
)]

//! # Scrub
//!
//! A minimal full-screen terminal editor that can only move the cursor and
//! delete bytes.
//!
//! Scrub loads a whole file into memory, lets you walk it with the arrow
//! keys and remove bytes with Backspace, and writes the result back over the
//! original file when you press Esc.
//!
//! ## Architecture
//!
//! Scrub uses The Elm Architecture (TEA) pattern:
//! - **Model**: Session state
//! - **Message**: Key-driven actions
//! - **Update**: State transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main event loop and session state
//! - [`editor`]: Text buffer, line index, cursor and backing file
//! - [`ui`]: Viewport and terminal rendering
//! - [`config`]: Saved default flags

pub mod app;
pub mod config;
pub mod editor;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{BackingFile, Cursor, TextBuffer};
    pub use crate::ui::viewport::Viewport;
}
