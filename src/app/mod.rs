//! Editing session state and main event loop.
//!
//! This module follows The Elm Architecture (TEA):
//! - [`Model`]: The complete session state
//! - [`Message`]: All actions an input event can trigger
//! - [`update`]: State transitions, applied by exclusive reference
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::Model;
pub use update::{Message, update};

use std::path::PathBuf;

/// Main application struct that owns the session configuration and runs the
/// event loop.
pub struct App {
    file_path: PathBuf,
    status_visible: bool,
    read_only: bool,
}

impl App {
    /// Create a new application for the given file.
    pub const fn new(file_path: PathBuf) -> Self {
        Self {
            file_path,
            status_visible: true,
            read_only: false,
        }
    }

    /// Show or hide the status bar on the bottom row.
    pub const fn with_status_visible(mut self, visible: bool) -> Self {
        self.status_visible = visible;
        self
    }

    /// Open the file read-only and never write it back.
    pub const fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }
}
