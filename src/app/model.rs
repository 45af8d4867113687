use std::path::PathBuf;

use crate::editor::{Cursor, Line, TextBuffer, split};
use crate::ui::viewport::{ScreenRow, Viewport};

/// The complete editing session state.
///
/// All state lives here and is handed to [`crate::app::update`] by exclusive
/// reference, so every mutation is visible at its call site.
pub struct Model {
    /// The bytes being edited
    pub buffer: TextBuffer,
    /// Lines of `buffer`, re-split after every message
    pub lines: Vec<Line>,
    /// Cursor position in `buffer`
    pub cursor: Cursor,
    /// Scroll position for the fixed-size terminal
    pub viewport: Viewport,
    /// Path of the file being edited
    pub file_path: PathBuf,
    /// Whether the bottom row shows the status bar
    pub status_visible: bool,
    /// Whether deletions are refused
    pub read_only: bool,
    /// Whether the session should end
    pub should_quit: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("file_path", &self.file_path)
            .field("buffer", &self.buffer)
            .field("cursor", &self.cursor)
            .field("viewport", &self.viewport)
            .field("read_only", &self.read_only)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a session for `buffer` with the cursor at the start.
    pub fn new(file_path: PathBuf, buffer: TextBuffer, terminal_size: (u16, u16)) -> Self {
        let lines = split(buffer.as_bytes());
        Self {
            buffer,
            lines,
            cursor: Cursor::new(),
            viewport: Viewport::new(terminal_size.0, terminal_size.1),
            file_path,
            status_visible: true,
            read_only: false,
            should_quit: false,
        }
    }

    /// Show or hide the status bar.
    pub const fn with_status_visible(mut self, visible: bool) -> Self {
        self.status_visible = visible;
        self
    }

    /// Refuse deletions for this session.
    pub const fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Re-derive the line list from the current buffer content.
    pub fn refresh_lines(&mut self) {
        self.lines = split(self.buffer.as_bytes());
    }

    /// Rows to draw for the current state.
    pub fn screen_rows(&self) -> Vec<ScreenRow> {
        self.viewport.render(&self.buffer, &self.lines)
    }

    /// Name of the file for display.
    pub fn file_name(&self) -> String {
        self.file_path.file_name().map_or_else(
            || "untitled".to_string(),
            |s| s.to_string_lossy().to_string(),
        )
    }
}
