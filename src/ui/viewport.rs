//! Viewport management for scrolling.
//!
//! The [`Viewport`] tracks which part of the buffer is aligned with the
//! top-left corner of the terminal and produces the rows to draw.

use crate::editor::{Cursor, Line, TextBuffer};

/// One row of text to draw, already clipped to the terminal width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenRow {
    /// Terminal row, counted from the top.
    pub row: u16,
    /// Text to draw starting at column 0.
    pub text: String,
}

/// Tracks scroll offsets for a fixed-size terminal.
///
/// The terminal size is read once when the session starts. Scrolling keeps a
/// one-cell margin so the cursor is never drawn on the last row or column.
///
/// # Example
///
/// ```
/// use scrub::editor::Cursor;
/// use scrub::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 24);
/// vp.recompute_scroll(&Cursor { offset: 0, row: 30, col: 0 });
/// assert_eq!(vp.scroll_row(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    scroll_row: usize,
    scroll_col: usize,
}

impl Viewport {
    /// Create a viewport scrolled to the top-left.
    ///
    /// # Arguments
    ///
    /// * `width` - Terminal width in columns
    /// * `height` - Terminal height in rows
    pub const fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            scroll_row: 0,
            scroll_col: 0,
        }
    }

    /// Get the terminal width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the terminal height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// First content row shown on screen.
    pub const fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    /// First content column shown on screen.
    pub const fn scroll_col(&self) -> usize {
        self.scroll_col
    }

    /// Number of screen rows used for content. The last row is left free.
    pub const fn text_rows(&self) -> u16 {
        self.height.saturating_sub(1)
    }

    /// Scroll the least amount needed to keep the cursor inside the margin.
    pub fn recompute_scroll(&mut self, cursor: &Cursor) {
        self.scroll_row = scroll_axis(self.scroll_row, cursor.row, self.height);
        self.scroll_col = scroll_axis(self.scroll_col, cursor.col, self.width);
    }

    /// Drop the horizontal scroll so the next recompute picks the leftmost
    /// offset that still shows the cursor.
    ///
    /// Used after the cursor column is clamped onto a shorter line.
    pub const fn reset_horizontal_scroll(&mut self) {
        self.scroll_col = 0;
    }

    /// Rows to draw for the current scroll position.
    ///
    /// Stops at the last line of the buffer; rows below it are not emitted
    /// and are expected to be blank already.
    pub fn render(&self, buffer: &TextBuffer, lines: &[Line]) -> Vec<ScreenRow> {
        let content = buffer.as_bytes();
        let width = usize::from(self.width);
        (0..self.text_rows())
            .map_while(|screen_row| {
                let line = lines.get(self.scroll_row + usize::from(screen_row))?;
                let text = line.text(content);
                let visible = text.get(self.scroll_col..).unwrap_or_default();
                let visible = &visible[..visible.len().min(width)];
                Some(ScreenRow {
                    row: screen_row,
                    text: visible.iter().copied().map(display_byte).collect(),
                })
            })
            .collect()
    }

    /// Screen position `(x, y)` of the cursor glyph.
    pub fn cursor_position(&self, cursor: &Cursor) -> (u16, u16) {
        let x = cursor.col.saturating_sub(self.scroll_col);
        let y = cursor.row.saturating_sub(self.scroll_row);
        (
            u16::try_from(x).unwrap_or(u16::MAX),
            u16::try_from(y).unwrap_or(u16::MAX),
        )
    }
}

/// Apply the margin rule on one axis.
fn scroll_axis(scroll: usize, pos: usize, extent: u16) -> usize {
    let interior = usize::from(extent).saturating_sub(2);
    if pos > scroll + interior {
        pos - interior
    } else if pos < scroll {
        pos
    } else {
        scroll
    }
}

/// One cell per byte: printable ASCII as-is, anything else as `?`.
const fn display_byte(byte: u8) -> char {
    if byte.is_ascii_graphic() || byte == b' ' {
        byte as char
    } else {
        '?'
    }
}
