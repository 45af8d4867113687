use tracing::debug;

use crate::app::Model;
use crate::editor::{Direction, Motion};

/// All actions an input event can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Move the cursor one step
    MoveCursor(Direction),
    /// Delete the byte before the cursor (Backspace)
    DeleteLeft,
    /// End the session
    Quit,
}

/// Apply one message to the session.
///
/// Afterwards the line list reflects the current buffer and the viewport is
/// scrolled so the cursor is visible.
pub fn update(model: &mut Model, msg: Message) {
    match msg {
        Message::MoveCursor(direction) => {
            let motion = model
                .cursor
                .move_in(direction, &model.buffer, &model.lines);
            if motion == Motion::Clamped {
                model.viewport.reset_horizontal_scroll();
            }
        }
        Message::DeleteLeft => {
            if model.read_only {
                debug!("ignoring delete in read-only session");
            } else {
                model.cursor.delete_left(&mut model.buffer, &model.lines);
            }
        }
        Message::Quit => {
            model.should_quit = true;
        }
    }
    model.refresh_lines();
    model.viewport.recompute_scroll(&model.cursor);
}
