use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

use super::status;

/// Render the complete UI.
///
/// Content rows below the last line of the buffer are left blank, and the
/// terminal cursor is placed on the buffer cursor.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();

    for row in model.screen_rows() {
        let row_area = Rect {
            y: area.y + row.row,
            height: 1,
            ..area
        }
        .intersection(area);
        if row_area.is_empty() {
            continue;
        }
        frame.render_widget(Paragraph::new(row.text), row_area);
    }

    if model.status_visible && area.height > 0 {
        let status_area = Rect {
            y: area.y + area.height - 1,
            height: 1,
            ..area
        };
        status::render_status_bar(model, frame, status_area);
    }

    let (x, y) = model.viewport.cursor_position(&model.cursor);
    frame.set_cursor_position(Position::new(
        area.x.saturating_add(x),
        area.y.saturating_add(y),
    ));
}
