use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let status = status_text(model);
    let bg = if model.read_only {
        Color::DarkGray
    } else {
        Color::Magenta
    };
    let status_bar = Paragraph::new(status).style(Style::default().bg(bg).fg(Color::White));
    frame.render_widget(status_bar, area);
}

pub fn status_text(model: &Model) -> String {
    let filename = model.file_name();
    let dirty_indicator = if model.buffer.is_dirty() {
        " [modified]"
    } else {
        ""
    };
    let read_only_indicator = if model.read_only { " [read-only]" } else { "" };
    let cursor = model.cursor;
    format!(
        " EDIT  {filename}{dirty_indicator}{read_only_indicator}  Ln {}, Col {}  Esc:quit",
        cursor.row + 1,
        cursor.col + 1
    )
}
