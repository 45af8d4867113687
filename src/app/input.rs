use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Message};
use crate::editor::Direction;

impl App {
    /// Map a terminal event to a message. Anything unrecognised is dropped.
    pub(super) fn handle_event(event: &Event) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent) -> Option<Message> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        match key.code {
            KeyCode::Esc => Some(Message::Quit),
            KeyCode::Backspace => Some(Message::DeleteLeft),
            // Terminals that send ^H for Backspace
            KeyCode::Char('h') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Message::DeleteLeft)
            }
            KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
            KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
            KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
            KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
            _ => None,
        }
    }
}
