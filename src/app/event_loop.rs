use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;
use tracing::{debug, info};

use crate::app::{App, Model, update};
use crate::editor::{Access, BackingFile, TextBuffer};

/// Raw-mode terminal that is restored when dropped, on every exit path.
struct TerminalGuard {
    terminal: DefaultTerminal,
}

impl TerminalGuard {
    fn acquire() -> Result<Self> {
        let terminal = init_or_restore(ratatui::try_init, ratatui::restore)
            .context("Failed to initialize terminal; scrub requires an interactive terminal")?;
        Ok(Self { terminal })
    }
}

/// Run `init`, calling `restore` if it fails.
///
/// Initialization can fail after raw mode is already on, before any guard
/// exists to undo it.
fn init_or_restore<T>(
    init: impl FnOnce() -> std::io::Result<T>,
    restore: impl FnOnce(),
) -> std::io::Result<T> {
    init().inspect_err(|_| restore())
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
    }
}

impl App {
    /// Run an editing session.
    ///
    /// Opens and loads the file, runs the event loop until Esc, restores the
    /// terminal and then writes the buffer back.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, read or written, or if
    /// the terminal fails.
    pub fn run(&self) -> Result<()> {
        let access = if self.read_only {
            Access::ReadOnly
        } else {
            Access::ReadWrite
        };
        // Open before touching the terminal so failures print normally.
        let mut file = BackingFile::open(&self.file_path, access)?;
        let buffer = file.load()?;

        let mut guard = TerminalGuard::acquire()?;
        let size = guard.terminal.size()?;
        let mut model = Model::new(self.file_path.clone(), buffer, (size.width, size.height))
            .with_status_visible(self.status_visible)
            .with_read_only(self.read_only);
        info!(
            path = %self.file_path.display(),
            bytes = model.buffer.len(),
            capacity = model.buffer.capacity(),
            lines = model.lines.len(),
            width = size.width,
            height = size.height,
            "session started"
        );

        let result = Self::event_loop(&mut guard.terminal, &mut model);
        drop(guard);
        result?;

        Self::write_back(&mut file, &mut model.buffer)
    }

    fn write_back(file: &mut BackingFile, buffer: &mut TextBuffer) -> Result<()> {
        if file.access() == Access::ReadOnly {
            debug!(path = %file.path().display(), "read-only session, nothing written");
            return Ok(());
        }
        file.flush(buffer)?;
        buffer.mark_clean();
        info!(path = %file.path().display(), bytes = buffer.len(), "buffer written");
        Ok(())
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        terminal.draw(|frame| crate::ui::render(model, frame))?;

        // Blocking read: the only place the session waits.
        loop {
            let event = event::read()?;
            if let Some(msg) = Self::handle_event(&event) {
                update(model, msg);
                debug!(
                    ?msg,
                    offset = model.cursor.offset,
                    row = model.cursor.row,
                    col = model.cursor.col,
                    scroll_row = model.viewport.scroll_row(),
                    scroll_col = model.viewport.scroll_col(),
                    "message handled"
                );
            }

            if model.should_quit {
                break;
            }

            terminal.draw(|frame| crate::ui::render(model, frame))?;
        }
        Ok(())
    }
}
