//! Text buffer, line index and cursor model.
//!
//! The buffer is a flat byte vector. Lines are derived views into it,
//! recomputed from scratch after every change, and the cursor keeps its flat
//! offset and its (row, column) position in step with that decomposition.

mod buffer;
mod cursor;
mod file;
mod lines;

pub use buffer::{MIN_CAPACITY, TextBuffer, provisioned_capacity};
pub use cursor::{Cursor, Direction, Motion};
pub use file::{Access, BackingFile, BufferError};
pub use lines::{Line, row_len, split};
