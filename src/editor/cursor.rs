use super::buffer::TextBuffer;
use super::lines::{Line, row_len};

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Outcome of a cursor motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// The cursor was at a boundary and did not move.
    Stayed,
    /// The cursor moved.
    Moved,
    /// The cursor moved vertically onto a line shorter than its column and
    /// was pulled back to that line's end.
    Clamped,
}

/// Cursor position in the buffer.
///
/// `offset` is the flat byte offset; `row` is the number of line feeds before
/// it and `col` the distance from the start of that row. A cursor sitting
/// after a final line feed is on the row just past the last [`Line`], which
/// has length 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Flat byte offset into the buffer.
    pub offset: usize,
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column (bytes from the start of the row).
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at the start of the buffer.
    pub const fn new() -> Self {
        Self {
            offset: 0,
            row: 0,
            col: 0,
        }
    }

    /// Derive the cursor for a flat offset, clamped to the end of content.
    pub fn at_offset(buffer: &TextBuffer, offset: usize) -> Self {
        let offset = offset.min(buffer.len());
        let before = &buffer.as_bytes()[..offset];
        let row = before.iter().filter(|&&b| b == b'\n').count();
        let row_start = before
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |idx| idx + 1);
        Self {
            offset,
            row,
            col: offset - row_start,
        }
    }

    /// Move the cursor in the given direction.
    ///
    /// `lines` must be the split of `buffer`'s current content.
    pub fn move_in(&mut self, direction: Direction, buffer: &TextBuffer, lines: &[Line]) -> Motion {
        match direction {
            Direction::Left => self.move_left(buffer, lines),
            Direction::Right => self.move_right(buffer),
            Direction::Up => self.move_up(lines),
            Direction::Down => self.move_down(lines),
        }
    }

    /// Step back one byte, onto the end of the previous row when crossing a
    /// line feed.
    pub fn move_left(&mut self, buffer: &TextBuffer, lines: &[Line]) -> Motion {
        if self.offset == 0 {
            return Motion::Stayed;
        }
        self.offset -= 1;
        if buffer.byte_at(self.offset) == Some(b'\n') {
            self.row -= 1;
            self.col = row_len(lines, self.row);
        } else {
            self.col -= 1;
        }
        Motion::Moved
    }

    /// Step forward one byte, onto the start of the next row when crossing a
    /// line feed.
    pub fn move_right(&mut self, buffer: &TextBuffer) -> Motion {
        let Some(byte) = buffer.byte_at(self.offset) else {
            return Motion::Stayed;
        };
        if byte == b'\n' {
            self.row += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        self.offset += 1;
        Motion::Moved
    }

    /// Move to the same column on the next line, or its end if shorter.
    pub fn move_down(&mut self, lines: &[Line]) -> Motion {
        if self.row + 1 >= lines.len() {
            return Motion::Stayed;
        }
        // Rest of this line, its line feed, then the column on the next one.
        let remaining = row_len(lines, self.row) - self.col;
        self.row += 1;
        let clamped = self.clamp_col(lines);
        self.offset += remaining + 1 + self.col;
        debug_assert_eq!(self.offset, lines[self.row].start + self.col);
        if clamped {
            Motion::Clamped
        } else {
            Motion::Moved
        }
    }

    /// Move to the same column on the previous line, or its end if shorter.
    pub fn move_up(&mut self, lines: &[Line]) -> Motion {
        if self.row == 0 {
            return Motion::Stayed;
        }
        self.row -= 1;
        let clamped = self.clamp_col(lines);
        self.offset = lines[self.row].start + self.col;
        if clamped {
            Motion::Clamped
        } else {
            Motion::Moved
        }
    }

    /// Delete the byte before the cursor (Backspace).
    ///
    /// The cursor first steps left so it lands where the deleted byte was.
    /// Returns `true` if a byte was deleted. `lines` is stale afterwards.
    pub fn delete_left(&mut self, buffer: &mut TextBuffer, lines: &[Line]) -> bool {
        if self.move_left(buffer, lines) == Motion::Stayed {
            return false;
        }
        buffer.delete_at(self.offset)
    }

    fn clamp_col(&mut self, lines: &[Line]) -> bool {
        let len = row_len(lines, self.row);
        if self.col > len {
            self.col = len;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::split;

    struct Fixture {
        buffer: TextBuffer,
        lines: Vec<Line>,
        cursor: Cursor,
    }

    impl Fixture {
        fn new(text: &str, offset: usize) -> Self {
            let buffer = TextBuffer::from_text(text);
            let lines = split(buffer.as_bytes());
            let cursor = Cursor::at_offset(&buffer, offset);
            Self {
                buffer,
                lines,
                cursor,
            }
        }

        fn step(&mut self, direction: Direction) -> Motion {
            self.cursor.move_in(direction, &self.buffer, &self.lines)
        }

        fn backspace(&mut self) -> bool {
            let deleted = self.cursor.delete_left(&mut self.buffer, &self.lines);
            self.lines = split(self.buffer.as_bytes());
            deleted
        }

        fn at(&self) -> (usize, usize, usize) {
            (self.cursor.offset, self.cursor.row, self.cursor.col)
        }
    }

    // --- Derivation from offset ---

    #[test]
    fn test_cursor_starts_at_origin() {
        assert_eq!(Cursor::new(), Cursor::default());
        let fx = Fixture::new("hello\nworld", 0);
        assert_eq!(fx.at(), (0, 0, 0));
    }

    #[test]
    fn test_at_offset_on_second_line() {
        let fx = Fixture::new("ab\ncd", 4);
        assert_eq!(fx.at(), (4, 1, 1));
    }

    #[test]
    fn test_at_offset_after_final_newline() {
        let fx = Fixture::new("ab\n", 3);
        assert_eq!(fx.at(), (3, 1, 0));
    }

    #[test]
    fn test_at_offset_clamps_to_end() {
        let fx = Fixture::new("ab", 10);
        assert_eq!(fx.at(), (2, 0, 2));
    }

    // --- Left / right ---

    #[test]
    fn test_move_left_at_start_is_noop() {
        let mut fx = Fixture::new("hello", 0);
        assert_eq!(fx.step(Direction::Left), Motion::Stayed);
        assert_eq!(fx.at(), (0, 0, 0));
    }

    #[test]
    fn test_move_left_decreases_col() {
        let mut fx = Fixture::new("hello", 3);
        assert_eq!(fx.step(Direction::Left), Motion::Moved);
        assert_eq!(fx.at(), (2, 0, 2));
    }

    #[test]
    fn test_move_left_wraps_to_end_of_prev_line() {
        let mut fx = Fixture::new("hello\nworld", 6);
        fx.step(Direction::Left);
        assert_eq!(fx.at(), (5, 0, 5));
    }

    #[test]
    fn test_move_right_at_end_is_noop() {
        let mut fx = Fixture::new("hello", 5);
        assert_eq!(fx.step(Direction::Right), Motion::Stayed);
        assert_eq!(fx.at(), (5, 0, 5));
    }

    #[test]
    fn test_move_right_increases_col() {
        let mut fx = Fixture::new("hello", 0);
        fx.step(Direction::Right);
        assert_eq!(fx.at(), (1, 0, 1));
    }

    #[test]
    fn test_move_right_wraps_to_next_line() {
        let mut fx = Fixture::new("hello\nworld", 5);
        fx.step(Direction::Right);
        assert_eq!(fx.at(), (6, 1, 0));
    }

    #[test]
    fn test_move_right_past_final_newline_reaches_virtual_row() {
        let mut fx = Fixture::new("ab\n", 2);
        fx.step(Direction::Right);
        assert_eq!(fx.at(), (3, 1, 0));
        assert_eq!(fx.step(Direction::Right), Motion::Stayed);
        fx.step(Direction::Left);
        assert_eq!(fx.at(), (2, 0, 2));
    }

    // --- Up / down ---

    #[test]
    fn test_move_up_at_first_line_is_noop() {
        let mut fx = Fixture::new("hello\nworld", 2);
        assert_eq!(fx.step(Direction::Up), Motion::Stayed);
        assert_eq!(fx.at(), (2, 0, 2));
    }

    #[test]
    fn test_move_down_at_last_line_is_noop() {
        let mut fx = Fixture::new("hello\nworld", 8);
        assert_eq!(fx.step(Direction::Down), Motion::Stayed);
        assert_eq!(fx.at(), (8, 1, 2));
    }

    #[test]
    fn test_move_up_from_start_of_line_keeps_col() {
        let mut fx = Fixture::new("ab\ncd", 3);
        assert_eq!(fx.step(Direction::Up), Motion::Moved);
        assert_eq!(fx.at(), (0, 0, 0));
    }

    #[test]
    fn test_move_up_from_end_of_shorter_line() {
        let mut fx = Fixture::new("ab\nc", 4);
        assert_eq!(fx.step(Direction::Up), Motion::Moved);
        assert_eq!(fx.at(), (1, 0, 1));
    }

    #[test]
    fn test_move_down_preserves_column() {
        let mut fx = Fixture::new("hello\nworld", 3);
        fx.step(Direction::Down);
        assert_eq!(fx.at(), (9, 1, 3));
    }

    #[test]
    fn test_move_up_preserves_column() {
        let mut fx = Fixture::new("hello\nworld", 9);
        fx.step(Direction::Up);
        assert_eq!(fx.at(), (3, 0, 3));
    }

    #[test]
    fn test_move_down_clamps_to_shorter_line() {
        let mut fx = Fixture::new("hello\nhi", 4);
        assert_eq!(fx.step(Direction::Down), Motion::Clamped);
        assert_eq!(fx.at(), (8, 1, 2));
    }

    #[test]
    fn test_move_up_clamps_to_shorter_line() {
        let mut fx = Fixture::new("hi\nhello", 7);
        assert_eq!(fx.step(Direction::Up), Motion::Clamped);
        assert_eq!(fx.at(), (2, 0, 2));
    }

    #[test]
    fn test_move_down_onto_empty_line() {
        let mut fx = Fixture::new("abc\n\nxyz", 2);
        assert_eq!(fx.step(Direction::Down), Motion::Clamped);
        assert_eq!(fx.at(), (4, 1, 0));
        fx.step(Direction::Down);
        assert_eq!(fx.at(), (5, 2, 0));
    }

    #[test]
    fn test_clamped_column_is_not_remembered() {
        let mut fx = Fixture::new("hello\nhi\nworld", 4);
        fx.step(Direction::Down);
        fx.step(Direction::Down);
        assert_eq!(fx.at(), (11, 2, 2));
    }

    #[test]
    fn test_move_down_never_enters_virtual_row() {
        let mut fx = Fixture::new("ab\n", 1);
        assert_eq!(fx.step(Direction::Down), Motion::Stayed);
    }

    #[test]
    fn test_move_up_from_virtual_row() {
        let mut fx = Fixture::new("ab\ncd\n", 6);
        assert_eq!(fx.at(), (6, 2, 0));
        fx.step(Direction::Up);
        assert_eq!(fx.at(), (3, 1, 0));
    }

    // --- Empty buffer ---

    #[test]
    fn test_every_move_is_noop_in_empty_buffer() {
        let mut fx = Fixture::new("", 0);
        for direction in [
            Direction::Left,
            Direction::Right,
            Direction::Up,
            Direction::Down,
        ] {
            assert_eq!(fx.step(direction), Motion::Stayed);
            assert_eq!(fx.at(), (0, 0, 0));
        }
    }

    // --- Backspace ---

    #[test]
    fn test_delete_left_at_start_is_noop() {
        let mut fx = Fixture::new("hello", 0);
        assert!(!fx.backspace());
        assert_eq!(fx.buffer.as_bytes(), b"hello");
        assert_eq!(fx.at(), (0, 0, 0));
    }

    #[test]
    fn test_delete_left_at_end_of_word() {
        let mut fx = Fixture::new("hello", 5);
        assert!(fx.backspace());
        assert_eq!(fx.buffer.as_bytes(), b"hell");
        assert_eq!(fx.at(), (4, 0, 4));
    }

    #[test]
    fn test_delete_left_joins_lines() {
        let mut fx = Fixture::new("hello\nworld", 6);
        fx.backspace();
        assert_eq!(fx.buffer.as_bytes(), b"helloworld");
        assert_eq!(fx.at(), (5, 0, 5));
        assert_eq!(fx.cursor, Cursor::at_offset(&fx.buffer, 5));
    }

    #[test]
    fn test_delete_left_removes_final_newline() {
        let mut fx = Fixture::new("ab\n", 3);
        fx.backspace();
        assert_eq!(fx.buffer.as_bytes(), b"ab");
        assert_eq!(fx.at(), (2, 0, 2));
    }

    #[test]
    fn test_moves_after_delete_use_fresh_lines() {
        // "ab\ncdef": delete the line feed, then move down must see one line.
        let mut fx = Fixture::new("ab\ncdef\ngh", 3);
        fx.backspace();
        assert_eq!(fx.buffer.as_bytes(), b"abcdef\ngh");
        assert_eq!(fx.lines.len(), 2);
        fx.step(Direction::Down);
        assert_eq!(fx.at(), (9, 1, 2));
        assert_eq!(fx.cursor, Cursor::at_offset(&fx.buffer, 9));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn content() -> impl Strategy<Value = String> {
            proptest::collection::vec(
                prop_oneof![Just('\n'), Just('a'), Just('b'), Just('c')],
                0..80,
            )
            .prop_map(|chars| chars.into_iter().collect())
        }

        fn op() -> impl Strategy<Value = Option<Direction>> {
            prop_oneof![
                Just(Some(Direction::Up)),
                Just(Some(Direction::Down)),
                Just(Some(Direction::Left)),
                Just(Some(Direction::Right)),
                Just(None),
            ]
        }

        proptest! {
            #[test]
            fn left_then_right_is_identity(text in content(), seed in 0..100usize) {
                let offset = if text.is_empty() { 0 } else { 1 + seed % text.len() };
                let mut fx = Fixture::new(&text, offset);
                let before = fx.cursor;
                fx.step(Direction::Left);
                fx.step(Direction::Right);
                prop_assert_eq!(fx.cursor, before);
            }

            #[test]
            fn right_then_left_is_identity(text in content(), seed in 0..100usize) {
                let offset = if text.is_empty() { 0 } else { seed % text.len() };
                let mut fx = Fixture::new(&text, offset);
                let before = fx.cursor;
                fx.step(Direction::Right);
                fx.step(Direction::Left);
                prop_assert_eq!(fx.cursor, before);
            }

            #[test]
            fn cursor_stays_consistent(
                text in content(),
                seed in 0..100usize,
                ops in proptest::collection::vec(op(), 0..60),
            ) {
                let mut fx = Fixture::new(&text, seed);
                for op in ops {
                    match op {
                        Some(direction) => { fx.step(direction); }
                        None => { fx.backspace(); }
                    }
                    prop_assert_eq!(fx.cursor, Cursor::at_offset(&fx.buffer, fx.cursor.offset));
                    prop_assert!(fx.cursor.col <= row_len(&fx.lines, fx.cursor.row));
                }
            }

            #[test]
            fn down_up_clamp_is_stable(text in content(), seed in 0..100usize) {
                let mut fx = Fixture::new(&text, seed);
                if fx.step(Direction::Down) == Motion::Stayed {
                    return Ok(());
                }
                fx.step(Direction::Up);
                let settled = fx.cursor;
                fx.step(Direction::Down);
                fx.step(Direction::Up);
                prop_assert_eq!(fx.cursor, settled);
            }

            #[test]
            fn down_up_restores_column_on_long_lines(text in content(), seed in 0..100usize) {
                let mut fx = Fixture::new(&text, seed);
                let before = fx.cursor;
                let fits = fx.cursor.row + 1 < fx.lines.len()
                    && row_len(&fx.lines, fx.cursor.row + 1) >= before.col;
                if !fits {
                    return Ok(());
                }
                fx.step(Direction::Down);
                fx.step(Direction::Up);
                prop_assert_eq!(fx.cursor, before);
            }

            #[test]
            fn delete_at_start_changes_nothing(text in content()) {
                let mut fx = Fixture::new(&text, 0);
                let before = fx.buffer.clone();
                prop_assert!(!fx.backspace());
                prop_assert_eq!(&fx.buffer, &before);
                prop_assert_eq!(fx.cursor, Cursor::new());
            }
        }
    }
}
