/// A logical line: a view into the buffer between line feeds.
///
/// The line feed that ends a line is a separator and is not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Offset of the first byte of the line.
    pub start: usize,
    /// Length in bytes, excluding the line feed.
    pub len: usize,
}

impl Line {
    /// Offset one past the last byte of the line (where its line feed sits).
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    /// The bytes of this line within `content`.
    pub fn text<'a>(&self, content: &'a [u8]) -> &'a [u8] {
        &content[self.start..self.end()]
    }
}

/// Split `content` into lines on `\n`.
///
/// An empty buffer yields a single empty line. A final line feed does not
/// start an extra empty line, so `"ab\n"` yields just `["ab"]`.
pub fn split(content: &[u8]) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut start = 0;
    for (idx, &byte) in content.iter().enumerate() {
        if byte == b'\n' {
            lines.push(Line {
                start,
                len: idx - start,
            });
            start = idx + 1;
        }
    }
    if start < content.len() || lines.is_empty() {
        lines.push(Line {
            start,
            len: content.len() - start,
        });
    }
    lines
}

/// Length of `row`, or 0 for the row after a final line feed.
pub fn row_len(lines: &[Line], row: usize) -> usize {
    lines.get(row).map_or(0, |line| line.len)
}
