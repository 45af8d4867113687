/// Capacity provisioned for an empty file.
pub const MIN_CAPACITY: usize = 1024;

/// Capacity to reserve for content of `len` bytes.
///
/// Editing only ever shrinks the buffer, so reserving once at load time keeps
/// the allocation fixed for the whole session.
pub const fn provisioned_capacity(len: usize) -> usize {
    if len == 0 {
        MIN_CAPACITY
    } else {
        len.saturating_mul(2).saturating_add(MIN_CAPACITY)
    }
}

/// The editable byte content of the open file.
///
/// The logical length is the length of the backing vector; its capacity is
/// provisioned once when the buffer is created and is never grown afterwards.
#[derive(Clone, PartialEq, Eq)]
pub struct TextBuffer {
    bytes: Vec<u8>,
    dirty: bool,
}

impl TextBuffer {
    /// Create a buffer holding a copy of `content`.
    pub fn from_bytes(content: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(provisioned_capacity(content.len()));
        bytes.extend_from_slice(content);
        Self {
            bytes,
            dirty: false,
        }
    }

    /// Create a buffer from text.
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_bytes(&[])
    }

    /// Wrap bytes that were already read into a provisioned vector.
    pub(super) fn from_vec(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            dirty: false,
        }
    }

    /// The logical content.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Logical length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Allocated capacity in bytes. Always at least [`Self::len`].
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// The byte at `offset`, or `None` at or past the end of content.
    pub fn byte_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(offset).copied()
    }

    /// Whether the buffer has been modified since creation or last flush.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after flushing).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Remove the byte at `offset`, shifting everything after it left.
    ///
    /// Returns `true` if a byte was removed. Offsets at or past the end of
    /// content leave the buffer untouched.
    pub fn delete_at(&mut self, offset: usize) -> bool {
        if offset >= self.bytes.len() {
            return false;
        }
        self.bytes.remove(offset);
        self.dirty = true;
        true
    }
}

impl std::fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBuffer")
            .field("len", &self.bytes.len())
            .field("capacity", &self.bytes.capacity())
            .field("dirty", &self.dirty)
            .finish()
    }
}
