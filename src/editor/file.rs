use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::buffer::{TextBuffer, provisioned_capacity};

/// Failure while reading or writing the backing file.
#[derive(Debug, Error)]
pub enum BufferError {
    #[error("failed to open {}", .path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("failed to read {}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to truncate {}", .path.display())]
    Truncate { path: PathBuf, source: io::Error },
    #[error("{} was opened read-only", .path.display())]
    ReadOnly { path: PathBuf },
}

impl BufferError {
    /// The file the failure relates to.
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. }
            | Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::Truncate { path, .. }
            | Self::ReadOnly { path } => path,
        }
    }
}

/// How the backing file is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Access {
    #[default]
    ReadWrite,
    ReadOnly,
}

/// The file being edited, held open for the whole session.
#[derive(Debug)]
pub struct BackingFile {
    file: File,
    path: PathBuf,
    access: Access,
}

impl BackingFile {
    /// Open `path` for editing.
    ///
    /// # Errors
    /// Returns [`BufferError::Open`] if the file cannot be opened with the
    /// requested access. A missing file is not created.
    pub fn open(path: impl AsRef<Path>, access: Access) -> Result<Self, BufferError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(access == Access::ReadWrite)
            .open(&path)
            .map_err(|source| BufferError::Open {
                path: path.clone(),
                source,
            })?;
        Ok(Self { file, path, access })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub const fn access(&self) -> Access {
        self.access
    }

    /// Read the whole file into a freshly provisioned buffer.
    ///
    /// # Errors
    /// Returns [`BufferError::Read`] if the file cannot be read.
    pub fn load(&mut self) -> Result<TextBuffer, BufferError> {
        let read_err = |source| BufferError::Read {
            path: self.path.clone(),
            source,
        };
        let len = self.file.metadata().map_err(read_err)?.len();
        let len = usize::try_from(len).unwrap_or(usize::MAX);
        let mut bytes = Vec::with_capacity(provisioned_capacity(len));
        self.file.seek(SeekFrom::Start(0)).map_err(read_err)?;
        self.file.read_to_end(&mut bytes).map_err(read_err)?;
        Ok(TextBuffer::from_vec(bytes))
    }

    /// Overwrite the file with the buffer's content and truncate it to the
    /// buffer's length, so a shrunk buffer never leaves stale trailing bytes.
    ///
    /// The write happens in place; a failure part-way leaves the file in an
    /// unspecified state.
    ///
    /// # Errors
    /// Returns [`BufferError::ReadOnly`] for a read-only file, or
    /// [`BufferError::Write`] / [`BufferError::Truncate`] on I/O failure.
    pub fn flush(&mut self, buffer: &TextBuffer) -> Result<(), BufferError> {
        if self.access == Access::ReadOnly {
            return Err(BufferError::ReadOnly {
                path: self.path.clone(),
            });
        }
        let write_err = |source| BufferError::Write {
            path: self.path.clone(),
            source,
        };
        self.file.seek(SeekFrom::Start(0)).map_err(write_err)?;
        self.file.write_all(buffer.as_bytes()).map_err(write_err)?;
        self.file
            .set_len(buffer.len() as u64)
            .map_err(|source| BufferError::Truncate {
                path: self.path.clone(),
                source,
            })?;
        self.file.flush().map_err(write_err)?;
        self.file.sync_all().map_err(write_err)
    }
}
