//! Message body stream.
//!
//! # Responsibilities
//! - Wrap the raw input resource behind a seekable read/write handle
//! - Share the handle between request versions without copying content
//!
//! # Design Decisions
//! - Cloning a `MessageBody` clones the handle, not the stream: two
//!   request versions deliberately observe the same underlying resource
//! - A poisoned lock is recovered; the stream holds no invariants a
//!   panicked reader can break

use std::fmt;
use std::io::{self, Cursor, Read, Seek, SeekFrom, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// The underlying readable/writable/seekable resource.
pub trait ByteStream: Read + Write + Seek + Send {}

impl<T: Read + Write + Seek + Send> ByteStream for T {}

/// Seekable byte stream backing a request body.
#[derive(Clone)]
pub struct MessageBody {
    stream: Arc<Mutex<Box<dyn ByteStream>>>,
}

impl MessageBody {
    /// Wrap an existing resource.
    pub fn new(stream: Box<dyn ByteStream>) -> Self {
        Self {
            stream: Arc::new(Mutex::new(stream)),
        }
    }

    /// An empty in-memory body.
    pub fn empty() -> Self {
        Self::from_bytes(Vec::new())
    }

    /// An in-memory body holding the given bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::new(Box::new(Cursor::new(bytes)))
    }

    /// Read the full stream contents from the start. The cursor is left at
    /// the end of the stream.
    pub fn contents(&self) -> io::Result<Vec<u8>> {
        let mut stream = self.stream.lock().unwrap_or_else(PoisonError::into_inner);
        stream.seek(SeekFrom::Start(0))?;
        let mut buffer = Vec::new();
        stream.read_to_end(&mut buffer)?;
        Ok(buffer)
    }

    /// Read from the current cursor position.
    pub fn read(&self, buffer: &mut [u8]) -> io::Result<usize> {
        let mut stream = self.stream.lock().unwrap_or_else(PoisonError::into_inner);
        stream.read(buffer)
    }

    /// Write at the current cursor position.
    pub fn write(&self, bytes: &[u8]) -> io::Result<usize> {
        let mut stream = self.stream.lock().unwrap_or_else(PoisonError::into_inner);
        stream.write(bytes)
    }

    /// Move the cursor.
    pub fn seek(&self, position: SeekFrom) -> io::Result<u64> {
        let mut stream = self.stream.lock().unwrap_or_else(PoisonError::into_inner);
        stream.seek(position)
    }

    /// Whether two bodies share the same underlying resource.
    pub fn shares_stream(&self, other: &MessageBody) -> bool {
        Arc::ptr_eq(&self.stream, &other.stream)
    }
}

impl fmt::Debug for MessageBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageBody").finish_non_exhaustive()
    }
}
