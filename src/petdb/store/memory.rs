use super::StorageBackend;
use crate::error::{PetDbError, Result};
use std::io::{self, BufRead, Cursor, Write};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct MemBackend {
    /// `None` behaves like a file that was never created.
    data: Option<Vec<u8>>,
    /// Writers fail once this many bytes have been accepted.
    write_limit: Option<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self {
            data: Some(Vec::new()),
            write_limit: None,
        }
    }

    pub fn missing() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl AsRef<[u8]>) -> Self {
        Self {
            data: Some(content.as_ref().to_vec()),
            write_limit: None,
        }
    }

    pub fn failing_writes_after(mut self, bytes: usize) -> Self {
        self.write_limit = Some(bytes);
        self
    }

    pub fn contents(&self) -> Option<String> {
        self.data
            .as_ref()
            .map(|d| String::from_utf8_lossy(d).into_owned())
    }
}

impl StorageBackend for MemBackend {
    fn reader(&self) -> Result<Box<dyn BufRead + '_>> {
        let data = self.data.as_ref().ok_or_else(|| {
            PetDbError::Io(io::Error::new(io::ErrorKind::NotFound, "no stored data"))
        })?;
        Ok(Box::new(Cursor::new(data.as_slice())))
    }

    fn writer(&mut self) -> Result<Box<dyn Write + '_>> {
        let buf = self.data.get_or_insert_with(Vec::new);
        buf.clear();
        Ok(Box::new(LimitedWriter {
            buf,
            remaining: self.write_limit,
        }))
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

struct LimitedWriter<'a> {
    buf: &'a mut Vec<u8>,
    remaining: Option<usize>,
}

impl Write for LimitedWriter<'_> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        let accepted = match self.remaining {
            Some(0) => {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "storage is full"));
            }
            Some(n) => bytes.len().min(n),
            None => bytes.len(),
        };
        self.buf.extend_from_slice(&bytes[..accepted]);
        if let Some(n) = self.remaining.as_mut() {
            *n -= accepted;
        }
        Ok(accepted)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
