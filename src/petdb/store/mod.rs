//! # Storage Layer
//!
//! Persistence is split in two, the same way content I/O is split from
//! business rules elsewhere in this crate:
//!
//! - [`StorageBackend`] is the raw byte-stream boundary. It knows how to open a
//!   reader or a truncating writer for one storage location and nothing else.
//! - [`pet_store::PetStore`] holds the rules: the line format, blank-line
//!   tolerance, and the fail-clean load policy.
//!
//! ## Implementations
//!
//! - [`fs::FsBackend`]: a single plain text file on disk.
//! - [`memory::MemBackend`]: an in-memory buffer for tests. It can pretend the
//!   file is missing or that writes fail partway.
//!
//! ## Storage Format
//!
//! ```text
//! Rex 3
//! Fido 7
//! ```
//!
//! One pet per line, name then age. Blank lines are skipped on read and never
//! written.

use crate::error::Result;
use std::io::{BufRead, Write};

pub mod fs;
pub mod memory;
pub mod pet_store;

/// Abstract interface for raw storage I/O.
///
/// Streams returned here are scoped to a single load or save: they are
/// dropped, and so closed, when the caller is done, on every path.
pub trait StorageBackend {
    /// Open the stored bytes for reading.
    /// A location that does not exist yet is an `Io` error of kind `NotFound`.
    fn reader(&self) -> Result<Box<dyn BufRead + '_>>;

    /// Open the location for writing, discarding any previous content.
    fn writer(&mut self) -> Result<Box<dyn Write + '_>>;

    /// Human readable identifier of the storage location (e.g. a file path).
    fn location(&self) -> String;
}
