use super::StorageBackend;
use crate::error::{PetDbError, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_FILE_NAME: &str = "pet_database.txt";

/// File-backed storage: the whole database lives in one text file.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PetDbError::Io)?;
            }
        }
        Ok(())
    }
}

impl Default for FsBackend {
    fn default() -> Self {
        Self::new(DEFAULT_FILE_NAME)
    }
}

impl StorageBackend for FsBackend {
    fn reader(&self) -> Result<Box<dyn BufRead + '_>> {
        let file = File::open(&self.path).map_err(PetDbError::Io)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn writer(&mut self) -> Result<Box<dyn Write + '_>> {
        self.ensure_parent_dir()?;
        let file = File::create(&self.path).map_err(PetDbError::Io)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
