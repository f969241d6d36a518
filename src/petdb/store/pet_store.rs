use super::StorageBackend;
use crate::codec;
use crate::database::{Capacity, PetDatabase};
use crate::error::{PetDbError, Result};
use std::io::{BufRead, ErrorKind, Write};
use tracing::{debug, warn};

/// Result of loading a database from storage.
///
/// Loading never fails outright. When the stored data cannot be used the
/// database comes back empty and `discarded` holds the reason.
#[derive(Debug)]
pub struct LoadOutcome {
    pub database: PetDatabase,
    pub discarded: Option<PetDbError>,
}

/// Reads and writes a [`PetDatabase`] through a [`StorageBackend`].
pub struct PetStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> PetStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn location(&self) -> String {
        self.backend.location()
    }

    /// Loads every pet from storage.
    ///
    /// The first bad line (malformed, out-of-range age, or one pet too many)
    /// aborts the scan and discards everything read so far: a partially
    /// corrupt file yields an empty database, never a partial one. A location
    /// that does not exist yet is simply an empty database.
    pub fn load(&self, capacity: Capacity) -> LoadOutcome {
        let mut database = PetDatabase::new(capacity);

        match self.read_into(&mut database) {
            Ok(()) => {
                debug!(
                    "Loaded {} pets from {}",
                    database.size(),
                    self.backend.location()
                );
                LoadOutcome {
                    database,
                    discarded: None,
                }
            }
            Err(PetDbError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                debug!("No data at {}, starting empty", self.backend.location());
                database.clear();
                LoadOutcome {
                    database,
                    discarded: None,
                }
            }
            Err(e) => {
                warn!(
                    "Discarding {} pets read from {}: {}",
                    database.size(),
                    self.backend.location(),
                    e
                );
                database.clear();
                LoadOutcome {
                    database,
                    discarded: Some(e),
                }
            }
        }
    }

    fn read_into(&self, database: &mut PetDatabase) -> Result<()> {
        let reader = self.backend.reader()?;
        for line in reader.lines() {
            let line = line.map_err(PetDbError::Io)?;
            if codec::is_blank(&line) {
                continue;
            }
            database.add_pet_from_text(&line)?;
        }
        Ok(())
    }

    /// Writes every pet, in order, replacing whatever was stored before.
    /// A failure partway leaves whatever was already written; there is no rollback.
    pub fn save(&mut self, database: &PetDatabase) -> Result<()> {
        let location = self.backend.location();
        let mut writer = self.backend.writer()?;
        for pet in database.pets() {
            writer
                .write_all(codec::encode(pet).as_bytes())
                .map_err(PetDbError::Io)?;
        }
        writer.flush().map_err(PetDbError::Io)?;
        debug!("Saved {} pets to {}", database.size(), location);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::fixtures::DatabaseFixture;
    use crate::model::Pet;
    use crate::store::memory::MemBackend;

    fn load(content: &str, capacity: Capacity) -> LoadOutcome {
        PetStore::new(MemBackend::with_content(content)).load(capacity)
    }

    #[test]
    fn loads_pets_in_order_skipping_blank_lines() {
        let outcome = load("Rex 3\n\nFido 7\n", Capacity::default());
        assert!(outcome.discarded.is_none());

        let db = outcome.database;
        assert_eq!(db.size(), 2);
        assert_eq!(db.get_pet(0).unwrap(), &Pet::new("Rex", 3).unwrap());
        assert_eq!(db.get_pet(1).unwrap(), &Pet::new("Fido", 7).unwrap());
    }

    #[test]
    fn whitespace_only_lines_and_missing_final_newline_are_fine() {
        let outcome = load("  \nRex 3\n\t\nFido 7", Capacity::default());
        assert!(outcome.discarded.is_none());
        assert_eq!(outcome.database.size(), 2);
    }

    #[test]
    fn malformed_line_discards_everything() {
        let outcome = load("Rex 3\nFido\n", Capacity::default());
        assert_eq!(outcome.database.size(), 0);
        assert!(matches!(
            outcome.discarded,
            Some(PetDbError::MalformedRecord(_))
        ));
    }

    #[test]
    fn invalid_age_discards_everything() {
        let outcome = load("Rex 3\nFido 7\nMilo 99\n", Capacity::default());
        assert!(outcome.database.is_empty());
        assert!(matches!(outcome.discarded, Some(PetDbError::InvalidAge(99))));
    }

    #[test]
    fn too_many_pets_discards_everything() {
        let outcome = load("A 1\nB 2\nC 3\n", Capacity::Limited(2));
        assert!(outcome.database.is_empty());
        assert!(matches!(
            outcome.discarded,
            Some(PetDbError::CapacityExceeded(2))
        ));
    }

    #[test]
    fn loaded_database_keeps_capacity() {
        let outcome = load("A 1\n", Capacity::Limited(2));
        assert_eq!(outcome.database.capacity(), Capacity::Limited(2));
    }

    #[test]
    fn missing_storage_is_an_empty_database() {
        let outcome = PetStore::new(MemBackend::missing()).load(Capacity::default());
        assert!(outcome.database.is_empty());
        assert!(outcome.discarded.is_none());
    }

    #[test]
    fn unreadable_bytes_discard_everything() {
        let outcome = PetStore::new(MemBackend::with_content(b"Rex 3\n\xff\xfe 2\n"))
            .load(Capacity::default());
        assert!(outcome.database.is_empty());
        assert!(matches!(outcome.discarded, Some(PetDbError::Io(_))));
    }

    #[test]
    fn save_writes_one_line_per_pet() {
        let db = DatabaseFixture::new()
            .with_pet("Rex", 3)
            .with_pet("Fido", 7)
            .db;
        let mut store = PetStore::new(MemBackend::with_content("Stale 1\n\n\nOld 2\n"));
        store.save(&db).unwrap();
        assert_eq!(
            store.backend().contents().as_deref(),
            Some("Rex 3\nFido 7\n")
        );
    }

    #[test]
    fn save_of_empty_database_empties_storage() {
        let mut store = PetStore::new(MemBackend::with_content("Rex 3\n"));
        store.save(&PetDatabase::default()).unwrap();
        assert_eq!(store.backend().contents().as_deref(), Some(""));
    }

    #[test]
    fn save_then_load_restores_database() {
        let db = DatabaseFixture::with_capacity(Capacity::Limited(5))
            .with_pet("Rex", 3)
            .with_pet("Biscuit", 20)
            .db;
        let mut store = PetStore::new(MemBackend::new());
        store.save(&db).unwrap();

        let outcome = store.load(Capacity::Limited(5));
        assert!(outcome.discarded.is_none());
        assert_eq!(outcome.database, db);
    }

    #[test]
    fn failed_save_reports_io_and_keeps_partial_output() {
        let db = DatabaseFixture::new()
            .with_pet("Rex", 3)
            .with_pet("Fido", 7)
            .db;
        let mut store = PetStore::new(MemBackend::new().failing_writes_after(8));
        assert!(matches!(store.save(&db), Err(PetDbError::Io(_))));
        assert_eq!(store.backend().contents().as_deref(), Some("Rex 3\nFi"));
    }
}
