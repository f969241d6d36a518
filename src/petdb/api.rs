//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for front ends. A [`PetDbApi`] owns one [`PetDatabase`] and the
//! [`PetStore`] it was loaded from; opening it performs the load, and nothing
//! is written back until [`PetDbApi::save`] is called.
//!
//! Like the layers below it, the API never prints and never exits. Failures
//! come back as [`PetDbError`](crate::error::PetDbError) values for the front
//! end to present and recover from.
//!
//! `PetDbApi<B: StorageBackend>` is generic over the backend:
//! - Production: `PetDbApi<FsBackend>`
//! - Testing: `PetDbApi<MemBackend>`

use crate::commands;
use crate::database::{Capacity, PetDatabase};
use crate::error::Result;
use crate::model::Pet;
use crate::store::pet_store::PetStore;
use crate::store::StorageBackend;

pub struct PetDbApi<B: StorageBackend> {
    store: PetStore<B>,
    database: PetDatabase,
}

impl<B: StorageBackend> PetDbApi<B> {
    /// Binds a database to `backend` and loads it.
    ///
    /// The returned `CmdResult` carries the messages explaining why stored data
    /// was discarded, if it was.
    pub fn open(backend: B, capacity: Capacity) -> (Self, commands::CmdResult) {
        let store = PetStore::new(backend);
        let outcome = store.load(capacity);

        let mut result = commands::CmdResult::default();
        if let Some(err) = outcome.discarded {
            result.add_message(commands::CmdMessage::error(format!("Error: {}", err)));
            result.add_message(commands::CmdMessage::warning(
                "Because an error occurred, the pet database will be cleared.",
            ));
        }

        let api = Self {
            store,
            database: outcome.database,
        };
        (api, result)
    }

    pub fn location(&self) -> String {
        self.store.location()
    }

    pub fn size(&self) -> usize {
        self.database.size()
    }

    pub fn is_full(&self) -> bool {
        self.database.is_full()
    }

    pub fn get_pet(&self, id: i64) -> Result<&Pet> {
        let index = self.database.resolve_index(id)?;
        self.database.get_pet(index)
    }

    pub fn list_pets(&self) -> commands::CmdResult {
        commands::list::run(&self.database)
    }

    pub fn add_pet(&mut self, entry: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.database, entry)
    }

    pub fn update_pet(&mut self, id: i64, entry: &str) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.database, id, entry)
    }

    pub fn remove_pet(&mut self, id: i64) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.database, id)
    }

    pub fn search_pets_by_name(&self, name: &str) -> commands::CmdResult {
        commands::search::by_name(&self.database, name)
    }

    pub fn search_pets_by_age(&self, age: i32) -> commands::CmdResult {
        commands::search::by_age(&self.database, age)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        self.store.save(&self.database)?;
        let mut result = commands::CmdResult::default();
        result.add_message(commands::CmdMessage::info(format!(
            "Saved {} to {}.",
            commands::pluralize(self.database.size(), "pet"),
            self.store.location()
        )));
        Ok(result)
    }

    /// Gives the backend back, e.g. to inspect what a test wrote.
    pub fn into_backend(self) -> B {
        self.store.into_backend()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, ListedPet, MessageLevel};
