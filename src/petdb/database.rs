//! # The Pet Collection
//!
//! [`PetDatabase`] is the ordered, capacity-bounded set of pets for one
//! session. It is the single owner of every [`Pet`] it holds.
//!
//! ## IDs
//!
//! A pet's ID is its current position in insertion order. IDs are not stable:
//! removing a pet shifts every later pet down by one, so callers must
//! re-resolve IDs after any mutation. All positional access goes through this
//! type (`get_pet`, `remove_pet`, `update_pet`, search results) so the ID
//! scheme can change without touching callers.
//!
//! ## Failure semantics
//!
//! Every mutating operation either succeeds completely or leaves the
//! collection exactly as it was.

use crate::codec;
use crate::error::{PetDbError, Result};
use crate::model::Pet;
use std::fmt;

pub const DEFAULT_MAXIMUM_PETS: usize = 5;

/// Maximum number of pets a database may hold at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capacity {
    Limited(usize),
    Unlimited,
}

impl Capacity {
    pub fn allows(&self, size: usize) -> bool {
        match self {
            Capacity::Limited(max) => size < *max,
            Capacity::Unlimited => true,
        }
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Capacity::Limited(DEFAULT_MAXIMUM_PETS)
    }
}

impl From<Option<usize>> for Capacity {
    fn from(max: Option<usize>) -> Self {
        match max {
            Some(n) => Capacity::Limited(n),
            None => Capacity::Unlimited,
        }
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Limited(n) => write!(f, "{}", n),
            Capacity::Unlimited => write!(f, "unlimited"),
        }
    }
}

/// A pet as seen from outside the database: a borrowed view plus its current ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayPet<'a> {
    pub index: usize,
    pub pet: &'a Pet,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetDatabase {
    pets: Vec<Pet>,
    capacity: Capacity,
}

impl PetDatabase {
    pub fn new(capacity: Capacity) -> Self {
        Self {
            pets: Vec::new(),
            capacity,
        }
    }

    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    pub fn size(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }

    pub fn is_full(&self) -> bool {
        !self.capacity.allows(self.pets.len())
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn add_pet(&mut self, pet: Pet) -> Result<()> {
        if self.is_full() {
            let max = match self.capacity {
                Capacity::Limited(n) => n,
                Capacity::Unlimited => self.pets.len(),
            };
            return Err(PetDbError::CapacityExceeded(max));
        }
        self.pets.push(pet);
        Ok(())
    }

    /// Decodes a `"<name> <age>"` line and appends the result.
    pub fn add_pet_from_text(&mut self, text: &str) -> Result<()> {
        let pet = codec::decode(text)?;
        self.add_pet(pet)
    }

    pub fn get_pet(&self, index: usize) -> Result<&Pet> {
        let size = self.pets.len();
        self.pets
            .get(index)
            .ok_or_else(|| past_end(index, size))
    }

    pub fn get_pet_mut(&mut self, index: usize) -> Result<&mut Pet> {
        let size = self.pets.len();
        self.pets
            .get_mut(index)
            .ok_or_else(|| past_end(index, size))
    }

    /// Removes the pet at `index`, shifting later pets down by one.
    pub fn remove_pet(&mut self, index: usize) -> Result<Pet> {
        if index >= self.pets.len() {
            return Err(past_end(index, self.pets.len()));
        }
        Ok(self.pets.remove(index))
    }

    /// Replaces the name and age of the pet at `index` from a `"<name> <age>"`
    /// line. Returns the pet as it was before the edit.
    pub fn update_pet(&mut self, index: usize, text: &str) -> Result<Pet> {
        let pet = self.get_pet_mut(index)?;
        let previous = pet.clone();
        pet.set_name_and_age(text)?;
        Ok(previous)
    }

    /// Maps a user-supplied ID to a position, rejecting negatives and IDs past the end.
    pub fn resolve_index(&self, id: i64) -> Result<usize> {
        usize::try_from(id)
            .ok()
            .filter(|&i| i < self.pets.len())
            .ok_or_else(|| out_of_range(id, self.pets.len()))
    }

    pub fn all(&self) -> Vec<DisplayPet<'_>> {
        self.matching(|_| true)
    }

    /// Case-insensitive exact match on the name.
    pub fn search_by_name(&self, name: &str) -> Vec<DisplayPet<'_>> {
        let needle = name.to_lowercase();
        self.matching(|pet| pet.name().to_lowercase() == needle)
    }

    pub fn search_by_age(&self, age: i32) -> Vec<DisplayPet<'_>> {
        self.matching(|pet| pet.age() == age)
    }

    pub fn clear(&mut self) {
        self.pets.clear();
    }

    fn matching<F>(&self, predicate: F) -> Vec<DisplayPet<'_>>
    where
        F: Fn(&Pet) -> bool,
    {
        self.pets
            .iter()
            .enumerate()
            .filter(|&(_, pet)| predicate(pet))
            .map(|(index, pet)| DisplayPet { index, pet })
            .collect()
    }
}

fn out_of_range(index: i64, size: usize) -> PetDbError {
    PetDbError::IndexOutOfRange { index, size }
}

fn past_end(index: usize, size: usize) -> PetDbError {
    out_of_range(i64::try_from(index).unwrap_or(i64::MAX), size)
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct DatabaseFixture {
        pub db: PetDatabase,
    }

    impl Default for DatabaseFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl DatabaseFixture {
        pub fn new() -> Self {
            Self {
                db: PetDatabase::new(Capacity::Unlimited),
            }
        }

        pub fn with_capacity(capacity: Capacity) -> Self {
            Self {
                db: PetDatabase::new(capacity),
            }
        }

        pub fn with_pet(mut self, name: &str, age: i32) -> Self {
            let pet = Pet::new(name, age).unwrap();
            self.db.add_pet(pet).unwrap();
            self
        }

        pub fn with_pets(mut self, count: usize) -> Self {
            for i in 0..count {
                let age = (i % 20) as i32 + 1;
                let pet = Pet::new(format!("Pet{}", i + 1), age).unwrap();
                self.db.add_pet(pet).unwrap();
            }
            self
        }
    }
}
