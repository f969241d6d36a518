use crate::error::{PetDbError, Result};
use std::fmt;
use std::str::FromStr;

pub const MINIMUM_AGE: i32 = 1;
pub const MAXIMUM_AGE: i32 = 20;

/// A single named, aged record.
///
/// The age is always within `MINIMUM_AGE..=MAXIMUM_AGE`; every constructor and
/// setter checks it before touching any field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    name: String,
    age: i32,
}

impl Pet {
    pub fn new(name: impl Into<String>, age: i32) -> Result<Self> {
        check_age(age)?;
        Ok(Self {
            name: name.into(),
            age,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_age(&mut self, age: i32) -> Result<()> {
        check_age(age)?;
        self.age = age;
        Ok(())
    }

    /// Replaces both fields from a `"<name> <age>"` string.
    /// Leaves the pet untouched if the text does not parse.
    pub fn set_name_and_age(&mut self, text: &str) -> Result<()> {
        let parsed: Pet = text.parse()?;
        *self = parsed;
        Ok(())
    }
}

fn check_age(age: i32) -> Result<()> {
    if (MINIMUM_AGE..=MAXIMUM_AGE).contains(&age) {
        Ok(())
    } else {
        Err(PetDbError::InvalidAge(age))
    }
}

impl FromStr for Pet {
    type Err = PetDbError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = || PetDbError::MalformedRecord(s.to_string());

        let mut tokens = s.split_whitespace();
        let name = tokens.next().ok_or_else(malformed)?;
        let age = tokens.next().ok_or_else(malformed)?;
        if tokens.next().is_some() {
            return Err(malformed());
        }

        let age: i32 = age.parse().map_err(|_| malformed())?;
        Pet::new(name, age)
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.age)
    }
}
