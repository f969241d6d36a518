use thiserror::Error;

#[derive(Error, Debug)]
pub enum PetDbError {
    #[error("Age {0} is out of range (must be between {min} and {max})", min = crate::model::MINIMUM_AGE, max = crate::model::MAXIMUM_AGE)]
    InvalidAge(i32),

    #[error("Malformed record: {0:?} (expected \"<name> <age>\")")]
    MalformedRecord(String),

    #[error("Database is full (capacity {0})")]
    CapacityExceeded(usize),

    #[error("ID {index} does not exist ({} in database)", pet_count(.size))]
    IndexOutOfRange { index: i64, size: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0} is not valid input.")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PetDbError>;

fn pet_count(size: &usize) -> String {
    crate::commands::pluralize(*size, "pet")
}
