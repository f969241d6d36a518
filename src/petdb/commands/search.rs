use crate::commands::CmdResult;
use crate::database::PetDatabase;

pub fn by_name(db: &PetDatabase, name: &str) -> CmdResult {
    CmdResult::default().with_listed_pets(db.search_by_name(name.trim()))
}

pub fn by_age(db: &PetDatabase, age: i32) -> CmdResult {
    CmdResult::default().with_listed_pets(db.search_by_age(age))
}
