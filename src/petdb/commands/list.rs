use crate::commands::CmdResult;
use crate::database::PetDatabase;

pub fn run(db: &PetDatabase) -> CmdResult {
    CmdResult::default().with_listed_pets(db.all())
}
