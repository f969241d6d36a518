use crate::commands::{CmdMessage, CmdResult};
use crate::database::PetDatabase;
use crate::error::Result;

/// Replaces the name and age of pet `id` with a `"<name> <age>"` entry.
pub fn run(db: &mut PetDatabase, id: i64, entry: &str) -> Result<CmdResult> {
    let index = db.resolve_index(id)?;
    let previous = db.update_pet(index, entry)?;
    let current = db.get_pet(index)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} changed to {}.",
        previous, current
    )));
    Ok(result.with_affected_pets(vec![current]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::fixtures::DatabaseFixture;
    use crate::error::PetDbError;
    use crate::model::Pet;

    #[test]
    fn updates_in_place() {
        let mut db = DatabaseFixture::new()
            .with_pet("Rex", 3)
            .with_pet("Fido", 7)
            .db;

        let result = run(&mut db, 1, "Buddy 8").unwrap();
        assert_eq!(result.messages[0].content, "Fido 7 changed to Buddy 8.");
        assert_eq!(db.get_pet(1).unwrap(), &Pet::new("Buddy", 8).unwrap());
        assert_eq!(db.size(), 2);
    }

    #[test]
    fn invalid_entry_keeps_old_values() {
        let mut db = DatabaseFixture::new().with_pet("Rex", 3).db;
        assert!(matches!(
            run(&mut db, 0, "Buddy"),
            Err(PetDbError::MalformedRecord(_))
        ));
        assert!(matches!(
            run(&mut db, 0, "Buddy 0"),
            Err(PetDbError::InvalidAge(0))
        ));
        assert_eq!(db.get_pet(0).unwrap(), &Pet::new("Rex", 3).unwrap());
    }

    #[test]
    fn unknown_id_is_rejected_before_parsing() {
        let mut db = DatabaseFixture::new().db;
        assert!(matches!(
            run(&mut db, 0, "not even a pet"),
            Err(PetDbError::IndexOutOfRange { .. })
        ));
    }
}
