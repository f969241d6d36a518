use crate::commands::{pluralize, CmdMessage, CmdResult};
use crate::database::PetDatabase;
use crate::error::Result;

/// Adds one pet from a `"<name> <age>"` entry.
pub fn run(db: &mut PetDatabase, entry: &str) -> Result<CmdResult> {
    db.add_pet_from_text(entry)?;
    let added = db.get_pet(db.size() - 1)?.clone();
    Ok(CmdResult::default().with_affected_pets(vec![added]))
}

/// Closing message for an add session, `None` when nothing was added.
pub fn summary(added: usize) -> Option<CmdMessage> {
    if added == 0 {
        return None;
    }
    Some(CmdMessage::success(format!(
        "{} added.",
        pluralize(added, "pet")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Capacity;
    use crate::error::PetDbError;

    #[test]
    fn adds_and_reports_the_new_pet() {
        let mut db = PetDatabase::new(Capacity::Limited(2));
        let result = run(&mut db, "Rex 3").unwrap();
        assert_eq!(db.size(), 1);
        assert_eq!(result.affected_pets[0].name(), "Rex");
        assert_eq!(result.affected_pets[0].age(), 3);
    }

    #[test]
    fn propagates_failures_unchanged() {
        let mut db = PetDatabase::new(Capacity::Limited(1));
        assert!(matches!(
            run(&mut db, "Rex three"),
            Err(PetDbError::MalformedRecord(_))
        ));
        run(&mut db, "Rex 3").unwrap();
        assert!(matches!(
            run(&mut db, "Milo 5"),
            Err(PetDbError::CapacityExceeded(1))
        ));
        assert_eq!(db.size(), 1);
    }

    #[test]
    fn summary_pluralizes() {
        assert!(summary(0).is_none());
        assert_eq!(summary(1).unwrap().content, "1 pet added.");
        assert_eq!(summary(3).unwrap().content, "3 pets added.");
    }
}
