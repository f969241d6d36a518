use crate::commands::{CmdMessage, CmdResult};
use crate::database::PetDatabase;
use crate::error::Result;

pub fn run(db: &mut PetDatabase, id: i64) -> Result<CmdResult> {
    let index = db.resolve_index(id)?;
    let removed = db.remove_pet(index)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("{} is removed.", removed)));
    Ok(result.with_affected_pets(vec![removed]))
}
