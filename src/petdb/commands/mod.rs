use crate::database::DisplayPet;
use crate::model::Pet;

pub mod add;
pub mod list;
pub mod remove;
pub mod search;
pub mod update;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A pet copied out for display, tagged with the ID it had when listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedPet {
    pub index: usize,
    pub pet: Pet,
}

impl From<DisplayPet<'_>> for ListedPet {
    fn from(dp: DisplayPet<'_>) -> Self {
        Self {
            index: dp.index,
            pet: dp.pet.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_pets: Vec<Pet>,
    pub listed_pets: Vec<ListedPet>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_pets(mut self, pets: Vec<Pet>) -> Self {
        self.affected_pets = pets;
        self
    }

    pub fn with_listed_pets(mut self, pets: Vec<DisplayPet<'_>>) -> Self {
        self.listed_pets = pets.into_iter().map(ListedPet::from).collect();
        self
    }
}

/// "1 pet" / "3 pets"
pub(crate) fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
