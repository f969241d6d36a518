use colored::Colorize;
use petdb::api::{CmdMessage, ListedPet, MessageLevel};
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 10;
const RULE: &str = "+----------------------+";

/// Renders pets as the boxed ID / NAME / AGE table followed by a row count.
pub fn render_pet_table(pets: &[ListedPet]) -> String {
    let mut output = String::new();
    output.push_str(RULE);
    output.push('\n');
    output.push_str("| ID | NAME      | AGE |\n");
    output.push_str(RULE);
    output.push('\n');

    for lp in pets {
        let name = lp.pet.name();
        let padding = NAME_WIDTH.saturating_sub(name.width());
        output.push_str(&format!(
            "|{:>3} | {}{}|{:>4} |\n",
            lp.index,
            name,
            " ".repeat(padding),
            lp.pet.age()
        ));
    }

    output.push_str(RULE);
    output.push('\n');
    let count = pets.len();
    output.push_str(&format!(
        "{} row{} in set\n",
        count,
        if count == 1 { "" } else { "s" }
    ));
    output
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut output = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        output.push_str(&format!("{}\n", line));
    }
    output
}

pub fn render_error(err: &impl std::fmt::Display) -> String {
    format!("{}\n", format!("Error: {}", err).red())
}
