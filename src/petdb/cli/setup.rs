use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "petdb", bin_name = "petdb", version)]
#[command(about = "Interactive pet database backed by a plain text file", long_about = None)]
pub struct Cli {
    /// Data file to load on start and save on exit (default: pet_database.txt)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory holding config.json (defaults to the user config directory)
    #[arg(long, value_name = "DIR", hide = true)]
    pub config_dir: Option<PathBuf>,
}

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ViewAll,
    Add,
    Update,
    Remove,
    SearchByName,
    SearchByAge,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::ViewAll,
        MenuChoice::Add,
        MenuChoice::Update,
        MenuChoice::Remove,
        MenuChoice::SearchByName,
        MenuChoice::SearchByAge,
        MenuChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ViewAll => "View all pets",
            MenuChoice::Add => "Add more pets",
            MenuChoice::Update => "Update an existing pet",
            MenuChoice::Remove => "Remove an existing pet",
            MenuChoice::SearchByName => "Search pets by name",
            MenuChoice::SearchByAge => "Search pets by age",
            MenuChoice::Exit => "Exit program",
        }
    }

    /// Parses the number typed at the menu prompt (1-based).
    pub fn parse(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// The menu as printed before every prompt.
pub fn menu_text() -> String {
    let mut output = String::from("What would you like to do?\n");
    for (i, choice) in MenuChoice::ALL.iter().enumerate() {
        output.push_str(&format!(" {}) {}\n", i + 1, choice.label()));
    }
    output
}
