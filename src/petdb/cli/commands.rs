//! # CLI Layer
//!
//! This module is **one possible UI client** for petdb. It is the only place
//! that knows about the terminal: it parses arguments, wires up logging and
//! configuration, runs the numbered menu, and formats results.
//!
//! ## Structure
//!
//! - `run()`: entry point called by `main.rs`
//! - `init_context()`: resolves config and the data file, opens the API
//! - [`Session`]: the menu loop. It reads from an input it is given and writes
//!   to an output it is given, so tests drive it with in-memory buffers.
//! - `handle_*()`: one handler per menu entry

use super::render::{render_error, render_messages, render_pet_table};
use super::setup::{menu_text, Cli, MenuChoice};
use clap::Parser;
use directories::ProjectDirs;
use petdb::api::{CmdResult, PetDbApi};
use petdb::config::PetDbConfig;
use petdb::error::{PetDbError, Result};
use petdb::store::fs::FsBackend;
use petdb::store::StorageBackend;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (mut api, opened) = init_context(&cli);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(&mut api, stdin.lock(), stdout.lock());
    session.write(&render_messages(&opened.messages))?;
    session.run()
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn init_context(cli: &Cli) -> (PetDbApi<FsBackend>, CmdResult) {
    let config_dir = cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("com", "petdb", "petdb").map(|dirs| dirs.config_dir().to_path_buf())
    });

    let config = match config_dir {
        Some(dir) => PetDbConfig::load(&dir).unwrap_or_else(|e| {
            warn!("Ignoring config in {}: {}", dir.display(), e);
            PetDbConfig::default()
        }),
        None => PetDbConfig::default(),
    };

    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data_file));
    debug!(
        "Using data file {} (capacity {})",
        data_file.display(),
        config.capacity()
    );

    PetDbApi::open(FsBackend::new(data_file), config.capacity())
}

/// One interactive run of the menu against an open database.
pub struct Session<'a, B: StorageBackend, R: BufRead, W: Write> {
    api: &'a mut PetDbApi<B>,
    input: R,
    output: W,
}

impl<'a, B: StorageBackend, R: BufRead, W: Write> Session<'a, B, R, W> {
    pub fn new(api: &'a mut PetDbApi<B>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    /// Runs the menu until the user exits or input runs out, then saves.
    pub fn run(&mut self) -> Result<()> {
        self.write("Pet Database Program.\n")?;

        loop {
            self.write("\n")?;
            self.write(&menu_text())?;
            let Some(line) = self.prompt("Your choice: ")? else {
                // Out of input: leave the same way as choosing Exit.
                self.write("\n")?;
                return self.handle_exit();
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                // A number outside the menu still gets the usual blank line
                if line.trim().parse::<i64>().is_ok() {
                    self.write("\n")?;
                }
                self.write(&render_error(&"Please enter a number between 1 and 7."))?;
                continue;
            };

            self.write("\n")?;
            match choice {
                MenuChoice::ViewAll => self.handle_view()?,
                MenuChoice::Add => self.handle_add()?,
                MenuChoice::Update => self.handle_update()?,
                MenuChoice::Remove => self.handle_remove()?,
                MenuChoice::SearchByName => self.handle_search_by_name()?,
                MenuChoice::SearchByAge => self.handle_search_by_age()?,
                MenuChoice::Exit => return self.handle_exit(),
            }
        }
    }

    fn handle_view(&mut self) -> Result<()> {
        let result = self.api.list_pets();
        self.write(&render_pet_table(&result.listed_pets))
    }

    fn handle_add(&mut self) -> Result<()> {
        let mut added = 0;
        loop {
            let Some(entry) = self.prompt("add pet (name, age): ")? else {
                break;
            };
            if entry.trim() == "done" {
                break;
            }

            match self.api.add_pet(&entry) {
                Ok(_) => added += 1,
                Err(e @ PetDbError::CapacityExceeded(_)) => {
                    self.write(&render_error(&e))?;
                    break;
                }
                Err(e) => self.write(&render_error(&e))?,
            }
        }

        if let Some(message) = petdb::commands::add::summary(added) {
            self.write(&render_messages(&[message]))?;
        }
        Ok(())
    }

    fn handle_update(&mut self) -> Result<()> {
        self.handle_view()?;
        self.write("\n")?;

        let Some(id) = self.prompt_id("Enter the pet ID you want to update: ")? else {
            return Ok(());
        };
        // Check the ID before asking for the new values
        if let Err(e) = self.api.get_pet(id).map(|_| ()) {
            return self.write(&render_error(&e));
        }

        let Some(entry) = self.prompt("Enter new name and new age: ")? else {
            return Ok(());
        };
        match self.api.update_pet(id, &entry) {
            Ok(result) => self.write(&render_messages(&result.messages)),
            Err(e) => self.write(&render_error(&e)),
        }
    }

    fn handle_remove(&mut self) -> Result<()> {
        self.handle_view()?;
        self.write("\n")?;

        let Some(id) = self.prompt_id("Enter the pet ID to remove: ")? else {
            return Ok(());
        };
        match self.api.remove_pet(id) {
            Ok(result) => self.write(&render_messages(&result.messages)),
            Err(e) => self.write(&render_error(&e)),
        }
    }

    fn handle_search_by_name(&mut self) -> Result<()> {
        let Some(name) = self.prompt("Enter a name to search: ")? else {
            return Ok(());
        };
        let result = self.api.search_pets_by_name(&name);
        self.write(&render_pet_table(&result.listed_pets))
    }

    fn handle_search_by_age(&mut self) -> Result<()> {
        let Some(line) = self.prompt("Enter age to search: ")? else {
            return Ok(());
        };
        match line.trim().parse::<i32>() {
            Ok(age) => {
                let result = self.api.search_pets_by_age(age);
                self.write(&render_pet_table(&result.listed_pets))
            }
            Err(_) => self.write(&render_error(&PetDbError::InvalidInput(line))),
        }
    }

    fn handle_exit(&mut self) -> Result<()> {
        match self.api.save() {
            Ok(result) => self.write(&render_messages(&result.messages))?,
            Err(e) => {
                warn!("Save to {} failed: {}", self.api.location(), e);
                self.write(&render_error(&e))?;
            }
        }
        self.write("Goodbye!\n")
    }

    /// Asks for an ID; prints an error and yields `None` when it is not a number.
    fn prompt_id(&mut self, prompt: &str) -> Result<Option<i64>> {
        let Some(line) = self.prompt(prompt)? else {
            return Ok(None);
        };
        match line.trim().parse::<i64>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                self.write(&render_error(&PetDbError::InvalidInput(line)))?;
                Ok(None)
            }
        }
    }

    /// Prints `prompt` and reads one line, without its line ending.
    /// Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        self.write(prompt)?;
        self.output.flush().map_err(PetDbError::Io)?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(PetDbError::Io)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .map_err(PetDbError::Io)
    }
}
