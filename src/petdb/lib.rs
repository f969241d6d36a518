//! # Petdb Architecture
//!
//! Petdb keeps a small, bounded list of pets (a name and an age each), lets a
//! user view, add, update, remove and search them, and persists the list to a
//! plain text file between runs. It is a library with a thin CLI client on top,
//! not the other way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the numbered menu, prints tables  │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Opens (loads) a database bound to a storage backend      │
//! │  - Thin facade over commands, explicit save                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user operation, returns `CmdResult`       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (model.rs, codec.rs, database.rs)                     │
//! │  - Validated `Pet`, line codec, bounded `PetDatabase`       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `StorageBackend` byte streams: FsBackend, MemBackend     │
//! │  - `PetStore`: fail-clean load, overwriting save            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## IDs
//!
//! A pet's ID is its position in the list. Removing a pet renumbers every pet
//! after it, so IDs are only meaningful until the next mutation. See
//! [`database`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns
//! `Result<_, PetDbError>`, never prints and never exits. Even the data file is
//! reached only through [`store::StorageBackend`], so tests run against
//! [`store::memory::MemBackend`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user-facing operation
//! - [`database`]: The bounded, ordered pet collection
//! - [`model`]: The validated `Pet` record
//! - [`codec`]: `Pet` ⇄ text line
//! - [`store`]: Storage abstraction, implementations, load/save rules
//! - [`config`]: Configuration file
//! - [`error`]: Error types
//! - `cli`: Argument parsing, the menu loop and table rendering for the binary (not part of the lib API)

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod model;
pub mod store;
