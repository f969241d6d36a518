//! Thin binary: all terminal handling lives in `cli/`, this file only runs it
//! and turns a fatal error into an exit code.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
