#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod fs;

pub use error::*;
pub use fs::{AtomicWriter, atomic_write, write_bytes};

/// Runs the CLI and returns the process exit code.
pub fn run() -> Result<i32> {
    use clap::Parser;
    use command::Command;

    let cli = cli::Cli::parse();
    match cli.command {
        Command::Write(args) => command::write::execute(args).map(|()| 0),
        Command::Probe(args) => command::probe::execute(args),
    }
}
