pub mod probe;
pub mod write;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Command {
    /// Atomically replace a file with data read from stdin or another file.
    Write(write::WriteArgs),
    /// Report whether paths exist and what they are.
    Probe(probe::ProbeArgs),
}
