use crate::command::Command;
use clap::Parser;

#[derive(Parser)]
#[command(name = "atomic-fileutils", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}
