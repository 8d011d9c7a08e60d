use crate::error::Result;
use crate::fs::AtomicWriter;
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
pub struct WriteArgs {
    /// File to replace; missing parent directories are created
    pub path: PathBuf,

    /// Read content from this file instead of stdin
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Call fsync on the staged file before renaming it into place
    #[arg(long)]
    pub sync: bool,
}

pub fn execute(args: WriteArgs) -> Result<()> {
    let mut source: Box<dyn Read> = match &args.input {
        Some(input) => Box::new(File::open(input)?),
        None => Box::new(io::stdin().lock()),
    };

    let mut written = 0u64;
    AtomicWriter::new(&args.path)
        .sync(args.sync)
        .write(|file| {
            written = io::copy(&mut source, file)?;
            Ok::<(), io::Error>(())
        })?;

    log::info!("Wrote {} bytes to {}", written, args.path.display());
    println!(
        "{} Wrote {} bytes to {}",
        "✓".green().bold(),
        written,
        args.path.display()
    );
    Ok(())
}
