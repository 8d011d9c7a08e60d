use crate::error::Result;
use crate::fs::{EntryKind, probe};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
pub struct ProbeArgs {
    /// Paths to inspect
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Print nothing; exit 0 only if every path is of this kind
    #[arg(long, value_enum, value_name = "KIND")]
    pub kind: Option<KindFilter>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    File,
    Dir,
    Any,
}

impl KindFilter {
    fn matches(self, kind: EntryKind) -> bool {
        match self {
            KindFilter::File => kind == EntryKind::File,
            KindFilter::Dir => kind == EntryKind::Directory,
            KindFilter::Any => kind.exists(),
        }
    }
}

/// Returns the exit code: 0 when every path matches the filter (or no
/// filter was given), 1 otherwise.
pub fn execute(args: ProbeArgs) -> Result<i32> {
    let mut all_match = true;

    for path in &args.paths {
        let kind = probe::kind(path)?;
        log::debug!("{} is {}", path.display(), kind);

        match args.kind {
            Some(filter) => all_match &= filter.matches(kind),
            None => {
                let label = match kind {
                    EntryKind::File => kind.to_string().green(),
                    EntryKind::Directory => kind.to_string().blue(),
                    EntryKind::Other => kind.to_string().cyan(),
                    EntryKind::Missing => kind.to_string().yellow(),
                };
                println!("{}: {}", path.display(), label);
            }
        }
    }

    Ok(if all_match { 0 } else { 1 })
}
