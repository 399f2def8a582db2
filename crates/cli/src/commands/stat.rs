//! `stat` command.

use std::io::Write;

use addrutil_core::{PathKind, path_kind};
use eyre::Result;

use crate::cli::StatArgs;

/// Human-readable name of a path kind.
pub fn describe(kind: PathKind) -> String {
    match kind {
        PathKind::File => "file".to_string(),
        PathKind::Directory => "directory".to_string(),
        PathKind::Missing => "missing".to_string(),
        PathKind::Unknown(err) => format!("unknown ({err})"),
    }
}

/// Run the `stat` command.
pub fn run(args: StatArgs, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", describe(path_kind(&args.path)))?;
    Ok(())
}
