//! `alloc` command: hand out the next free address and record it.
//!
//! The ledger is a plain text file with one address per line. Allocation is
//! read, pick, append, write back; there is no locking between concurrent
//! invocations.

use std::io::Write;
use std::path::Path;

use addrutil_core::{AddressUtil, PathKind, get_available_ip, path_kind, read_file};
use eyre::{Result, WrapErr, bail};
use tracing::info;

use super::parse_address_list;
use crate::cli::AllocArgs;

/// Run the `alloc` command.
pub fn run(args: AllocArgs, util: &AddressUtil, out: &mut impl Write) -> Result<()> {
    let addr = allocate(&args.cidr, &args.ledger, util)?;
    writeln!(out, "{addr}")?;
    Ok(())
}

/// Pick the first address of `cidr` missing from `ledger` and append it.
pub fn allocate(cidr: &str, ledger: &Path, util: &AddressUtil) -> Result<String> {
    let mut contents = match path_kind(ledger) {
        PathKind::File => read_file(ledger)
            .wrap_err_with(|| format!("failed to read ledger {}", ledger.display()))?,
        PathKind::Missing => Vec::new(),
        PathKind::Directory => bail!("ledger {} is a directory", ledger.display()),
        PathKind::Unknown(kind) => bail!("cannot inspect ledger {}: {kind}", ledger.display()),
    };

    let taken = parse_address_list(&contents)?;
    let addr = get_available_ip(cidr, &taken)
        .wrap_err_with(|| format!("failed to allocate from {cidr}"))?;

    if !contents.is_empty() && !contents.ends_with(b"\n") {
        contents.push(b'\n');
    }
    contents.extend_from_slice(addr.as_bytes());
    contents.push(b'\n');

    util.write_file(ledger, &contents)
        .wrap_err_with(|| format!("failed to write ledger {}", ledger.display()))?;

    info!(%cidr, %addr, ledger = %ledger.display(), taken = taken.len(), "allocated address");
    Ok(addr)
}
