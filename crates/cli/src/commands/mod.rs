//! Subcommand implementations.
//!
//! Each command writes its result to the given output so it can be driven from
//! tests as well as from [`run`](crate::run).

pub mod alloc;
pub mod check;
pub mod cidr;
pub mod stat;

use eyre::{Result, WrapErr};

/// Parse an address list: one address per line, surrounding whitespace
/// trimmed, blank lines and `#` comments skipped.
pub fn parse_address_list(bytes: &[u8]) -> Result<Vec<String>> {
    let text = std::str::from_utf8(bytes).wrap_err("address list is not valid UTF-8")?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect())
}
