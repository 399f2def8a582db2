//! `cidr` command: enumerate, inspect and pick addresses.

use std::io::Write;

use addrutil_core::{
    AddressUtil, get_available_ip, get_ip_from_cidr, get_network_from_cidr, read_file,
};
use eyre::{Result, WrapErr};
use tracing::debug;

use super::parse_address_list;
use crate::cli::CidrCommand;

/// Run a `cidr` subcommand.
pub fn run(command: CidrCommand, util: &AddressUtil, out: &mut impl Write) -> Result<()> {
    match command {
        CidrCommand::List { cidr } => {
            let addresses = util
                .all_addresses(&cidr)
                .wrap_err_with(|| format!("failed to enumerate {cidr}"))?;
            for addr in addresses {
                writeln!(out, "{addr}")?;
            }
        }
        CidrCommand::Ip { cidr, network } => {
            let addr = if network {
                get_network_from_cidr(&cidr)
            } else {
                get_ip_from_cidr(&cidr)
            };
            let addr = addr.wrap_err_with(|| format!("invalid cidr {cidr}"))?;
            writeln!(out, "{addr}")?;
        }
        CidrCommand::Next {
            cidr,
            mut reserved,
            reserved_file,
        } => {
            if let Some(path) = reserved_file {
                let bytes = read_file(&path)
                    .wrap_err_with(|| format!("failed to read {}", path.display()))?;
                reserved.extend(parse_address_list(&bytes)?);
            }
            debug!(%cidr, reserved = reserved.len(), "searching for available address");

            let addr = get_available_ip(&cidr, &reserved)
                .wrap_err_with(|| format!("no address available in {cidr}"))?;
            writeln!(out, "{addr}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn run_to_string(command: CidrCommand) -> Result<String> {
        let mut out = Vec::new();
        run(command, &AddressUtil::default(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_list() {
        let out = run_to_string(CidrCommand::List {
            cidr: "192.168.10.0/29".to_string(),
        })
        .unwrap();
        assert_eq!(out, "192.168.10.2\n192.168.10.3\n192.168.10.4\n192.168.10.5\n192.168.10.6\n");
    }

    #[test]
    fn test_list_small_block() {
        let out = run_to_string(CidrCommand::List {
            cidr: "192.168.0.0/30".to_string(),
        })
        .unwrap();
        assert!(out.is_empty());

        assert!(
            run_to_string(CidrCommand::List {
                cidr: "192.168.0.0/31".to_string(),
            })
            .is_err()
        );
    }

    #[test]
    fn test_ip() {
        let out = run_to_string(CidrCommand::Ip {
            cidr: "10.0.0.5/24".to_string(),
            network: false,
        })
        .unwrap();
        assert_eq!(out, "10.0.0.5\n");

        let out = run_to_string(CidrCommand::Ip {
            cidr: "10.0.0.5/24".to_string(),
            network: true,
        })
        .unwrap();
        assert_eq!(out, "10.0.0.0\n");
    }

    #[test]
    fn test_next_with_reserved_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reserved.txt");
        fs::write(&path, "10.0.0.2\n# comment\n10.0.0.4\n").unwrap();

        let out = run_to_string(CidrCommand::Next {
            cidr: "10.0.0.0/24".to_string(),
            reserved: vec!["10.0.0.3".to_string()],
            reserved_file: Some(path),
        })
        .unwrap();
        assert_eq!(out, "10.0.0.5\n");
    }

    #[test]
    fn test_next_missing_reserved_file() {
        let dir = TempDir::new().unwrap();
        let err = run_to_string(CidrCommand::Next {
            cidr: "10.0.0.0/24".to_string(),
            reserved: Vec::new(),
            reserved_file: Some(dir.path().join("absent")),
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("failed to read"));
    }

    #[test]
    fn test_next_exhausted() {
        let reserved = ["10.0.0.2", "10.0.0.3", "10.0.0.4", "10.0.0.5", "10.0.0.6"]
            .map(String::from)
            .to_vec();
        let err = run_to_string(CidrCommand::Next {
            cidr: "10.0.0.0/29".to_string(),
            reserved,
            reserved_file: None,
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "no address available in 10.0.0.0/29");
    }
}
