//! Standalone address and file helpers.
//!
//! - [`fs`] - whole-file read/write and existence checks
//! - [`cidr`] - CIDR parsing, usable-address enumeration and allocation
//! - [`ip`] - IP literal predicates
//! - [`email`] - e-mail syntax check
//! - [`config`] - tunables applied by [`AddressUtil`]
//!
//! Every free function is stateless. [`AddressUtil`] only carries a
//! [`UtilConfig`] for the operations that have something to tune.

pub mod cidr;
pub mod config;
pub mod email;
pub mod fs;
pub mod ip;

pub use cidr::{
    CidrBlock, CidrError, get_all_addresses_from_cidr, get_available_ip, get_ip_from_cidr,
    get_network_from_cidr, increment_be, is_valid_cidr,
};
pub use config::{CidrConfig, FsConfig, UtilConfig};
pub use email::is_valid_email;
pub use fs::{PathKind, directory_exists, file_exists, path_kind, read_file, write_file};
pub use ip::{is_ipv6, is_valid_ip};

use std::io;
use std::path::Path;

/// Helpers bound to a [`UtilConfig`].
#[derive(Debug, Clone, Default)]
pub struct AddressUtil {
    config: UtilConfig,
}

impl AddressUtil {
    pub fn new(config: UtilConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UtilConfig {
        &self.config
    }

    /// Write `bytes` to `path` using the configured file mode.
    pub fn write_file(&self, path: impl AsRef<Path>, bytes: impl AsRef<[u8]>) -> io::Result<()> {
        fs::write_file_with_mode(path, bytes, self.config.fs.file_mode)
    }

    /// All usable addresses of `cidr`, capped at the configured maximum.
    pub fn all_addresses(&self, cidr: &str) -> Result<Vec<String>, CidrError> {
        cidr.parse::<CidrBlock>()?
            .usable_address_strings(self.config.cidr.max_addresses)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn test_default_config() {
        let util = AddressUtil::default();
        assert_eq!(util.config().fs.file_mode, 0o644);
        assert_eq!(util.config().cidr.max_addresses, cidr::DEFAULT_MAX_ADDRESSES);
    }

    #[test]
    fn test_all_addresses_respects_limit() {
        let util = AddressUtil::new(UtilConfig {
            cidr: CidrConfig { max_addresses: 5 },
            ..Default::default()
        });

        assert_eq!(util.all_addresses("10.0.0.0/29").unwrap().len(), 5);
        assert_matches!(
            util.all_addresses("10.0.0.0/28"),
            Err(CidrError::TooManyAddresses { limit: 5, .. })
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_write_file_uses_configured_mode() {
        use std::os::unix::fs::PermissionsExt;
        use tempfile::TempDir;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("secret");
        let util = AddressUtil::new(UtilConfig {
            fs: FsConfig { file_mode: 0o600 },
            ..Default::default()
        });

        util.write_file(&path, b"k").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode & 0o077, 0);
        assert_eq!(read_file(&path).unwrap(), b"k");
    }
}
