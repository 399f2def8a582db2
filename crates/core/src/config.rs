//! Tunables for [`AddressUtil`](crate::AddressUtil).

use serde::{Deserialize, Serialize};

use crate::cidr::DEFAULT_MAX_ADDRESSES;
use crate::fs::DEFAULT_FILE_MODE;

/// Helper configuration (TOML-serializable).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilConfig {
    /// File helper settings.
    pub fs: FsConfig,

    /// CIDR helper settings.
    pub cidr: CidrConfig,
}

/// File helper settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FsConfig {
    /// Permission bits for newly created files.
    pub file_mode: u32,
}

impl Default for FsConfig {
    fn default() -> Self {
        Self {
            file_mode: DEFAULT_FILE_MODE,
        }
    }
}

/// CIDR helper settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CidrConfig {
    /// Largest number of addresses a full enumeration may return.
    pub max_addresses: usize,
}

impl Default for CidrConfig {
    fn default() -> Self {
        Self {
            max_addresses: DEFAULT_MAX_ADDRESSES,
        }
    }
}
