//! CIDR block parsing, address enumeration and allocation.
//!
//! Enumeration walks a block from its network address upward by treating the
//! raw address octets as a big-endian integer. The usable range drops the
//! first two addresses (network address and the first-host gateway slot) and
//! the last one (broadcast):
//!
//! ```text
//! 10.0.0.0/29  ->  .0 .1 | .2 .3 .4 .5 .6 | .7
//!                  skip     usable          skip
//! ```
//!
//! Blocks too small to carry that layout are rejected with
//! [`CidrError::BlockTooSmall`] instead of being sliced out of range.

use std::collections::HashSet;
use std::fmt;
use std::iter::{Skip, Take};
use std::net::IpAddr;
use std::str::FromStr;

use ipnet::IpNet;
use thiserror::Error;
use tracing::{debug, trace};

use crate::ip::canonical_string;

/// Addresses skipped at the start of a block: network address and gateway slot.
pub const RESERVED_LEADING: usize = 2;

/// Addresses skipped at the end of a block: broadcast.
pub const RESERVED_TRAILING: usize = 1;

/// Smallest block (in addresses) that can be enumerated.
///
/// A block of exactly this size enumerates to nothing.
pub const MIN_BLOCK_SIZE: u128 = 4;

/// Default cap on the number of addresses materialised through
/// [`crate::AddressUtil::all_addresses`].
pub const DEFAULT_MAX_ADDRESSES: usize = 1 << 20;

/// Cap applied by [`get_all_addresses_from_cidr`]: the usable count of
/// `0.0.0.0/0`, so every IPv4 block enumerates in full.
pub const IPV4_SPACE_LIMIT: usize = u32::MAX as usize - 2;

#[derive(Debug, Error)]
pub enum CidrError {
    #[error(transparent)]
    Parse(#[from] ipnet::AddrParseError),
    #[error("no more available address from cidr {cidr}")]
    NoAvailableAddress { cidr: IpNet },
    #[error("cidr {cidr} holds {size} addresses, too few to enumerate")]
    BlockTooSmall { cidr: IpNet, size: u128 },
    #[error("cidr {cidr} holds more than {limit} usable addresses")]
    TooManyAddresses { cidr: IpNet, limit: usize },
}

/// Add one to a big-endian unsigned integer stored in `bytes`, propagating
/// the carry towards the most significant byte.
///
/// Returns `false` if the value wrapped around to zero.
pub fn increment_be(bytes: &mut [u8]) -> bool {
    for byte in bytes.iter_mut().rev() {
        let (value, carry) = byte.overflowing_add(1);
        *byte = value;
        if !carry {
            return true;
        }
    }
    false
}

/// A parsed `address/prefix-length` block.
///
/// Keeps the literal address component; use [`CidrBlock::network`] for the
/// masked network address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CidrBlock(IpNet);

impl CidrBlock {
    pub fn new(net: IpNet) -> Self {
        Self(net)
    }

    pub fn net(&self) -> IpNet {
        self.0
    }

    /// The address component as written, not masked.
    pub fn addr(&self) -> IpAddr {
        self.0.addr()
    }

    /// The first address of the block (host bits all zero).
    pub fn network(&self) -> IpAddr {
        self.0.network()
    }

    pub fn prefix_len(&self) -> u8 {
        self.0.prefix_len()
    }

    /// Total number of addresses in the block, or `None` for an IPv6 `/0`
    /// whose size does not fit in a `u128`.
    pub fn size(&self) -> Option<u128> {
        let host_bits = self.0.max_prefix_len() - self.0.prefix_len();
        1u128.checked_shl(u32::from(host_bits))
    }

    /// Number of addresses [`CidrBlock::usable_addresses`] yields.
    pub fn usable_count(&self) -> Result<u128, CidrError> {
        match self.size() {
            Some(size) if size < MIN_BLOCK_SIZE => Err(CidrError::BlockTooSmall {
                cidr: self.0,
                size,
            }),
            Some(MIN_BLOCK_SIZE) => Ok(0),
            Some(size) => Ok(size - (RESERVED_LEADING + RESERVED_TRAILING) as u128),
            None => Ok(u128::MAX),
        }
    }

    /// Every address in the block, network address first.
    pub fn addresses(&self) -> Addresses {
        Addresses {
            net: self.0,
            cursor: Some(Cursor::new(self.0.network())),
        }
    }

    /// Addresses available for allocation, in ascending order.
    ///
    /// The iterator is lazy, so large IPv6 blocks are fine to walk.
    pub fn usable_addresses(&self) -> Result<UsableAddresses, CidrError> {
        let count = self.usable_count()?;
        Ok(self
            .addresses()
            .skip(RESERVED_LEADING)
            .take(usize::try_from(count).unwrap_or(usize::MAX)))
    }

    /// Collect the usable addresses as strings, refusing blocks with more than
    /// `limit` of them.
    pub fn usable_address_strings(&self, limit: usize) -> Result<Vec<String>, CidrError> {
        let count = self.usable_count()?;
        if count > limit as u128 {
            return Err(CidrError::TooManyAddresses {
                cidr: self.0,
                limit,
            });
        }

        let addresses: Vec<String> = self.usable_addresses()?.map(canonical_string).collect();
        trace!(cidr = %self, count = addresses.len(), "enumerated cidr");
        Ok(addresses)
    }

    /// First usable address not present in `reserved`.
    ///
    /// Matching is exact string comparison against the canonical rendering.
    pub fn first_available<S: AsRef<str>>(&self, reserved: &[S]) -> Result<String, CidrError> {
        let reserved: HashSet<&str> = reserved.iter().map(AsRef::as_ref).collect();

        let found = self
            .usable_addresses()?
            .map(canonical_string)
            .find(|addr| !reserved.contains(addr.as_str()));

        match found {
            Some(addr) => {
                trace!(cidr = %self, %addr, "found available address");
                Ok(addr)
            }
            None => {
                debug!(cidr = %self, reserved = reserved.len(), "cidr exhausted");
                Err(CidrError::NoAvailableAddress { cidr: self.0 })
            }
        }
    }
}

impl FromStr for CidrBlock {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<IpNet> for CidrBlock {
    fn from(net: IpNet) -> Self {
        Self(net)
    }
}

/// Iterator over the usable range of a block.
pub type UsableAddresses = Take<Skip<Addresses>>;

/// Iterator over every address of a block, see [`CidrBlock::addresses`].
#[derive(Debug, Clone)]
pub struct Addresses {
    net: IpNet,
    cursor: Option<Cursor>,
}

impl Iterator for Addresses {
    type Item = IpAddr;

    fn next(&mut self) -> Option<IpAddr> {
        let mut cursor = self.cursor.take()?;
        let addr = cursor.addr();
        if !self.net.contains(&addr) {
            return None;
        }
        if cursor.advance() {
            self.cursor = Some(cursor);
        }
        Some(addr)
    }
}

/// Owned octets of the next address to yield.
#[derive(Debug, Clone, Copy)]
enum Cursor {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl Cursor {
    fn new(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(v4) => Self::V4(v4.octets()),
            IpAddr::V6(v6) => Self::V6(v6.octets()),
        }
    }

    fn addr(&self) -> IpAddr {
        match self {
            Self::V4(octets) => IpAddr::from(*octets),
            Self::V6(octets) => IpAddr::from(*octets),
        }
    }

    fn advance(&mut self) -> bool {
        match self {
            Self::V4(octets) => increment_be(octets),
            Self::V6(octets) => increment_be(octets),
        }
    }
}

/// All usable addresses of `cidr`, see [`CidrBlock::usable_addresses`].
///
/// Any IPv4 block is enumerated in full. IPv6 blocks holding more usable
/// addresses than the IPv4 space fail with [`CidrError::TooManyAddresses`].
pub fn get_all_addresses_from_cidr(cidr: &str) -> Result<Vec<String>, CidrError> {
    cidr.parse::<CidrBlock>()?
        .usable_address_strings(IPV4_SPACE_LIMIT)
}

/// First address of `cidr` that is not listed in `reserved`.
///
/// Nothing is recorded: callers track handed-out addresses themselves.
pub fn get_available_ip<S: AsRef<str>>(cidr: &str, reserved: &[S]) -> Result<String, CidrError> {
    cidr.parse::<CidrBlock>()?.first_available(reserved)
}

/// Check if `s` is a valid `address/prefix-length` block.
pub fn is_valid_cidr(s: &str) -> bool {
    s.parse::<IpNet>().is_ok()
}

/// The address component of `cidr` as written (`10.0.0.5/24` -> `10.0.0.5`).
pub fn get_ip_from_cidr(cidr: &str) -> Result<String, CidrError> {
    Ok(canonical_string(cidr.parse::<CidrBlock>()?.addr()))
}

/// The network address of `cidr` (`10.0.0.5/24` -> `10.0.0.0`).
pub fn get_network_from_cidr(cidr: &str) -> Result<String, CidrError> {
    Ok(canonical_string(cidr.parse::<CidrBlock>()?.network()))
}
