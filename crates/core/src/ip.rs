//! IP address literal predicates.

use std::net::IpAddr;

/// Render an address the way it is reported everywhere in this crate.
///
/// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are shown as dotted quads.
pub fn canonical_string(addr: IpAddr) -> String {
    addr.to_canonical().to_string()
}

/// Check if `s` is a valid IPv4 or IPv6 address literal.
pub fn is_valid_ip(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}

/// Check if `s` is a genuine IPv6 literal.
///
/// Returns `false` for invalid input and for anything representable as IPv4,
/// including IPv4-mapped IPv6 literals.
pub fn is_ipv6(s: &str) -> bool {
    s.parse::<IpAddr>()
        .map(|addr| addr.to_canonical().is_ipv6())
        .unwrap_or(false)
}
