//! Client identity resolution.
//!
//! Ratings are deduplicated and attributed by the caller's effective network
//! address. Behind a proxy chain the originating client is the first entry of
//! the forwarded-for header; otherwise the direct connection's remote address
//! is used.

use std::net::IpAddr;

/// Header inspected for the proxied client address.
pub const FORWARDED_FOR_HEADER: &str = "x-forwarded-for";

/// Resolve the caller's effective address string.
///
/// Takes the first comma-separated entry of the forwarded-for header value,
/// trimmed. Falls back to the remote address of the direct connection, and
/// finally to the empty string. The result is never validated as an address;
/// it is only used as an opaque identity key.
#[must_use]
pub fn resolve_client_ip(forwarded_for: Option<&str>, remote_addr: Option<IpAddr>) -> String {
    if let Some(value) = forwarded_for {
        let first = value.split(',').next().unwrap_or(value).trim();
        if !first.is_empty() {
            return first.to_string();
        }
    }

    remote_addr.map_or_else(String::new, |addr| addr.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    const REMOTE: IpAddr = IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1));

    #[test]
    fn test_first_forwarded_entry_wins() {
        let ip = resolve_client_ip(Some("203.0.113.7, 70.41.3.18, 150.172.238.178"), Some(REMOTE));
        assert_eq!(ip, "203.0.113.7");
    }

    #[test]
    fn test_forwarded_entry_is_trimmed() {
        let ip = resolve_client_ip(Some("  203.0.113.7  , 70.41.3.18"), Some(REMOTE));
        assert_eq!(ip, "203.0.113.7");
    }

    #[test]
    fn test_same_header_resolves_to_same_identity() {
        let header = " 203.0.113.7 ,10.0.0.2";
        let a = resolve_client_ip(Some(header), Some(REMOTE));
        let b = resolve_client_ip(Some(header), None);
        assert_eq!(a, b);
    }

    #[test]
    fn test_falls_back_to_remote_addr() {
        assert_eq!(resolve_client_ip(None, Some(REMOTE)), "10.0.0.1");
    }

    #[test]
    fn test_blank_header_falls_back_to_remote_addr() {
        assert_eq!(resolve_client_ip(Some("   "), Some(REMOTE)), "10.0.0.1");
    }

    #[test]
    fn test_no_metadata_yields_empty_string() {
        assert_eq!(resolve_client_ip(None, None), "");
    }
}
