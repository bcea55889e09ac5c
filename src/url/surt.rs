//! SURT host transformation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DOTTED_QUAD: Regex = Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").unwrap();
}

/// Reverse a host's DNS labels into SURT order: `a.b.c` becomes `c,b,a,`
/// (always with the trailing comma), so URLs sharing a domain sort together.
///
/// IPv4 hosts and bracketed IPv6 literals have no label hierarchy to reverse
/// and pass through unchanged.
///
/// # Examples
///
/// ```
/// use surturl::host_to_surt;
///
/// assert_eq!(host_to_surt("www24.us.archive.org"), "org,archive,us,www24,");
/// assert_eq!(host_to_surt("192.168.99.99"), "192.168.99.99");
/// assert_eq!(host_to_surt("[2001:db8::1]"), "[2001:db8::1]");
/// ```
pub fn host_to_surt(host: &str) -> String {
    if host.starts_with('[') || DOTTED_QUAD.is_match(host) {
        return host.to_string();
    }
    let mut out = String::with_capacity(host.len() + 1);
    for label in host.rsplit('.') {
        out.push_str(label);
        out.push(',');
    }
    out
}
