//! Public Suffix List lookups for host prefix/suffix splitting.
//!
//! "Public suffix" here follows archive convention: the *registrable domain*
//! (`www.fool.com` → `fool.com`, `www.amazon.co.uk` → `amazon.co.uk`), which
//! is the part URLs sharing an owner have in common. The prefix is whatever
//! the owner put in front of it.

use psl::{List, Psl};

/// The registrable domain of `host`, per the Public Suffix List.
///
/// Returns `None` when the PSL has no answer (a bare suffix, a single label,
/// an IP address).
///
/// # Examples
///
/// ```
/// use surturl::host_to_public_suffix;
///
/// assert_eq!(
///     host_to_public_suffix("www.images.amazon.co.uk").as_deref(),
///     Some("amazon.co.uk")
/// );
/// ```
pub fn host_to_public_suffix(host: &str) -> Option<String> {
    let domain = List.domain(host.as_bytes())?;
    std::str::from_utf8(domain.as_bytes())
        .ok()
        .map(|s| s.to_string())
}

/// Everything of `host` left of its registrable domain, without the joining
/// dot. Empty when the host *is* its registrable domain.
pub fn host_to_public_prefix(host: &str) -> Option<String> {
    let suffix = host_to_public_suffix(host)?;
    if host.len() > suffix.len() + 1 {
        Some(host[..host.len() - suffix.len() - 1].to_string())
    } else {
        Some(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_host() {
        assert_eq!(
            host_to_public_suffix("www.fool.com").as_deref(),
            Some("fool.com")
        );
        assert_eq!(host_to_public_prefix("www.fool.com").as_deref(), Some("www"));
    }

    #[test]
    fn test_multi_label_suffix() {
        assert_eq!(
            host_to_public_suffix("www.amazon.co.uk").as_deref(),
            Some("amazon.co.uk")
        );
        assert_eq!(
            host_to_public_prefix("www.amazon.co.uk").as_deref(),
            Some("www")
        );
        assert_eq!(
            host_to_public_suffix("www.images.amazon.co.uk").as_deref(),
            Some("amazon.co.uk")
        );
        assert_eq!(
            host_to_public_prefix("www.images.amazon.co.uk").as_deref(),
            Some("www.images")
        );
        assert_eq!(
            host_to_public_suffix("funky-images.fancy.co.jp").as_deref(),
            Some("fancy.co.jp")
        );
        assert_eq!(
            host_to_public_prefix("funky-images.fancy.co.jp").as_deref(),
            Some("funky-images")
        );
    }

    #[test]
    fn test_host_equal_to_domain() {
        assert_eq!(
            host_to_public_suffix("fool.com").as_deref(),
            Some("fool.com")
        );
        assert_eq!(host_to_public_prefix("fool.com").as_deref(), Some(""));
    }
}
