//! Permissive URL decomposition.
//!
//! A deliberately forgiving parser for the URLs crawlers actually see:
//! leading junk whitespace, embedded line breaks, missing schemes, non-ASCII
//! hosts, empty authorities. It follows the RFC 2396 appendix-B regex
//! approach rather than strict RFC 3986 validation — the grammar accepts
//! nearly anything and the canonicalizer cleans up afterwards.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::UrlError;
use crate::types::HandyUrl;

/// ARC/WARC DNS resolution record scheme.
pub const DNS_SCHEME: &str = "dns:";
/// ARC header record scheme.
pub const FILEDESC_SCHEME: &str = "filedesc:";
/// WARC header record scheme.
pub const WARCINFO_SCHEME: &str = "warcinfo:";

lazy_static! {
    /// RFC 2396 appendix-B decomposition regex, with three changes: the
    /// scheme token is restricted to legal scheme characters, the whole
    /// hier-part is optional so a fragment-only reference parses, and the
    /// authority keeps its userinfo/host/port structure for the second-stage
    /// split below.
    ///
    /// Groups: 2 scheme, 5 authority, 6 path, 8 query, 10 fragment.
    static ref RFC2396_REGEX: Regex = Regex::new(
        r"(?s)^(([a-zA-Z][a-zA-Z0-9+.-]*):)?((//([^/?#]*))?([^?#]*)(\?([^#]*))?)?(#(.*))?$"
    )
    .unwrap();

    /// Authority split per RFC 3986: `user[:pass]@host[:port]`, where host is
    /// a reg-name/IPv4 or a bracketed IPv6 literal.
    ///
    /// Groups: 2 user, 4 pass, 5 host, 9 port.
    static ref URI_AUTHORITY_REGEX: Regex =
        Regex::new(r"^(([^:@]*)(:([^@]*))?@)?(([^:/#?]*)|(\[[^/#?]*\]))(:([0-9]+)?)?$").unwrap();

    /// Characters removed outright wherever they appear: TAB, CR, LF, NEL,
    /// and the Unicode line/paragraph separators.
    static ref STRAY_SPACING: Regex = Regex::new(r"[\n\r\t\p{Zl}\p{Zp}\x{85}]+").unwrap();

    static ref SCHEME_PATTERN: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*:").unwrap();
}

/// Trim like `str::trim`, but treating every control byte at or below space,
/// and U+00A0, as trimmable.
///
/// # Examples
///
/// ```
/// use surturl::trim;
///
/// assert_eq!(trim(" \u{4} \t \n\u{0} \r   blahblah \u{a0}"), "blahblah");
/// assert_eq!(trim("bla h\u{a0}b lah"), "bla h\u{a0}b lah");
/// ```
pub fn trim(s: &str) -> &str {
    s.trim_matches(|c: char| c <= '\u{20}' || c == '\u{a0}')
}

/// True when the string starts with a legal scheme token and colon.
pub fn has_scheme(url: &str) -> bool {
    SCHEME_PATTERN.is_match(url)
}

/// Extract the scheme token from a URL string, if it has one.
///
/// # Examples
///
/// ```
/// use surturl::url_to_scheme;
///
/// assert_eq!(url_to_scheme("https://example.com/"), Some("https"));
/// assert_eq!(url_to_scheme("example.com/"), None);
/// ```
pub fn url_to_scheme(url: &str) -> Option<&str> {
    SCHEME_PATTERN.find(url).map(|m| &url[..m.end() - 1])
}

/// Prefix `http://` (or just `http:` before a `//`) when the string carries
/// no scheme of its own.
pub fn add_default_scheme_if_needed(url: &str) -> String {
    if has_scheme(url) {
        url.to_string()
    } else if url.starts_with("//") {
        format!("http:{}", url)
    } else {
        format!("http://{}", url)
    }
}

/// Parse a raw URL string into a [`HandyUrl`].
///
/// When `allow_relative` is false a missing scheme is repaired with `http`
/// before parsing. Whitespace is trimmed and stray line-break characters are
/// removed first. Fails only when the authority cannot be split or carries a
/// bad port; a parsed URL is returned whole or not at all.
///
/// # Examples
///
/// ```
/// use surturl::parse;
///
/// let url = parse("http://jdoe@example.com:8080/a/b?q#frag", false)?;
/// assert_eq!(url.scheme.as_deref(), Some("http"));
/// assert_eq!(url.auth_user.as_deref(), Some("jdoe"));
/// assert_eq!(url.host.as_deref(), Some("example.com"));
/// assert_eq!(url.port, Some(8080));
/// assert_eq!(url.path, "/a/b");
/// assert_eq!(url.query.as_deref(), Some("q"));
/// assert_eq!(url.fragment.as_deref(), Some("frag"));
/// # Ok::<(), surturl::UrlError>(())
/// ```
pub fn parse(url: &str, allow_relative: bool) -> Result<HandyUrl, UrlError> {
    let trimmed = trim(url);
    let cleaned = STRAY_SPACING.replace_all(trimmed, "");
    let cleaned = if allow_relative {
        cleaned.into_owned()
    } else {
        add_default_scheme_if_needed(&cleaned)
    };

    let caps = RFC2396_REGEX
        .captures(&cleaned)
        .ok_or_else(|| UrlError::malformed(&cleaned, "string does not match URL grammar"))?;

    let scheme = caps.get(2).map(|m| m.as_str().to_string());
    let authority = caps.get(5).map(|m| m.as_str());
    let path = caps.get(6).map_or("", |m| m.as_str()).to_string();
    let query = caps.get(8).map(|m| m.as_str().to_string());
    let fragment = caps.get(10).map(|m| m.as_str().to_string());

    let mut auth_user = None;
    let mut auth_pass = None;
    let mut host = None;
    let mut port = None;
    if let Some(authority) = authority {
        let acaps =
            URI_AUTHORITY_REGEX
                .captures(authority)
                .ok_or_else(|| UrlError::MalformedAuthority {
                    url: cleaned.clone(),
                    authority: authority.to_string(),
                })?;
        auth_user = acaps.get(2).map(|m| m.as_str().to_string());
        auth_pass = acaps.get(4).map(|m| m.as_str().to_string());
        host = acaps.get(5).map(|m| m.as_str().to_string());
        if let Some(digits) = acaps.get(9) {
            port = Some(digits.as_str().parse::<u16>().map_err(|_| {
                UrlError::InvalidPort {
                    url: cleaned.clone(),
                    port: digits.as_str().to_string(),
                }
            })?);
        }
    }

    Ok(HandyUrl {
        scheme,
        auth_user,
        auth_pass,
        host,
        port,
        path,
        query,
        fragment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim() {
        assert_eq!(trim("blahblah"), "blahblah");
        assert_eq!(trim(" blahblah"), "blahblah");
        assert_eq!(trim("  \u{a0}     blahblah"), "blahblah");
        assert_eq!(trim("  \t  \r   blahblah"), "blahblah");
        assert_eq!(trim(" \u{4} \t \n\u{0} \r   blahblah \u{a0}"), "blahblah");
        assert_eq!(
            trim(" \u{4} \t \n\u{0} \r   bla h\u{a0}b lah \u{a0} \t \n\u{0} \r "),
            "bla h\u{a0}b lah"
        );
        assert_eq!(trim(""), "");
        assert_eq!(trim(" "), "");
        assert_eq!(trim(" \u{4} \t \n\u{0} \r  \u{a0} \t \n\u{0} \r "), "");
    }

    #[test]
    fn test_add_default_scheme_if_needed() {
        assert_eq!(add_default_scheme_if_needed(""), "http://");
        assert_eq!(
            add_default_scheme_if_needed("http://www.fool.com"),
            "http://www.fool.com"
        );
        assert_eq!(
            add_default_scheme_if_needed("www.fool.com/"),
            "http://www.fool.com/"
        );
        assert_eq!(
            add_default_scheme_if_needed("//www.fool.com"),
            "http://www.fool.com"
        );
    }

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("http://foo"));
        assert!(has_scheme("bitcoin:blah"));
        assert!(has_scheme("x:"));
        assert!(!has_scheme("1http://foo"));
        assert!(!has_scheme(" http://foo"));
        assert!(!has_scheme("foo/bar"));
    }

    #[test]
    fn test_url_to_scheme() {
        assert_eq!(url_to_scheme("https://x/"), Some("https"));
        assert_eq!(url_to_scheme("warcinfo:blah"), Some("warcinfo"));
        assert_eq!(url_to_scheme("/relative/path"), None);
    }

    #[test]
    fn test_bad_port() {
        // a non-numeric port fails the authority grammar
        assert!(matches!(
            parse("http://example.com:bad/", false),
            Err(UrlError::MalformedAuthority { .. })
        ));
        // all-digits but out of range
        assert!(matches!(
            parse("http://example.com:99999/", false),
            Err(UrlError::InvalidPort { .. })
        ));
        // trailing colon with no digits is fine
        let url = parse("http://example.com:/", false).unwrap();
        assert_eq!(url.port, None);
    }

    #[test]
    fn test_empty_authority_is_empty_host() {
        let url = parse("http:///path", false).unwrap();
        assert_eq!(url.host.as_deref(), Some(""));
        assert_eq!(url.path, "/path");

        let url = parse("/path", true).unwrap();
        assert_eq!(url.host, None);
    }
}
