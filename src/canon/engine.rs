//! The rules-driven canonicalizer.
//!
//! [`Canonicalizer::canonicalize`] applies one pass per URL component in a
//! fixed order: scheme, userinfo, host, port, path, query, fragment. The
//! order matters; default-port stripping, for example, must see the
//! already-lowercased scheme. Within each pass the individual transforms also
//! run in a fixed order, inherited from long-standing archive behavior.

use std::net::Ipv4Addr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::canon::codec;
use crate::canon::profiles;
use crate::canon::rules::*;
use crate::canon::session;
use crate::error::UrlError;
use crate::types::HandyUrl;
use crate::url::parser;

lazy_static! {
    static ref MULTI_SLASH: Regex = Regex::new(r"/+").unwrap();
    static ref MULTI_DOT: Regex = Regex::new(r"\.\.+").unwrap();
    static ref WWWN_PREFIX: Regex = Regex::new(r"^www\d*\.").unwrap();
    static ref PURE_INTEGER: Regex = Regex::new(r"^\d+$").unwrap();
    static ref OCTAL_IP: Regex =
        Regex::new(r"^(0[0-7]*)(\.[0-7]+)?(\.[0-7]+)?(\.[0-7]+)?$").unwrap();
    static ref DECIMAL_IP: Regex =
        Regex::new(r"^([1-9][0-9]*)(\.[0-9]+)?(\.[0-9]+)?(\.[0-9]+)?$").unwrap();
}

/// Applies a [`CanonicalizeRules`] set to parsed URLs.
///
/// # Examples
///
/// ```
/// use surturl::Canonicalizer;
///
/// let canon = Canonicalizer::aggressive();
/// assert_eq!(
///     canon.canonicalize_url_string("http://www.alexa.com/").unwrap(),
///     "http://alexa.com/"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Canonicalizer {
    rules: CanonicalizeRules,
}

impl Canonicalizer {
    pub fn new(rules: CanonicalizeRules) -> Canonicalizer {
        Canonicalizer { rules }
    }

    /// Google-style basic fixup.
    pub fn basic() -> Canonicalizer {
        Canonicalizer::new(profiles::basic())
    }

    /// The archive-standard "usable URL" profile.
    pub fn usable() -> Canonicalizer {
        Canonicalizer::new(profiles::usable())
    }

    /// [`Canonicalizer::usable`] plus scheme/host lowercasing and
    /// empty-query stripping.
    pub fn ordinary() -> Canonicalizer {
        Canonicalizer::new(profiles::ordinary())
    }

    /// The index-key profile: everything [`Canonicalizer::ordinary`] does,
    /// plus www-prefix removal, path/query lowercasing, session-id and
    /// userinfo stripping, and query reordering.
    pub fn aggressive() -> Canonicalizer {
        Canonicalizer::new(profiles::aggressive())
    }

    /// [`Canonicalizer::aggressive`] without www-prefix removal.
    pub fn non_massaging_aggressive() -> Canonicalizer {
        Canonicalizer::new(profiles::non_massaging_aggressive())
    }

    pub fn rules(&self) -> &CanonicalizeRules {
        &self.rules
    }

    /// Canonicalize `url` in place. Never fails; transforms that cannot
    /// confidently normalize a value leave it unchanged.
    pub fn canonicalize(&self, url: &mut HandyUrl) {
        self.apply_scheme_rules(url);
        self.apply_auth_rules(url);
        self.apply_host_rules(url);
        self.apply_port_rules(url);
        self.apply_path_rules(url);
        self.apply_query_rules(url);
        self.apply_fragment_rules(url);
    }

    /// Parse a raw string (injecting `http://` when it has no scheme),
    /// canonicalize it, and render the result.
    pub fn canonicalize_url_string(&self, url: &str) -> Result<String, UrlError> {
        let mut handy = parser::parse(url, false)?;
        self.canonicalize(&mut handy);
        Ok(handy.url_string())
    }

    fn apply_scheme_rules(&self, url: &mut HandyUrl) {
        if is_set(self.rules.scheme, SCHEME_LOWERCASE) {
            if let Some(scheme) = url.scheme.take() {
                url.scheme = Some(scheme.to_lowercase());
            }
        }
    }

    fn apply_auth_rules(&self, url: &mut HandyUrl) {
        if is_set(self.rules.auth, AUTH_STRIP_AUTH) {
            url.auth_user = None;
            url.auth_pass = None;
        }
        if is_set(self.rules.auth, AUTH_STRIP_PASS) {
            url.auth_pass = None;
        }
        if is_set(self.rules.auth, AUTH_MINIMAL_ESCAPE) {
            url.auth_user = url
                .auth_user
                .take()
                .map(|u| codec::escape(&codec::unescape(&u), codec::EXTRA_ESCAPE_CHARS));
            url.auth_pass = url
                .auth_pass
                .take()
                .map(|p| codec::escape(&codec::unescape(&p), codec::EXTRA_ESCAPE_CHARS));
        }
    }

    fn apply_host_rules(&self, url: &mut HandyUrl) {
        let Some(mut host) = url.host.take() else {
            return;
        };
        if is_set(self.rules.host, HOST_MINIMAL_ESCAPE) {
            host = codec::unescape(&host);
        }
        if is_set(self.rules.host, HOST_IDN_TO_ASCII) {
            // a host the IDN mapping rejects is left as typed
            if let Ok(ascii) = idna::domain_to_ascii(&host) {
                host = ascii;
            }
        }
        if is_set(self.rules.host, HOST_REMOVE_EXTRA_DOTS) {
            host = MULTI_DOT
                .replace_all(host.trim_start_matches('.'), ".")
                .into_owned();
            if let Some(stripped) = host.strip_suffix('.') {
                host = stripped.to_string();
            }
        }
        if is_set(self.rules.host, HOST_CANONICALIZE_IPV4) {
            if let Some(ipv4) = attempt_ipv4_formats(&host) {
                host = ipv4;
            }
        }
        if is_set(self.rules.host, HOST_TRIM_ENCODED_WHITESPACE) {
            host = parser::trim(&host).to_string();
        }
        if is_set(self.rules.host, HOST_MINIMAL_ESCAPE) {
            host = codec::escape(&host, codec::EXTRA_ESCAPE_CHARS);
        }
        if is_set(self.rules.host, HOST_LOWERCASE) {
            host = host.to_lowercase();
        }
        if is_set(self.rules.host, HOST_MASSAGE) {
            host = massage_host(&host).to_string();
        }
        url.host = Some(host);
    }

    fn apply_port_rules(&self, url: &mut HandyUrl) {
        if is_set(self.rules.port, PORT_STRIP_DEFAULT) {
            if let (Some(port), Some(scheme)) = (url.port, url.scheme.as_deref()) {
                if default_port(scheme) == Some(port) {
                    url.port = None;
                }
            }
        }
    }

    fn apply_path_rules(&self, url: &mut HandyUrl) {
        let mut path = std::mem::take(&mut url.path);
        if url.host.is_none() && !path.starts_with('/') {
            // An opaque remainder like the "foo.org" of "dns:foo.org" has no
            // directory structure to normalize; escaping is all that applies.
            if is_set(self.rules.path, PATH_MINIMAL_ESCAPE) {
                path = codec::escape(&codec::unescape(&path), codec::EXTRA_ESCAPE_CHARS);
            }
        } else {
            if is_set(self.rules.path, PATH_BACKSLASH_TO_SLASH) {
                path = path.replace('\\', "/");
            }
            if is_set(self.rules.path, PATH_COLLAPSE_MULTIPLE_SLASHES) {
                path = MULTI_SLASH.replace_all(&path, "/").into_owned();
            }
            if is_set(self.rules.path, PATH_MINIMAL_ESCAPE) {
                path = codec::unescape(&path);
            }
            if is_set(self.rules.path, PATH_NORMALIZE_DOT_SEGMENTS) {
                path = normalize_path(&path);
            }
            if is_set(self.rules.path, PATH_MINIMAL_ESCAPE) {
                path = codec::escape(&path, codec::EXTRA_ESCAPE_CHARS);
            }
            if is_set(self.rules.path, PATH_LOWERCASE) {
                path = path.to_lowercase();
            }
            if is_set(self.rules.path, PATH_STRIP_SESSION_ID) {
                path = session::strip_path_session_id(&path);
            }
            if is_set(self.rules.path, PATH_STRIP_TRAILING_SLASH_UNLESS_EMPTY)
                && path.ends_with('/')
                && path.len() > 1
            {
                path.pop();
            }
        }
        url.path = path;
    }

    fn apply_query_rules(&self, url: &mut HandyUrl) {
        let Some(mut query) = url.query.take() else {
            return;
        };
        if query.is_empty() {
            if is_set(self.rules.query, QUERY_STRIP_EMPTY) {
                return;
            }
        } else {
            if is_set(self.rules.query, QUERY_MINIMAL_ESCAPE) {
                query = codec::escape(&codec::unescape(&query), codec::EXTRA_QUERY_ESCAPE_CHARS);
            }
            if is_set(self.rules.query, QUERY_STRIP_SESSION_ID) {
                query = session::strip_query_session_id(&query);
            }
            if is_set(self.rules.query, QUERY_LOWERCASE) {
                query = query.to_lowercase();
            }
            if is_set(self.rules.query, QUERY_ALPHA_REORDER) {
                query = alpha_reorder_query(&query);
            }
        }
        url.query = Some(query);
    }

    fn apply_fragment_rules(&self, url: &mut HandyUrl) {
        if is_set(self.rules.fragment, FRAGMENT_STRIP) {
            url.fragment = None;
        }
    }
}

/// Sort `&`-separated query fields by name, then by value, with a valueless
/// field (no `=`) sorting before any valued one of the same name. The sort is
/// stable and compares the escaped text as-is.
///
/// # Examples
///
/// ```
/// use surturl::alpha_reorder_query;
///
/// assert_eq!(alpha_reorder_query("b=b&a=b&b=a&a=a"), "a=a&a=b&b=a&b=b");
/// ```
pub fn alpha_reorder_query(orig: &str) -> String {
    if orig.len() <= 1 {
        return orig.to_string();
    }
    let mut fields: Vec<(&str, Option<&str>)> = orig
        .split('&')
        .map(|field| match field.find('=') {
            Some(i) => (&field[..i], Some(&field[i + 1..])),
            None => (field, None),
        })
        .collect();
    fields.sort_by(|a, b| a.0.cmp(b.0).then_with(|| a.1.cmp(&b.1)));
    let mut out = String::with_capacity(orig.len());
    for (i, (name, value)) in fields.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        out.push_str(name);
        if let Some(value) = value {
            out.push('=');
            out.push_str(value);
        }
    }
    out
}

/// Repeatedly strip a leading `www` or `wwwN...` label. Only the `www`
/// pattern is stripped, and only while it keeps matching, so
/// `www2.www2foo.com` loses one label and then stops.
///
/// # Examples
///
/// ```
/// use surturl::massage_host;
///
/// assert_eq!(massage_host("www12.foo.com"), "foo.com");
/// assert_eq!(massage_host("www2.www2foo.com"), "www2foo.com");
/// ```
pub fn massage_host(host: &str) -> &str {
    let mut host = host;
    while let Some(m) = WWWN_PREFIX.find(host) {
        host = &host[m.end()..];
    }
    host
}

/// The default port for a scheme, when stripping it is meaningful. Unknown
/// schemes return `None` so their ports are never stripped.
pub fn default_port(scheme: &str) -> Option<u16> {
    match scheme.to_lowercase().as_str() {
        "http" => Some(80),
        "https" => Some(443),
        _ => None,
    }
}

/// Resolve `.` and `..` segments of a slash-delimited path.
///
/// Splits on `/` keeping empty segments, discards whatever precedes the first
/// slash (hierarchical paths start with one), drops `.` segments, pops on
/// `..` (silently staying at root when there is nothing to pop), and keeps a
/// trailing slash when the final segment was `.` or `..`. Three or more dots
/// are an ordinary segment.
///
/// # Examples
///
/// ```
/// use surturl::normalize_path;
///
/// assert_eq!(normalize_path("/a/b/../c"), "/a/c");
/// assert_eq!(normalize_path("/a/b/c/.."), "/a/b/");
/// assert_eq!(normalize_path("/.."), "/");
/// assert_eq!(normalize_path("/a/..."), "/a/...");
/// ```
pub fn normalize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').collect();
    let last = segments.len() - 1;
    let mut kept: Vec<&str> = Vec::with_capacity(segments.len());
    for (i, &segment) in segments.iter().enumerate() {
        if i == 0 && i != last {
            // the piece before the first slash
        } else if segment == "." {
            if i == last {
                kept.push("");
            }
        } else if segment == ".." {
            kept.pop();
            if i == last {
                kept.push("");
            }
        } else {
            kept.push(segment);
        }
    }
    let mut out = String::with_capacity(path.len());
    for segment in kept {
        out.push('/');
        out.push_str(segment);
    }
    out
}

/// Rewrite integer, octal, and strict-decimal IPv4 host spellings to
/// dotted-quad form. Returns `None` (host left alone by the caller) for
/// anything that does not fully match one of the three shapes, including
/// partial addresses like `10.0.258` and octets above 255.
///
/// # Examples
///
/// ```
/// use surturl::attempt_ipv4_formats;
///
/// assert_eq!(attempt_ipv4_formats("017.0.0.1").as_deref(), Some("15.0.0.1"));
/// assert_eq!(attempt_ipv4_formats("3279880203").as_deref(), Some("195.127.0.11"));
/// assert_eq!(attempt_ipv4_formats("10.0.258"), None);
/// ```
pub fn attempt_ipv4_formats(host: &str) -> Option<String> {
    if PURE_INTEGER.is_match(host) {
        let value: u32 = host.parse().ok()?;
        return Some(Ipv4Addr::from(value).to_string());
    }
    if let Some(caps) = OCTAL_IP.captures(host) {
        return ipv4_from_groups(&caps, 8);
    }
    if let Some(caps) = DECIMAL_IP.captures(host) {
        return ipv4_from_groups(&caps, 10);
    }
    None
}

fn ipv4_from_groups(caps: &regex::Captures<'_>, radix: u32) -> Option<String> {
    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        // all four groups must be present: partial addresses are not IPs
        let group = caps.get(i + 1)?.as_str();
        let digits = if i == 0 { group } else { &group[1..] };
        let value = u32::from_str_radix(digits, radix).ok()?;
        if value > 255 {
            return None;
        }
        *octet = value as u8;
    }
    Some(format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]))
}
