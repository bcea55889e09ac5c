//! Session-id strippers.
//!
//! Pluggable pure functions over the already-escaped path and query text.
//! The shipped patterns cover the session tokens that show up constantly in
//! crawl data: servlet `;jsessionid=` path suffixes, ASP.NET cookieless
//! ticket segments, and the usual query-parameter suspects.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Path patterns, applied in order; group 1 and group 2 are what's kept.
    static ref PATH_SESSIONID_PATTERNS: Vec<Regex> = vec![
        // servlet session id glued onto a path segment
        Regex::new(r"(?i)^(.*);jsessionid=[0-9a-z]{32}(.*)$").unwrap(),
        // ASP.NET cookieless forms like /(S(4hqa0555fwsecu455xqckv45))/
        Regex::new(r"(?i)^(.*/)\((?:[a-z]\([0-9a-z]{24}\))+\)/([^?]+\.aspx.*)$").unwrap(),
        Regex::new(r"(?i)^(.*/)\([0-9a-z]{24}\)/([^?]+\.aspx.*)$").unwrap(),
    ];

    /// A query field (one `name=value` between `&`s) matching any of these is
    /// dropped whole.
    static ref QUERY_SESSIONID_FIELDS: Vec<Regex> = vec![
        Regex::new(r"(?i)^jsessionid=[0-9a-z]{32}$").unwrap(),
        Regex::new(r"(?i)^phpsessid=[0-9a-z]{32}$").unwrap(),
        Regex::new(r"(?i)^sid=[0-9a-z]{32}$").unwrap(),
        Regex::new(r"(?i)^aspsessionid[a-z]{8}=[a-z]{24}$").unwrap(),
        Regex::new(r"(?i)^cfid=[0-9]+$").unwrap(),
        Regex::new(r"(?i)^cftoken=[0-9a-z-]+$").unwrap(),
    ];
}

/// Remove recognized session-id segments from a path.
///
/// # Examples
///
/// ```
/// use surturl::strip_path_session_id;
///
/// assert_eq!(
///     strip_path_session_id("/cart.do;jsessionid=0123456789abcdeffedcba98765432ab"),
///     "/cart.do"
/// );
/// ```
pub fn strip_path_session_id(path: &str) -> String {
    let mut path = path.to_string();
    for pattern in PATH_SESSIONID_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(&path) {
            path = format!("{}{}", &caps[1], &caps[2]);
        }
    }
    path
}

/// Remove recognized session-id fields from a query string, keeping every
/// other field byte-for-byte and in order.
///
/// # Examples
///
/// ```
/// use surturl::strip_query_session_id;
///
/// assert_eq!(
///     strip_query_session_id("a=b&sid=0123456789abcdeffedcba98765432ab&c=d"),
///     "a=b&c=d"
/// );
/// ```
pub fn strip_query_session_id(query: &str) -> String {
    let kept: Vec<&str> = query
        .split('&')
        .filter(|field| !QUERY_SESSIONID_FIELDS.iter().any(|p| p.is_match(field)))
        .collect();
    kept.join("&")
}
