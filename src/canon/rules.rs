//! Per-component canonicalization rule sets.
//!
//! A [`CanonicalizeRules`] value is one flag word per URL component. Profiles
//! build one of these once at startup (see [`crate::canon::profiles`]) and
//! the engine only ever reads it, so a rule set can be shared freely across
//! threads.

/// Leave the scheme as parsed.
pub const SCHEME_ORIGINAL: u32 = 0;
/// Lowercase the scheme.
pub const SCHEME_LOWERCASE: u32 = 1;

/// Leave the host as parsed.
pub const HOST_ORIGINAL: u32 = 0;
/// Lowercase the host.
pub const HOST_LOWERCASE: u32 = 1;
/// Repeatedly strip a leading `www` / `wwwN` label.
pub const HOST_MASSAGE: u32 = 2;
/// Unescape then re-escape the host.
pub const HOST_MINIMAL_ESCAPE: u32 = 4;
/// Convert an internationalized host to its ASCII (punycode) form.
pub const HOST_IDN_TO_ASCII: u32 = 8;
/// Collapse runs of dots and strip leading/trailing dots.
pub const HOST_REMOVE_EXTRA_DOTS: u32 = 16;
/// Rewrite integer/octal/decimal IPv4 spellings to dotted-quad.
pub const HOST_CANONICALIZE_IPV4: u32 = 32;
/// Trim whitespace uncovered by unescaping the host.
pub const HOST_TRIM_ENCODED_WHITESPACE: u32 = 64;

/// Leave the port as parsed.
pub const PORT_ORIGINAL: u32 = 0;
/// Drop the port when it is the scheme's default.
pub const PORT_STRIP_DEFAULT: u32 = 1;

/// Leave the path as parsed.
pub const PATH_ORIGINAL: u32 = 0;
/// Lowercase the path.
pub const PATH_LOWERCASE: u32 = 1;
/// Remove recognized session-id path segments.
pub const PATH_STRIP_SESSION_ID: u32 = 2;
/// Drop a trailing slash unless the path is just `/` or empty.
pub const PATH_STRIP_TRAILING_SLASH_UNLESS_EMPTY: u32 = 8;
/// Unescape then re-escape the path.
pub const PATH_MINIMAL_ESCAPE: u32 = 16;
/// Collapse runs of slashes to one.
pub const PATH_COLLAPSE_MULTIPLE_SLASHES: u32 = 32;
/// Resolve `.` and `..` segments.
pub const PATH_NORMALIZE_DOT_SEGMENTS: u32 = 64;
/// Rewrite backslashes to slashes.
pub const PATH_BACKSLASH_TO_SLASH: u32 = 128;

/// Leave the query as parsed.
pub const QUERY_ORIGINAL: u32 = 0;
/// Lowercase the query.
pub const QUERY_LOWERCASE: u32 = 1;
/// Remove recognized session-id query fields.
pub const QUERY_STRIP_SESSION_ID: u32 = 2;
/// Turn a present-but-empty query into an absent one.
pub const QUERY_STRIP_EMPTY: u32 = 4;
/// Sort query fields by name, then value.
pub const QUERY_ALPHA_REORDER: u32 = 8;
/// Unescape then re-escape the query.
pub const QUERY_MINIMAL_ESCAPE: u32 = 16;

/// Leave the fragment as parsed.
pub const FRAGMENT_ORIGINAL: u32 = 0;
/// Drop the fragment.
pub const FRAGMENT_STRIP: u32 = 1;

/// Leave userinfo as parsed.
pub const AUTH_ORIGINAL: u32 = 0;
/// Drop the whole userinfo block.
pub const AUTH_STRIP_AUTH: u32 = 1;
/// Drop only the password.
pub const AUTH_STRIP_PASS: u32 = 2;
/// Unescape then re-escape user and password independently.
pub const AUTH_MINIMAL_ESCAPE: u32 = 4;

/// One flag word per URL component. Flags are additive; `0` in a field means
/// that component passes through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalizeRules {
    pub scheme: u32,
    pub auth: u32,
    pub host: u32,
    pub port: u32,
    pub path: u32,
    pub query: u32,
    pub fragment: u32,
}

/// True when every bit of `flag` is set in `mask`.
pub fn is_set(mask: u32, flag: u32) -> bool {
    mask & flag == flag
}
