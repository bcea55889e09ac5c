//! Prebuilt canonicalization profiles.
//!
//! Each profile is a pure function layering flags onto the previous one, so
//! the composition is visible at a glance. The built rule sets are immutable;
//! [`by_name`] hands out shared references to lazily-built singletons.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::canon::rules::*;

/// Google-style basic fixup: minimal escaping everywhere, host
/// IDN/dots/IPv4/lowercase repair, dot-segment resolution, fragment removal.
/// Scheme, port, and query content are left alone.
pub fn basic() -> CanonicalizeRules {
    CanonicalizeRules {
        scheme: SCHEME_ORIGINAL,
        auth: AUTH_MINIMAL_ESCAPE,
        host: HOST_MINIMAL_ESCAPE
            | HOST_IDN_TO_ASCII
            | HOST_REMOVE_EXTRA_DOTS
            | HOST_CANONICALIZE_IPV4
            | HOST_LOWERCASE,
        port: PORT_ORIGINAL,
        path: PATH_MINIMAL_ESCAPE | PATH_COLLAPSE_MULTIPLE_SLASHES | PATH_NORMALIZE_DOT_SEGMENTS,
        query: QUERY_MINIMAL_ESCAPE,
        fragment: FRAGMENT_STRIP,
    }
}

/// The archive-standard "usable URL" profile: [`basic`] plus encoded
/// whitespace trimming on the host, backslash repair in the path, and
/// default-port stripping. Scheme case is preserved.
pub fn usable() -> CanonicalizeRules {
    let mut rules = basic();
    rules.host |= HOST_TRIM_ENCODED_WHITESPACE;
    rules.path |= PATH_BACKSLASH_TO_SLASH;
    rules.port |= PORT_STRIP_DEFAULT;
    rules
}

/// [`usable`] plus scheme/host lowercasing and empty-query stripping.
pub fn ordinary() -> CanonicalizeRules {
    let mut rules = usable();
    rules.scheme |= SCHEME_LOWERCASE;
    rules.host |= HOST_LOWERCASE;
    rules.port |= PORT_STRIP_DEFAULT;
    rules.query |= QUERY_STRIP_EMPTY;
    rules.fragment |= FRAGMENT_STRIP;
    rules
}

/// The index-key profile: [`ordinary`] plus www-prefix removal, path and
/// query lowercasing, session-id stripping, trailing-slash stripping, query
/// reordering, and userinfo removal.
pub fn aggressive() -> CanonicalizeRules {
    let mut rules = ordinary();
    rules.host |= HOST_MASSAGE;
    rules.path |= PATH_LOWERCASE | PATH_STRIP_SESSION_ID | PATH_STRIP_TRAILING_SLASH_UNLESS_EMPTY;
    rules.query |=
        QUERY_LOWERCASE | QUERY_STRIP_SESSION_ID | QUERY_STRIP_EMPTY | QUERY_ALPHA_REORDER;
    rules.auth |= AUTH_STRIP_PASS | AUTH_STRIP_AUTH;
    rules
}

/// [`aggressive`] for collections where `www.foo.com` and `foo.com` must
/// stay distinct.
pub fn non_massaging_aggressive() -> CanonicalizeRules {
    let mut rules = aggressive();
    rules.host &= !HOST_MASSAGE;
    rules
}

lazy_static! {
    static ref REGISTRY: HashMap<&'static str, CanonicalizeRules> = {
        let mut registry = HashMap::new();
        registry.insert("basic", basic());
        registry.insert("usable", usable());
        registry.insert("ordinary", ordinary());
        registry.insert("aggressive", aggressive());
        registry.insert("non-massaging-aggressive", non_massaging_aggressive());
        registry
    };
}

/// Look up a prebuilt profile by name.
///
/// Known names: `basic`, `usable`, `ordinary`, `aggressive`,
/// `non-massaging-aggressive`.
///
/// # Examples
///
/// ```
/// use surturl::{profile_by_name, Canonicalizer};
///
/// let rules = profile_by_name("aggressive").unwrap();
/// let canon = Canonicalizer::new(rules.clone());
/// assert_eq!(
///     canon.canonicalize_url_string("http://www.alexa.com/").unwrap(),
///     "http://alexa.com/"
/// );
/// assert!(profile_by_name("nonsense").is_none());
/// ```
pub fn by_name(name: &str) -> Option<&'static CanonicalizeRules> {
    REGISTRY.get(name)
}
