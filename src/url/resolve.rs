//! Relative reference resolution.

use crate::types::HandyUrl;

/// Resolve `rel` against `base` per RFC 3986 section 5, with one deviation:
/// dot segments are *not* removed from the merged path. Run the result
/// through a canonicalizer (every profile normalizes dot segments) before
/// using it.
///
/// # Examples
///
/// ```
/// use surturl::{parse, resolve, Canonicalizer};
///
/// let base = parse("http://a/b/c/d;p?q", false)?;
/// let rel = parse("../g", true)?;
/// let mut resolved = resolve(&base, &rel);
/// assert_eq!(resolved.path, "/b/c/../g");
/// Canonicalizer::basic().canonicalize(&mut resolved);
/// assert_eq!(resolved.url_string(), "http://a/b/g");
/// # Ok::<(), surturl::UrlError>(())
/// ```
pub fn resolve(base: &HandyUrl, rel: &HandyUrl) -> HandyUrl {
    let scheme;
    let auth_user;
    let auth_pass;
    let host;
    let port;
    let path;
    let query;

    if rel.scheme.is_some() {
        scheme = rel.scheme.clone();
        auth_user = rel.auth_user.clone();
        auth_pass = rel.auth_pass.clone();
        host = rel.host.clone();
        port = rel.port;
        path = rel.path.clone();
        query = rel.query.clone();
    } else {
        scheme = base.scheme.clone();
        if rel.host.is_some() {
            auth_user = rel.auth_user.clone();
            auth_pass = rel.auth_pass.clone();
            host = rel.host.clone();
            port = rel.port;
            path = rel.path.clone();
            query = rel.query.clone();
        } else {
            auth_user = base.auth_user.clone();
            auth_pass = base.auth_pass.clone();
            host = base.host.clone();
            port = base.port;
            if rel.path.is_empty() {
                path = base.path.clone();
                query = rel.query.clone().or_else(|| base.query.clone());
            } else {
                if rel.path.starts_with('/') {
                    path = rel.path.clone();
                } else {
                    // merge: replace everything after base's last slash
                    path = match base.path.rfind('/') {
                        Some(i) => format!("{}{}", &base.path[..=i], rel.path),
                        None => format!("/{}", rel.path),
                    };
                }
                query = rel.query.clone();
            }
        }
    }

    HandyUrl {
        scheme,
        auth_user,
        auth_pass,
        host,
        port,
        path,
        query,
        // the base fragment is never inherited
        fragment: rel.fragment.clone(),
    }
}
