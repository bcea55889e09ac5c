//! Tests for relative reference resolution, with and without the
//! canonicalization pass that cleans up dot segments.

use surturl::{parse, resolve, Canonicalizer};

/// Resolve `rel` against `base` and canonicalize with the basic profile,
/// the way callers are expected to use the resolver.
fn resolved(base: &str, rel: &str) -> String {
    let base = parse(base, false).unwrap();
    let rel = parse(rel, true).unwrap();
    let mut out = resolve(&base, &rel);
    Canonicalizer::basic().canonicalize(&mut out);
    out.url_string()
}

/// Resolve without canonicalizing, for inspecting the raw merge.
fn resolved_raw(base: &str, rel: &str) -> surturl::HandyUrl {
    let base = parse(base, false).unwrap();
    let rel = parse(rel, true).unwrap();
    resolve(&base, &rel)
}

const BASE: &str = "http://a/b/c/d;p?q";

#[test]
fn test_rfc3986_normal_cases() {
    assert_eq!(resolved(BASE, "g"), "http://a/b/c/g");
    assert_eq!(resolved(BASE, "./g"), "http://a/b/c/g");
    assert_eq!(resolved(BASE, "g/"), "http://a/b/c/g/");
    assert_eq!(resolved(BASE, "/g"), "http://a/g");
    // the canonicalizer gives the empty path its slash
    assert_eq!(resolved(BASE, "//g"), "http://g/");
    assert_eq!(resolved(BASE, "?y"), "http://a/b/c/d;p?y");
    assert_eq!(resolved(BASE, "g?y"), "http://a/b/c/g?y");
    assert_eq!(resolved(BASE, ";x"), "http://a/b/c/;x");
    assert_eq!(resolved(BASE, "g;x"), "http://a/b/c/g;x");
    assert_eq!(resolved(BASE, ""), "http://a/b/c/d;p?q");
    assert_eq!(resolved(BASE, "."), "http://a/b/c/");
    assert_eq!(resolved(BASE, "./"), "http://a/b/c/");
    assert_eq!(resolved(BASE, ".."), "http://a/b/");
    assert_eq!(resolved(BASE, "../"), "http://a/b/");
    assert_eq!(resolved(BASE, "../g"), "http://a/b/g");
    assert_eq!(resolved(BASE, "../.."), "http://a/");
    assert_eq!(resolved(BASE, "../../"), "http://a/");
    assert_eq!(resolved(BASE, "../../g"), "http://a/g");
}

#[test]
fn test_rfc3986_abnormal_cases() {
    // dot segments never climb above root
    assert_eq!(resolved(BASE, "../../../g"), "http://a/g");
    assert_eq!(resolved(BASE, "../../../../g"), "http://a/g");
    assert_eq!(resolved(BASE, "/./g"), "http://a/g");
    assert_eq!(resolved(BASE, "/../g"), "http://a/g");
    // dots inside a segment are data
    assert_eq!(resolved(BASE, "g."), "http://a/b/c/g.");
    assert_eq!(resolved(BASE, ".g"), "http://a/b/c/.g");
    assert_eq!(resolved(BASE, "g.."), "http://a/b/c/g..");
    assert_eq!(resolved(BASE, "..g"), "http://a/b/c/..g");
}

#[test]
fn test_absolute_rel_wins() {
    let out = resolved_raw(BASE, "ftp://other.example/x");
    assert_eq!(out.scheme.as_deref(), Some("ftp"));
    assert_eq!(out.host.as_deref(), Some("other.example"));
    assert_eq!(out.path, "/x");
    assert_eq!(out.query, None);
}

#[test]
fn test_fragment_comes_from_rel_only() {
    // rel with only a fragment keeps base path and query
    let out = resolved_raw(BASE, "#s");
    assert_eq!(out.path, "/b/c/d;p");
    assert_eq!(out.query.as_deref(), Some("q"));
    assert_eq!(out.fragment.as_deref(), Some("s"));
    assert_eq!(out.url_string(), "http://a/b/c/d;p?q#s");

    let out = resolved_raw(BASE, "g#s");
    assert_eq!(out.url_string(), "http://a/b/c/g#s");

    // the base fragment is never inherited
    let out = resolved_raw("http://a/b#frag", "g");
    assert_eq!(out.fragment, None);
}

#[test]
fn test_merge_keeps_dot_segments_for_canonicalizer() {
    let out = resolved_raw(BASE, "../g");
    assert_eq!(out.path, "/b/c/../g");
}

#[test]
fn test_base_without_slash() {
    // a base with no slash in its path gets one prefixed on merge
    let base = parse("dns:example.org", false).unwrap();
    let rel = parse("g", true).unwrap();
    let out = resolve(&base, &rel);
    assert_eq!(out.path, "/g");
}

#[test]
fn test_authority_inheritance() {
    let out = resolved_raw("http://jdoe:pw@a:8080/b/c", "d");
    assert_eq!(out.auth_user.as_deref(), Some("jdoe"));
    assert_eq!(out.auth_pass.as_deref(), Some("pw"));
    assert_eq!(out.host.as_deref(), Some("a"));
    assert_eq!(out.port, Some(8080));
    assert_eq!(out.path, "/b/d");

    // rel with its own authority drops base userinfo
    let out = resolved_raw("http://jdoe:pw@a:8080/b/c", "//other/x");
    assert_eq!(out.auth_user, None);
    assert_eq!(out.host.as_deref(), Some("other"));
    assert_eq!(out.port, None);
}
