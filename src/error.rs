//! Error types for URL parsing and canonicalization.

use thiserror::Error;

/// Errors that can occur while parsing a URL or building a canonical key.
///
/// Only the parser and the factory produce errors. Canonicalization never
/// fails: every transform has a defined no-op fallback for input it cannot
/// confidently normalize (an IPv4-looking host that is not one is left
/// exactly as typed, for example).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// The input does not match the generic URL grammar at all.
    #[error("malformed URL ({url}): {reason}")]
    MalformedUrl { url: String, reason: String },

    /// The authority section (`user:pass@host:port`) could not be split.
    #[error("malformed URL ({url}): could not parse authority ({authority})")]
    MalformedAuthority { url: String, authority: String },

    /// The port is present but not a number in 0-65535.
    #[error("malformed URL ({url}): invalid port ({port})")]
    InvalidPort { url: String, port: String },

    /// A canonicalized URL exceeded the factory's configured maximum length.
    #[error("canonicalized URL is {length} characters, over the {limit} limit")]
    ResultTooLong { length: usize, limit: usize },
}

impl UrlError {
    pub(crate) fn malformed(url: &str, reason: &str) -> UrlError {
        UrlError::MalformedUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UrlError::malformed("http://[", "string does not match URL grammar");
        assert_eq!(
            err.to_string(),
            "malformed URL (http://[): string does not match URL grammar"
        );

        let err = UrlError::ResultTooLong {
            length: 4000,
            limit: 2083,
        };
        assert_eq!(
            err.to_string(),
            "canonicalized URL is 4000 characters, over the 2083 limit"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(UrlError::malformed("a", "b"), UrlError::malformed("a", "b"));
        assert_ne!(UrlError::malformed("a", "b"), UrlError::malformed("a", "c"));
    }
}
