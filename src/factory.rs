//! High-level "usable URL" construction.
//!
//! The factory is the front door for crawl frontiers and index writers: it
//! parses, repairs path backslashes, applies the archive-standard profile,
//! and refuses URLs whose canonical rendering is too long to be a real
//! working link.

use tracing::{debug, warn};

use crate::canon::engine::Canonicalizer;
use crate::error::UrlError;
use crate::types::HandyUrl;
use crate::url::parser;
use crate::url::resolve::resolve;

/// Longest canonicalized URL the factory accepts by default. Anything past
/// this has never been a working link in practice.
pub const DEFAULT_MAX_URL_LENGTH: usize = 2083;

/// Builds canonicalized, validated [`HandyUrl`]s.
///
/// # Examples
///
/// ```
/// use surturl::UsableUrlFactory;
///
/// let factory = UsableUrlFactory::new();
/// let url = factory.usable_url("http://www.Example.com/a/../b\\c")?;
/// assert_eq!(url.url_string(), "http://www.example.com/b/c");
/// # Ok::<(), surturl::UrlError>(())
/// ```
pub struct UsableUrlFactory {
    canonicalizer: Canonicalizer,
    max_length: usize,
}

impl Default for UsableUrlFactory {
    fn default() -> UsableUrlFactory {
        UsableUrlFactory::new()
    }
}

impl UsableUrlFactory {
    pub fn new() -> UsableUrlFactory {
        UsableUrlFactory {
            canonicalizer: Canonicalizer::usable(),
            max_length: DEFAULT_MAX_URL_LENGTH,
        }
    }

    pub fn with_max_length(max_length: usize) -> UsableUrlFactory {
        UsableUrlFactory {
            canonicalizer: Canonicalizer::usable(),
            max_length,
        }
    }

    /// Parse and canonicalize an absolute URL string.
    pub fn usable_url(&self, url: &str) -> Result<HandyUrl, UrlError> {
        let mut handy = parser::parse(url, false).inspect_err(|err| {
            debug!(url, %err, "rejecting unparseable URL");
        })?;
        handy.path = handy.path.replace('\\', "/");
        self.canonicalizer.canonicalize(&mut handy);
        self.check_length(handy)
    }

    /// Parse `relative`, resolve it against `base`, and canonicalize the
    /// result.
    pub fn usable_url_from_base(
        &self,
        base: &HandyUrl,
        relative: &str,
    ) -> Result<HandyUrl, UrlError> {
        let rel = parser::parse(relative, true)?;
        let mut resolved = resolve(base, &rel);
        resolved.path = resolved.path.replace('\\', "/");
        self.canonicalizer.canonicalize(&mut resolved);
        self.check_length(resolved)
    }

    fn check_length(&self, url: HandyUrl) -> Result<HandyUrl, UrlError> {
        let length = url.url_string().len();
        if length > self.max_length {
            warn!(length, limit = self.max_length, "rejecting over-long URL");
            return Err(UrlError::ResultTooLong {
                length,
                limit: self.max_length,
            });
        }
        Ok(url)
    }
}
