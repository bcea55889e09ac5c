//! surturl - URL canonicalization and SURT keys for web archives
//!
//! This crate turns the messy URLs found in crawl data into canonical,
//! byte-comparable forms, for deduplication, sort-ordered (CDX-style)
//! indexing, and replay lookup.
//!
//! # Features
//!
//! - **Permissive parsing**: an RFC 2396-ish decomposition that accepts the
//!   malformed, real-world URLs strict parsers reject
//! - **Rule-driven canonicalization**: per-component transform sets, with
//!   five prebuilt profiles from gentle fixup to aggressive index keys
//! - **SURT rendering**: host labels reversed and comma-joined so URLs under
//!   one domain sort adjacently
//! - **Standards-aware host repair**: IDNA conversion, Public Suffix List
//!   splitting, and IPv4 spelling canonicalization
//! - **Deterministic**: the same input always produces the same key, and
//!   every profile is idempotent
//!
//! # Quick Start
//!
//! ```
//! use surturl::{parse, Canonicalizer};
//!
//! // One call from raw string to canonical index key
//! let canon = Canonicalizer::aggressive();
//! let key = canon.canonicalize_url_string("http://www34.archive.org/index.html?b=a&a=b")?;
//! assert_eq!(key, "http://archive.org/index.html?a=b&b=a");
//!
//! // Or keep the structured form and render SURT
//! let mut url = parse("http://www.example.com/a/../b", false)?;
//! Canonicalizer::basic().canonicalize(&mut url);
//! assert_eq!(url.surt_string(true), "http://(com,example,www,)/b");
//! # Ok::<(), surturl::UrlError>(())
//! ```
//!
//! # Canonicalization profiles
//!
//! | Profile | Adds |
//! |---------|------|
//! | `basic` | minimal escaping, host IDN/dots/IPv4/lowercase, dot segments, fragment strip |
//! | `usable` | basic + encoded-whitespace trim, backslash repair, default-port strip |
//! | `ordinary` | usable + scheme/host lowercase, empty-query strip |
//! | `aggressive` | ordinary + www-strip, path/query lowercase, session-id strip, query reorder, userinfo strip |
//! | `non-massaging-aggressive` | aggressive without www-strip |
//!
//! # Error Handling
//!
//! Parsing returns `Result<HandyUrl, UrlError>` and fails atomically — a
//! URL parses whole or not at all. Canonicalization never fails: transforms
//! that cannot confidently normalize a value (an IPv4-looking host that is
//! not one, an IDN label the mapping rejects) leave it unchanged.

// Parsing and the structured URL type
pub use error::UrlError;
pub use types::HandyUrl;
pub use url::parser::{add_default_scheme_if_needed, has_scheme, parse, trim, url_to_scheme};
pub use url::parser::{DNS_SCHEME, FILEDESC_SCHEME, WARCINFO_SCHEME};

// Canonicalization
pub use canon::engine::{
    alpha_reorder_query, attempt_ipv4_formats, default_port, massage_host, normalize_path,
    Canonicalizer,
};
pub use canon::profiles::by_name as profile_by_name;
pub use canon::rules::CanonicalizeRules;

// Codec primitives
pub use canon::codec::{
    escape, get_hex, unescape, ESCAPING_DONT_TOUCH_CHARS, EXTRA_ESCAPE_CHARS,
    EXTRA_QUERY_ESCAPE_CHARS,
};

// Collaborators
pub use canon::session::{strip_path_session_id, strip_query_session_id};
pub use url::psl::{host_to_public_prefix, host_to_public_suffix};
pub use url::surt::host_to_surt;

// Resolution and the high-level factory
pub use factory::{UsableUrlFactory, DEFAULT_MAX_URL_LENGTH};
pub use url::resolve::resolve;

// Module declarations
pub mod canon;
pub mod error;
pub mod factory;
pub mod types;
pub mod url;
