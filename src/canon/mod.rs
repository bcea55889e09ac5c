//! The canonicalization engine.
//!
//! This module contains the normalization machinery:
//! - Percent codec primitives (escape/unescape with UTF-8 recovery)
//! - Per-component rule sets and the prebuilt profiles
//! - The rules-driven canonicalizer itself
//! - Default session-id strippers

pub mod codec;
pub mod engine;
pub mod profiles;
pub mod rules;
pub mod session;

pub use codec::{escape, get_hex, unescape};
pub use engine::{
    alpha_reorder_query, attempt_ipv4_formats, default_port, massage_host, normalize_path,
    Canonicalizer,
};
pub use rules::CanonicalizeRules;
pub use session::{strip_path_session_id, strip_query_session_id};
