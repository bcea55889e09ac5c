//! URL-shaped concerns.
//!
//! This module contains everything that understands URL *structure* without
//! normalizing it:
//! - The permissive parser
//! - Public Suffix List prefix/suffix splitting
//! - SURT host label reversal
//! - Relative reference resolution

pub mod parser;
pub mod psl;
pub mod resolve;
pub mod surt;

pub use parser::{add_default_scheme_if_needed, has_scheme, parse, trim, url_to_scheme};
pub use psl::{host_to_public_prefix, host_to_public_suffix};
pub use resolve::resolve;
pub use surt::host_to_surt;
