//! # Pagecraft Migrate
//!
//! Normalization of stored block content into the current schema.
//!
//! Stored pages predate the current content schema and carry no version
//! marker, so this crate reconstructs complete, current-shape content from
//! whatever is on disk:
//!
//! ```text
//! stored JSON → legacy detection → migration → deep merge over defaults → typed content
//! ```
//!
//! - **Legacy detection** is structural (duck-typed): presence/absence of keys
//!   discriminates which historical shape a record matches. Records written by
//!   this codebase are stamped with [`CURRENT_SCHEMA_VERSION`] and skip
//!   detection entirely.
//! - **Migrations** are pure `Value -> Value` functions per widget kind that
//!   reshape legacy fields into the current structure.
//! - **Deep merge** recurses into nested objects; arrays are replaced
//!   wholesale, never merged element-by-element.
//!
//! Normalization is deterministic, idempotent, and total: content that matches
//! no known shape falls back to the type's defaults rather than failing the
//! document load.

mod legacy;
mod merge;
mod normalize;

pub use legacy::{is_legacy_shape, migrate_legacy};
pub use merge::deep_merge;
pub use normalize::{normalize, normalize_versioned, CURRENT_SCHEMA_VERSION};
