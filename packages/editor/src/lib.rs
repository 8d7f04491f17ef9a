//! # Pagecraft Editor
//!
//! The page document lifecycle: loading stored JSON into an editable block
//! list, applying edits, and handing blocks to the render pipeline.
//!
//! ```text
//! stored JSON ──load──▶ PageDocument ──BlockEdit / code mode──▶ PageDocument
//!                            │                                      │
//!                            ▼                                      ▼
//!                      render_document                          save (stamped
//!                     (compile | raw)                           current shape)
//! ```
//!
//! ## Invariants
//!
//! - Block ids are unique within a page; loading regenerates missing and
//!   duplicate ids, and duplication/template insertion mint fresh ones.
//! - Structural edits addressing a missing id are no-ops, never errors; a
//!   stale id from another surface cannot corrupt the list.
//! - Visual content is written only through [`patch_content`]; raw markup
//!   and version history are written only through [`CodeModeController`].
//! - Saving always writes the current shape with the current schema version,
//!   except unknown-typed blocks, which round-trip verbatim.

mod code_mode;
mod document;
mod errors;
mod mutations;
mod patch;
mod raw;
mod render;
mod store;

pub use code_mode::CodeModeController;
pub use document::{new_block_id, Block, BlockMode, PageDocument, VersionEntry, HISTORY_CAP};
pub use errors::EditorError;
pub use mutations::{BlockEdit, EditOutcome};
pub use patch::{eligible_fields, patch_content, PropertyTab};
pub use raw::{block_from_raw, raw_from_block, RawBlock, RawDocument};
pub use render::{render_block, render_document, RenderedBlock, EMPTY_CODE_PLACEHOLDER};
pub use store::{
    load_page, save_page, DocumentStore, InMemoryStore, TemplateContent, TemplateRecord,
    TemplateSource,
};
