//! Render pipeline: block → renderable output for one breakpoint.
//!
//! Visual-mode blocks go through the pure style compiler. Code-mode blocks
//! bypass it and surface their raw markup verbatim; markup is trusted author
//! input and is never rewritten here.

use crate::document::{Block, BlockMode, PageDocument};
use pagecraft_compiler::{compile, CompiledBlock, IconResolver};
use pagecraft_schema::{Breakpoint, WidgetContent};
use tracing::instrument;

/// Shown for a code-mode block that has never had markup applied.
pub const EMPTY_CODE_PLACEHOLDER: &str = "<!-- Empty Code Block -->";

/// What the presentation layer receives for one block.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderedBlock {
    /// Compiled declarations and markup hints for a visual-mode block.
    Compiled(CompiledBlock),
    /// Verbatim author markup from a code-mode block.
    RawHtml(String),
    /// Unrecognized block type; the surface shows a placeholder.
    Unknown { type_name: String },
}

pub fn render_block(block: &Block, bp: Breakpoint, icons: &dyn IconResolver) -> RenderedBlock {
    if block.mode == BlockMode::Code {
        return RenderedBlock::RawHtml(
            block
                .html_content
                .clone()
                .unwrap_or_else(|| EMPTY_CODE_PLACEHOLDER.to_string()),
        );
    }
    if let WidgetContent::Unknown { type_name, .. } = &block.content {
        return RenderedBlock::Unknown {
            type_name: type_name.clone(),
        };
    }
    RenderedBlock::Compiled(compile(&block.content, bp, icons))
}

/// Render every block in document order. Total: unknown and code-mode blocks
/// degrade per block, never failing the page.
#[instrument(skip(doc, icons), fields(blocks = doc.blocks.len()))]
pub fn render_document(
    doc: &PageDocument,
    bp: Breakpoint,
    icons: &dyn IconResolver,
) -> Vec<(String, RenderedBlock)> {
    doc.blocks
        .iter()
        .map(|block| (block.id.clone(), render_block(block, bp, icons)))
        .collect()
}
