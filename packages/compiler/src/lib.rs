//! # Pagecraft Compiler
//!
//! Deterministic compilation of normalized block content into a style
//! declaration set plus markup hints.
//!
//! ## Contract
//!
//! [`compile`] is a pure function: same inputs always produce the same
//! output; no I/O, no randomness, no mutation of the input. Callers must
//! supply content that has already been normalized by `pagecraft-migrate` —
//! malformed numeric inputs are not the compiler's responsibility.
//!
//! The compiler never emits markup strings. Its output is consumed by a
//! presentation layer that performs the actual DOM/markup emission; the only
//! verbatim-markup path in the system is a block's code mode, which bypasses
//! compilation entirely.
//!
//! ## Icon resolution
//!
//! Icon-by-name lookups go through an injected [`IconResolver`] capability
//! and fall back to a placeholder icon when the name is not found; lookups
//! never fail.

mod button;
mod common;
mod composite;
mod icons;
mod layout;
mod media;
mod output;
mod text;

pub use common::{compile_advanced, compile_typography, css_color, linear_gradient};
pub use icons::{placeholder_icon, IconResolver, RenderableIcon, StaticIconSet};
pub use output::{ChildHint, CompiledBlock, Declaration, MarkupHints};

use pagecraft_schema::{Breakpoint, WidgetContent};
use tracing::trace;

/// Class attached to the placeholder emitted for unrecognized widget types.
pub const UNKNOWN_BLOCK_CLASS: &str = "pc-unknown-block";

/// Compile one block's normalized content for one breakpoint.
pub fn compile(
    content: &WidgetContent,
    breakpoint: Breakpoint,
    icons: &dyn IconResolver,
) -> CompiledBlock {
    trace!(kind = content.widget_type().as_str(), ?breakpoint, "compiling block");

    match content {
        WidgetContent::Heading(c) => text::compile_heading(c, breakpoint),
        WidgetContent::Paragraph(c) => text::compile_paragraph(c, breakpoint),
        WidgetContent::Button(c) => button::compile_button(c, breakpoint, icons),
        WidgetContent::Image(c) => media::compile_image(c, breakpoint),
        WidgetContent::Icon(c) => media::compile_icon(c, breakpoint, icons),
        WidgetContent::Divider(c) => layout::compile_divider(c, breakpoint),
        WidgetContent::Spacer(c) => layout::compile_spacer(c, breakpoint),
        WidgetContent::Video(c) => media::compile_video(c, breakpoint),
        WidgetContent::PricingTable(c) => composite::compile_pricing_table(c, breakpoint),
        WidgetContent::Gallery(c) => media::compile_gallery(c, breakpoint),
        WidgetContent::Tabs(c) => composite::compile_tabs(c, breakpoint),
        WidgetContent::Container(c) => layout::compile_container(c, breakpoint),
        WidgetContent::Grid(c) => layout::compile_grid(c, breakpoint),
        WidgetContent::FlexContainer(c) => layout::compile_flex_container(c, breakpoint),
        WidgetContent::SmartGrid(c) => layout::compile_smart_grid(c, breakpoint),
        WidgetContent::Unknown { type_name, .. } => unknown_placeholder(type_name),
    }
}

/// A visible placeholder for an unsupported block type; one corrupt block
/// degrades gracefully instead of failing the whole page render.
fn unknown_placeholder(type_name: &str) -> CompiledBlock {
    let mut out = CompiledBlock::new("div");
    out.hints.css_classes.push(UNKNOWN_BLOCK_CLASS.to_string());
    out.hints.text = Some(format!("Unknown block type: {type_name}"));
    out
}
