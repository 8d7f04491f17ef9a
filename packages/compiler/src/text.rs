//! Heading and paragraph compilation.

use crate::common::{
    compile_advanced, compile_text_color, compile_text_shadow, compile_typography,
};
use crate::output::CompiledBlock;
use pagecraft_schema::{Breakpoint, HeadingContent, ParagraphContent};

pub fn compile_heading(content: &HeadingContent, bp: Breakpoint) -> CompiledBlock {
    let level = content.level.clamp(1, 6);
    let mut out = CompiledBlock::new(format!("h{level}"));

    out.push("text-align", content.alignment.resolve(bp).as_css());
    compile_typography(&content.typography, bp, &mut out);
    compile_text_color(&content.color, &mut out);
    compile_text_shadow(&content.text_shadow, &mut out);
    compile_advanced(&content.advanced, bp, &mut out);

    out.hints.text = Some(content.text.clone());
    out
}

pub fn compile_paragraph(content: &ParagraphContent, bp: Breakpoint) -> CompiledBlock {
    let mut out = CompiledBlock::new("p");

    out.push("text-align", content.alignment.resolve(bp).as_css());
    compile_typography(&content.typography, bp, &mut out);
    compile_text_color(&content.color, &mut out);
    compile_advanced(&content.advanced, bp, &mut out);

    out.hints.text = Some(content.text.clone());
    out
}
