//! Divider, spacer, and container-like widget compilation.
//!
//! The block list is flat: container-like widgets compile their layout and
//! chrome only; they do not recurse into child blocks.

use crate::common::{compile_advanced, compile_chrome, fmt_num, fmt_px};
use crate::output::CompiledBlock;
use pagecraft_schema::{
    Breakpoint, ContainerContent, DividerContent, FlexContainerContent, GridContent,
    SmartGridContent, SpacerContent, TextAlign,
};

pub fn compile_divider(content: &DividerContent, bp: Breakpoint) -> CompiledBlock {
    let mut out = CompiledBlock::new("hr");

    out.push("border", "none");
    out.push("border-top-style", content.style.as_css());
    out.push("border-top-width", fmt_px(content.weight));
    out.push("border-top-color", content.color.clone());
    out.push(
        "width",
        format!("{}%", fmt_num(*content.width_percent.resolve(bp))),
    );
    match content.alignment.resolve(bp) {
        TextAlign::Left => {
            out.push("margin-left", "0");
            out.push("margin-right", "auto");
        }
        TextAlign::Right => {
            out.push("margin-left", "auto");
            out.push("margin-right", "0");
        }
        _ => {
            out.push("margin-left", "auto");
            out.push("margin-right", "auto");
        }
    }
    compile_advanced(&content.advanced, bp, &mut out);

    out
}

pub fn compile_spacer(content: &SpacerContent, bp: Breakpoint) -> CompiledBlock {
    let mut out = CompiledBlock::new("div");
    out.push("height", fmt_px(*content.height.resolve(bp)));
    compile_advanced(&content.advanced, bp, &mut out);
    out
}

pub fn compile_container(content: &ContainerContent, bp: Breakpoint) -> CompiledBlock {
    let mut out = CompiledBlock::new("section");

    out.push("text-align", content.layout.alignment.resolve(bp).as_css());
    let gap = *content.layout.gap.resolve(bp);
    if gap > 0.0 {
        out.push("row-gap", fmt_px(gap));
    }
    let min_height = *content.layout.min_height.resolve(bp);
    if min_height > 0.0 {
        out.push("min-height", fmt_px(min_height));
    }
    compile_chrome(&content.background, &content.border, &content.shadow, &mut out);
    compile_advanced(&content.advanced, bp, &mut out);

    out
}

pub fn compile_grid(content: &GridContent, bp: Breakpoint) -> CompiledBlock {
    let mut out = CompiledBlock::new("div");

    out.push("display", "grid");
    out.push(
        "grid-template-columns",
        format!(
            "repeat({}, minmax(0, 1fr))",
            content.layout.columns.resolve(bp)
        ),
    );
    out.push("gap", fmt_px(*content.layout.gap.resolve(bp)));
    out.push("align-items", content.layout.align_items.as_css());
    out.push("justify-items", content.layout.justify_items.as_css());
    compile_chrome(&content.background, &content.border, &content.shadow, &mut out);
    compile_advanced(&content.advanced, bp, &mut out);

    out
}

pub fn compile_flex_container(content: &FlexContainerContent, bp: Breakpoint) -> CompiledBlock {
    let mut out = CompiledBlock::new("div");

    out.push("display", "flex");
    out.push("flex-direction", content.layout.direction.as_css());
    out.push(
        "flex-wrap",
        if content.layout.wrap { "wrap" } else { "nowrap" },
    );
    out.push("gap", fmt_px(*content.layout.gap.resolve(bp)));
    out.push("align-items", content.layout.align_items.as_css());
    out.push("justify-content", content.layout.justify_content.as_css());
    compile_chrome(&content.background, &content.border, &content.shadow, &mut out);
    compile_advanced(&content.advanced, bp, &mut out);

    out
}

pub fn compile_smart_grid(content: &SmartGridContent, bp: Breakpoint) -> CompiledBlock {
    let mut out = CompiledBlock::new("div");

    out.push("display", "grid");
    out.push(
        "grid-template-columns",
        format!(
            "repeat({}, minmax({}, 1fr))",
            content.layout.fit.as_css(),
            fmt_px(*content.layout.min_column_width.resolve(bp))
        ),
    );
    out.push("gap", fmt_px(*content.layout.gap.resolve(bp)));
    compile_chrome(&content.background, &content.border, &content.shadow, &mut out);
    compile_advanced(&content.advanced, bp, &mut out);

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagecraft_schema::{
        ColorValue, Gradient, GradientStop, ResponsiveValue, WidgetContent, WidgetType,
    };

    #[test]
    fn test_divider_alignment_margins() {
        let WidgetContent::Divider(mut d) = WidgetContent::default_for(WidgetType::Divider) else {
            panic!("expected divider defaults");
        };
        d.width_percent = ResponsiveValue::uniform(50.0);
        d.alignment = ResponsiveValue::uniform(TextAlign::Right);

        let out = compile_divider(&d, Breakpoint::Desktop);
        assert_eq!(out.get("width"), Some("50%"));
        assert_eq!(out.get("margin-left"), Some("auto"));
        assert_eq!(out.get("margin-right"), Some("0"));
    }

    #[test]
    fn test_spacer_resolves_height() {
        let WidgetContent::Spacer(mut s) = WidgetContent::default_for(WidgetType::Spacer) else {
            panic!("expected spacer defaults");
        };
        s.height = ResponsiveValue {
            desktop: 80.0,
            tablet: None,
            mobile: Some(32.0),
        };

        assert_eq!(
            compile_spacer(&s, Breakpoint::Desktop).get("height"),
            Some("80px")
        );
        assert_eq!(
            compile_spacer(&s, Breakpoint::Mobile).get("height"),
            Some("32px")
        );
    }

    #[test]
    fn test_container_gradient_background() {
        let WidgetContent::Container(mut c) = WidgetContent::default_for(WidgetType::Container)
        else {
            panic!("expected container defaults");
        };
        c.background.color = ColorValue::Gradient {
            gradient: Gradient {
                angle: 180.0,
                stops: vec![
                    GradientStop {
                        color: "#111".to_string(),
                        position: 0.0,
                    },
                    GradientStop {
                        color: "#333".to_string(),
                        position: 100.0,
                    },
                ],
            },
        };

        let out = compile_container(&c, Breakpoint::Desktop);
        assert_eq!(
            out.get("background-image"),
            Some("linear-gradient(180deg, #111 0%, #333 100%)")
        );
    }

    #[test]
    fn test_grid_emits_track_template() {
        let WidgetContent::Grid(g) = WidgetContent::default_for(WidgetType::Grid) else {
            panic!("expected grid defaults");
        };
        let out = compile_grid(&g, Breakpoint::Tablet);
        // Default grid is 3/2/1 across breakpoints.
        assert_eq!(
            out.get("grid-template-columns"),
            Some("repeat(2, minmax(0, 1fr))")
        );
    }

    #[test]
    fn test_smart_grid_track_expression() {
        let WidgetContent::SmartGrid(s) = WidgetContent::default_for(WidgetType::SmartGrid) else {
            panic!("expected smart grid defaults");
        };
        let out = compile_smart_grid(&s, Breakpoint::Desktop);
        assert_eq!(
            out.get("grid-template-columns"),
            Some("repeat(auto-fit, minmax(240px, 1fr))")
        );
    }
}
