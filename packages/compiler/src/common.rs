//! Shared compilation helpers: colors, typography, box models, advanced
//! settings, container chrome.

use crate::output::CompiledBlock;
use pagecraft_schema::{
    AdvancedSettings, Background, Border, BorderStyle, BoxModel, BoxShadow, Breakpoint,
    ColorValue, Gradient, PositionMode, SelfAlign, TextShadow, Typography, WidthMode,
};

/// Format a number without a trailing `.0`.
pub(crate) fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

pub(crate) fn fmt_px(n: f64) -> String {
    format!("{}px", fmt_num(n))
}

/// CSS value for a color: the solid string, or a synthesized
/// `linear-gradient(...)` expression.
pub fn css_color(color: &ColorValue) -> String {
    match color {
        ColorValue::Solid { solid } => solid.clone(),
        ColorValue::Gradient { gradient } => linear_gradient(gradient),
    }
}

pub fn linear_gradient(gradient: &Gradient) -> String {
    let stops: Vec<String> = gradient
        .stops
        .iter()
        .map(|s| format!("{} {}%", s.color, fmt_num(s.position)))
        .collect();
    format!(
        "linear-gradient({}deg, {})",
        fmt_num(gradient.angle),
        stops.join(", ")
    )
}

/// Emit text color declarations. Gradients used as text color request
/// clip-to-text behavior: transparent fill plus background-clip.
pub fn compile_text_color(color: &ColorValue, out: &mut CompiledBlock) {
    match color {
        ColorValue::Solid { solid } => out.push("color", solid.clone()),
        ColorValue::Gradient { gradient } => {
            out.push("background-image", linear_gradient(gradient));
            out.push("-webkit-background-clip", "text");
            out.push("background-clip", "text");
            out.push("color", "transparent");
        }
    }
}

/// Emit a text shadow only when horizontal, vertical, or blur is non-zero.
pub fn compile_text_shadow(shadow: &TextShadow, out: &mut CompiledBlock) {
    if shadow.is_none() {
        return;
    }
    out.push(
        "text-shadow",
        format!(
            "{} {} {} {}",
            fmt_px(shadow.horizontal),
            fmt_px(shadow.vertical),
            fmt_px(shadow.blur),
            shadow.color
        ),
    );
}

pub fn compile_typography(t: &Typography, bp: Breakpoint, out: &mut CompiledBlock) {
    if t.font_family != "inherit" {
        out.push("font-family", t.font_family.clone());
    }
    out.push("font-size", fmt_px(*t.font_size.resolve(bp)));
    out.push("font-weight", t.font_weight.to_string());
    out.push("line-height", fmt_num(t.line_height));
    if t.letter_spacing != 0.0 {
        out.push("letter-spacing", fmt_px(t.letter_spacing));
    }
    if t.text_transform != pagecraft_schema::TextTransform::None {
        out.push("text-transform", t.text_transform.as_css());
    }
    if t.font_style == pagecraft_schema::FontStyle::Italic {
        out.push("font-style", "italic");
    }
    if t.text_decoration != pagecraft_schema::TextDecoration::None {
        out.push("text-decoration", t.text_decoration.as_css());
    }
}

/// Emit four independent side declarations for a box model property.
/// Linking is an edit-site behavior; by compile time the four sides already
/// hold their final values.
pub fn compile_box_sides(prefix: &str, b: &BoxModel, out: &mut CompiledBlock) {
    out.push(format!("{prefix}-top"), fmt_px(b.top));
    out.push(format!("{prefix}-right"), fmt_px(b.right));
    out.push(format!("{prefix}-bottom"), fmt_px(b.bottom));
    out.push(format!("{prefix}-left"), fmt_px(b.left));
}

/// Border radius corners map clockwise from the box model's sides.
pub fn compile_radius(radius: &BoxModel, out: &mut CompiledBlock) {
    if radius.is_zero() {
        return;
    }
    out.push("border-top-left-radius", fmt_px(radius.top));
    out.push("border-top-right-radius", fmt_px(radius.right));
    out.push("border-bottom-right-radius", fmt_px(radius.bottom));
    out.push("border-bottom-left-radius", fmt_px(radius.left));
}

pub fn compile_border(border: &Border, out: &mut CompiledBlock) {
    if border.style != BorderStyle::None && !border.width.is_zero() {
        out.push("border-style", border.style.as_css());
        out.push("border-top-width", fmt_px(border.width.top));
        out.push("border-right-width", fmt_px(border.width.right));
        out.push("border-bottom-width", fmt_px(border.width.bottom));
        out.push("border-left-width", fmt_px(border.width.left));
        out.push("border-color", border.color.clone());
    }
    compile_radius(&border.radius, out);
}

pub fn compile_box_shadow(shadow: &BoxShadow, out: &mut CompiledBlock) {
    if shadow.is_none() {
        return;
    }
    out.push(
        "box-shadow",
        format!(
            "{} {} {} {} {}",
            fmt_px(shadow.horizontal),
            fmt_px(shadow.vertical),
            fmt_px(shadow.blur),
            fmt_px(shadow.spread),
            shadow.color
        ),
    );
}

pub fn compile_background(background: &Background, out: &mut CompiledBlock) {
    match &background.color {
        ColorValue::Solid { solid } if solid == "transparent" => {}
        ColorValue::Solid { solid } => out.push("background-color", solid.clone()),
        ColorValue::Gradient { gradient } => {
            out.push("background-image", linear_gradient(gradient))
        }
    }
    if let Some(image) = &background.image {
        if !image.is_empty() {
            out.push("background-image", format!("url({image})"));
            out.push("background-position", background.position.clone());
            out.push("background-size", background.size.clone());
            out.push("background-repeat", background.repeat.clone());
        }
    }
}

/// Compile the advanced settings shared by every widget: spacing, width and
/// position modes, opacity, border, max-width, grid item placement,
/// responsive visibility, and the custom CSS passthrough.
pub fn compile_advanced(adv: &AdvancedSettings, bp: Breakpoint, out: &mut CompiledBlock) {
    if !adv.margin.is_zero() {
        compile_box_sides("margin", &adv.margin, out);
    }
    if !adv.padding.is_zero() {
        compile_box_sides("padding", &adv.padding, out);
    }

    match &adv.width {
        WidthMode::Full => out.push("width", "100%"),
        WidthMode::Inline => {
            out.push("width", "auto");
            out.push("display", "inline-block");
        }
        WidthMode::Custom { value, unit } => {
            out.push("width", format!("{}{}", fmt_num(*value), unit.as_css()))
        }
    }

    if let Some(max_width) = adv.max_width.as_css() {
        out.push("max-width", max_width);
    }

    if adv.position != PositionMode::Static {
        out.push("position", adv.position.as_css());
    }

    if adv.opacity < 1.0 {
        out.push("opacity", fmt_num(adv.opacity));
    }

    compile_border(&adv.border, out);

    let column_span = *adv.grid_item.column_span.resolve(bp);
    if column_span > 1 {
        out.push("grid-column", format!("span {column_span}"));
    }
    let row_span = *adv.grid_item.row_span.resolve(bp);
    if row_span > 1 {
        out.push("grid-row", format!("span {row_span}"));
    }
    if adv.grid_item.align_self != SelfAlign::Auto {
        out.push("align-self", adv.grid_item.align_self.as_css());
    }
    if adv.grid_item.justify_self != SelfAlign::Auto {
        out.push("justify-self", adv.grid_item.justify_self.as_css());
    }

    // Visibility flags compose; more than one breakpoint may be hidden.
    if adv.hide_on_desktop {
        out.visibility_classes.push("pc-hide-desktop".to_string());
    }
    if adv.hide_on_tablet {
        out.visibility_classes.push("pc-hide-tablet".to_string());
    }
    if adv.hide_on_mobile {
        out.visibility_classes.push("pc-hide-mobile".to_string());
    }

    // User overrides pass through verbatim and are appended after computed
    // declarations, so they win on specificity ties.
    out.hints.css_id = adv.css_id.clone();
    out.hints.css_classes.extend(adv.css_classes.iter().cloned());
    out.hints.custom_css = adv.custom_css.clone();
}

/// Chrome shared by container-like widgets.
pub fn compile_chrome(
    background: &Background,
    border: &Border,
    shadow: &BoxShadow,
    out: &mut CompiledBlock,
) {
    compile_background(background, out);
    compile_border(border, out);
    compile_box_shadow(shadow, out);
}
