//! Button compilation.
//!
//! Normal-state colors are direct declarations. Hover-state colors are
//! exposed as custom properties consumed by a hover-triggered rule in the
//! presentation layer's stylesheet; a missing hover override falls back to
//! the normal-state value, never to transparent/unset.

use crate::common::{compile_advanced, compile_typography, css_color};
use crate::icons::IconResolver;
use crate::output::CompiledBlock;
use pagecraft_schema::{Breakpoint, ButtonContent, ColorValue};

pub fn compile_button(
    content: &ButtonContent,
    bp: Breakpoint,
    icons: &dyn IconResolver,
) -> CompiledBlock {
    let mut out = CompiledBlock::new("a");

    out.push("text-align", content.alignment.resolve(bp).as_css());
    compile_typography(&content.typography, bp, &mut out);

    out.push("background", css_color(&content.background));
    out.push("color", flatten_text_color(&content.text_color));

    let hover_background = content.hover.background.as_ref().unwrap_or(&content.background);
    let hover_text = content.hover.text_color.as_ref().unwrap_or(&content.text_color);
    out.push("--pc-btn-hover-background", css_color(hover_background));
    out.push("--pc-btn-hover-color", flatten_text_color(hover_text));
    out.push(
        "transition",
        format!(
            "background {ms}ms ease, color {ms}ms ease",
            ms = content.transition_ms
        ),
    );

    compile_advanced(&content.advanced, bp, &mut out);

    out.hints.text = Some(content.text.clone());
    out.hints.link = Some(content.link.clone());
    if content.link.open_in_new_tab {
        out.hints
            .attributes
            .push(("target".to_string(), "_blank".to_string()));
    }
    if content.link.nofollow {
        out.hints
            .attributes
            .push(("rel".to_string(), "nofollow".to_string()));
    }
    if let Some(icon_name) = &content.icon {
        out.hints.icon = Some(icons.lookup(icon_name));
        out.hints.attributes.push((
            "data-icon-position".to_string(),
            match content.icon_position {
                pagecraft_schema::IconPosition::Left => "left".to_string(),
                pagecraft_schema::IconPosition::Right => "right".to_string(),
            },
        ));
    }

    out
}

/// Button text cannot clip a gradient over the button's own background, so a
/// gradient text color flattens to its first stop.
fn flatten_text_color(color: &ColorValue) -> String {
    match color {
        ColorValue::Solid { solid } => solid.clone(),
        ColorValue::Gradient { gradient } => gradient
            .stops
            .first()
            .map(|s| s.color.clone())
            .unwrap_or_else(|| "inherit".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::StaticIconSet;
    use pagecraft_schema::{WidgetContent, WidgetType};

    fn button() -> ButtonContent {
        let WidgetContent::Button(b) = WidgetContent::default_for(WidgetType::Button) else {
            panic!("expected button defaults");
        };
        b
    }

    #[test]
    fn test_hover_falls_back_to_normal_state() {
        let b = button();
        let out = compile_button(&b, Breakpoint::Desktop, &StaticIconSet);

        // No hover override set: variables mirror the normal state.
        assert_eq!(
            out.get("--pc-btn-hover-background"),
            out.get("background")
        );
        assert_eq!(out.get("--pc-btn-hover-color"), out.get("color"));
    }

    #[test]
    fn test_hover_override_used_when_set() {
        let mut b = button();
        b.hover.background = Some(ColorValue::solid("#1e40af"));
        let out = compile_button(&b, Breakpoint::Desktop, &StaticIconSet);

        assert_eq!(out.get("--pc-btn-hover-background"), Some("#1e40af"));
        // Text color still falls back.
        assert_eq!(out.get("--pc-btn-hover-color"), out.get("color"));
    }

    #[test]
    fn test_transition_uses_configured_duration() {
        let mut b = button();
        b.transition_ms = 350;
        let out = compile_button(&b, Breakpoint::Desktop, &StaticIconSet);
        assert_eq!(
            out.get("transition"),
            Some("background 350ms ease, color 350ms ease")
        );
    }

    #[test]
    fn test_link_attributes() {
        let mut b = button();
        b.link.url = "/checkout".to_string();
        b.link.open_in_new_tab = true;
        b.link.nofollow = true;

        let out = compile_button(&b, Breakpoint::Desktop, &StaticIconSet);
        assert_eq!(out.hints.link.as_ref().unwrap().url, "/checkout");
        assert!(out
            .hints
            .attributes
            .contains(&("target".to_string(), "_blank".to_string())));
        assert!(out
            .hints
            .attributes
            .contains(&("rel".to_string(), "nofollow".to_string())));
    }

    #[test]
    fn test_unknown_icon_name_resolves_to_placeholder() {
        let mut b = button();
        b.icon = Some("no-such-icon".to_string());
        let out = compile_button(&b, Breakpoint::Desktop, &StaticIconSet);
        assert_eq!(out.hints.icon.as_ref().unwrap().name, "placeholder");
    }
}
