//! Image, icon, video, and gallery compilation.

use crate::common::{compile_advanced, css_color, fmt_px};
use crate::icons::IconResolver;
use crate::output::{ChildHint, CompiledBlock};
use pagecraft_schema::{
    Breakpoint, GalleryContent, IconContent, ImageContent, VideoContent,
};

pub fn compile_image(content: &ImageContent, bp: Breakpoint) -> CompiledBlock {
    let mut out = CompiledBlock::new("img");

    out.push("object-fit", content.object_fit.as_css());
    match content.alignment.resolve(bp) {
        pagecraft_schema::TextAlign::Left => {
            out.push("margin-right", "auto");
        }
        pagecraft_schema::TextAlign::Right => {
            out.push("margin-left", "auto");
        }
        _ => {
            out.push("margin-left", "auto");
            out.push("margin-right", "auto");
        }
    }
    compile_advanced(&content.advanced, bp, &mut out);

    out.hints
        .attributes
        .push(("src".to_string(), content.src.clone()));
    out.hints
        .attributes
        .push(("alt".to_string(), content.alt.clone()));
    if content.lazy_load {
        out.hints
            .attributes
            .push(("loading".to_string(), "lazy".to_string()));
    }
    out.hints.link = content.link.clone();

    if !content.caption.is_empty() {
        out.hints
            .children
            .push(ChildHint::with_text("figcaption", content.caption.clone()));
    }

    out
}

pub fn compile_icon(
    content: &IconContent,
    bp: Breakpoint,
    icons: &dyn IconResolver,
) -> CompiledBlock {
    let mut out = CompiledBlock::new("span");

    let size = fmt_px(*content.size.resolve(bp));
    out.push("width", size.clone());
    out.push("height", size);
    out.push("color", css_color(&content.color));
    out.push("text-align", content.alignment.resolve(bp).as_css());
    compile_advanced(&content.advanced, bp, &mut out);

    // Lookup is total: unknown names resolve to the placeholder.
    out.hints.icon = Some(icons.lookup(&content.name));
    out
}

pub fn compile_video(content: &VideoContent, bp: Breakpoint) -> CompiledBlock {
    let mut out = CompiledBlock::new("div");

    out.push("aspect-ratio", content.aspect_ratio.as_css());
    compile_advanced(&content.advanced, bp, &mut out);

    let mut player = ChildHint::new("video");
    player
        .attributes
        .push(("src".to_string(), content.url.clone()));
    if content.autoplay {
        player
            .attributes
            .push(("autoplay".to_string(), String::new()));
    }
    if content.loop_playback {
        player.attributes.push(("loop".to_string(), String::new()));
    }
    if content.muted {
        player
            .attributes
            .push(("muted".to_string(), String::new()));
    }
    if content.controls {
        player
            .attributes
            .push(("controls".to_string(), String::new()));
    }
    player.push("width", "100%");
    player.push("height", "100%");
    out.hints.children.push(player);

    out
}

pub fn compile_gallery(content: &GalleryContent, bp: Breakpoint) -> CompiledBlock {
    let mut out = CompiledBlock::new("div");

    out.push("display", "grid");
    out.push(
        "grid-template-columns",
        format!("repeat({}, minmax(0, 1fr))", content.columns.resolve(bp)),
    );
    out.push("gap", fmt_px(*content.gap.resolve(bp)));
    compile_advanced(&content.advanced, bp, &mut out);

    for image in &content.images {
        let mut figure = ChildHint::new("figure");

        let mut img = ChildHint::new("img");
        img.attributes.push(("src".to_string(), image.src.clone()));
        img.attributes.push(("alt".to_string(), image.alt.clone()));
        img.push("width", "100%");
        if content.radius > 0.0 {
            img.push("border-radius", fmt_px(content.radius));
        }
        figure.children.push(img);

        if !image.caption.is_empty() {
            figure
                .children
                .push(ChildHint::with_text("figcaption", image.caption.clone()));
        }
        out.hints.children.push(figure);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icons::StaticIconSet;
    use pagecraft_schema::{GalleryImage, ResponsiveValue, WidgetContent, WidgetType};

    #[test]
    fn test_image_attributes_and_caption() {
        let WidgetContent::Image(mut i) = WidgetContent::default_for(WidgetType::Image) else {
            panic!("expected image defaults");
        };
        i.src = "https://cdn.example.com/a.jpg".to_string();
        i.alt = "A".to_string();
        i.caption = "Figure 1".to_string();

        let out = compile_image(&i, Breakpoint::Desktop);
        assert!(out
            .hints
            .attributes
            .contains(&("src".to_string(), "https://cdn.example.com/a.jpg".to_string())));
        assert!(out
            .hints
            .attributes
            .contains(&("loading".to_string(), "lazy".to_string())));
        assert_eq!(out.hints.children[0].tag, "figcaption");
    }

    #[test]
    fn test_icon_lookup_never_fails() {
        let WidgetContent::Icon(mut c) = WidgetContent::default_for(WidgetType::Icon) else {
            panic!("expected icon defaults");
        };
        c.name = "missing-icon-name".to_string();

        let out = compile_icon(&c, Breakpoint::Desktop, &StaticIconSet);
        assert_eq!(out.hints.icon.as_ref().unwrap().name, "placeholder");
    }

    #[test]
    fn test_video_aspect_ratio_and_flags() {
        let WidgetContent::Video(mut v) = WidgetContent::default_for(WidgetType::Video) else {
            panic!("expected video defaults");
        };
        v.url = "https://cdn.example.com/v.mp4".to_string();
        v.muted = true;

        let out = compile_video(&v, Breakpoint::Desktop);
        assert_eq!(out.get("aspect-ratio"), Some("16 / 9"));

        let player = &out.hints.children[0];
        assert!(player
            .attributes
            .contains(&("muted".to_string(), String::new())));
        assert!(player
            .attributes
            .contains(&("controls".to_string(), String::new())));
    }

    #[test]
    fn test_gallery_columns_resolve_per_breakpoint() {
        let WidgetContent::Gallery(mut g) = WidgetContent::default_for(WidgetType::Gallery) else {
            panic!("expected gallery defaults");
        };
        g.columns = ResponsiveValue {
            desktop: 3,
            tablet: Some(2),
            mobile: Some(1),
        };
        g.images = vec![GalleryImage {
            src: "a.jpg".to_string(),
            alt: String::new(),
            caption: String::new(),
        }];

        let desktop = compile_gallery(&g, Breakpoint::Desktop);
        assert_eq!(
            desktop.get("grid-template-columns"),
            Some("repeat(3, minmax(0, 1fr))")
        );

        let mobile = compile_gallery(&g, Breakpoint::Mobile);
        assert_eq!(
            mobile.get("grid-template-columns"),
            Some("repeat(1, minmax(0, 1fr))")
        );
        assert_eq!(mobile.hints.children.len(), 1);
    }
}
