//! Icon resolution seam.
//!
//! The compiler never references a process-wide icon table; callers inject an
//! [`IconResolver`] capability, keeping compilation pure and testable without
//! a full icon set loaded. Lookups never fail: unknown names resolve to a
//! designated placeholder icon.

use serde::Serialize;

/// An icon the presentation layer can draw: a 24x24 stroke path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderableIcon {
    pub name: String,
    pub view_box: String,
    pub path: String,
}

impl RenderableIcon {
    fn stroke(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            view_box: "0 0 24 24".to_string(),
            path: path.to_string(),
        }
    }
}

/// Name-to-renderable icon lookup. Implementations must be total: unknown
/// names fall back to [`placeholder_icon`] rather than failing.
pub trait IconResolver {
    fn lookup(&self, name: &str) -> RenderableIcon;
}

/// The icon shown when a name is not found in the set.
pub fn placeholder_icon() -> RenderableIcon {
    RenderableIcon::stroke(
        "placeholder",
        "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20 M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3 M12 17h.01",
    )
}

/// Built-in icon set covering the palette's stock icons.
#[derive(Debug, Default)]
pub struct StaticIconSet;

const ICONS: &[(&str, &str)] = &[
    ("arrow-right", "M5 12h14 M12 5l7 7-7 7"),
    ("arrow-left", "M19 12H5 M12 19l-7-7 7-7"),
    ("check", "M20 6 9 17l-5-5"),
    ("chevron-down", "m6 9 6 6 6-6"),
    ("chevron-right", "m9 18 6-6-6-6"),
    ("star", "m12 2 3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7.09 14.14 2 9.27l6.91-1.01L12 2z"),
    ("heart", "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z"),
    ("play", "m5 3 14 9-14 9V3z"),
    ("cart", "M9 22a1 1 0 1 0 0-2 1 1 0 0 0 0 2z M20 22a1 1 0 1 0 0-2 1 1 0 0 0 0 2z M1 1h4l2.68 13.39a2 2 0 0 0 2 1.61h9.72a2 2 0 0 0 2-1.61L23 6H6"),
    ("mail", "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z M22 6l-10 7L2 6"),
    ("phone", "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.37 1.9.72 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.35 1.85.59 2.81.72A2 2 0 0 1 22 16.92z"),
    ("external-link", "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6 M15 3h6v6 M10 14 21 3"),
    ("download", "M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4 M7 10l5 5 5-5 M12 15V3"),
];

impl IconResolver for StaticIconSet {
    fn lookup(&self, name: &str) -> RenderableIcon {
        ICONS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(n, p)| RenderableIcon::stroke(n, p))
            .unwrap_or_else(placeholder_icon)
    }
}
