//! Duck-typed legacy shape detection and per-type migrations.
//!
//! Pre-schema content carries no version marker, so the only discriminant is
//! structure: which keys are present, and whether they hold the flat scalar
//! forms the old serializer wrote. Each migration is a pure `Value -> Value`
//! reshape of legacy fields into the current structure; keys the current
//! schema does not know are dropped later by typed deserialization.

use pagecraft_schema::WidgetType;
use serde_json::{json, Map, Value};

/// True when `raw` matches a known historical shape for `kind`.
///
/// Never errors: non-object input is simply not a legacy shape (it is a shape
/// error handled by normalization's defaults fallback).
pub fn is_legacy_shape(kind: WidgetType, raw: &Value) -> bool {
    let Some(obj) = raw.as_object() else {
        return false;
    };

    match kind {
        WidgetType::Container
        | WidgetType::Grid
        | WidgetType::FlexContainer
        | WidgetType::SmartGrid => is_legacy_container_like(obj),

        WidgetType::Button => {
            (obj.contains_key("url") || obj.contains_key("text")) && !obj.contains_key("link")
        }

        WidgetType::Heading | WidgetType::Paragraph => {
            is_bare_string(obj, "alignment")
                || is_bare_number(obj, "fontSize")
                || is_bare_string(obj, "color")
        }

        WidgetType::Image => obj.contains_key("url") && !obj.contains_key("src"),

        WidgetType::Icon => is_bare_number(obj, "size") || is_bare_string(obj, "color"),

        WidgetType::Divider => is_bare_number(obj, "width") || is_bare_string(obj, "alignment"),

        WidgetType::Spacer => is_bare_number(obj, "height"),

        WidgetType::Gallery | WidgetType::PricingTable | WidgetType::Tabs => {
            is_bare_number(obj, "columns") || is_bare_number(obj, "gap")
        }

        WidgetType::Video | WidgetType::Unknown => false,
    }
}

/// The old container serializer wrote flat keys directly on the content
/// object; the current shape always has a `layout` sub-object.
fn is_legacy_container_like(obj: &Map<String, Value>) -> bool {
    if obj.contains_key("layout") {
        return false;
    }

    obj.contains_key("backgroundColor")
        || is_bare_number(obj, "padding")
        || is_bare_string(obj, "maxWidth")
        || is_bare_number(obj, "columns")
        || is_bare_number(obj, "gap")
        || is_bare_string(obj, "alignment")
}

/// Reshape a legacy-shaped `raw` into the current structure for `kind`.
///
/// Returns a possibly partial current-shape object; normalization completes it
/// by deep-merging over the defaults. Fields that are already current-shape
/// pass through untouched.
pub fn migrate_legacy(kind: WidgetType, raw: &Value) -> Value {
    let Some(obj) = raw.as_object() else {
        return raw.clone();
    };
    let mut out = obj.clone();

    match kind {
        WidgetType::Container
        | WidgetType::Grid
        | WidgetType::FlexContainer
        | WidgetType::SmartGrid => migrate_container_like(&mut out),

        WidgetType::Button => migrate_button(&mut out),

        WidgetType::Heading | WidgetType::Paragraph => migrate_text(&mut out),

        WidgetType::Image => {
            if let Some(url) = take_string(&mut out, "url") {
                out.entry("src").or_insert(Value::String(url));
            }
            wrap_responsive_string(&mut out, "alignment");
        }

        WidgetType::Icon => {
            wrap_responsive_number(&mut out, "size");
            wrap_solid_color(&mut out, "color");
        }

        WidgetType::Divider => {
            if let Some(width) = take_number(&mut out, "width") {
                out.insert("widthPercent".to_string(), json!({ "desktop": width }));
            }
            wrap_responsive_string(&mut out, "alignment");
        }

        WidgetType::Spacer => {
            wrap_responsive_number(&mut out, "height");
        }

        WidgetType::Gallery | WidgetType::PricingTable | WidgetType::Tabs => {
            wrap_responsive_number(&mut out, "columns");
            wrap_responsive_number(&mut out, "gap");
        }

        WidgetType::Video | WidgetType::Unknown => {}
    }

    Value::Object(out)
}

/// Flat `backgroundColor` / `padding` / `maxWidth` / `columns` / `gap` /
/// `alignment` → `background.color`, `advanced.padding`, `advanced.maxWidth`,
/// `layout.*`.
fn migrate_container_like(out: &mut Map<String, Value>) {
    if let Some(color) = take_string(out, "backgroundColor") {
        out.insert(
            "background".to_string(),
            json!({ "color": { "type": "solid", "solid": color } }),
        );
    }

    let mut advanced = out
        .remove("advanced")
        .filter(Value::is_object)
        .unwrap_or_else(|| json!({}));

    if let Some(padding) = take_number(out, "padding") {
        advanced["padding"] = json!({
            "top": &padding,
            "right": &padding,
            "bottom": &padding,
            "left": &padding,
            "linked": true,
        });
    }
    if let Some(max_width) = take_string(out, "maxWidth") {
        advanced["maxWidth"] = Value::String(max_width);
    }
    if advanced.as_object().is_some_and(|m| !m.is_empty()) {
        out.insert("advanced".to_string(), advanced);
    }

    let mut layout = out
        .remove("layout")
        .filter(Value::is_object)
        .unwrap_or_else(|| json!({}));

    if let Some(columns) = take_number(out, "columns") {
        layout["columns"] = json!({ "desktop": columns });
    }
    if let Some(gap) = take_number(out, "gap") {
        layout["gap"] = json!({ "desktop": gap });
    }
    if let Some(alignment) = take_string(out, "alignment") {
        layout["alignment"] = json!({ "desktop": alignment });
    }
    if layout.as_object().is_some_and(|m| !m.is_empty()) {
        out.insert("layout".to_string(), layout);
    }
}

/// Flat `url` → `link.url`; link flags come from the defaults.
fn migrate_button(out: &mut Map<String, Value>) {
    if let Some(url) = take_string(out, "url") {
        out.insert(
            "link".to_string(),
            json!({ "url": url, "openInNewTab": false, "nofollow": false }),
        );
    }
    wrap_responsive_string(out, "alignment");
    wrap_solid_color(out, "backgroundColor");
    if let Some(bg) = out.remove("backgroundColor") {
        out.insert("background".to_string(), bg);
    }
}

/// Flat `alignment: string`, `fontSize: number`, `color: string` → responsive
/// alignment, `typography.fontSize`, solid color object.
fn migrate_text(out: &mut Map<String, Value>) {
    wrap_responsive_string(out, "alignment");
    wrap_solid_color(out, "color");

    if let Some(size) = take_number(out, "fontSize") {
        let mut typography = out
            .remove("typography")
            .filter(Value::is_object)
            .unwrap_or_else(|| json!({}));
        typography["fontSize"] = json!({ "desktop": size });
        out.insert("typography".to_string(), typography);
    }
}

fn is_bare_string(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).is_some_and(Value::is_string)
}

fn is_bare_number(obj: &Map<String, Value>, key: &str) -> bool {
    obj.get(key).is_some_and(Value::is_number)
}

fn take_string(obj: &mut Map<String, Value>, key: &str) -> Option<String> {
    if obj.get(key).is_some_and(Value::is_string) {
        obj.remove(key)
            .and_then(|v| v.as_str().map(str::to_string))
    } else {
        None
    }
}

/// Remove a numeric value, keeping its original JSON representation so an
/// integer stays an integer through re-wrapping (some current-shape targets
/// are unsigned and reject `4.0`).
fn take_number(obj: &mut Map<String, Value>, key: &str) -> Option<serde_json::Number> {
    if obj.get(key).is_some_and(Value::is_number) {
        match obj.remove(key) {
            Some(Value::Number(n)) => Some(n),
            _ => None,
        }
    } else {
        None
    }
}

/// `key: "center"` → `key: { "desktop": "center" }`.
fn wrap_responsive_string(obj: &mut Map<String, Value>, key: &str) {
    if let Some(value) = take_string(obj, key) {
        obj.insert(key.to_string(), json!({ "desktop": value }));
    }
}

/// `key: 24` → `key: { "desktop": 24 }`.
fn wrap_responsive_number(obj: &mut Map<String, Value>, key: &str) {
    if let Some(value) = take_number(obj, key) {
        obj.insert(key.to_string(), json!({ "desktop": value }));
    }
}

/// `key: "#fff"` → `key: { "type": "solid", "solid": "#fff" }`.
fn wrap_solid_color(obj: &mut Map<String, Value>, key: &str) {
    if let Some(color) = take_string(obj, key) {
        obj.insert(
            key.to_string(),
            json!({ "type": "solid", "solid": color }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_container_detected_by_background_color() {
        let raw = json!({ "backgroundColor": "#fff" });
        assert!(is_legacy_shape(WidgetType::Container, &raw));

        let current = json!({ "layout": { "gap": { "desktop": 16.0 } } });
        assert!(!is_legacy_shape(WidgetType::Container, &current));
    }

    #[test]
    fn test_legacy_button_detected_by_missing_link() {
        assert!(is_legacy_shape(
            WidgetType::Button,
            &json!({ "text": "Buy", "url": "/checkout" })
        ));
        assert!(!is_legacy_shape(
            WidgetType::Button,
            &json!({ "text": "Buy", "link": { "url": "/checkout" } })
        ));
    }

    #[test]
    fn test_non_object_input_is_not_legacy() {
        assert!(!is_legacy_shape(WidgetType::Button, &json!("Buy")));
        assert!(!is_legacy_shape(WidgetType::Container, &json!(42)));
        assert!(!is_legacy_shape(WidgetType::Heading, &Value::Null));
    }

    #[test]
    fn test_container_migration_reshapes_flat_keys() {
        let raw = json!({ "backgroundColor": "#fff", "padding": 24, "maxWidth": "md" });
        let migrated = migrate_legacy(WidgetType::Container, &raw);

        assert_eq!(migrated["background"]["color"]["solid"], "#fff");
        assert_eq!(migrated["advanced"]["padding"]["top"], 24.0);
        assert_eq!(migrated["advanced"]["padding"]["linked"], true);
        assert_eq!(migrated["advanced"]["maxWidth"], "md");
        assert!(migrated.get("backgroundColor").is_none());
    }

    #[test]
    fn test_grid_migration_wraps_flat_columns() {
        let raw = json!({ "columns": 4, "gap": 12 });
        let migrated = migrate_legacy(WidgetType::Grid, &raw);

        assert_eq!(migrated["layout"]["columns"]["desktop"], 4.0);
        assert_eq!(migrated["layout"]["gap"]["desktop"], 12.0);
    }

    #[test]
    fn test_button_migration_builds_link() {
        let raw = json!({ "text": "Buy", "url": "/checkout" });
        let migrated = migrate_legacy(WidgetType::Button, &raw);

        assert_eq!(migrated["text"], "Buy");
        assert_eq!(migrated["link"]["url"], "/checkout");
        assert_eq!(migrated["link"]["openInNewTab"], false);
        assert_eq!(migrated["link"]["nofollow"], false);
    }

    #[test]
    fn test_text_migration_wraps_scalars() {
        let raw = json!({ "alignment": "center", "fontSize": 40, "color": "#123456" });
        let migrated = migrate_legacy(WidgetType::Heading, &raw);

        assert_eq!(migrated["alignment"]["desktop"], "center");
        assert_eq!(migrated["typography"]["fontSize"]["desktop"], 40.0);
        assert_eq!(migrated["color"]["type"], "solid");
        assert_eq!(migrated["color"]["solid"], "#123456");
    }

    #[test]
    fn test_migration_preserves_current_shape_fields() {
        // A half-migrated record: legacy fontSize next to current alignment.
        let raw = json!({
            "fontSize": 18,
            "alignment": { "desktop": "right" },
            "text": "Hello"
        });
        let migrated = migrate_legacy(WidgetType::Paragraph, &raw);

        assert_eq!(migrated["alignment"]["desktop"], "right");
        assert_eq!(migrated["text"], "Hello");
    }
}
