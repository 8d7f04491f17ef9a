//! Property patching: partial updates from the property panel.
//!
//! Each widget kind exposes a fixed field whitelist per panel tab. A patch is
//! filtered against the whitelist, shallow-merged over the block's serialized
//! content at the top level, then re-normalized so the result is always a
//! complete, current-shape value. This is the only write path for visual
//! content; raw markup and version history are reachable only through code
//! mode.

use crate::document::PageDocument;
use pagecraft_migrate::{normalize_versioned, CURRENT_SCHEMA_VERSION};
use pagecraft_schema::WidgetType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Property panel tabs. Every kind shares the advanced tab; content and
/// style whitelists are per kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyTab {
    Content,
    Style,
    Advanced,
}

/// Top-level content fields editable for `kind` on `tab`. Field names match
/// the stored camelCase keys.
pub fn eligible_fields(kind: WidgetType, tab: PropertyTab) -> &'static [&'static str] {
    use PropertyTab::{Content, Style};
    use WidgetType::*;

    if tab == PropertyTab::Advanced {
        return match kind {
            Unknown => &[],
            _ => &["advanced"],
        };
    }

    match (kind, tab) {
        (Heading, Content) => &["text", "level"],
        (Heading, Style) => &["alignment", "typography", "color", "textShadow"],

        (Paragraph, Content) => &["text"],
        (Paragraph, Style) => &["alignment", "typography", "color"],

        (Button, Content) => &["text", "link", "icon", "iconPosition"],
        (Button, Style) => &[
            "alignment",
            "typography",
            "background",
            "textColor",
            "hover",
            "transitionMs",
        ],

        (Image, Content) => &["src", "alt", "caption", "link"],
        (Image, Style) => &["alignment", "objectFit", "lazyLoad"],

        (Icon, Content) => &["name"],
        (Icon, Style) => &["size", "color", "alignment"],

        (Divider, Style) => &["style", "weight", "widthPercent", "color", "alignment"],
        (Spacer, Style) => &["height"],

        (Video, Content) => &["url", "autoplay", "loop", "muted", "controls"],
        (Video, Style) => &["aspectRatio"],

        (PricingTable, Content) => &["plans"],
        (PricingTable, Style) => &["columns", "gap", "accentColor"],

        (Gallery, Content) => &["images"],
        (Gallery, Style) => &["columns", "gap", "radius"],

        (Tabs, Content) => &["items"],
        (Tabs, Style) => &["activeColor", "typography"],

        (Container | Grid | FlexContainer | SmartGrid, Style) => {
            &["layout", "background", "border", "shadow"]
        }

        _ => &[],
    }
}

/// Apply a partial update to one block's content. Keys outside the tab's
/// whitelist are dropped; whitelisted values replace the current top-level
/// value wholesale and the merged object is re-normalized. Returns whether
/// the document changed. No-op for missing ids, unknown-kind blocks, and
/// patches with no eligible keys.
pub fn patch_content(
    doc: &mut PageDocument,
    block_id: &str,
    tab: PropertyTab,
    partial: &Map<String, Value>,
) -> bool {
    let Some(block) = doc.block(block_id) else {
        return false;
    };
    if block.kind == WidgetType::Unknown {
        return false;
    }
    let kind = block.kind;

    let eligible = eligible_fields(kind, tab);
    let filtered: Map<String, Value> = partial
        .iter()
        .filter(|(key, _)| eligible.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    if filtered.len() < partial.len() {
        debug!(
            kind = kind.as_str(),
            ?tab,
            dropped = partial.len() - filtered.len(),
            "dropped ineligible patch keys"
        );
    }
    if filtered.is_empty() {
        return false;
    }

    let Ok(mut merged) = serde_json::to_value(&block.content) else {
        return false;
    };
    if let Value::Object(target) = &mut merged {
        for (key, value) in filtered {
            target.insert(key, value);
        }
    }

    // Stamped current: the patch came from the property panel, so legacy
    // detection must not reinterpret it.
    let next = normalize_versioned(kind, Some(CURRENT_SCHEMA_VERSION), Some(&merged));
    let Some(block) = doc.block_mut(block_id) else {
        return false;
    };
    if block.content == next {
        return false;
    }
    block.content = next;
    doc.touch();
    true
}
