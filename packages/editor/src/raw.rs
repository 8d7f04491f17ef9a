//! Stored wire shape of pages and blocks.
//!
//! Stored JSON is untrusted: blocks may be legacy-shaped, partial, missing
//! ids, or of unrecognized type. Loading is total; every raw block becomes an
//! editable [`Block`], with normalization handling the shape and a verbatim
//! [`WidgetContent::Unknown`] payload handling the type.

use crate::document::{Block, BlockMode, VersionEntry, HISTORY_CAP, new_block_id};
use pagecraft_migrate::{normalize_versioned, CURRENT_SCHEMA_VERSION};
use pagecraft_schema::{WidgetContent, WidgetType};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// One block as stored. Every field except the type tag is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub widget: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<BlockMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_version_history: Option<Vec<VersionEntry>>,
}

/// A stored page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<RawBlock>,
}

/// Turn a stored block into an editable one. Missing ids are regenerated and
/// oversized histories trimmed; unrecognized type strings keep their payload
/// verbatim under an unknown kind.
pub fn block_from_raw(raw: &RawBlock) -> Block {
    let kind = WidgetType::parse(&raw.widget);

    let content = if kind == WidgetType::Unknown {
        debug!(widget = %raw.widget, "keeping unrecognized block type verbatim");
        WidgetContent::Unknown {
            type_name: raw.widget.clone(),
            raw: raw.content.clone().unwrap_or(Value::Null),
        }
    } else {
        normalize_versioned(kind, raw.schema_version, raw.content.as_ref())
    };

    let mut history = raw.code_version_history.clone().unwrap_or_default();
    history.truncate(HISTORY_CAP);

    Block {
        id: raw.id.clone().unwrap_or_else(new_block_id),
        kind,
        mode: raw.mode.unwrap_or_default(),
        content,
        html_content: raw.html_content.clone(),
        code_version_history: history,
    }
}

/// Turn an editable block back into the stored shape, stamped with the
/// current schema version. Unknown blocks write their original payload back
/// untouched so a round-trip through this codebase loses nothing.
pub fn raw_from_block(block: &Block) -> RawBlock {
    let (widget, content) = match &block.content {
        WidgetContent::Unknown { type_name, raw } => {
            let content = if raw.is_null() { None } else { Some(raw.clone()) };
            (type_name.clone(), content)
        }
        content => (
            block.kind.as_str().to_string(),
            serde_json::to_value(content).ok(),
        ),
    };

    RawBlock {
        id: Some(block.id.clone()),
        widget,
        schema_version: Some(CURRENT_SCHEMA_VERSION),
        mode: Some(block.mode),
        content,
        html_content: block.html_content.clone(),
        code_version_history: if block.code_version_history.is_empty() {
            None
        } else {
            Some(block.code_version_history.clone())
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_id_is_regenerated() {
        let raw = RawBlock {
            widget: "heading".to_string(),
            ..RawBlock::default()
        };
        let block = block_from_raw(&raw);
        assert!(!block.id.is_empty());
        assert_eq!(block.kind, WidgetType::Heading);
        assert_eq!(block.content, WidgetContent::default_for(WidgetType::Heading));
    }

    #[test]
    fn test_unknown_type_round_trips_verbatim() {
        let payload = json!({ "slides": ["a.jpg", "b.jpg"], "interval": 3000 });
        let raw = RawBlock {
            id: Some("b1".to_string()),
            widget: "carousel".to_string(),
            content: Some(payload.clone()),
            ..RawBlock::default()
        };

        let block = block_from_raw(&raw);
        assert_eq!(block.kind, WidgetType::Unknown);

        let back = raw_from_block(&block);
        assert_eq!(back.widget, "carousel");
        assert_eq!(back.content, Some(payload));
    }

    #[test]
    fn test_save_stamps_current_schema_version() {
        let block = Block::new(WidgetType::Button);
        let raw = raw_from_block(&block);
        assert_eq!(raw.schema_version, Some(CURRENT_SCHEMA_VERSION));
        assert_eq!(raw.widget, "button");
        assert!(raw.content.is_some());
    }

    #[test]
    fn test_oversized_stored_history_is_trimmed_on_load() {
        let history: Vec<VersionEntry> = (0..30)
            .map(|i| VersionEntry {
                timestamp: format!("2026-01-01T00:00:{:02}.000Z", i),
                html_content: format!("<p>{i}</p>"),
            })
            .collect();
        let raw = RawBlock {
            widget: "heading".to_string(),
            code_version_history: Some(history),
            ..RawBlock::default()
        };

        let block = block_from_raw(&raw);
        assert_eq!(block.code_version_history.len(), HISTORY_CAP);
        // Stored order is newest first; trimming keeps the head.
        assert_eq!(block.code_version_history[0].html_content, "<p>0</p>");
    }

    #[test]
    fn test_raw_block_deserializes_camel_case() {
        let raw: RawBlock = serde_json::from_value(json!({
            "id": "b1",
            "type": "spacer",
            "schemaVersion": 2,
            "mode": "code",
            "htmlContent": "<div></div>",
            "codeVersionHistory": [
                { "timestamp": "2026-01-01T00:00:00.000Z", "htmlContent": "<div></div>" }
            ]
        }))
        .unwrap();

        assert_eq!(raw.mode, Some(BlockMode::Code));
        assert_eq!(raw.schema_version, Some(2));
        assert_eq!(raw.code_version_history.unwrap().len(), 1);
    }
}
