//! Normalization: stored content → complete, current-shape typed content.

use crate::legacy;
use crate::merge::deep_merge;
use pagecraft_schema::{WidgetContent, WidgetType};
use serde_json::Value;
use tracing::debug;

/// Schema version stamped on every block this codebase writes. Blocks loaded
/// with this version skip duck-typed legacy detection.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// Normalize possibly partial or legacy-shaped stored content for `kind`.
///
/// Absent content returns the defaults unchanged. The result is always fully
/// populated: every required nested field of the type's default instance is
/// present. Deterministic and idempotent.
pub fn normalize(kind: WidgetType, raw: Option<&Value>) -> WidgetContent {
    normalize_versioned(kind, None, raw)
}

/// [`normalize`] with the stored schema version, when the block carried one.
pub fn normalize_versioned(
    kind: WidgetType,
    schema_version: Option<u32>,
    raw: Option<&Value>,
) -> WidgetContent {
    let Some(raw) = raw.filter(|v| !v.is_null()) else {
        return WidgetContent::default_for(kind);
    };

    if kind == WidgetType::Unknown {
        // Unknown kinds are kept verbatim; the render pipeline shows a
        // placeholder and saving round-trips the original payload.
        return WidgetContent::Unknown {
            type_name: raw
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string(),
            raw: raw.clone(),
        };
    }

    if !raw.is_object() {
        debug!(
            kind = kind.as_str(),
            "stored content is not an object; falling back to defaults"
        );
        return WidgetContent::default_for(kind);
    }

    let migrated;
    let overlay = if schema_version != Some(CURRENT_SCHEMA_VERSION)
        && legacy::is_legacy_shape(kind, raw)
    {
        debug!(kind = kind.as_str(), "migrating legacy-shaped content");
        migrated = legacy::migrate_legacy(kind, raw);
        &migrated
    } else {
        raw
    };

    let defaults = WidgetContent::default_for(kind);
    let Ok(mut merged) = serde_json::to_value(&defaults) else {
        return defaults;
    };
    deep_merge(&mut merged, overlay);

    // The stored object may carry a stale or missing tag; the block's type is
    // authoritative.
    merged["type"] = Value::String(kind.as_str().to_string());

    match serde_json::from_value::<WidgetContent>(merged) {
        Ok(content) => content,
        Err(err) => {
            debug!(
                kind = kind.as_str(),
                error = %err,
                "merged content does not match the current shape; falling back to defaults"
            );
            defaults
        }
    }
}
