//! Recursive JSON merge used by normalization.

use serde_json::Value;

/// Merge `overlay` into `base`, field by field.
///
/// - Objects merge recursively.
/// - Arrays (feature lists, gallery images, tab items, gradient stops) are
///   replaced wholesale by the overlay, never merged element-by-element.
/// - Scalars replace.
/// - Null overlay values are treated as absent and leave the base untouched;
///   they come from serializers that write `null` for missing optionals.
pub fn deep_merge(base: &mut Value, overlay: &Value) {
    if overlay.is_null() {
        return;
    }

    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                if value.is_null() {
                    continue;
                }
                match base_map.get_mut(key) {
                    Some(existing) if existing.is_object() && value.is_object() => {
                        deep_merge(existing, value);
                    }
                    _ => {
                        base_map.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (base_slot, _) => {
            *base_slot = overlay.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_objects_merge_field_by_field() {
        let mut base = json!({
            "typography": { "fontSize": { "desktop": 16.0 }, "fontWeight": 400 }
        });
        let overlay = json!({
            "typography": { "fontSize": { "desktop": 20.0 } }
        });

        deep_merge(&mut base, &overlay);

        // fontWeight survives: a shallow merge would have dropped it.
        assert_eq!(base["typography"]["fontWeight"], 400);
        assert_eq!(base["typography"]["fontSize"]["desktop"], 20.0);
    }

    #[test]
    fn test_arrays_are_replaced_wholesale() {
        let mut base = json!({ "features": ["a", "b", "c"] });
        let overlay = json!({ "features": ["x"] });

        deep_merge(&mut base, &overlay);

        assert_eq!(base["features"], json!(["x"]));
    }

    #[test]
    fn test_null_overlay_values_keep_base() {
        let mut base = json!({ "color": "#fff", "nested": { "a": 1 } });
        let overlay = json!({ "color": null, "nested": null });

        deep_merge(&mut base, &overlay);

        assert_eq!(base["color"], "#fff");
        assert_eq!(base["nested"]["a"], 1);
    }

    #[test]
    fn test_scalar_overlay_replaces_object() {
        let mut base = json!({ "value": { "desktop": 1 } });
        let overlay = json!({ "value": 2 });

        deep_merge(&mut base, &overlay);

        assert_eq!(base["value"], 2);
    }
}
