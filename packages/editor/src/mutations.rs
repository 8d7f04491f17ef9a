//! Serializable edit operations.
//!
//! Editor surfaces describe changes as data; [`BlockEdit::apply`] is the one
//! place that interprets them against a document. Edits referencing missing
//! block ids apply as no-ops.

use crate::document::{new_block_id, PageDocument};
use crate::patch::{patch_content, PropertyTab};
use crate::raw::{block_from_raw, RawBlock};
use pagecraft_schema::WidgetType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::instrument;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum BlockEdit {
    /// Insert a fresh widget with default content.
    InsertWidget { widget: WidgetType, index: usize },
    /// Insert stored blocks (a template) with freshly minted ids.
    InsertTemplate { blocks: Vec<RawBlock>, index: usize },
    MoveBlock { id: String, to_index: usize },
    DuplicateBlock { id: String },
    DeleteBlock { id: String },
    /// Partial content update, filtered per kind and panel tab.
    PatchContent {
        id: String,
        tab: PropertyTab,
        partial: Map<String, Value>,
    },
}

/// What an edit did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditOutcome {
    pub changed: bool,
    /// Ids of blocks the edit created, in document order.
    pub inserted_ids: Vec<String>,
}

impl EditOutcome {
    fn unchanged() -> Self {
        Self::default()
    }

    fn changed() -> Self {
        Self {
            changed: true,
            inserted_ids: Vec::new(),
        }
    }

    fn inserted(ids: Vec<String>) -> Self {
        Self {
            changed: !ids.is_empty(),
            inserted_ids: ids,
        }
    }
}

impl BlockEdit {
    #[instrument(skip(self, doc), fields(edit = self.name()))]
    pub fn apply(&self, doc: &mut PageDocument) -> EditOutcome {
        match self {
            BlockEdit::InsertWidget { widget, index } => {
                EditOutcome::inserted(vec![doc.insert_widget(*widget, *index)])
            }
            BlockEdit::InsertTemplate { blocks, index } => {
                let blocks: Vec<_> = blocks
                    .iter()
                    .map(|raw| {
                        let mut block = block_from_raw(raw);
                        // Stored template ids may collide with the page.
                        block.id = new_block_id();
                        block
                    })
                    .collect();
                EditOutcome::inserted(doc.insert_blocks(blocks, *index))
            }
            BlockEdit::MoveBlock { id, to_index } => {
                if doc.move_block(id, *to_index) {
                    EditOutcome::changed()
                } else {
                    EditOutcome::unchanged()
                }
            }
            BlockEdit::DuplicateBlock { id } => match doc.duplicate_block(id) {
                Some(copy_id) => EditOutcome::inserted(vec![copy_id]),
                None => EditOutcome::unchanged(),
            },
            BlockEdit::DeleteBlock { id } => {
                if doc.delete_block(id) {
                    EditOutcome::changed()
                } else {
                    EditOutcome::unchanged()
                }
            }
            BlockEdit::PatchContent { id, tab, partial } => {
                if patch_content(doc, id, *tab, partial) {
                    EditOutcome::changed()
                } else {
                    EditOutcome::unchanged()
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            BlockEdit::InsertWidget { .. } => "insertWidget",
            BlockEdit::InsertTemplate { .. } => "insertTemplate",
            BlockEdit::MoveBlock { .. } => "moveBlock",
            BlockEdit::DuplicateBlock { .. } => "duplicateBlock",
            BlockEdit::DeleteBlock { .. } => "deleteBlock",
            BlockEdit::PatchContent { .. } => "patchContent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_edit_deserializes_from_tagged_json() {
        let edit: BlockEdit = serde_json::from_value(json!({
            "kind": "insertWidget",
            "widget": "heading",
            "index": 0
        }))
        .unwrap();

        let mut doc = PageDocument::new("test");
        let outcome = edit.apply(&mut doc);
        assert!(outcome.changed);
        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(doc.blocks[0].kind, WidgetType::Heading);
    }

    #[test]
    fn test_move_edit_round_trips_through_json() {
        let edit = BlockEdit::MoveBlock {
            id: "b1".to_string(),
            to_index: 3,
        };
        let value = serde_json::to_value(&edit).unwrap();
        assert_eq!(value["kind"], "moveBlock");
        assert_eq!(value["toIndex"], 3);

        let back: BlockEdit = serde_json::from_value(value).unwrap();
        match back {
            BlockEdit::MoveBlock { id, to_index } => {
                assert_eq!(id, "b1");
                assert_eq!(to_index, 3);
            }
            other => panic!("expected moveBlock, got {other:?}"),
        }
    }

    #[test]
    fn test_template_insert_mints_fresh_ids() {
        let mut doc = PageDocument::new("test");
        let existing = doc.insert_widget(WidgetType::Heading, 0);

        let edit = BlockEdit::InsertTemplate {
            blocks: vec![
                RawBlock {
                    id: Some(existing.clone()),
                    widget: "paragraph".to_string(),
                    ..RawBlock::default()
                },
                RawBlock {
                    widget: "button".to_string(),
                    ..RawBlock::default()
                },
            ],
            index: 1,
        };
        let outcome = edit.apply(&mut doc);

        assert_eq!(outcome.inserted_ids.len(), 2);
        assert!(!outcome.inserted_ids.contains(&existing));
        assert_eq!(doc.blocks.len(), 3);
        assert_eq!(doc.blocks[1].kind, WidgetType::Paragraph);
        assert_eq!(doc.blocks[2].kind, WidgetType::Button);
    }

    #[test]
    fn test_missing_id_edits_report_unchanged() {
        let mut doc = PageDocument::new("test");
        doc.insert_widget(WidgetType::Heading, 0);
        let version = doc.version;

        for edit in [
            BlockEdit::MoveBlock {
                id: "missing".to_string(),
                to_index: 0,
            },
            BlockEdit::DuplicateBlock {
                id: "missing".to_string(),
            },
            BlockEdit::DeleteBlock {
                id: "missing".to_string(),
            },
        ] {
            assert!(!edit.apply(&mut doc).changed);
        }
        assert_eq!(doc.version, version);
    }
}
