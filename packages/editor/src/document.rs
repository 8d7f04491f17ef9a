//! The editable page document and its flat block list.
//!
//! Every structural operation takes a block id and is a no-op when the id is
//! not present; a stale id from a concurrent editor surface must never panic
//! or corrupt the list. Insertion indices are clamped to the list bounds.

use pagecraft_schema::{WidgetContent, WidgetType};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Newest-first version entries retained per block.
pub const HISTORY_CAP: usize = 20;

/// Rendering source for one block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockMode {
    #[default]
    Visual,
    Code,
}

/// One committed snapshot of a block's raw markup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionEntry {
    /// ISO-8601 UTC timestamp with millisecond precision. Fixed-width, so
    /// lexicographic order is chronological order.
    pub timestamp: String,
    pub html_content: String,
}

/// One block in the page. The list is flat: container-like widgets carry
/// layout settings but never child blocks.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub id: String,
    pub kind: WidgetType,
    pub mode: BlockMode,
    pub content: WidgetContent,
    /// Raw-markup override shown while `mode` is [`BlockMode::Code`].
    pub html_content: Option<String>,
    /// Newest first, capped at [`HISTORY_CAP`].
    pub code_version_history: Vec<VersionEntry>,
}

impl Block {
    pub fn new(kind: WidgetType) -> Self {
        Self {
            id: new_block_id(),
            kind,
            mode: BlockMode::Visual,
            content: WidgetContent::default_for(kind),
            html_content: None,
            code_version_history: Vec::new(),
        }
    }

    /// Push a version entry as the newest, trimming the oldest past the cap.
    pub fn push_version(&mut self, entry: VersionEntry) {
        self.code_version_history.insert(0, entry);
        self.code_version_history.truncate(HISTORY_CAP);
    }
}

pub fn new_block_id() -> String {
    Uuid::new_v4().to_string()
}

/// An editable page: a title and an ordered, flat block list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageDocument {
    pub title: String,
    pub blocks: Vec<Block>,
    /// Bumped on every change; lets surfaces cheaply detect staleness.
    pub version: u64,
}

impl PageDocument {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
            version: 0,
        }
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: &str) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    pub(crate) fn touch(&mut self) {
        self.version += 1;
    }

    /// Insert a fresh widget of `kind` at `index` (clamped). Returns the new
    /// block's id.
    pub fn insert_widget(&mut self, kind: WidgetType, index: usize) -> String {
        let block = Block::new(kind);
        let id = block.id.clone();
        let at = index.min(self.blocks.len());
        self.blocks.insert(at, block);
        self.touch();
        debug!(%id, kind = kind.as_str(), at, "inserted widget");
        id
    }

    /// Insert pre-built blocks at `index` (clamped), preserving their order.
    /// Returns the inserted ids.
    pub fn insert_blocks(&mut self, blocks: Vec<Block>, index: usize) -> Vec<String> {
        if blocks.is_empty() {
            return Vec::new();
        }
        let ids: Vec<String> = blocks.iter().map(|b| b.id.clone()).collect();
        let mut at = index.min(self.blocks.len());
        for block in blocks {
            self.blocks.insert(at, block);
            at += 1;
        }
        self.touch();
        ids
    }

    /// Move the block `id` to `to_index` (clamped against the list with the
    /// block removed). No-op when the id is missing.
    pub fn move_block(&mut self, id: &str, to_index: usize) -> bool {
        let Some(from) = self.index_of(id) else {
            return false;
        };
        let block = self.blocks.remove(from);
        let at = to_index.min(self.blocks.len());
        self.blocks.insert(at, block);
        self.touch();
        true
    }

    /// Deep-copy the block `id`, inserting the copy immediately after the
    /// original with a fresh id. Content, mode, raw markup, and version
    /// history are all copied; the copy shares no state with the original.
    /// Returns the copy's id, or `None` when the id is missing.
    pub fn duplicate_block(&mut self, id: &str) -> Option<String> {
        let index = self.index_of(id)?;
        let mut copy = self.blocks[index].clone();
        copy.id = new_block_id();
        let copy_id = copy.id.clone();
        self.blocks.insert(index + 1, copy);
        self.touch();
        Some(copy_id)
    }

    /// Remove the block `id`. No-op when the id is missing.
    pub fn delete_block(&mut self, id: &str) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        self.blocks.remove(index);
        self.touch();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_with(kinds: &[WidgetType]) -> PageDocument {
        let mut doc = PageDocument::new("test");
        for &kind in kinds {
            let at = doc.blocks.len();
            doc.insert_widget(kind, at);
        }
        doc
    }

    #[test]
    fn test_insert_index_is_clamped() {
        let mut doc = PageDocument::new("test");
        doc.insert_widget(WidgetType::Heading, 99);
        let id = doc.insert_widget(WidgetType::Spacer, 0);
        assert_eq!(doc.blocks.len(), 2);
        assert_eq!(doc.blocks[0].id, id);
    }

    #[test]
    fn test_move_block_reorders() {
        let mut doc = doc_with(&[WidgetType::Heading, WidgetType::Paragraph, WidgetType::Button]);
        let first = doc.blocks[0].id.clone();

        assert!(doc.move_block(&first, 2));
        assert_eq!(doc.blocks[2].id, first);
        assert_eq!(doc.blocks[0].kind, WidgetType::Paragraph);
    }

    #[test]
    fn test_move_to_out_of_range_index_clamps_to_end() {
        let mut doc = doc_with(&[WidgetType::Heading, WidgetType::Paragraph]);
        let first = doc.blocks[0].id.clone();
        assert!(doc.move_block(&first, 42));
        assert_eq!(doc.blocks.last().map(|b| b.id.as_str()), Some(first.as_str()));
    }

    #[test]
    fn test_missing_id_operations_are_noops() {
        let mut doc = doc_with(&[WidgetType::Heading]);
        let version = doc.version;

        assert!(!doc.move_block("nope", 0));
        assert!(!doc.delete_block("nope"));
        assert!(doc.duplicate_block("nope").is_none());

        assert_eq!(doc.blocks.len(), 1);
        assert_eq!(doc.version, version);
    }

    #[test]
    fn test_duplicate_is_isolated_from_original() {
        let mut doc = doc_with(&[WidgetType::Heading]);
        let original = doc.blocks[0].id.clone();
        doc.block_mut(&original)
            .unwrap()
            .push_version(VersionEntry {
                timestamp: "2026-01-01T00:00:00.000Z".to_string(),
                html_content: "<h1>v1</h1>".to_string(),
            });

        let copy = doc.duplicate_block(&original).unwrap();
        assert_ne!(copy, original);
        assert_eq!(doc.index_of(&copy), Some(1));
        assert_eq!(doc.block(&copy).unwrap().code_version_history.len(), 1);

        // Mutating the copy leaves the original untouched.
        doc.block_mut(&copy).unwrap().code_version_history.clear();
        assert_eq!(
            doc.block(&original).unwrap().code_version_history.len(),
            1
        );
    }

    #[test]
    fn test_history_cap_drops_oldest() {
        let mut block = Block::new(WidgetType::Heading);
        for i in 0..25 {
            block.push_version(VersionEntry {
                timestamp: format!("2026-01-01T00:00:{:02}.000Z", i),
                html_content: format!("<p>{i}</p>"),
            });
        }
        assert_eq!(block.code_version_history.len(), HISTORY_CAP);
        // Newest first; entries 24 down to 5 survive.
        assert_eq!(block.code_version_history[0].html_content, "<p>24</p>");
        assert_eq!(
            block.code_version_history.last().unwrap().html_content,
            "<p>5</p>"
        );
    }
}
