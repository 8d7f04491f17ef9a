//! Storage and template boundaries.
//!
//! Persistence and template catalogs live behind traits so the engine stays
//! host-agnostic; [`InMemoryStore`] backs tests and previews.

use crate::document::PageDocument;
use crate::errors::EditorError;
use crate::raw::{block_from_raw, raw_from_block, RawBlock, RawDocument};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, instrument};

pub trait DocumentStore {
    fn load_document(&self, page_id: &str) -> Result<RawDocument, EditorError>;
    fn save_document(&mut self, page_id: &str, doc: &RawDocument) -> Result<(), EditorError>;
}

/// One catalog template. `content` accepts both a single stored block and a
/// list, matching the two shapes catalogs serve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateRecord {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub content: TemplateContent,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateContent {
    One(Box<RawBlock>),
    Many(Vec<RawBlock>),
}

impl TemplateContent {
    pub fn into_blocks(self) -> Vec<RawBlock> {
        match self {
            TemplateContent::One(block) => vec![*block],
            TemplateContent::Many(blocks) => blocks,
        }
    }
}

pub trait TemplateSource {
    /// List templates, optionally restricted to a category.
    fn fetch_templates(&self, category: Option<&str>) -> Result<Vec<TemplateRecord>, EditorError>;
}

/// Load a page into its editable form. Total over stored data: legacy,
/// partial, and unknown-typed blocks all load; missing or duplicate block ids
/// are regenerated so ids are unique within the page.
#[instrument(skip(store))]
pub fn load_page(store: &dyn DocumentStore, page_id: &str) -> Result<PageDocument, EditorError> {
    let raw = store.load_document(page_id)?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut doc = PageDocument::new(raw.title);
    for raw_block in &raw.blocks {
        let mut block = block_from_raw(raw_block);
        if !seen.insert(block.id.clone()) {
            debug!(id = %block.id, "duplicate stored block id; regenerating");
            block.id = crate::document::new_block_id();
            seen.insert(block.id.clone());
        }
        doc.blocks.push(block);
    }
    debug!(page_id, blocks = doc.blocks.len(), "loaded page");
    Ok(doc)
}

/// Persist a page. Every block is written in the current shape and stamped
/// with the current schema version; unknown-typed blocks round-trip their
/// original payload.
#[instrument(skip(store, doc))]
pub fn save_page(
    store: &mut dyn DocumentStore,
    page_id: &str,
    doc: &PageDocument,
) -> Result<(), EditorError> {
    let raw = RawDocument {
        title: doc.title.clone(),
        blocks: doc.blocks.iter().map(raw_from_block).collect(),
    };
    store.save_document(page_id, &raw)
}

/// Map-backed store for tests and previews.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: HashMap<String, RawDocument>,
    templates: Vec<TemplateRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, page_id: impl Into<String>, doc: RawDocument) -> Self {
        self.documents.insert(page_id.into(), doc);
        self
    }

    pub fn with_template(mut self, template: TemplateRecord) -> Self {
        self.templates.push(template);
        self
    }
}

impl DocumentStore for InMemoryStore {
    fn load_document(&self, page_id: &str) -> Result<RawDocument, EditorError> {
        self.documents
            .get(page_id)
            .cloned()
            .ok_or_else(|| EditorError::PageNotFound(page_id.to_string()))
    }

    fn save_document(&mut self, page_id: &str, doc: &RawDocument) -> Result<(), EditorError> {
        self.documents.insert(page_id.to_string(), doc.clone());
        Ok(())
    }
}

impl TemplateSource for InMemoryStore {
    fn fetch_templates(&self, category: Option<&str>) -> Result<Vec<TemplateRecord>, EditorError> {
        Ok(self
            .templates
            .iter()
            .filter(|t| category.is_none() || t.category.as_deref() == category)
            .cloned()
            .collect())
    }
}
