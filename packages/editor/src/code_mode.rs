//! Code mode: per-block raw markup editing with bounded version history.
//!
//! Edits accumulate in a controller-owned buffer and touch the document only
//! on apply. Each apply commits the buffer as the block's markup override and
//! records a version entry; restoring an old entry rewrites the override
//! without consuming a history slot. Markup is trusted author input and is
//! stored verbatim.

use crate::document::{BlockMode, PageDocument, VersionEntry};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Drives code mode across the blocks of one document. One buffer per block,
/// keyed by block id.
#[derive(Debug, Default)]
pub struct CodeModeController {
    buffers: HashMap<String, String>,
}

impl CodeModeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// The uncommitted buffer for a block, if one is open.
    pub fn buffer(&self, block_id: &str) -> Option<&str> {
        self.buffers.get(block_id).map(String::as_str)
    }

    /// Switch a block to code mode, seeding the buffer from its current
    /// markup override. Idempotent: re-entering keeps an open buffer's
    /// uncommitted edits.
    pub fn enter(&mut self, doc: &mut PageDocument, block_id: &str) -> bool {
        let Some(block) = doc.block_mut(block_id) else {
            return false;
        };
        if block.mode != BlockMode::Code {
            block.mode = BlockMode::Code;
            doc.touch();
        }
        self.buffers
            .entry(block_id.to_string())
            .or_insert_with(|| {
                doc.block(block_id)
                    .and_then(|b| b.html_content.clone())
                    .unwrap_or_default()
            });
        true
    }

    /// Replace the buffer contents. Buffer-only; the document is untouched
    /// until [`apply`](Self::apply).
    pub fn edit(&mut self, block_id: &str, markup: impl Into<String>) {
        self.buffers.insert(block_id.to_string(), markup.into());
    }

    /// Commit the buffer: the block's markup override becomes the buffer and
    /// a new version entry is recorded as the newest. No-op unless the block
    /// exists, is in code mode, and has an open buffer.
    #[instrument(skip(self, doc))]
    pub fn apply(&mut self, doc: &mut PageDocument, block_id: &str) -> bool {
        let Some(markup) = self.buffers.get(block_id).cloned() else {
            return false;
        };
        let Some(block) = doc.block_mut(block_id) else {
            return false;
        };
        if block.mode != BlockMode::Code {
            return false;
        }

        let timestamp = next_timestamp(
            block
                .code_version_history
                .first()
                .map(|e| e.timestamp.as_str()),
        );
        block.html_content = Some(markup.clone());
        block.push_version(VersionEntry {
            timestamp,
            html_content: markup,
        });
        doc.touch();
        debug!(
            %block_id,
            entries = doc
                .block(block_id)
                .map(|b| b.code_version_history.len())
                .unwrap_or(0),
            "applied code edit"
        );
        true
    }

    /// Rewind the block's markup override (and the buffer) to the entry with
    /// `timestamp`. Does not record a new entry. No-op when the block or the
    /// entry is missing.
    pub fn restore(&mut self, doc: &mut PageDocument, block_id: &str, timestamp: &str) -> bool {
        let Some(block) = doc.block_mut(block_id) else {
            return false;
        };
        let Some(entry) = block
            .code_version_history
            .iter()
            .find(|e| e.timestamp == timestamp)
        else {
            return false;
        };

        let markup = entry.html_content.clone();
        block.html_content = Some(markup.clone());
        self.buffers.insert(block_id.to_string(), markup);
        doc.touch();
        true
    }

    /// Switch a block back to visual mode. Uncommitted buffer contents are
    /// discarded; the committed markup override and the version history
    /// survive, so re-entering code mode resumes from the last apply.
    pub fn revert_to_visual(&mut self, doc: &mut PageDocument, block_id: &str) -> bool {
        let Some(block) = doc.block_mut(block_id) else {
            return false;
        };
        if block.mode != BlockMode::Visual {
            block.mode = BlockMode::Visual;
            doc.touch();
        }
        self.buffers.remove(block_id);
        true
    }
}

/// A UTC timestamp with millisecond precision, bumped forward when the clock
/// has not advanced past the previous entry. History timestamps are strictly
/// decreasing from the head, even for applies within the same millisecond.
fn next_timestamp(newest: Option<&str>) -> String {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let Some(newest) = newest else {
        return now;
    };
    if now.as_str() > newest {
        return now;
    }
    match DateTime::parse_from_rfc3339(newest) {
        Ok(prev) => (prev.with_timezone(&Utc) + Duration::milliseconds(1))
            .to_rfc3339_opts(SecondsFormat::Millis, true),
        Err(_) => now,
    }
}
