//! End-to-end editing flows: load stored JSON, edit, render, save, reload.

use anyhow::Result;
use pagecraft_compiler::StaticIconSet;
use pagecraft_editor::{
    load_page, patch_content, render_document, save_page, BlockEdit, BlockMode,
    CodeModeController, DocumentStore, InMemoryStore, PropertyTab, RawDocument, RenderedBlock,
    EMPTY_CODE_PLACEHOLDER,
};
use pagecraft_migrate::CURRENT_SCHEMA_VERSION;
use pagecraft_schema::{Breakpoint, WidgetContent, WidgetType};
use serde_json::{json, Map};

fn landing_page() -> RawDocument {
    // A realistic stored page: one legacy-shaped block, one current block,
    // one unknown block from a newer editor, one block missing its id.
    serde_json::from_value(json!({
        "title": "Landing",
        "blocks": [
            {
                "id": "hero-heading",
                "type": "heading",
                "content": { "text": "Ship faster", "fontSize": 48, "alignment": "center" }
            },
            {
                "id": "cta",
                "type": "button",
                "schemaVersion": 2,
                "content": {
                    "text": "Start free",
                    "link": { "url": "/signup", "openInNewTab": false, "nofollow": false }
                }
            },
            {
                "id": "promo",
                "type": "carousel",
                "content": { "slides": ["a.jpg", "b.jpg"], "interval": 3000 }
            },
            {
                "type": "spacer",
                "content": { "height": { "desktop": 64 } }
            }
        ]
    }))
    .expect("stored page parses")
}

#[test]
fn test_load_normalizes_mixed_page() -> Result<()> {
    let store = InMemoryStore::new().with_document("p1", landing_page());
    let doc = load_page(&store, "p1")?;

    assert_eq!(doc.title, "Landing");
    assert_eq!(doc.blocks.len(), 4);

    // Legacy heading: flat fontSize/alignment promoted into the current shape.
    let WidgetContent::Heading(heading) = &doc.blocks[0].content else {
        panic!("expected heading");
    };
    assert_eq!(heading.text, "Ship faster");
    assert_eq!(heading.typography.font_size.desktop, 48.0);

    // Unknown type kept verbatim.
    assert_eq!(doc.blocks[2].kind, WidgetType::Unknown);

    // Missing id regenerated.
    assert!(!doc.blocks[3].id.is_empty());
    Ok(())
}

#[test]
fn test_edit_sequence_then_save_round_trips() -> Result<()> {
    let mut store = InMemoryStore::new().with_document("p1", landing_page());
    let mut doc = load_page(&store, "p1")?;

    // Insert, duplicate, move, patch, delete.
    let divider = BlockEdit::InsertWidget {
        widget: WidgetType::Divider,
        index: 1,
    }
    .apply(&mut doc)
    .inserted_ids[0]
        .clone();

    let copy = BlockEdit::DuplicateBlock {
        id: "cta".to_string(),
    }
    .apply(&mut doc)
    .inserted_ids[0]
        .clone();

    assert!(
        BlockEdit::MoveBlock {
            id: copy.clone(),
            to_index: 0,
        }
        .apply(&mut doc)
        .changed
    );

    let mut partial = Map::new();
    partial.insert("text".to_string(), json!("Talk to sales"));
    assert!(patch_content(&mut doc, &copy, PropertyTab::Content, &partial));

    assert!(
        BlockEdit::DeleteBlock { id: divider }
            .apply(&mut doc)
            .changed
    );

    save_page(&mut store, "p1", &doc)?;
    let reloaded = load_page(&store, "p1")?;

    assert_eq!(reloaded.blocks.len(), doc.blocks.len());
    assert_eq!(reloaded.blocks[0].id, copy);
    let WidgetContent::Button(button) = &reloaded.blocks[0].content else {
        panic!("expected button");
    };
    assert_eq!(button.text, "Talk to sales");
    // Duplicate kept the original's link.
    assert_eq!(button.link.url, "/signup");
    Ok(())
}

#[test]
fn test_save_stamps_every_block_current() -> Result<()> {
    let mut store = InMemoryStore::new().with_document("p1", landing_page());
    let doc = load_page(&store, "p1")?;
    save_page(&mut store, "p1", &doc)?;

    let raw = store.load_document("p1")?;
    for block in &raw.blocks {
        assert_eq!(block.schema_version, Some(CURRENT_SCHEMA_VERSION));
        assert!(block.id.is_some());
    }

    // The unknown block's payload survived untouched.
    let promo = raw.blocks.iter().find(|b| b.widget == "carousel").unwrap();
    assert_eq!(
        promo.content,
        Some(json!({ "slides": ["a.jpg", "b.jpg"], "interval": 3000 }))
    );

    // Saving is idempotent once normalized.
    let doc2 = load_page(&store, "p1")?;
    save_page(&mut store, "p1", &doc2)?;
    assert_eq!(store.load_document("p1")?, raw);
    Ok(())
}

#[test]
fn test_code_mode_survives_save_and_reload() -> Result<()> {
    let mut store = InMemoryStore::new().with_document("p1", landing_page());
    let mut doc = load_page(&store, "p1")?;
    let mut code = CodeModeController::new();

    code.enter(&mut doc, "cta");
    code.edit("cta", "<a href=\"/signup\" class=\"cta\">Start free</a>");
    assert!(code.apply(&mut doc, "cta"));
    code.edit("cta", "<a href=\"/signup\" class=\"cta cta-lg\">Start free</a>");
    assert!(code.apply(&mut doc, "cta"));

    save_page(&mut store, "p1", &doc)?;
    let reloaded = load_page(&store, "p1")?;
    let cta = reloaded.block("cta").unwrap();

    assert_eq!(cta.mode, BlockMode::Code);
    assert_eq!(
        cta.html_content.as_deref(),
        Some("<a href=\"/signup\" class=\"cta cta-lg\">Start free</a>")
    );
    assert_eq!(cta.code_version_history.len(), 2);
    assert!(cta.code_version_history[0].timestamp > cta.code_version_history[1].timestamp);
    Ok(())
}

#[test]
fn test_render_mixes_compiled_raw_and_unknown() -> Result<()> {
    let store = InMemoryStore::new().with_document("p1", landing_page());
    let mut doc = load_page(&store, "p1")?;

    let mut code = CodeModeController::new();
    code.enter(&mut doc, "cta");

    let rendered = render_document(&doc, Breakpoint::Desktop, &StaticIconSet);
    assert_eq!(rendered.len(), 4);

    assert!(matches!(rendered[0].1, RenderedBlock::Compiled(_)));
    // Code mode with nothing applied yet shows the placeholder.
    assert_eq!(
        rendered[1].1,
        RenderedBlock::RawHtml(EMPTY_CODE_PLACEHOLDER.to_string())
    );
    assert_eq!(
        rendered[2].1,
        RenderedBlock::Unknown {
            type_name: "carousel".to_string()
        }
    );
    assert!(matches!(rendered[3].1, RenderedBlock::Compiled(_)));
    Ok(())
}

#[test]
fn test_template_import_keeps_page_ids_unique() -> Result<()> {
    let store = InMemoryStore::new().with_document("p1", landing_page());
    let mut doc = load_page(&store, "p1")?;

    // A template whose stored ids collide with blocks already on the page.
    let template: Vec<pagecraft_editor::RawBlock> = serde_json::from_value(json!([
        { "id": "hero-heading", "type": "heading", "content": { "text": "Pricing" } },
        { "id": "cta", "type": "pricing-table" }
    ]))?;

    let outcome = BlockEdit::InsertTemplate {
        blocks: template,
        index: 99,
    }
    .apply(&mut doc);

    assert_eq!(outcome.inserted_ids.len(), 2);
    let mut ids: Vec<&str> = doc.blocks.iter().map(|b| b.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), doc.blocks.len());

    // Clamped to the end, template order preserved.
    assert_eq!(doc.blocks[4].kind, WidgetType::Heading);
    assert_eq!(doc.blocks[5].kind, WidgetType::PricingTable);
    Ok(())
}
