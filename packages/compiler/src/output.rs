//! Compiled output: an ordered declaration set plus markup hints.
//!
//! The compiler never emits markup strings; it hands a presentation layer the
//! style declarations, visibility classes, and enough structural hints
//! (tag, attributes, child outline) to emit DOM itself.

use crate::icons::RenderableIcon;
use pagecraft_schema::Link;
use serde::Serialize;

/// One CSS declaration. Declarations are kept in emission order so user
/// overrides appended last win on specificity ties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// Structural hints for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkupHints {
    /// Suggested element tag ("h2", "a", "img", "section", ...).
    pub tag: String,

    /// Primary text content, when the widget has one.
    pub text: Option<String>,

    /// Plain attributes (src, alt, loading, ...).
    pub attributes: Vec<(String, String)>,

    /// Link target, when the widget navigates.
    pub link: Option<Link>,

    /// Resolved icon, when the widget shows one.
    pub icon: Option<RenderableIcon>,

    /// User-supplied CSS id, passed through verbatim.
    pub css_id: Option<String>,

    /// User-supplied classes, passed through verbatim.
    pub css_classes: Vec<String>,

    /// Free-form CSS rules, appended after all computed declarations.
    pub custom_css: Option<String>,

    /// Child outline for composite widgets (pricing plans, gallery items,
    /// tab strips).
    pub children: Vec<ChildHint>,
}

impl MarkupHints {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: None,
            attributes: Vec::new(),
            link: None,
            icon: None,
            css_id: None,
            css_classes: Vec::new(),
            custom_css: None,
            children: Vec::new(),
        }
    }
}

/// One node in a composite widget's child outline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChildHint {
    pub tag: String,
    pub text: Option<String>,
    pub attributes: Vec<(String, String)>,
    pub declarations: Vec<Declaration>,
    pub link: Option<Link>,
    pub children: Vec<ChildHint>,
}

impl ChildHint {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: None,
            attributes: Vec::new(),
            declarations: Vec::new(),
            link: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        let mut child = Self::new(tag);
        child.text = Some(text.into());
        child
    }

    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations.push(Declaration {
            property: property.into(),
            value: value.into(),
        });
    }
}

/// Result of compiling one block's content for one breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompiledBlock {
    pub declarations: Vec<Declaration>,
    pub visibility_classes: Vec<String>,
    pub hints: MarkupHints,
}

impl CompiledBlock {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            declarations: Vec::new(),
            visibility_classes: Vec::new(),
            hints: MarkupHints::new(tag),
        }
    }

    /// Append one declaration.
    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations.push(Declaration {
            property: property.into(),
            value: value.into(),
        });
    }

    /// Look up the last value emitted for `property`, mainly for tests.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    /// Render the declaration set as a CSS block, custom CSS last.
    pub fn to_css_block(&self) -> String {
        let mut css = String::new();
        for d in &self.declarations {
            css.push_str("  ");
            css.push_str(&d.property);
            css.push_str(": ");
            css.push_str(&d.value);
            css.push_str(";\n");
        }
        if let Some(custom) = &self.hints.custom_css {
            css.push_str(custom);
            if !custom.ends_with('\n') {
                css.push('\n');
            }
        }
        css
    }
}
