//! Breakpoint-parameterized values.
//!
//! Every responsive property (sizes, gaps, columns, spans, alignment) follows
//! the same single fallback rule: the breakpoint value if present, otherwise
//! `desktop`. `desktop` is the only mandatory key.

use serde::{Deserialize, Serialize};

/// Viewport class a value can be resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Desktop,
    Tablet,
    Mobile,
}

/// A value parameterized by viewport breakpoint.
///
/// Missing breakpoints fall back to `desktop`; there is no per-property
/// exception to this rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct ResponsiveValue<T> {
    pub desktop: T,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tablet: Option<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<T>,
}

impl<T> ResponsiveValue<T> {
    /// A value that is the same at every breakpoint.
    pub fn uniform(desktop: T) -> Self {
        Self {
            desktop,
            tablet: None,
            mobile: None,
        }
    }

    /// Resolve to the concrete value for `breakpoint`.
    pub fn resolve(&self, breakpoint: Breakpoint) -> &T {
        match breakpoint {
            Breakpoint::Desktop => &self.desktop,
            Breakpoint::Tablet => self.tablet.as_ref().unwrap_or(&self.desktop),
            Breakpoint::Mobile => self.mobile.as_ref().unwrap_or(&self.desktop),
        }
    }
}

impl<T: Clone> ResponsiveValue<T> {
    /// Set the value for one breakpoint.
    pub fn set(&mut self, breakpoint: Breakpoint, value: T) {
        match breakpoint {
            Breakpoint::Desktop => self.desktop = value,
            Breakpoint::Tablet => self.tablet = Some(value),
            Breakpoint::Mobile => self.mobile = Some(value),
        }
    }
}
