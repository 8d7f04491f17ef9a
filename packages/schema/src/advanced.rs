//! Advanced block settings shared by every widget kind.

use crate::responsive::ResponsiveValue;
use crate::values::{Border, BoxModel};
use serde::{Deserialize, Serialize};

/// Unit for custom width values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeUnit {
    Px,
    Percent,
    Em,
    Rem,
    Vw,
}

impl SizeUnit {
    pub fn as_css(&self) -> &'static str {
        match self {
            SizeUnit::Px => "px",
            SizeUnit::Percent => "%",
            SizeUnit::Em => "em",
            SizeUnit::Rem => "rem",
            SizeUnit::Vw => "vw",
        }
    }
}

/// Width mode of a block.
///
/// `Full` compiles to 100% width, `Inline` to auto width with inline-block
/// display, `Custom` to the configured value and unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum WidthMode {
    Full,
    Inline,
    Custom { value: f64, unit: SizeUnit },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionMode {
    Static,
    Relative,
    Absolute,
    Sticky,
}

impl PositionMode {
    pub fn as_css(&self) -> &'static str {
        match self {
            PositionMode::Static => "static",
            PositionMode::Relative => "relative",
            PositionMode::Absolute => "absolute",
            PositionMode::Sticky => "sticky",
        }
    }
}

/// Named max-width presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaxWidth {
    None,
    Sm,
    Md,
    Lg,
    Xl,
    Full,
}

impl MaxWidth {
    /// Preset pixel widths; `Full` maps to 100% and `None` emits nothing.
    pub fn as_css(&self) -> Option<&'static str> {
        match self {
            MaxWidth::None => None,
            MaxWidth::Sm => Some("640px"),
            MaxWidth::Md => Some("768px"),
            MaxWidth::Lg => Some("1024px"),
            MaxWidth::Xl => Some("1280px"),
            MaxWidth::Full => Some("100%"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfAlign {
    Auto,
    Start,
    Center,
    End,
    Stretch,
}

impl SelfAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            SelfAlign::Auto => "auto",
            SelfAlign::Start => "start",
            SelfAlign::Center => "center",
            SelfAlign::End => "end",
            SelfAlign::Stretch => "stretch",
        }
    }
}

/// Placement of a block inside a parent grid.
///
/// The block list is flat; these settings let a grid container lay out its
/// items without a recursive block tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridItemSettings {
    pub column_span: ResponsiveValue<u32>,
    pub row_span: ResponsiveValue<u32>,
    pub align_self: SelfAlign,
    pub justify_self: SelfAlign,
}

impl Default for GridItemSettings {
    fn default() -> Self {
        Self {
            column_span: ResponsiveValue::uniform(1),
            row_span: ResponsiveValue::uniform(1),
            align_self: SelfAlign::Auto,
            justify_self: SelfAlign::Auto,
        }
    }
}

/// Advanced settings present on every block's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSettings {
    pub margin: BoxModel,
    pub padding: BoxModel,
    pub width: WidthMode,
    pub position: PositionMode,
    /// 0.0–1.0.
    pub opacity: f64,
    pub border: Border,
    pub max_width: MaxWidth,

    pub hide_on_desktop: bool,
    pub hide_on_tablet: bool,
    pub hide_on_mobile: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub css_id: Option<String>,
    pub css_classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,

    pub grid_item: GridItemSettings,
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        Self {
            margin: BoxModel::zero(),
            padding: BoxModel::zero(),
            width: WidthMode::Full,
            position: PositionMode::Static,
            opacity: 1.0,
            border: Border::none(),
            max_width: MaxWidth::None,
            hide_on_desktop: false,
            hide_on_tablet: false,
            hide_on_mobile: false,
            css_id: None,
            css_classes: Vec::new(),
            custom_css: None,
            grid_item: GridItemSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_mode_tagged_serialization() {
        let custom = WidthMode::Custom {
            value: 320.0,
            unit: SizeUnit::Px,
        };
        let json = serde_json::to_value(&custom).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "mode": "custom", "value": 320.0, "unit": "px" })
        );

        let full: WidthMode =
            serde_json::from_value(serde_json::json!({ "mode": "full" })).unwrap();
        assert_eq!(full, WidthMode::Full);
    }

    #[test]
    fn test_max_width_presets() {
        assert_eq!(MaxWidth::None.as_css(), None);
        assert_eq!(MaxWidth::Md.as_css(), Some("768px"));
        assert_eq!(MaxWidth::Full.as_css(), Some("100%"));
    }

    #[test]
    fn test_max_width_serializes_as_bare_string() {
        let json = serde_json::to_value(MaxWidth::Md).unwrap();
        assert_eq!(json, serde_json::json!("md"));
    }
}
