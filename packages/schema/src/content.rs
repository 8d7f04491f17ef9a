//! Widget types and the per-type content union.
//!
//! `WidgetContent` is an internally tagged union keyed by `type`; the tag
//! values match [`WidgetType`]'s serialized names, so a block's content always
//! carries its own discriminant and round-trips through JSON unambiguously.

use crate::advanced::AdvancedSettings;
use crate::responsive::ResponsiveValue;
use crate::values::{
    Background, Border, BorderStyle, BoxShadow, ColorValue, TextAlign, TextShadow, Typography,
};
use serde::{Deserialize, Serialize};

/// Closed enumeration of widget kinds.
///
/// `Unknown` is a catch-all for stored types this build does not recognize;
/// such blocks load, round-trip, and render as a visible placeholder instead
/// of failing the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetType {
    Heading,
    Paragraph,
    Button,
    Image,
    Icon,
    Divider,
    Spacer,
    Video,
    PricingTable,
    Gallery,
    Tabs,
    Container,
    Grid,
    FlexContainer,
    SmartGrid,
    #[serde(other)]
    Unknown,
}

impl WidgetType {
    /// Every concrete widget kind, in palette order. Excludes `Unknown`.
    pub const ALL: [WidgetType; 15] = [
        WidgetType::Heading,
        WidgetType::Paragraph,
        WidgetType::Button,
        WidgetType::Image,
        WidgetType::Icon,
        WidgetType::Divider,
        WidgetType::Spacer,
        WidgetType::Video,
        WidgetType::PricingTable,
        WidgetType::Gallery,
        WidgetType::Tabs,
        WidgetType::Container,
        WidgetType::Grid,
        WidgetType::FlexContainer,
        WidgetType::SmartGrid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetType::Heading => "heading",
            WidgetType::Paragraph => "paragraph",
            WidgetType::Button => "button",
            WidgetType::Image => "image",
            WidgetType::Icon => "icon",
            WidgetType::Divider => "divider",
            WidgetType::Spacer => "spacer",
            WidgetType::Video => "video",
            WidgetType::PricingTable => "pricing-table",
            WidgetType::Gallery => "gallery",
            WidgetType::Tabs => "tabs",
            WidgetType::Container => "container",
            WidgetType::Grid => "grid",
            WidgetType::FlexContainer => "flex-container",
            WidgetType::SmartGrid => "smart-grid",
            WidgetType::Unknown => "unknown",
        }
    }

    /// Parse a stored type tag. Unrecognized tags map to `Unknown`.
    pub fn parse(tag: &str) -> WidgetType {
        match tag {
            "heading" => WidgetType::Heading,
            "paragraph" => WidgetType::Paragraph,
            "button" => WidgetType::Button,
            "image" => WidgetType::Image,
            "icon" => WidgetType::Icon,
            "divider" => WidgetType::Divider,
            "spacer" => WidgetType::Spacer,
            "video" => WidgetType::Video,
            "pricing-table" => WidgetType::PricingTable,
            "gallery" => WidgetType::Gallery,
            "tabs" => WidgetType::Tabs,
            "container" => WidgetType::Container,
            "grid" => WidgetType::Grid,
            "flex-container" => WidgetType::FlexContainer,
            "smart-grid" => WidgetType::SmartGrid,
            _ => WidgetType::Unknown,
        }
    }

    /// Container-like kinds carry layout/background/border/shadow sub-objects.
    pub fn is_container_like(&self) -> bool {
        matches!(
            self,
            WidgetType::Container
                | WidgetType::Grid
                | WidgetType::FlexContainer
                | WidgetType::SmartGrid
        )
    }
}

/// Link target with follow/new-tab flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub url: String,
    pub open_in_new_tab: bool,
    pub nofollow: bool,
}

impl Link {
    pub fn none() -> Self {
        Self {
            url: String::new(),
            open_in_new_tab: false,
            nofollow: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadingContent {
    pub text: String,
    /// 1–6, mapped to the h1–h6 tag.
    pub level: u8,
    pub alignment: ResponsiveValue<TextAlign>,
    pub typography: Typography,
    pub color: ColorValue,
    pub text_shadow: TextShadow,
    pub advanced: AdvancedSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphContent {
    pub text: String,
    pub alignment: ResponsiveValue<TextAlign>,
    pub typography: Typography,
    pub color: ColorValue,
    pub advanced: AdvancedSettings,
}

/// Hover-state overrides. Missing overrides fall back to the normal-state
/// value at compile time, never to transparent/unset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonHover {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<ColorValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonContent {
    pub text: String,
    pub link: Link,
    pub alignment: ResponsiveValue<TextAlign>,
    pub typography: Typography,
    pub background: ColorValue,
    pub text_color: ColorValue,
    pub hover: ButtonHover,
    /// Hover transition duration in milliseconds.
    pub transition_ms: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub icon_position: IconPosition,
    pub advanced: AdvancedSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectFit {
    Fill,
    Contain,
    Cover,
    None,
    ScaleDown,
}

impl ObjectFit {
    pub fn as_css(&self) -> &'static str {
        match self {
            ObjectFit::Fill => "fill",
            ObjectFit::Contain => "contain",
            ObjectFit::Cover => "cover",
            ObjectFit::None => "none",
            ObjectFit::ScaleDown => "scale-down",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    /// Opaque asset URL.
    pub src: String,
    pub alt: String,
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    pub alignment: ResponsiveValue<TextAlign>,
    pub object_fit: ObjectFit,
    pub lazy_load: bool,
    pub advanced: AdvancedSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconContent {
    /// Icon name, resolved against the icon set at compile time.
    pub name: String,
    pub size: ResponsiveValue<f64>,
    pub color: ColorValue,
    pub alignment: ResponsiveValue<TextAlign>,
    pub advanced: AdvancedSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DividerContent {
    pub style: BorderStyle,
    /// Line thickness in pixels.
    pub weight: f64,
    /// Width as a percentage of the available width.
    pub width_percent: ResponsiveValue<f64>,
    pub color: String,
    pub alignment: ResponsiveValue<TextAlign>,
    pub advanced: AdvancedSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacerContent {
    /// Height in pixels.
    pub height: ResponsiveValue<f64>,
    pub advanced: AdvancedSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    #[serde(rename = "16:9")]
    Widescreen,
    #[serde(rename = "4:3")]
    Standard,
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "21:9")]
    Ultrawide,
}

impl AspectRatio {
    pub fn as_css(&self) -> &'static str {
        match self {
            AspectRatio::Widescreen => "16 / 9",
            AspectRatio::Standard => "4 / 3",
            AspectRatio::Square => "1 / 1",
            AspectRatio::Ultrawide => "21 / 9",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContent {
    /// Opaque video URL.
    pub url: String,
    pub aspect_ratio: AspectRatio,
    pub autoplay: bool,
    #[serde(rename = "loop")]
    pub loop_playback: bool,
    pub muted: bool,
    pub controls: bool,
    pub advanced: AdvancedSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub title: String,
    pub price: String,
    pub period: String,
    pub features: Vec<String>,
    pub cta_text: String,
    pub cta_url: String,
    pub highlighted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTableContent {
    pub plans: Vec<PricingPlan>,
    pub columns: ResponsiveValue<u32>,
    pub gap: ResponsiveValue<f64>,
    pub accent_color: String,
    pub advanced: AdvancedSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryContent {
    pub images: Vec<GalleryImage>,
    pub columns: ResponsiveValue<u32>,
    pub gap: ResponsiveValue<f64>,
    /// Corner radius applied to each image, in pixels.
    pub radius: f64,
    pub advanced: AdvancedSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabItem {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabsContent {
    pub items: Vec<TabItem>,
    pub active_color: String,
    pub typography: Typography,
    pub advanced: AdvancedSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemsAlign {
    Start,
    Center,
    End,
    Stretch,
}

impl ItemsAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            ItemsAlign::Start => "start",
            ItemsAlign::Center => "center",
            ItemsAlign::End => "end",
            ItemsAlign::Stretch => "stretch",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum JustifyContent {
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl JustifyContent {
    pub fn as_css(&self) -> &'static str {
        match self {
            JustifyContent::Start => "flex-start",
            JustifyContent::Center => "center",
            JustifyContent::End => "flex-end",
            JustifyContent::SpaceBetween => "space-between",
            JustifyContent::SpaceAround => "space-around",
            JustifyContent::SpaceEvenly => "space-evenly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerLayout {
    pub gap: ResponsiveValue<f64>,
    pub alignment: ResponsiveValue<TextAlign>,
    /// Minimum height in pixels; zero emits nothing.
    pub min_height: ResponsiveValue<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerContent {
    pub layout: ContainerLayout,
    pub background: Background,
    pub border: Border,
    pub shadow: BoxShadow,
    pub advanced: AdvancedSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    pub columns: ResponsiveValue<u32>,
    pub gap: ResponsiveValue<f64>,
    pub align_items: ItemsAlign,
    pub justify_items: ItemsAlign,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridContent {
    pub layout: GridLayout,
    pub background: Background,
    pub border: Border,
    pub shadow: BoxShadow,
    pub advanced: AdvancedSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FlexDirection {
    Row,
    Column,
    RowReverse,
    ColumnReverse,
}

impl FlexDirection {
    pub fn as_css(&self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
            FlexDirection::RowReverse => "row-reverse",
            FlexDirection::ColumnReverse => "column-reverse",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexLayout {
    pub direction: FlexDirection,
    pub wrap: bool,
    pub gap: ResponsiveValue<f64>,
    pub align_items: ItemsAlign,
    pub justify_content: JustifyContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexContainerContent {
    pub layout: FlexLayout,
    pub background: Background,
    pub border: Border,
    pub shadow: BoxShadow,
    pub advanced: AdvancedSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GridFit {
    AutoFit,
    AutoFill,
}

impl GridFit {
    pub fn as_css(&self) -> &'static str {
        match self {
            GridFit::AutoFit => "auto-fit",
            GridFit::AutoFill => "auto-fill",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartGridLayout {
    /// Minimum column width in pixels for the repeat() track expression.
    pub min_column_width: ResponsiveValue<f64>,
    pub fit: GridFit,
    pub gap: ResponsiveValue<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartGridContent {
    pub layout: SmartGridLayout,
    pub background: Background,
    pub border: Border,
    pub shadow: BoxShadow,
    pub advanced: AdvancedSettings,
}

/// Tagged content union keyed by widget type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum WidgetContent {
    Heading(HeadingContent),
    Paragraph(ParagraphContent),
    Button(ButtonContent),
    Image(ImageContent),
    Icon(IconContent),
    Divider(DividerContent),
    Spacer(SpacerContent),
    Video(VideoContent),
    PricingTable(PricingTableContent),
    Gallery(GalleryContent),
    Tabs(TabsContent),
    Container(ContainerContent),
    Grid(GridContent),
    FlexContainer(FlexContainerContent),
    SmartGrid(SmartGridContent),
    /// Unrecognized stored type, kept verbatim for round-tripping.
    Unknown {
        #[serde(default)]
        type_name: String,
        #[serde(default)]
        raw: serde_json::Value,
    },
}

impl WidgetContent {
    pub fn widget_type(&self) -> WidgetType {
        match self {
            WidgetContent::Heading(_) => WidgetType::Heading,
            WidgetContent::Paragraph(_) => WidgetType::Paragraph,
            WidgetContent::Button(_) => WidgetType::Button,
            WidgetContent::Image(_) => WidgetType::Image,
            WidgetContent::Icon(_) => WidgetType::Icon,
            WidgetContent::Divider(_) => WidgetType::Divider,
            WidgetContent::Spacer(_) => WidgetType::Spacer,
            WidgetContent::Video(_) => WidgetType::Video,
            WidgetContent::PricingTable(_) => WidgetType::PricingTable,
            WidgetContent::Gallery(_) => WidgetType::Gallery,
            WidgetContent::Tabs(_) => WidgetType::Tabs,
            WidgetContent::Container(_) => WidgetType::Container,
            WidgetContent::Grid(_) => WidgetType::Grid,
            WidgetContent::FlexContainer(_) => WidgetType::FlexContainer,
            WidgetContent::SmartGrid(_) => WidgetType::SmartGrid,
            WidgetContent::Unknown { .. } => WidgetType::Unknown,
        }
    }

    /// The advanced settings shared by all concrete widget kinds.
    pub fn advanced(&self) -> Option<&AdvancedSettings> {
        match self {
            WidgetContent::Heading(c) => Some(&c.advanced),
            WidgetContent::Paragraph(c) => Some(&c.advanced),
            WidgetContent::Button(c) => Some(&c.advanced),
            WidgetContent::Image(c) => Some(&c.advanced),
            WidgetContent::Icon(c) => Some(&c.advanced),
            WidgetContent::Divider(c) => Some(&c.advanced),
            WidgetContent::Spacer(c) => Some(&c.advanced),
            WidgetContent::Video(c) => Some(&c.advanced),
            WidgetContent::PricingTable(c) => Some(&c.advanced),
            WidgetContent::Gallery(c) => Some(&c.advanced),
            WidgetContent::Tabs(c) => Some(&c.advanced),
            WidgetContent::Container(c) => Some(&c.advanced),
            WidgetContent::Grid(c) => Some(&c.advanced),
            WidgetContent::FlexContainer(c) => Some(&c.advanced),
            WidgetContent::SmartGrid(c) => Some(&c.advanced),
            WidgetContent::Unknown { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_type_round_trip() {
        for kind in WidgetType::ALL {
            assert_eq!(WidgetType::parse(kind.as_str()), kind);

            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, serde_json::json!(kind.as_str()));
        }
    }

    #[test]
    fn test_unrecognized_type_parses_as_unknown() {
        assert_eq!(WidgetType::parse("carousel"), WidgetType::Unknown);

        let parsed: WidgetType = serde_json::from_value(serde_json::json!("carousel")).unwrap();
        assert_eq!(parsed, WidgetType::Unknown);
    }

    #[test]
    fn test_content_tag_matches_widget_type() {
        let content = WidgetContent::Spacer(SpacerContent {
            height: ResponsiveValue::uniform(40.0),
            advanced: AdvancedSettings::default(),
        });

        let json = serde_json::to_value(&content).unwrap();
        assert_eq!(json["type"], "spacer");
        assert_eq!(content.widget_type(), WidgetType::Spacer);
    }
}
