//! Defaults registry: one fully populated content instance per widget kind.
//!
//! These instances are the merge base for normalization — every required
//! nested sub-object (typography, box model, responsive values, advanced
//! settings) is present, so merging any partial or legacy stored object over
//! them can never leave a required field undefined.

use crate::advanced::AdvancedSettings;
use crate::content::*;
use crate::responsive::ResponsiveValue;
use crate::values::*;

impl WidgetContent {
    /// The default content instance for `kind`.
    pub fn default_for(kind: WidgetType) -> WidgetContent {
        match kind {
            WidgetType::Heading => WidgetContent::Heading(default_heading()),
            WidgetType::Paragraph => WidgetContent::Paragraph(default_paragraph()),
            WidgetType::Button => WidgetContent::Button(default_button()),
            WidgetType::Image => WidgetContent::Image(default_image()),
            WidgetType::Icon => WidgetContent::Icon(default_icon()),
            WidgetType::Divider => WidgetContent::Divider(default_divider()),
            WidgetType::Spacer => WidgetContent::Spacer(default_spacer()),
            WidgetType::Video => WidgetContent::Video(default_video()),
            WidgetType::PricingTable => WidgetContent::PricingTable(default_pricing_table()),
            WidgetType::Gallery => WidgetContent::Gallery(default_gallery()),
            WidgetType::Tabs => WidgetContent::Tabs(default_tabs()),
            WidgetType::Container => WidgetContent::Container(default_container()),
            WidgetType::Grid => WidgetContent::Grid(default_grid()),
            WidgetType::FlexContainer => WidgetContent::FlexContainer(default_flex_container()),
            WidgetType::SmartGrid => WidgetContent::SmartGrid(default_smart_grid()),
            WidgetType::Unknown => WidgetContent::Unknown {
                type_name: "unknown".to_string(),
                raw: serde_json::Value::Null,
            },
        }
    }
}

fn default_heading() -> HeadingContent {
    let mut typography = Typography::body();
    typography.font_size = ResponsiveValue::uniform(32.0);
    typography.font_weight = 700;
    typography.line_height = 1.2;

    HeadingContent {
        text: "Heading".to_string(),
        level: 2,
        alignment: ResponsiveValue::uniform(TextAlign::Left),
        typography,
        color: ColorValue::solid("#111111"),
        text_shadow: TextShadow::none(),
        advanced: AdvancedSettings::default(),
    }
}

fn default_paragraph() -> ParagraphContent {
    ParagraphContent {
        text: "Lorem ipsum dolor sit amet, consectetur adipiscing elit.".to_string(),
        alignment: ResponsiveValue::uniform(TextAlign::Left),
        typography: Typography::body(),
        color: ColorValue::solid("#333333"),
        advanced: AdvancedSettings::default(),
    }
}

fn default_button() -> ButtonContent {
    let mut typography = Typography::body();
    typography.font_weight = 600;

    let mut advanced = AdvancedSettings::default();
    advanced.padding = BoxModel {
        top: 12.0,
        right: 24.0,
        bottom: 12.0,
        left: 24.0,
        linked: false,
    };
    advanced.border.radius = BoxModel::uniform(4.0, true);
    advanced.width = crate::advanced::WidthMode::Inline;

    ButtonContent {
        text: "Click me".to_string(),
        link: Link::none(),
        alignment: ResponsiveValue::uniform(TextAlign::Left),
        typography,
        background: ColorValue::solid("#2563eb"),
        text_color: ColorValue::solid("#ffffff"),
        hover: ButtonHover::default(),
        transition_ms: 200,
        icon: None,
        icon_position: IconPosition::Right,
        advanced,
    }
}

fn default_image() -> ImageContent {
    ImageContent {
        src: String::new(),
        alt: String::new(),
        caption: String::new(),
        link: None,
        alignment: ResponsiveValue::uniform(TextAlign::Center),
        object_fit: ObjectFit::Cover,
        lazy_load: true,
        advanced: AdvancedSettings::default(),
    }
}

fn default_icon() -> IconContent {
    IconContent {
        name: "star".to_string(),
        size: ResponsiveValue::uniform(24.0),
        color: ColorValue::solid("#111111"),
        alignment: ResponsiveValue::uniform(TextAlign::Center),
        advanced: AdvancedSettings::default(),
    }
}

fn default_divider() -> DividerContent {
    let mut advanced = AdvancedSettings::default();
    advanced.margin = BoxModel {
        top: 16.0,
        right: 0.0,
        bottom: 16.0,
        left: 0.0,
        linked: false,
    };

    DividerContent {
        style: BorderStyle::Solid,
        weight: 1.0,
        width_percent: ResponsiveValue::uniform(100.0),
        color: "#e5e7eb".to_string(),
        alignment: ResponsiveValue::uniform(TextAlign::Center),
        advanced,
    }
}

fn default_spacer() -> SpacerContent {
    SpacerContent {
        height: ResponsiveValue::uniform(40.0),
        advanced: AdvancedSettings::default(),
    }
}

fn default_video() -> VideoContent {
    VideoContent {
        url: String::new(),
        aspect_ratio: AspectRatio::Widescreen,
        autoplay: false,
        loop_playback: false,
        muted: false,
        controls: true,
        advanced: AdvancedSettings::default(),
    }
}

fn default_pricing_table() -> PricingTableContent {
    PricingTableContent {
        plans: vec![
            PricingPlan {
                title: "Starter".to_string(),
                price: "$9".to_string(),
                period: "/month".to_string(),
                features: vec![
                    "1 project".to_string(),
                    "Community support".to_string(),
                ],
                cta_text: "Get started".to_string(),
                cta_url: String::new(),
                highlighted: false,
            },
            PricingPlan {
                title: "Pro".to_string(),
                price: "$29".to_string(),
                period: "/month".to_string(),
                features: vec![
                    "Unlimited projects".to_string(),
                    "Priority support".to_string(),
                    "Custom domain".to_string(),
                ],
                cta_text: "Go Pro".to_string(),
                cta_url: String::new(),
                highlighted: true,
            },
        ],
        columns: ResponsiveValue {
            desktop: 2,
            tablet: Some(2),
            mobile: Some(1),
        },
        gap: ResponsiveValue::uniform(24.0),
        accent_color: "#2563eb".to_string(),
        advanced: AdvancedSettings::default(),
    }
}

fn default_gallery() -> GalleryContent {
    GalleryContent {
        images: Vec::new(),
        columns: ResponsiveValue {
            desktop: 3,
            tablet: Some(2),
            mobile: Some(1),
        },
        gap: ResponsiveValue::uniform(16.0),
        radius: 0.0,
        advanced: AdvancedSettings::default(),
    }
}

fn default_tabs() -> TabsContent {
    TabsContent {
        items: vec![
            TabItem {
                title: "Tab 1".to_string(),
                body: "First tab content".to_string(),
            },
            TabItem {
                title: "Tab 2".to_string(),
                body: "Second tab content".to_string(),
            },
        ],
        active_color: "#2563eb".to_string(),
        typography: Typography::body(),
        advanced: AdvancedSettings::default(),
    }
}

fn container_chrome() -> (Background, Border, BoxShadow) {
    (Background::transparent(), Border::none(), BoxShadow::none())
}

fn default_container() -> ContainerContent {
    let (background, border, shadow) = container_chrome();
    let mut advanced = AdvancedSettings::default();
    advanced.padding = BoxModel::uniform(16.0, true);

    ContainerContent {
        layout: ContainerLayout {
            gap: ResponsiveValue::uniform(16.0),
            alignment: ResponsiveValue::uniform(TextAlign::Left),
            min_height: ResponsiveValue::uniform(0.0),
        },
        background,
        border,
        shadow,
        advanced,
    }
}

fn default_grid() -> GridContent {
    let (background, border, shadow) = container_chrome();

    GridContent {
        layout: GridLayout {
            columns: ResponsiveValue {
                desktop: 3,
                tablet: Some(2),
                mobile: Some(1),
            },
            gap: ResponsiveValue::uniform(16.0),
            align_items: ItemsAlign::Stretch,
            justify_items: ItemsAlign::Stretch,
        },
        background,
        border,
        shadow,
        advanced: AdvancedSettings::default(),
    }
}

fn default_flex_container() -> FlexContainerContent {
    let (background, border, shadow) = container_chrome();

    FlexContainerContent {
        layout: FlexLayout {
            direction: FlexDirection::Row,
            wrap: true,
            gap: ResponsiveValue::uniform(16.0),
            align_items: ItemsAlign::Stretch,
            justify_content: JustifyContent::Start,
        },
        background,
        border,
        shadow,
        advanced: AdvancedSettings::default(),
    }
}

fn default_smart_grid() -> SmartGridContent {
    let (background, border, shadow) = container_chrome();

    SmartGridContent {
        layout: SmartGridLayout {
            min_column_width: ResponsiveValue::uniform(240.0),
            fit: GridFit::AutoFit,
            gap: ResponsiveValue::uniform(16.0),
        },
        background,
        border,
        shadow,
        advanced: AdvancedSettings::default(),
    }
}
