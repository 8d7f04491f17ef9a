//! # Pagecraft Schema
//!
//! Content schema for the block document model.
//!
//! A page is an ordered list of blocks; each block carries typed content for
//! one widget kind (heading, button, image, pricing table, grid containers,
//! ...). This crate defines:
//!
//! - the shared value vocabulary (responsive values, box models, colors,
//!   typography, advanced settings)
//! - the closed [`WidgetType`] enumeration and the [`WidgetContent`] tagged
//!   union keyed by it
//! - the defaults registry: a fully populated content instance per widget
//!   kind, with no optional gaps in required nested sub-objects
//!
//! Stored content may be partial or legacy-shaped; the `pagecraft-migrate`
//! crate merges it over these defaults to produce complete instances. All
//! serialized field names are camelCase, matching the persisted documents.

mod advanced;
mod content;
mod defaults;
mod responsive;
mod values;

pub use advanced::{
    AdvancedSettings, GridItemSettings, MaxWidth, PositionMode, SelfAlign, SizeUnit, WidthMode,
};
pub use content::{
    AspectRatio, ButtonContent, ButtonHover, ContainerContent, ContainerLayout, DividerContent,
    FlexContainerContent, FlexDirection, FlexLayout, GalleryContent, GalleryImage, GridContent,
    GridFit, GridLayout, HeadingContent, IconContent, IconPosition, ImageContent, ItemsAlign,
    JustifyContent, Link, ObjectFit, ParagraphContent, PricingPlan, PricingTableContent,
    SmartGridContent, SmartGridLayout, SpacerContent, TabItem, TabsContent, VideoContent,
    WidgetContent, WidgetType,
};
pub use responsive::{Breakpoint, ResponsiveValue};
pub use values::{
    Background, Border, BorderStyle, BoxModel, BoxShadow, ColorValue, FontStyle, Gradient,
    GradientStop, Side, TextAlign, TextDecoration, TextShadow, TextTransform, Typography,
};
