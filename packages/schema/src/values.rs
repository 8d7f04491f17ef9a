//! Shared value vocabulary: box models, colors, shadows, typography.
//!
//! These are the nested sub-object categories that the migration engine merges
//! field-by-field; every content variant is composed from them.

use crate::responsive::ResponsiveValue;
use serde::{Deserialize, Serialize};

/// One side of a box model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// Four numeric sides plus a link flag.
///
/// When `linked` is true, editing one side propagates the value to all four.
/// Linking is enforced here at the edit site ([`BoxModel::set_side`]), not by
/// the style compiler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxModel {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub linked: bool,
}

impl BoxModel {
    /// All four sides set to the same value.
    pub fn uniform(value: f64, linked: bool) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
            linked,
        }
    }

    /// All sides zero, linked.
    pub fn zero() -> Self {
        Self::uniform(0.0, true)
    }

    /// Set one side. If the box is linked, all four sides take the value.
    pub fn set_side(&mut self, side: Side, value: f64) {
        if self.linked {
            self.top = value;
            self.right = value;
            self.bottom = value;
            self.left = value;
            return;
        }

        match side {
            Side::Top => self.top = value,
            Side::Right => self.right = value,
            Side::Bottom => self.bottom = value,
            Side::Left => self.left = value,
        }
    }

    /// True when every side is zero.
    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }
}

/// A color stop inside a gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientStop {
    pub color: String,
    /// Position along the gradient axis, 0–100.
    pub position: f64,
}

/// A linear gradient: angle in degrees plus ordered stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    pub angle: f64,
    pub stops: Vec<GradientStop>,
}

/// Tagged color value: a solid color string or a linear gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ColorValue {
    Solid { solid: String },
    Gradient { gradient: Gradient },
}

impl ColorValue {
    pub fn solid(color: impl Into<String>) -> Self {
        ColorValue::Solid {
            solid: color.into(),
        }
    }
}

/// Text shadow. Emitted by the compiler only when any of horizontal,
/// vertical, or blur is non-zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextShadow {
    pub horizontal: f64,
    pub vertical: f64,
    pub blur: f64,
    pub color: String,
}

impl TextShadow {
    pub fn none() -> Self {
        Self {
            horizontal: 0.0,
            vertical: 0.0,
            blur: 0.0,
            color: "rgba(0,0,0,0.25)".to_string(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.horizontal == 0.0 && self.vertical == 0.0 && self.blur == 0.0
    }
}

/// Box shadow for container-like widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxShadow {
    pub horizontal: f64,
    pub vertical: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: String,
}

impl BoxShadow {
    pub fn none() -> Self {
        Self {
            horizontal: 0.0,
            vertical: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: "rgba(0,0,0,0.15)".to_string(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.horizontal == 0.0 && self.vertical == 0.0 && self.blur == 0.0 && self.spread == 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    None,
    Solid,
    Dashed,
    Dotted,
    Double,
}

impl BorderStyle {
    pub fn as_css(&self) -> &'static str {
        match self {
            BorderStyle::None => "none",
            BorderStyle::Solid => "solid",
            BorderStyle::Dashed => "dashed",
            BorderStyle::Dotted => "dotted",
            BorderStyle::Double => "double",
        }
    }
}

/// Border: style, per-side widths, color, and per-corner radius.
///
/// `radius` reuses [`BoxModel`]; sides map to corners in clockwise order
/// (top = top-left, right = top-right, bottom = bottom-right, left =
/// bottom-left).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Border {
    pub style: BorderStyle,
    pub width: BoxModel,
    pub color: String,
    pub radius: BoxModel,
}

impl Border {
    pub fn none() -> Self {
        Self {
            style: BorderStyle::None,
            width: BoxModel::zero(),
            color: "#000000".to_string(),
            radius: BoxModel::zero(),
        }
    }
}

/// Background of a container-like widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    pub color: ColorValue,

    /// Opaque asset URL; resolving it is an external collaborator's job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    pub position: String,
    pub size: String,
    pub repeat: String,
}

impl Background {
    pub fn transparent() -> Self {
        Self {
            color: ColorValue::solid("transparent"),
            image: None,
            position: "center center".to_string(),
            size: "cover".to_string(),
            repeat: "no-repeat".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextTransform {
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

impl TextTransform {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextTransform::None => "none",
            TextTransform::Uppercase => "uppercase",
            TextTransform::Lowercase => "lowercase",
            TextTransform::Capitalize => "capitalize",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    Normal,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextDecoration {
    None,
    Underline,
    Overline,
    LineThrough,
}

impl TextDecoration {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextDecoration::None => "none",
            TextDecoration::Underline => "underline",
            TextDecoration::Overline => "overline",
            TextDecoration::LineThrough => "line-through",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

/// Typography settings shared by text-bearing widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub font_family: String,
    pub font_size: ResponsiveValue<f64>,
    pub font_weight: u32,
    pub text_transform: TextTransform,
    pub font_style: FontStyle,
    pub text_decoration: TextDecoration,
    /// Unitless multiplier.
    pub line_height: f64,
    /// Pixels.
    pub letter_spacing: f64,
}

impl Typography {
    /// Base typography used by most widgets; callers override size/weight.
    pub fn body() -> Self {
        Self {
            font_family: "inherit".to_string(),
            font_size: ResponsiveValue::uniform(16.0),
            font_weight: 400,
            text_transform: TextTransform::None,
            font_style: FontStyle::Normal,
            text_decoration: TextDecoration::None,
            line_height: 1.5,
            letter_spacing: 0.0,
        }
    }
}
