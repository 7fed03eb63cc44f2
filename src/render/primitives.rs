use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit alpha, red, green and blue channels.
    #[must_use]
    pub fn argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            f64::from(alpha) / 255.0,
        )
    }

    /// Builds a color from a packed `0xAARRGGBB` value.
    #[must_use]
    pub fn from_argb(packed: u32) -> Self {
        let [alpha, red, green, blue] = packed.to_be_bytes();
        Self::argb(alpha, red, green, blue)
    }

    /// Packs the color back into `0xAARRGGBB`, rounding each channel.
    #[must_use]
    pub fn to_argb(self) -> u32 {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        u32::from_be_bytes([
            channel(self.alpha),
            channel(self.red),
            channel(self.green),
            channel(self.blue),
        ])
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

impl PathPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Path vertices; stroked segments stay inline, fills spill to the heap.
pub type PathPoints = SmallVec<[PathPoint; 4]>;

fn all_finite(points: &[PathPoint]) -> bool {
    points.iter().all(|point| point.x.is_finite() && point.y.is_finite())
}

/// Open polyline stroked in pixel space with round caps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokePath {
    pub points: PathPoints,
    pub stroke_width: f64,
    pub color: Color,
}

impl StrokePath {
    #[must_use]
    pub fn segment(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        let mut points = PathPoints::new();
        points.push(PathPoint::new(x1, y1));
        points.push(PathPoint::new(x2, y2));
        Self {
            points,
            stroke_width,
            color,
        }
    }

    /// A zero-width stroke is valid and draws nothing.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.stroke_width > 0.0
    }

    /// At least two vertices, all finite.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 2 && all_finite(&self.points)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Closed polygon filled in pixel space; the last vertex connects to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillPath {
    pub points: PathPoints,
    pub color: Color,
}

impl FillPath {
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = PathPoint>, color: Color) -> Self {
        Self {
            points: points.into_iter().collect(),
            color,
        }
    }

    /// At least three vertices, all finite.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.points.len() >= 3 && all_finite(&self.points)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.color.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label; `y` is the text baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            h_align,
        }
    }

    /// Non-empty text at a finite position with a positive font size.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        !self.text.is_empty()
            && self.x.is_finite()
            && self.y.is_finite()
            && self.font_size_px.is_finite()
            && self.font_size_px > 0.0
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.color.validate()
    }
}
