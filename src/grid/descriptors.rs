//! Drawing instructions produced by the grid engine.

use crate::core::constants::{
    DASH_PATTERN, LABEL_FONT_SIZE, LABEL_PADDING, MAX_LATITUDE, MAX_LONGITUDE, STROKE_RGB,
    STROKE_WIDTH,
};
use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Parallels: horizontal lines of constant latitude
    Latitude,
    /// Meridians: vertical lines of constant longitude
    Longitude,
}

impl Axis {
    /// Largest magnitude a line on this axis may have
    pub fn limit(&self) -> f64 {
        match self {
            Axis::Latitude => MAX_LATITUDE,
            Axis::Longitude => MAX_LONGITUDE,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Latitude => write!(f, "latitude"),
            Axis::Longitude => write!(f, "longitude"),
        }
    }
}

/// Color that serializes without pulling in a UI toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

#[cfg(feature = "egui")]
impl From<SerializableColor> for egui::Color32 {
    fn from(color: SerializableColor) -> Self {
        egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

/// Stroke of a grid line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: SerializableColor,
    pub width: f32,
    /// Alternating dash and gap lengths (empty for solid line)
    pub dash_pattern: Vec<f32>,
}

impl Default for LineStyle {
    fn default() -> Self {
        let (r, g, b) = STROKE_RGB;
        Self {
            color: SerializableColor::rgb(r, g, b),
            width: STROKE_WIDTH,
            dash_pattern: DASH_PATTERN.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub color: SerializableColor,
    pub font_size: f32,
    /// Distance between a line and its label, in pixels
    pub padding: f64,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            color: SerializableColor::rgb(0, 0, 0),
            font_size: LABEL_FONT_SIZE,
            padding: LABEL_PADDING,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraticuleStyle {
    pub line: LineStyle,
    pub label: LabelStyle,
}

/// Segment endpoints relative to a line's anchor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub axis: Axis,
    /// Signed value: north and east are positive
    pub value_degrees: f64,
    /// Screen position the segment is relative to
    pub anchor: Point,
    pub segment: LineSegment,
    pub style: LineStyle,
}

impl GridLine {
    /// Segment endpoints in screen pixels
    pub fn absolute_segment(&self) -> (Point, Point) {
        (
            Point::new(self.anchor.x + self.segment.x1, self.anchor.y + self.segment.y1),
            Point::new(self.anchor.x + self.segment.x2, self.anchor.y + self.segment.y2),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub axis: Axis,
    pub value_degrees: f64,
    pub text: String,
    pub position: Point,
    /// Clockwise rotation around `position`
    pub rotation_degrees: f64,
}

/// Degree text for a label: shortest decimal form, rounded to 1e-9 so
/// accumulated step error does not leak into the text. Never `-0`.
pub fn format_degrees(value: f64) -> String {
    let rounded = (value * 1e9).round() / 1e9;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_degrees() {
        assert_eq!(format_degrees(30.0), "30");
        assert_eq!(format_degrees(-120.0), "-120");
        assert_eq!(format_degrees(-0.0), "0");
        assert_eq!(format_degrees(0.5), "0.5");
        assert_eq!(format_degrees(0.1 + 0.2), "0.3");
        assert_eq!(format_degrees(-0.001), "-0.001");
    }

    #[test]
    fn test_default_styles() {
        let style = GraticuleStyle::default();
        assert_eq!(style.line.color, SerializableColor::rgb(0x6d, 0x5b, 0x33));
        assert_eq!(style.line.width, 3.0);
        assert_eq!(style.line.dash_pattern, vec![4.0, 2.0]);
        assert_eq!(style.label.font_size, 14.0);
        assert_eq!(style.label.padding, 5.0);
    }

    #[test]
    fn test_absolute_segment() {
        let line = GridLine {
            axis: Axis::Longitude,
            value_degrees: 30.0,
            anchor: Point::new(100.0, -20.0),
            segment: LineSegment::new(0.0, 20.0, 0.0, 220.0),
            style: LineStyle::default(),
        };
        let (from, to) = line.absolute_segment();
        assert_eq!(from, Point::new(100.0, 0.0));
        assert_eq!(to, Point::new(100.0, 200.0));
    }

    #[test]
    fn test_axis_limits() {
        assert_eq!(Axis::Latitude.limit(), 85.0);
        assert_eq!(Axis::Longitude.limit(), 180.0);
        assert_eq!(Axis::Longitude.to_string(), "longitude");
    }
}
