//! # Draw Opcodes
//!
//! The primitive vocabulary every label renderer speaks. A renderer returns
//! a `Vec<DrawOp>` in slot-relative coordinates; the sheet assembler
//! translates each op into page space and hands it to a canvas.
//!
//! ```text
//! Template renderer → Vec<DrawOp> (slot space) → translate → Canvas (page space)
//! ```
//!
//! Each opcode is a single, self-contained shape. Style (stroke, fill, font)
//! travels with the op rather than as separate state changes, so ops can be
//! reordered, inspected and compared in tests without replaying state.

use serde::{Deserialize, Serialize};

use crate::asset::LogoImage;
use crate::page::{Point, Rect};

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    pub const RED: Self = Self::rgb(0xEF, 0x44, 0x44);
    pub const GREEN: Self = Self::rgb(0x22, 0xC5, 0x5E);
    pub const BLUE: Self = Self::rgb(0x3B, 0x82, 0xF6);
    pub const ORANGE: Self = Self::rgb(0xF9, 0x73, 0x16);
    pub const PURPLE: Self = Self::rgb(0xA8, 0x55, 0xF7);
    /// Caption gray for secondary text.
    pub const GRAY: Self = Self::rgb(0x66, 0x66, 0x66);
    /// Hairline border gray.
    pub const LIGHT_GRAY: Self = Self::rgb(0xCC, 0xCC, 0xCC);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Channels as 0.0..=1.0 floats.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    /// Mix toward white by `amount` (0.0 = unchanged, 1.0 = white).
    pub fn tint(self, amount: f32) -> Self {
        let amount = amount.clamp(0.0, 1.0);
        let mix = |c: u8| (c as f32 + (255.0 - c as f32) * amount).round() as u8;
        Self::rgb(mix(self.r), mix(self.g), mix(self.b))
    }
}

/// Horizontal alignment of a text block within its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Concrete font faces a canvas must be able to draw.
///
/// These are the PDF standard-14 faces, so no font files are embedded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontHandle {
    Helvetica,
    HelveticaBold,
    TimesRoman,
    TimesBold,
    Courier,
    CourierBold,
}

impl FontHandle {
    pub const ALL: [FontHandle; 6] = [
        FontHandle::Helvetica,
        FontHandle::HelveticaBold,
        FontHandle::TimesRoman,
        FontHandle::TimesBold,
        FontHandle::Courier,
        FontHandle::CourierBold,
    ];

    /// Average glyph advance as a fraction of the font size.
    ///
    /// Canvases have no font metrics, so text widths are estimated from this.
    pub fn average_advance(self) -> f32 {
        match self {
            FontHandle::Helvetica => 0.52,
            FontHandle::HelveticaBold => 0.56,
            FontHandle::TimesRoman => 0.47,
            FontHandle::TimesBold => 0.50,
            FontHandle::Courier | FontHandle::CourierBold => 0.60,
        }
    }

    /// Estimated rendered width of `text` at `size` points.
    pub fn text_width(self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * self.average_advance() * size
    }
}

/// Outline style for a shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

impl Stroke {
    pub const fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

/// Draw opcodes: the "bytecode" for one label.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Axis-aligned rectangle, optionally with rounded corners.
    Rect {
        rect: Rect,
        /// Corner radius; 0 for square corners.
        radius: f32,
        stroke: Option<Stroke>,
        fill: Option<Color>,
    },

    /// Ellipse given by its center and radii.
    Ellipse {
        center: Point,
        rx: f32,
        ry: f32,
        stroke: Option<Stroke>,
        fill: Option<Color>,
    },

    /// Circular arc segment. Angles are in degrees, counter-clockwise as seen
    /// on the page, 0 pointing right and 90 pointing up. A filled arc is
    /// closed by its chord.
    Arc {
        center: Point,
        radius: f32,
        start_deg: f32,
        sweep_deg: f32,
        stroke: Option<Stroke>,
        fill: Option<Color>,
    },

    /// Straight segment.
    Line { from: Point, to: Point, stroke: Stroke },

    /// Raster image scaled to fit inside `frame`, aspect ratio preserved.
    Image { image: LogoImage, frame: Rect },

    /// Text block. `origin` is the top-left of the block; with a `width`,
    /// lines wrap at that width and `align` positions them inside it.
    Text {
        text: String,
        origin: Point,
        width: Option<f32>,
        align: Align,
        font: FontHandle,
        size: f32,
        color: Color,
    },
}

impl DrawOp {
    /// Move this op by `(dx, dy)`.
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        match self {
            DrawOp::Rect {
                rect,
                radius,
                stroke,
                fill,
            } => DrawOp::Rect {
                rect: rect.translate(dx, dy),
                radius,
                stroke,
                fill,
            },
            DrawOp::Ellipse {
                center,
                rx,
                ry,
                stroke,
                fill,
            } => DrawOp::Ellipse {
                center: center.translate(dx, dy),
                rx,
                ry,
                stroke,
                fill,
            },
            DrawOp::Arc {
                center,
                radius,
                start_deg,
                sweep_deg,
                stroke,
                fill,
            } => DrawOp::Arc {
                center: center.translate(dx, dy),
                radius,
                start_deg,
                sweep_deg,
                stroke,
                fill,
            },
            DrawOp::Line { from, to, stroke } => DrawOp::Line {
                from: from.translate(dx, dy),
                to: to.translate(dx, dy),
                stroke,
            },
            DrawOp::Image { image, frame } => DrawOp::Image {
                image,
                frame: frame.translate(dx, dy),
            },
            DrawOp::Text {
                text,
                origin,
                width,
                align,
                font,
                size,
                color,
            } => DrawOp::Text {
                text,
                origin: origin.translate(dx, dy),
                width,
                align,
                font,
                size,
                color,
            },
        }
    }

    /// Text content if this is a text op.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DrawOp::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// Short opcode name, used in debug logging.
    pub fn kind(&self) -> &'static str {
        match self {
            DrawOp::Rect { .. } => "rect",
            DrawOp::Ellipse { .. } => "ellipse",
            DrawOp::Arc { .. } => "arc",
            DrawOp::Line { .. } => "line",
            DrawOp::Image { .. } => "image",
            DrawOp::Text { .. } => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_hex() {
        assert_eq!(Color::from_hex("#EF4444"), Some(Color::RED));
        assert_eq!(Color::from_hex("22c55e"), Some(Color::GREEN));
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#GG0000"), None);
    }

    #[test]
    fn test_tint() {
        assert_eq!(Color::BLACK.tint(0.0), Color::BLACK);
        assert_eq!(Color::BLACK.tint(1.0), Color::WHITE);
    }

    #[test]
    fn test_translate_moves_geometry_only() {
        let op = DrawOp::Text {
            text: "$99".into(),
            origin: Point::new(5.0, 10.0),
            width: Some(40.0),
            align: Align::Center,
            font: FontHandle::HelveticaBold,
            size: 12.0,
            color: Color::GREEN,
        };
        let moved = op.translate(100.0, 200.0);
        match moved {
            DrawOp::Text {
                origin,
                width,
                size,
                ..
            } => {
                assert_eq!(origin, Point::new(105.0, 210.0));
                assert_eq!(width, Some(40.0));
                assert_eq!(size, 12.0);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn test_translate_line_endpoints() {
        let op = DrawOp::Line {
            from: Point::new(0.0, 0.0),
            to: Point::new(10.0, 0.0),
            stroke: Stroke::new(Color::RED, 1.0),
        };
        assert_eq!(
            op.translate(3.0, 4.0),
            DrawOp::Line {
                from: Point::new(3.0, 4.0),
                to: Point::new(13.0, 4.0),
                stroke: Stroke::new(Color::RED, 1.0),
            }
        );
    }

    #[test]
    fn test_text_width_estimate() {
        let w = FontHandle::Courier.text_width("abcd", 10.0);
        assert!((w - 24.0).abs() < 1e-4);
    }
}
