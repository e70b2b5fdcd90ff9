//! # Page Geometry
//!
//! Physical sheet definitions and the small geometry types shared by the
//! packer, the renderers and the canvases.
//!
//! All values are PDF points (1/72 inch). The origin is the top-left corner
//! of the page and `y` grows downward; the PDF canvas flips to PDF's
//! bottom-left origin when it writes the page.
//!
//! ## Supported Sheets
//!
//! | Sheet | Size (pt) | Margin | Usable area |
//! |-------|-----------|--------|-------------|
//! | Letter | 612 × 792 | 20 | 572 × 752 |
//!
//! ```
//! use labelsheet::page::PageSpec;
//!
//! let page = PageSpec::LETTER;
//! assert_eq!(page.usable_width(), 572.0);
//! assert_eq!(page.usable_height(), 752.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::LabelError;

/// Default gap between neighbouring labels, in points.
pub const DEFAULT_SPACING: f32 = 15.0;

/// Points per millimeter.
pub const PT_PER_MM: f32 = 72.0 / 25.4;

/// A position in page space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Width and height of a label.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin with the given size.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Shrink by fractions of the width and height on each side.
    pub fn inset_fraction(self, fx: f32, fy: f32) -> Self {
        let dx = self.width * fx;
        let dy = self.height * fy;
        Self::new(
            self.x + dx,
            self.y + dy,
            self.width - 2.0 * dx,
            self.height - 2.0 * dy,
        )
    }

    /// Largest rectangle with the given aspect ratio (width / height) that
    /// fits inside `self`, centered.
    pub fn fit_aspect(&self, aspect: f32) -> Rect {
        if aspect <= 0.0 || !aspect.is_finite() {
            return *self;
        }
        let (w, h) = if self.width / self.height > aspect {
            // Height-constrained
            (self.height * aspect, self.height)
        } else {
            // Width-constrained
            (self.width, self.width / aspect)
        };
        Rect::new(
            self.x + (self.width - w) / 2.0,
            self.y + (self.height - h) / 2.0,
            w,
            h,
        )
    }

    /// Whether two rectangles share any interior area.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// The placement of exactly one label instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Zero-based page index.
    pub page: usize,
}

impl Slot {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// # Page Specification
///
/// Physical sheet dimensions plus the margin kept clear on every side.
///
/// ```text
/// ├ margin ┼──────── usable width ────────┼ margin ┤
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSpec {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

impl PageSpec {
    /// US Letter (8.5" × 11") with a 20pt margin.
    pub const LETTER: Self = Self {
        width: 612.0,
        height: 792.0,
        margin: 20.0,
    };

    /// Create a page, checking that the margins leave a usable area.
    pub fn new(width: f32, height: f32, margin: f32) -> Result<Self, LabelError> {
        let page = Self {
            width,
            height,
            margin,
        };
        page.validate()?;
        Ok(page)
    }

    /// Letter sheet with a custom margin.
    pub fn letter_with_margin(margin: f32) -> Result<Self, LabelError> {
        Self::new(Self::LETTER.width, Self::LETTER.height, margin)
    }

    pub fn validate(&self) -> Result<(), LabelError> {
        let finite = [self.width, self.height, self.margin]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.width <= 0.0 || self.height <= 0.0 || self.margin < 0.0 {
            return Err(LabelError::Configuration(format!(
                "invalid page {}x{} with margin {}",
                self.width, self.height, self.margin
            )));
        }
        if self.margin * 2.0 >= self.width || self.margin * 2.0 >= self.height {
            return Err(LabelError::Configuration(format!(
                "margin {} leaves no usable area on a {}x{} page",
                self.margin, self.width, self.height
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn usable_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    #[inline]
    pub fn usable_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }

    /// Rightmost x a label may reach.
    #[inline]
    pub fn right(&self) -> f32 {
        self.width - self.margin
    }

    /// Lowest y a label may reach.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.height - self.margin
    }

    /// Whether a label of this size fits inside the margins on its own.
    pub fn fits(&self, size: Size) -> bool {
        size.width <= self.usable_width() && size.height <= self.usable_height()
    }
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::LETTER
    }
}

/// Packing policy for one document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PackMode {
    /// Uniform grid: every label has the same size.
    Fixed { spacing: f32 },
    /// Greedy row-wrap: label width depends on content.
    Flow { spacing: f32 },
}

impl PackMode {
    pub const fn fixed() -> Self {
        Self::Fixed {
            spacing: DEFAULT_SPACING,
        }
    }

    pub const fn flow() -> Self {
        Self::Flow {
            spacing: DEFAULT_SPACING,
        }
    }

    pub fn spacing(&self) -> f32 {
        match self {
            PackMode::Fixed { spacing } | PackMode::Flow { spacing } => *spacing,
        }
    }

    pub fn is_flow(&self) -> bool {
        matches!(self, PackMode::Flow { .. })
    }

    /// Spacing must be a finite, non-negative gap; anything else lets
    /// neighbouring slots overlap.
    pub fn validate(&self) -> Result<(), LabelError> {
        let spacing = self.spacing();
        if !spacing.is_finite() || spacing < 0.0 {
            return Err(LabelError::Configuration(format!(
                "spacing must be a non-negative number, got {}",
                spacing
            )));
        }
        Ok(())
    }
}

/// Mode as requested by a caller; `Auto` picks fixed when every label
/// shares one size and flow otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeChoice {
    Fixed,
    Flow,
    #[default]
    Auto,
}

impl std::str::FromStr for ModeChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed" | "grid" => Ok(ModeChoice::Fixed),
            "flow" => Ok(ModeChoice::Flow),
            "auto" => Ok(ModeChoice::Auto),
            other => Err(format!("unknown mode '{}' (expected fixed, flow or auto)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_usable_area() {
        let page = PageSpec::LETTER;
        assert_eq!(page.usable_width(), 572.0);
        assert_eq!(page.usable_height(), 752.0);
        assert_eq!(page.right(), 592.0);
        assert_eq!(page.bottom(), 772.0);
        assert!(page.validate().is_ok());
    }

    #[test]
    fn test_margin_too_large() {
        assert!(matches!(
            PageSpec::new(100.0, 200.0, 50.0),
            Err(LabelError::Configuration(_))
        ));
        assert!(PageSpec::new(100.0, 200.0, 49.0).is_ok());
    }

    #[test]
    fn test_fit_aspect_width_constrained() {
        let frame = Rect::new(10.0, 10.0, 50.0, 50.0);
        let fitted = frame.fit_aspect(2.0);
        assert_eq!(fitted, Rect::new(10.0, 22.5, 50.0, 25.0));
    }

    #[test]
    fn test_fit_aspect_height_constrained() {
        let frame = Rect::new(0.0, 0.0, 50.0, 50.0);
        let fitted = frame.fit_aspect(0.5);
        assert_eq!(fitted, Rect::new(12.5, 0.0, 25.0, 50.0));
    }

    #[test]
    fn test_intersects_touching_edges() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        let c = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&c));
    }

    #[test]
    fn test_mode_choice_parse() {
        assert_eq!("FIXED".parse::<ModeChoice>(), Ok(ModeChoice::Fixed));
        assert_eq!("flow".parse::<ModeChoice>(), Ok(ModeChoice::Flow));
        assert!("diagonal".parse::<ModeChoice>().is_err());
    }
}
