//! # Style Tables
//!
//! Font and color keys as they arrive from label configurations, resolved once
//! per configuration into a [`ResolvedStyle`] shared by every repeat.
//!
//! ## Fonts
//!
//! Only the PDF standard faces are available, so fonts without a standard
//! equivalent map to the closest face with a size adjustment.
//!
//! | Key | Face | Size × |
//! |-----|------|--------|
//! | `helvetica` | Helvetica-Bold | 1.00 |
//! | `times` | Times-Bold | 1.00 |
//! | `courier` | Courier-Bold | 0.95 |
//! | `arial` | Helvetica-Bold | 1.10 |
//! | `impact` | Helvetica-Bold | 1.15 |
//! | `verdana` | Helvetica | 1.05 |
//!
//! ## Colors
//!
//! Named accents (English or Spanish) or `#RRGGBB` literals. Lookups never
//! fail: unknown keys fall back to the defaults.

use crate::ir::{Color, FontHandle};

/// A font table entry.
pub struct FontEntry {
    pub key: &'static str,
    pub aliases: &'static [&'static str],
    pub handle: FontHandle,
    pub size_multiplier: f32,
}

static FONTS: &[FontEntry] = &[
    FontEntry {
        key: "helvetica",
        aliases: &["helvetica-bold"],
        handle: FontHandle::HelveticaBold,
        size_multiplier: 1.0,
    },
    FontEntry {
        key: "times",
        aliases: &["times-roman", "times new roman"],
        handle: FontHandle::TimesBold,
        size_multiplier: 1.0,
    },
    FontEntry {
        key: "courier",
        aliases: &["courier new"],
        handle: FontHandle::CourierBold,
        size_multiplier: 0.95,
    },
    FontEntry {
        key: "arial",
        aliases: &[],
        handle: FontHandle::HelveticaBold,
        size_multiplier: 1.1,
    },
    FontEntry {
        key: "impact",
        aliases: &[],
        handle: FontHandle::HelveticaBold,
        size_multiplier: 1.15,
    },
    FontEntry {
        key: "verdana",
        aliases: &[],
        handle: FontHandle::Helvetica,
        size_multiplier: 1.05,
    },
];

/// A named color.
pub struct ColorEntry {
    pub key: &'static str,
    pub aliases: &'static [&'static str],
    pub color: Color,
}

static COLORS: &[ColorEntry] = &[
    ColorEntry {
        key: "red",
        aliases: &["rojo"],
        color: Color::RED,
    },
    ColorEntry {
        key: "green",
        aliases: &["verde"],
        color: Color::GREEN,
    },
    ColorEntry {
        key: "blue",
        aliases: &["azul"],
        color: Color::BLUE,
    },
    ColorEntry {
        key: "orange",
        aliases: &["naranja"],
        color: Color::ORANGE,
    },
    ColorEntry {
        key: "purple",
        aliases: &["morado"],
        color: Color::PURPLE,
    },
    ColorEntry {
        key: "black",
        aliases: &["negro"],
        color: Color::BLACK,
    },
    ColorEntry {
        key: "gray",
        aliases: &["grey", "gris"],
        color: Color::LIGHT_GRAY,
    },
];

pub const DEFAULT_FONT_KEY: &str = "helvetica";
pub const DEFAULT_ACCENT: Color = Color::GREEN;
pub const DEFAULT_BORDER: Color = Color::BLACK;

/// All font entries.
pub fn fonts() -> &'static [FontEntry] {
    FONTS
}

/// All named colors.
pub fn colors() -> &'static [ColorEntry] {
    COLORS
}

fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Look up a font entry by key or alias (case-insensitive).
pub fn font_by_key(key: &str) -> Option<&'static FontEntry> {
    let key = normalize(key);
    FONTS
        .iter()
        .find(|entry| entry.key == key || entry.aliases.contains(&key.as_str()))
}

/// Look up a color by name or `#RRGGBB` literal.
pub fn color_by_key(key: &str) -> Option<Color> {
    let key = normalize(key);
    if key.starts_with('#') {
        return Color::from_hex(&key);
    }
    COLORS
        .iter()
        .find(|entry| entry.key == key || entry.aliases.contains(&key.as_str()))
        .map(|entry| entry.color)
}

/// Style derived once per configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStyle {
    pub font: FontHandle,
    pub size_multiplier: f32,
    /// Color for titles and prices.
    pub accent: Color,
    /// Frame color for templates that take one.
    pub border: Color,
}

impl ResolvedStyle {
    /// Resolve optional font/color keys, substituting defaults for anything
    /// missing or unknown.
    pub fn resolve(font: Option<&str>, color: Option<&str>, border: Option<&str>) -> Self {
        let font_entry = font
            .and_then(font_by_key)
            .or_else(|| font_by_key(DEFAULT_FONT_KEY));
        let (font, size_multiplier) = match font_entry {
            Some(entry) => (entry.handle, entry.size_multiplier),
            None => (FontHandle::HelveticaBold, 1.0),
        };

        Self {
            font,
            size_multiplier,
            accent: color.and_then(color_by_key).unwrap_or(DEFAULT_ACCENT),
            border: border.and_then(color_by_key).unwrap_or(DEFAULT_BORDER),
        }
    }

    /// Scale a base font size by this style's multiplier.
    #[inline]
    pub fn scaled(&self, size: f32) -> f32 {
        size * self.size_multiplier
    }
}

impl Default for ResolvedStyle {
    fn default() -> Self {
        Self::resolve(None, None, None)
    }
}
