//! # Design Registry
//!
//! Every label design is one static entry: a tag, its geometry, and a pure
//! render function that turns a slot size plus content into draw ops in
//! slot-relative coordinates.
//!
//! | Tag | Aliases | Fixed size | Flow width (base + per line, clamped) |
//! |-----|---------|------------|---------------------------------------|
//! | `classic-rect` | `exhibicion`, `classic` | 180 × 240 | 120 + 12n, 120..=240 |
//! | `oval` | `ovalado` | 250 × 160 | 200 + 25n, 200..=300 |
//! | `cool-panda-frame` | `coolpanda`, `panda` | 200 × 130 | 170 + 15n, 170..=260 |
//!
//! Adding a design means adding one entry to [`TEMPLATES`] and one render
//! function.
//!
//! ## Usage
//!
//! ```
//! use labelsheet::templates;
//!
//! for template in templates::all() {
//!     println!("{} - {}", template.tag, template.name);
//! }
//!
//! let oval = templates::lookup("ovalado").unwrap();
//! assert_eq!(oval.tag, "oval");
//! ```

pub mod body;
pub mod classic;
pub mod oval;
pub mod panda;

use crate::error::LabelError;
use crate::ir::DrawOp;
use crate::label::LabelContent;
use crate::page::{PackMode, Rect, Size};
use crate::style::ResolvedStyle;

/// Everything a renderer sees for one label instance.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    /// Slot size; ops are emitted relative to the slot's top-left corner.
    pub size: Size,
    pub content: &'a LabelContent,
    pub style: &'a ResolvedStyle,
}

/// A template render function.
pub type RenderFn = fn(&RenderInput<'_>) -> Vec<DrawOp>;

/// Flow-mode width rule: `clamp(base + per_line * lines, min, max)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowWidth {
    pub base: f32,
    pub per_line: f32,
    pub min: f32,
    pub max: f32,
}

impl FlowWidth {
    pub fn width(&self, line_count: usize) -> f32 {
        (self.base + self.per_line * line_count as f32).clamp(self.min, self.max)
    }
}

/// Fixed sub-geometry of a template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Slot size in fixed mode. The height is also used in flow mode.
    pub fixed: Size,
    pub flow: FlowWidth,
    /// Horizontal content inset as a fraction of the slot width.
    pub inset_x: f32,
    /// Vertical content inset as a fraction of the slot height.
    pub inset_y: f32,
}

impl Geometry {
    /// Slot size for a label with `line_count` lines under `mode`.
    pub fn slot_size(&self, mode: &PackMode, line_count: usize) -> Size {
        match mode {
            PackMode::Fixed { .. } => self.fixed,
            PackMode::Flow { .. } => Size::new(self.flow.width(line_count), self.fixed.height),
        }
    }

    /// Area inside the frame where content is laid out.
    pub fn content_box(&self, size: Size) -> Rect {
        Rect::from_size(size).inset_fraction(self.inset_x, self.inset_y)
    }
}

/// A registered label design.
pub struct Template {
    /// Canonical tag (e.g. "oval").
    pub tag: &'static str,
    /// Human-readable name
    pub name: &'static str,
    /// Other tags accepted for this design.
    pub aliases: &'static [&'static str],
    pub geometry: Geometry,
    render_fn: RenderFn,
}

impl Template {
    pub const fn new(
        tag: &'static str,
        name: &'static str,
        aliases: &'static [&'static str],
        geometry: Geometry,
        render_fn: RenderFn,
    ) -> Self {
        Self {
            tag,
            name,
            aliases,
            geometry,
            render_fn,
        }
    }

    /// Render one label instance in slot-relative coordinates.
    pub fn render(&self, input: &RenderInput<'_>) -> Vec<DrawOp> {
        (self.render_fn)(input)
    }

    fn matches(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag) || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(tag))
    }
}

impl std::fmt::Debug for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Template")
            .field("tag", &self.tag)
            .field("geometry", &self.geometry)
            .finish()
    }
}

/// All registered templates.
pub static TEMPLATES: &[Template] = &[
    Template::new(
        "classic-rect",
        "Classic exhibition card",
        &["exhibicion", "classic"],
        classic::GEOMETRY,
        classic::render,
    ),
    Template::new(
        "oval",
        "Classic oval",
        &["ovalado"],
        oval::GEOMETRY,
        oval::render,
    ),
    Template::new(
        "cool-panda-frame",
        "Cool panda frame",
        &["coolpanda", "panda"],
        panda::GEOMETRY,
        panda::render,
    ),
];

/// Get all registered templates.
pub fn all() -> &'static [Template] {
    TEMPLATES
}

/// Look up a template by tag or alias (case-insensitive).
pub fn by_tag(tag: &str) -> Option<&'static Template> {
    let tag = tag.trim();
    TEMPLATES.iter().find(|template| template.matches(tag))
}

/// Like [`by_tag`], but an unknown tag is an error.
pub fn lookup(tag: &str) -> Result<&'static Template, LabelError> {
    by_tag(tag).ok_or_else(|| LabelError::UnknownVariant(tag.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_aliases() {
        assert_eq!(lookup("ovalado").unwrap().tag, "oval");
        assert_eq!(lookup("coolpanda").unwrap().tag, "cool-panda-frame");
        assert_eq!(lookup("EXHIBICION").unwrap().tag, "classic-rect");
    }

    #[test]
    fn test_unknown_tag() {
        match lookup("hexagon") {
            Err(LabelError::UnknownVariant(tag)) => assert_eq!(tag, "hexagon"),
            other => panic!("expected UnknownVariant, got {:?}", other.map(|t| t.tag)),
        }
        assert!(by_tag("").is_none());
    }

    #[test]
    fn test_registry_order() {
        let tags: Vec<_> = all().iter().map(|template| template.tag).collect();
        assert_eq!(tags, vec!["classic-rect", "oval", "cool-panda-frame"]);
    }

    #[test]
    fn test_flow_width_clamps() {
        let oval = lookup("oval").unwrap().geometry;
        assert_eq!(oval.slot_size(&PackMode::flow(), 0), Size::new(200.0, 160.0));
        assert_eq!(oval.slot_size(&PackMode::flow(), 2), Size::new(250.0, 160.0));
        assert_eq!(oval.slot_size(&PackMode::flow(), 50), Size::new(300.0, 160.0));
        assert_eq!(oval.slot_size(&PackMode::fixed(), 50), Size::new(250.0, 160.0));
    }

    #[test]
    fn test_every_template_renders_both_kinds() {
        let style = ResolvedStyle::default();
        let display = LabelContent::Display {
            title: "Laptop".into(),
            bullets: vec!["16GB RAM".into()],
        };
        let price = LabelContent::Price {
            price: "99.00".into(),
            original_price: Some("150.00".into()),
            logo: None,
        };
        for template in all() {
            for content in [&display, &price] {
                let ops = template.render(&RenderInput {
                    size: template.geometry.fixed,
                    content,
                    style: &style,
                });
                assert!(ops.iter().any(|op| op.as_text().is_some()), "{}", template.tag);
                assert!(ops.len() >= 3, "{}", template.tag);
            }
        }
    }
}
