//! Oval price tag: an ellipse inscribed in the slot with the content laid
//! out in the largest rectangle that fits inside it.

use super::{Geometry, FlowWidth, RenderInput, body};
use crate::ir::{DrawOp, Stroke};
use crate::page::{Rect, Size};

/// Inset that places a box's corners on an inscribed ellipse:
/// `(1 - 1/√2) / 2`.
const INSCRIBED: f32 = 0.146_446_6;

pub const BORDER_WIDTH: f32 = 3.0;

pub const GEOMETRY: Geometry = Geometry {
    fixed: Size::new(250.0, 160.0),
    flow: FlowWidth {
        base: 200.0,
        per_line: 25.0,
        min: 200.0,
        max: 300.0,
    },
    inset_x: INSCRIBED,
    inset_y: INSCRIBED,
};

pub fn render(input: &RenderInput<'_>) -> Vec<DrawOp> {
    let Size { width, height } = input.size;
    let frame = Rect::from_size(input.size);

    let mut ops = vec![DrawOp::Ellipse {
        center: frame.center(),
        rx: width / 2.0,
        ry: height / 2.0,
        stroke: Some(Stroke::new(input.style.border, BORDER_WIDTH)),
        fill: None,
    }];
    ops.extend(body::content(
        GEOMETRY.content_box(input.size),
        input.content,
        input.style,
    ));
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Color;
    use crate::label::LabelContent;
    use crate::page::Point;
    use crate::style::ResolvedStyle;

    fn price() -> LabelContent {
        LabelContent::Price {
            price: "99".into(),
            original_price: Some("150".into()),
            logo: None,
        }
    }

    #[test]
    fn test_ellipse_inscribed() {
        let style = ResolvedStyle::default();
        let content = price();
        let ops = render(&RenderInput {
            size: GEOMETRY.fixed,
            content: &content,
            style: &style,
        });
        assert_eq!(
            ops[0],
            DrawOp::Ellipse {
                center: Point::new(125.0, 80.0),
                rx: 125.0,
                ry: 80.0,
                stroke: Some(Stroke::new(Color::BLACK, 3.0)),
                fill: None,
            }
        );
    }

    #[test]
    fn test_content_inside_inscribed_box() {
        let style = ResolvedStyle::default();
        let content = price();
        let inner = GEOMETRY.content_box(GEOMETRY.fixed);
        let ops = render(&RenderInput {
            size: GEOMETRY.fixed,
            content: &content,
            style: &style,
        });
        for op in &ops[1..] {
            if let DrawOp::Rect { rect, .. } = op {
                assert!(rect.x >= inner.x && rect.right() <= inner.right() + 1e-3);
                assert!(rect.y >= inner.y && rect.bottom() <= inner.bottom() + 1e-3);
            }
        }
    }

    #[test]
    fn test_border_color_from_style() {
        let style = ResolvedStyle::resolve(None, None, Some("purple"));
        let content = price();
        let ops = render(&RenderInput {
            size: GEOMETRY.fixed,
            content: &content,
            style: &style,
        });
        assert!(matches!(
            ops[0],
            DrawOp::Ellipse { stroke: Some(Stroke { color: Color::PURPLE, .. }), .. }
        ));
    }
}
