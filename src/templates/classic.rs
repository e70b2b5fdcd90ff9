//! Classic exhibition card: a hairline gray rectangle with content anchored
//! to the top.

use super::{Geometry, FlowWidth, RenderInput, body};
use crate::ir::{Color, DrawOp, Stroke};
use crate::page::{Rect, Size};

pub const GEOMETRY: Geometry = Geometry {
    fixed: Size::new(180.0, 240.0),
    flow: FlowWidth {
        base: 120.0,
        per_line: 12.0,
        min: 120.0,
        max: 240.0,
    },
    inset_x: 10.0 / 180.0,
    inset_y: 20.0 / 240.0,
};

pub fn render(input: &RenderInput<'_>) -> Vec<DrawOp> {
    let mut ops = vec![DrawOp::Rect {
        rect: Rect::from_size(input.size),
        radius: 0.0,
        stroke: Some(Stroke::new(Color::LIGHT_GRAY, 1.0)),
        fill: None,
    }];
    let inner = GEOMETRY.content_box(input.size);
    ops.extend(body::content(inner, input.content, input.style));
    ops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::LabelContent;
    use crate::page::Point;
    use crate::style::ResolvedStyle;

    #[test]
    fn test_border_is_slot_bounds() {
        let content = LabelContent::Display {
            title: "Laptop".into(),
            bullets: vec!["16GB RAM".into(), "512GB SSD".into()],
        };
        let style = ResolvedStyle::default();
        let ops = render(&RenderInput {
            size: GEOMETRY.fixed,
            content: &content,
            style: &style,
        });

        assert_eq!(
            ops[0],
            DrawOp::Rect {
                rect: Rect::new(0.0, 0.0, 180.0, 240.0),
                radius: 0.0,
                stroke: Some(Stroke::new(Color::LIGHT_GRAY, 1.0)),
                fill: None,
            }
        );

        // Title sits at the card's top inset
        match &ops[1] {
            DrawOp::Text { origin, width, .. } => {
                assert!((origin.x - 10.0).abs() < 1e-3);
                assert!((origin.y - 20.0).abs() < 1e-3);
                assert!((width.unwrap() - 160.0).abs() < 1e-3);
            }
            other => panic!("expected title, got {:?}", other),
        }
        assert_eq!(ops.len(), 4);
    }

    #[test]
    fn test_flow_width_slot() {
        let content = LabelContent::Display {
            title: "Wide".into(),
            bullets: vec![],
        };
        let style = ResolvedStyle::default();
        let ops = render(&RenderInput {
            size: Size::new(132.0, 240.0),
            content: &content,
            style: &style,
        });
        match &ops[1] {
            DrawOp::Text { origin, .. } => assert!(origin.x > 0.0 && origin.x < 10.0),
            other => panic!("expected title, got {:?}", other),
        }
        assert!(!ops.iter().any(|op| matches!(op, DrawOp::Text { origin: Point { x, .. }, .. } if *x > 132.0)));
    }
}
