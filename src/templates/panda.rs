//! Cool panda frame: a thick rounded rectangle with two black half-circle
//! ears poking above the top edge.
//!
//! The ears are emitted before the border so the border stroke is painted
//! over them and the corners stay clean. They extend a few points above the
//! slot, which the inter-label spacing absorbs.

use super::{Geometry, FlowWidth, RenderInput, body};
use crate::ir::{DrawOp, Stroke};
use crate::page::{Point, Rect, Size};

pub const BORDER_WIDTH: f32 = 4.0;

/// Ear centers as fractions of the slot width.
pub const EAR_POSITIONS: [f32; 2] = [0.3, 0.7];

/// Ears stay clear of the border stroke of a label placed
/// `DEFAULT_SPACING` above.
pub const EAR_MAX_RADIUS: f32 = 10.0;

/// Height of the ear centers above the top edge.
pub const EAR_LIFT: f32 = 2.0;

pub const GEOMETRY: Geometry = Geometry {
    fixed: Size::new(200.0, 130.0),
    flow: FlowWidth {
        base: 170.0,
        per_line: 15.0,
        min: 170.0,
        max: 260.0,
    },
    inset_x: 0.08,
    inset_y: 0.1,
};

pub fn render(input: &RenderInput<'_>) -> Vec<DrawOp> {
    let size = input.size;
    let ear_radius = (size.width * 0.06).min(EAR_MAX_RADIUS);
    let ear_color = input.style.border;

    let mut ops: Vec<DrawOp> = EAR_POSITIONS
        .iter()
        .map(|fraction| DrawOp::Arc {
            center: Point::new(size.width * fraction, -EAR_LIFT),
            radius: ear_radius,
            start_deg: 0.0,
            sweep_deg: 180.0,
            stroke: None,
            fill: Some(ear_color),
        })
        .collect();

    ops.push(DrawOp::Rect {
        rect: Rect::from_size(size),
        radius: (size.height * 0.12).min(16.0),
        stroke: Some(Stroke::new(input.style.border, BORDER_WIDTH)),
        fill: None,
    });

    ops.extend(body::content(
        GEOMETRY.content_box(size),
        input.content,
        input.style,
    ));
    ops
}
