//! Flow-mode packing: greedy left-to-right rows of variable-width labels.
//!
//! Each step wraps to a new row when the item would cross the right margin,
//! then breaks to a new page when it would cross the bottom margin. An item
//! that is too big for an empty row (or an empty page) is placed anyway
//! rather than wrapping forever; batch validation keeps such items out.

use tracing::debug;

use super::PackerCursor;
use crate::page::{PageSpec, Size, Slot};

/// Place one item and return its slot plus the advanced cursor.
pub fn step(cursor: PackerCursor, size: Size, page: &PageSpec, spacing: f32) -> (Slot, PackerCursor) {
    let mut next = cursor;

    if next.x + size.width > page.right() && next.x > page.margin {
        next.x = page.margin;
        next.y += next.row_height + spacing;
        next.row_height = 0.0;
    }

    if next.y + size.height > page.bottom() && next.y > page.margin {
        next.x = page.margin;
        next.y = page.margin;
        next.row_height = 0.0;
        next.page += 1;
        debug!(page = next.page, "flow page break");
    }

    let slot = Slot {
        x: next.x,
        y: next.y,
        width: size.width,
        height: size.height,
        page: next.page,
    };

    next.x += size.width + spacing;
    next.row_height = next.row_height.max(size.height);

    (slot, next)
}
