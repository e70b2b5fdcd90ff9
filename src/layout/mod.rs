//! # Slot Packer
//!
//! Turns a stream of label sizes into page placements. Two policies:
//!
//! | Mode | Module | Sizes | Order |
//! |------|--------|-------|-------|
//! | Fixed | [`fixed`] | one size for the whole batch | row-major grid, page-major |
//! | Flow | [`flow`] | any width, row-wrapping | greedy left-to-right |
//!
//! Both are pure: fixed placement is a function of the item index, flow
//! placement a function of the previous [`PackerCursor`]. [`SlotPacker`]
//! wraps either behind one `next_slot` call for the sheet assembler.
//!
//! ```
//! use labelsheet::layout::SlotPacker;
//! use labelsheet::page::{PackMode, PageSpec, Size};
//!
//! let mut packer = SlotPacker::new(PackMode::fixed(), PageSpec::LETTER, Size::new(180.0, 240.0)).unwrap();
//! let first = packer.next_slot(Size::new(180.0, 240.0));
//! assert_eq!((first.x, first.y, first.page), (20.0, 20.0, 0));
//! ```

pub mod fixed;
pub mod flow;

pub use fixed::FixedGrid;

use crate::error::LabelError;
use crate::page::{PackMode, PageSpec, Size, Slot};

/// Flow packing state between two placements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackerCursor {
    pub x: f32,
    pub y: f32,
    /// Tallest item placed on the current row so far.
    pub row_height: f32,
    pub page: usize,
}

impl PackerCursor {
    /// Cursor at the top-left margin corner of `page`.
    pub fn start(page: &PageSpec) -> Self {
        Self {
            x: page.margin,
            y: page.margin,
            row_height: 0.0,
            page: 0,
        }
    }
}

/// Placement state for one document.
#[derive(Debug, Clone)]
pub enum SlotPacker {
    Fixed {
        grid: FixedGrid,
        next: usize,
    },
    Flow {
        page: PageSpec,
        spacing: f32,
        cursor: PackerCursor,
    },
}

impl SlotPacker {
    /// Build a packer. In fixed mode `size` is the batch's single label size.
    pub fn new(mode: PackMode, page: PageSpec, size: Size) -> Result<Self, LabelError> {
        mode.validate()?;
        match mode {
            PackMode::Fixed { spacing } => Ok(SlotPacker::Fixed {
                grid: FixedGrid::new(size, page, spacing)?,
                next: 0,
            }),
            PackMode::Flow { spacing } => Ok(SlotPacker::Flow {
                page,
                spacing,
                cursor: PackerCursor::start(&page),
            }),
        }
    }

    /// Place the next item. Fixed mode ignores `size`; the grid size applies.
    pub fn next_slot(&mut self, size: Size) -> Slot {
        match self {
            SlotPacker::Fixed { grid, next } => {
                let slot = grid.slot_at(*next);
                *next += 1;
                slot
            }
            SlotPacker::Flow {
                page,
                spacing,
                cursor,
            } => {
                let (slot, advanced) = flow::step(*cursor, size, page, *spacing);
                *cursor = advanced;
                slot
            }
        }
    }
}
