//! Fixed-mode grid: every label has the same size, so placement is a pure
//! function of the label's index.
//!
//! ```text
//! columns = floor(usable_width  / (w + s))
//! rows    = floor(usable_height / (h + s))
//! page    = i / per_page,  position = i % per_page
//! x = margin + (position % columns)(w + s)
//! y = margin + (position / columns)(h + s)
//! ```

use tracing::debug;

use crate::error::LabelError;
use crate::page::{PageSpec, Size, Slot};

/// Uniform grid over a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedGrid {
    pub size: Size,
    pub page: PageSpec,
    pub spacing: f32,
    pub columns: usize,
    pub rows: usize,
}

impl FixedGrid {
    /// Compute the grid; a size that leaves no room for even one label is an
    /// error.
    pub fn new(size: Size, page: PageSpec, spacing: f32) -> Result<Self, LabelError> {
        let pitch_x = size.width + spacing;
        let pitch_y = size.height + spacing;
        if pitch_x <= 0.0 || pitch_y <= 0.0 {
            return Err(LabelError::Configuration(format!(
                "label size {}x{} with spacing {} is not placeable",
                size.width, size.height, spacing
            )));
        }

        let columns = (page.usable_width() / pitch_x).floor().max(0.0) as usize;
        let rows = (page.usable_height() / pitch_y).floor().max(0.0) as usize;
        if columns * rows == 0 {
            return Err(LabelError::Configuration(format!(
                "label {}x{} does not fit on a {}x{} page with margin {}",
                size.width, size.height, page.width, page.height, page.margin
            )));
        }

        debug!(columns, rows, "fixed grid");
        Ok(Self {
            size,
            page,
            spacing,
            columns,
            rows,
        })
    }

    #[inline]
    pub fn per_page(&self) -> usize {
        self.columns * self.rows
    }

    /// Slot of the `index`-th label (0-based).
    pub fn slot_at(&self, index: usize) -> Slot {
        let per_page = self.per_page();
        let position = index % per_page;
        let col = position % self.columns;
        let row = position / self.columns;
        Slot {
            x: self.page.margin + col as f32 * (self.size.width + self.spacing),
            y: self.page.margin + row as f32 * (self.size.height + self.spacing),
            width: self.size.width,
            height: self.size.height,
            page: index / per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::DEFAULT_SPACING;

    fn exhibition_grid() -> FixedGrid {
        FixedGrid::new(Size::new(180.0, 240.0), PageSpec::LETTER, DEFAULT_SPACING).unwrap()
    }

    #[test]
    fn test_exhibition_grid_dimensions() {
        // 572 / 195 = 2.93, 752 / 255 = 2.95
        let grid = exhibition_grid();
        assert_eq!(grid.columns, 2);
        assert_eq!(grid.rows, 2);
        assert_eq!(grid.per_page(), 4);
    }

    #[test]
    fn test_fifth_label_starts_next_page() {
        let grid = exhibition_grid();
        let slots: Vec<Slot> = (0..5).map(|i| grid.slot_at(i)).collect();
        assert_eq!((slots[0].x, slots[0].y, slots[0].page), (20.0, 20.0, 0));
        assert_eq!((slots[1].x, slots[1].y, slots[1].page), (215.0, 20.0, 0));
        assert_eq!((slots[2].x, slots[2].y, slots[2].page), (20.0, 275.0, 0));
        assert_eq!((slots[3].x, slots[3].y, slots[3].page), (215.0, 275.0, 0));
        assert_eq!((slots[4].x, slots[4].y, slots[4].page), (20.0, 20.0, 1));
    }

    #[test]
    fn test_slots_within_margins() {
        let grid = exhibition_grid();
        for i in 0..grid.per_page() {
            let slot = grid.slot_at(i);
            assert!(slot.x >= 20.0 && slot.y >= 20.0);
            assert!(slot.x + slot.width <= 592.0);
            assert!(slot.y + slot.height <= 772.0);
        }
    }

    #[test]
    fn test_too_tall_is_error() {
        let result = FixedGrid::new(Size::new(100.0, 760.0), PageSpec::LETTER, DEFAULT_SPACING);
        assert!(matches!(result, Err(LabelError::Configuration(_))));
    }

    #[test]
    fn test_exact_fit_with_spacing_counts() {
        // 572 / (271 + 15) = 2 exactly
        let grid = FixedGrid::new(Size::new(271.0, 100.0), PageSpec::LETTER, DEFAULT_SPACING).unwrap();
        assert_eq!(grid.columns, 2);
    }
}
