//! # Sheet Assembler
//!
//! Drives one document from configurations to canvas output:
//!
//! ```text
//! configs ──► Batch::expand ──► SlotPacker ──► DrawJob::render ──► translate ──► Canvas
//!             (validate all)    (per job)       (slot space)        (page space)
//! ```
//!
//! Validation finishes before the canvas sees a single call, so a bad batch
//! never produces a partial document.
//!
//! ## Example
//!
//! ```
//! use labelsheet::canvas::RecordingCanvas;
//! use labelsheet::label::LabelConfig;
//! use labelsheet::page::{PackMode, PageSpec};
//! use labelsheet::sheet::layout_and_render;
//!
//! let configs: Vec<LabelConfig> = serde_json::from_str(
//!     r#"[{"template": "classic-rect", "quantity": 5, "title": "Laptop"}]"#,
//! ).unwrap();
//!
//! let recording = layout_and_render(&configs, &PageSpec::LETTER, &PackMode::fixed(), RecordingCanvas::new()).unwrap();
//! assert_eq!(recording.page_count(), 2);
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::batch::Batch;
use crate::canvas::{Canvas, PdfCanvas};
use crate::error::LabelError;
use crate::label::LabelConfig;
use crate::layout::SlotPacker;
use crate::page::{DEFAULT_SPACING, ModeChoice, PackMode, PageSpec, Slot};

/// Resolve a requested mode against a batch: `Auto` is fixed when every label
/// has the same fixed-mode size, otherwise flow.
pub fn choose_mode(choice: ModeChoice, configs: &[LabelConfig], page: &PageSpec, spacing: f32) -> PackMode {
    match choice {
        ModeChoice::Fixed => PackMode::Fixed { spacing },
        ModeChoice::Flow => PackMode::Flow { spacing },
        ModeChoice::Auto => {
            let fixed = PackMode::Fixed { spacing };
            let uniform = Batch::expand(configs, page, &fixed).is_ok();
            if uniform || configs.is_empty() {
                fixed
            } else {
                PackMode::Flow { spacing }
            }
        }
    }
}

fn packer_for(batch: &Batch<'_>, page: &PageSpec, mode: &PackMode) -> Result<SlotPacker, LabelError> {
    // Fixed mode was checked for a uniform size by Batch::expand
    let size = batch.uniform_size().unwrap_or_default();
    SlotPacker::new(*mode, *page, size)
}

/// Lay out every label and draw it onto `canvas`.
pub fn layout_and_render<C: Canvas>(
    configs: &[LabelConfig],
    page: &PageSpec,
    mode: &PackMode,
    mut canvas: C,
) -> Result<C::Output, LabelError> {
    page.validate()?;
    let batch = Batch::expand(configs, page, mode)?;
    let mut packer = packer_for(&batch, page, mode)?;

    info!(
        configs = configs.len(),
        labels = batch.total(),
        flow = mode.is_flow(),
        "laying out label sheet"
    );

    let mut opened: Option<usize> = None;
    for job in batch.jobs() {
        let slot = packer.next_slot(job.size);
        while opened.is_none_or(|current| slot.page > current) {
            canvas.new_page();
            opened = Some(opened.map_or(0, |current| current + 1));
        }
        debug!(
            config = job.config_index,
            page = slot.page,
            x = slot.x,
            y = slot.y,
            "placing label"
        );

        for op in job.render() {
            canvas.draw(&op.translate(slot.x, slot.y));
        }
    }

    canvas.finish()
}

/// One placed label, as reported by [`plan`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedSlot {
    pub config_index: usize,
    pub template: &'static str,
    #[serde(flatten)]
    pub slot: Slot,
}

/// Placement of a whole batch, computed without drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetLayout {
    pub pages: usize,
    pub slots: Vec<PlacedSlot>,
}

/// Compute where every label would go.
pub fn plan(configs: &[LabelConfig], page: &PageSpec, mode: &PackMode) -> Result<SheetLayout, LabelError> {
    page.validate()?;
    let batch = Batch::expand(configs, page, mode)?;
    let mut packer = packer_for(&batch, page, mode)?;

    let slots: Vec<PlacedSlot> = batch
        .jobs()
        .map(|job| PlacedSlot {
            config_index: job.config_index,
            template: job.template.tag,
            slot: packer.next_slot(job.size),
        })
        .collect();
    let pages = slots.last().map_or(0, |placed| placed.slot.page + 1);

    Ok(SheetLayout { pages, slots })
}

/// Page and packing settings for rendering documents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sheet {
    pub page: PageSpec,
    pub mode: ModeChoice,
    pub spacing: f32,
}

impl Default for Sheet {
    fn default() -> Self {
        Self {
            page: PageSpec::LETTER,
            mode: ModeChoice::Auto,
            spacing: DEFAULT_SPACING,
        }
    }
}

impl Sheet {
    pub fn new(page: PageSpec, mode: ModeChoice, spacing: f32) -> Self {
        Self { page, mode, spacing }
    }

    /// Same settings with a different mode.
    pub fn with_mode(self, mode: ModeChoice) -> Self {
        Self { mode, ..self }
    }

    /// The concrete mode this sheet uses for `configs`.
    pub fn pack_mode(&self, configs: &[LabelConfig]) -> PackMode {
        choose_mode(self.mode, configs, &self.page, self.spacing)
    }

    /// Placement only.
    pub fn plan(&self, configs: &[LabelConfig]) -> Result<SheetLayout, LabelError> {
        plan(configs, &self.page, &self.pack_mode(configs))
    }

    /// Render `configs` to PDF bytes.
    pub fn render_pdf(&self, configs: &[LabelConfig]) -> Result<Vec<u8>, LabelError> {
        let mode = self.pack_mode(configs);
        let canvas = PdfCanvas::new("Labels", self.page, Vec::new())?;
        let bytes = layout_and_render(configs, &self.page, &mode, canvas)?;
        info!(bytes = bytes.len(), "label sheet rendered");
        Ok(bytes)
    }
}
