//! # Canvas Abstraction
//!
//! A canvas is where draw ops end up. The sheet assembler opens pages and
//! hands each op (already in page coordinates) to the canvas, then calls
//! [`Canvas::finish`] to get the output.
//!
//! | Canvas | Output | Use |
//! |--------|--------|-----|
//! | [`RecordingCanvas`] | [`Recording`] (ops per page) | tests, layout inspection |
//! | [`PdfCanvas`] | the sink with a PDF written into it | documents |
//!
//! `finish` takes the canvas by value. A canvas dropped without `finish`
//! (because layout failed part-way) produces nothing.

pub mod pdf;

pub use pdf::PdfCanvas;

use crate::error::LabelError;
use crate::ir::DrawOp;

/// A drawing surface made of pages.
pub trait Canvas {
    type Output;

    /// Start a new page; subsequent draws land on it.
    fn new_page(&mut self);

    /// Draw one op on the current page.
    fn draw(&mut self, op: &DrawOp);

    /// Flush everything and return the output.
    fn finish(self) -> Result<Self::Output, LabelError>;
}

/// Ops captured per page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recording {
    pub pages: Vec<Vec<DrawOp>>,
}

impl Recording {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All ops across pages, in draw order.
    pub fn ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.pages.iter().flatten()
    }

    /// Text of every text op on `page`.
    pub fn texts_on(&self, page: usize) -> Vec<&str> {
        self.pages
            .get(page)
            .map(|ops| ops.iter().filter_map(DrawOp::as_text).collect())
            .unwrap_or_default()
    }
}

/// Canvas that keeps every op in memory.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    recording: Recording,
    /// Ops drawn before any page was opened.
    orphans: usize,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Canvas for RecordingCanvas {
    type Output = Recording;

    fn new_page(&mut self) {
        self.recording.pages.push(Vec::new());
    }

    fn draw(&mut self, op: &DrawOp) {
        match self.recording.pages.last_mut() {
            Some(page) => page.push(op.clone()),
            None => self.orphans += 1,
        }
    }

    fn finish(self) -> Result<Recording, LabelError> {
        if self.orphans > 0 {
            return Err(LabelError::Render(format!(
                "{} ops drawn before the first page was opened",
                self.orphans
            )));
        }
        Ok(self.recording)
    }
}
