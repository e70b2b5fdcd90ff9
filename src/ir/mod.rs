//! # Intermediate Representation (IR)
//!
//! Label renderers do not draw directly. They emit a list of [`DrawOp`]s,
//! which a [`Canvas`](crate::canvas::Canvas) later turns into real output.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────┐     ┌─────────────┐     ┌───────────┐     ┌──────────┐
//! │ Templates │ ──► │     IR      │ ──► │ Translate │ ──► │  Canvas  │
//! │ (pure fn) │     │(Vec<DrawOp>)│     │ (slot→pg) │     │(PDF, rec)│
//! └───────────┘     └─────────────┘     └───────────┘     └──────────┘
//! ```
//!
//! ## Benefits of IR
//!
//! 1. **Inspectable**: tests assert on ops without parsing a PDF
//! 2. **Pure renderers**: a template is a function of slot, content and style
//! 3. **Pluggable output**: any canvas can consume the same ops
//!
//! ## Example
//!
//! ```
//! use labelsheet::ir::{Color, DrawOp, Stroke};
//! use labelsheet::page::Rect;
//!
//! let border = DrawOp::Rect {
//!     rect: Rect::new(0.0, 0.0, 180.0, 240.0),
//!     radius: 0.0,
//!     stroke: Some(Stroke::new(Color::LIGHT_GRAY, 1.0)),
//!     fill: None,
//! };
//! let on_page = border.translate(20.0, 20.0);
//! assert!(matches!(on_page, DrawOp::Rect { rect, .. } if rect.x == 20.0));
//! ```

mod ops;
mod text;

pub use ops::*;
pub use text::wrap_text;
