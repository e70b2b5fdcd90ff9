//! # labelsheet - Printable Label Sheet Library
//!
//! labelsheet lays out shop labels (exhibition cards, price tags, discount
//! tags) on letter-size pages and renders them to PDF. It provides:
//!
//! - **Slot packing**: uniform grid or variable-width row packing
//! - **Design registry**: label templates as pure draw-op generators
//! - **Canvases**: PDF output and an in-memory recording for inspection
//! - **HTTP server**: JSON in, PDF out, for the label designer frontend
//!
//! ## Quick Start
//!
//! ```no_run
//! use labelsheet::label::LabelConfig;
//! use labelsheet::sheet::Sheet;
//!
//! let configs: Vec<LabelConfig> = serde_json::from_str(r#"[
//!     { "template": "oval", "quantity": 8, "price": "99.00", "original_price": "150.00" },
//!     { "template": "cool-panda-frame", "quantity": 3, "price": "45.50", "color": "blue" }
//! ]"#)?;
//!
//! let pdf = Sheet::default().render_pdf(&configs)?;
//! std::fs::write("labels.pdf", pdf)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`page`] | Page geometry, slots and packing modes |
//! | [`ir`] | Draw op vocabulary |
//! | [`label`] | Label configuration JSON |
//! | [`style`] | Font and color tables |
//! | [`asset`] | Logo decoding |
//! | [`templates`] | Design registry and renderers |
//! | [`layout`] | Fixed and flow slot packers |
//! | [`batch`] | Validation and job expansion |
//! | [`canvas`] | Canvas trait, recording and PDF canvases |
//! | [`sheet`] | Layout and render orchestration |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |

pub mod asset;
pub mod batch;
pub mod canvas;
pub mod error;
pub mod ir;
pub mod label;
pub mod layout;
pub mod page;
pub mod server;
pub mod sheet;
pub mod style;
pub mod templates;

// Re-exports for convenience
pub use error::LabelError;
pub use label::{LabelConfig, LabelContent};
pub use page::{ModeChoice, PackMode, PageSpec};
pub use sheet::{Sheet, layout_and_render};

/// Install the global `tracing` subscriber.
///
/// Honors `RUST_LOG`; defaults to `info`. Calling it twice is harmless.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}
