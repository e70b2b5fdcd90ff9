//! Server state and configuration.

use crate::page::{DEFAULT_SPACING, ModeChoice, PageSpec};
use crate::sheet::Sheet;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "0.0.0.0:3001")
    pub listen_addr: String,
    /// Sheet every document is laid out on.
    pub page: PageSpec,
    /// Gap between labels, in points.
    pub spacing: f32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3001".to_string(),
            page: PageSpec::LETTER,
            spacing: DEFAULT_SPACING,
        }
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    /// Sheet settings for a request, with the requested packing mode.
    pub fn sheet(&self, mode: ModeChoice) -> Sheet {
        Sheet::new(self.config.page, mode, self.config.spacing)
    }
}
