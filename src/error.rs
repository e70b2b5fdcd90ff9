//! # Error Types
//!
//! This module defines error types used throughout the labelsheet library.

use thiserror::Error;

/// Main error type for label layout and rendering.
#[derive(Debug, Error)]
pub enum LabelError {
    /// A label configuration or page setup that cannot be laid out.
    /// Raised before any drawing starts; the whole batch is rejected.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Template tag not present in the design registry.
    #[error("Unknown label template '{0}'")]
    UnknownVariant(String),

    /// Logo payload could not be decoded.
    #[error("Asset error: {0}")]
    Asset(String),

    /// The document backend failed to produce output.
    #[error("Render error: {0}")]
    Render(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LabelError {
    /// Whether this error was caused by the request rather than the system.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            LabelError::Configuration(_) | LabelError::UnknownVariant(_) | LabelError::Json(_)
        )
    }
}
