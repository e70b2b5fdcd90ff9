//! HTTP handlers for the server.

pub mod health;
pub mod labels;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{error, warn};

use crate::error::LabelError;

/// A [`LabelError`] turned into a JSON error response.
///
/// Request problems map to 400, everything else to 500.
#[derive(Debug)]
pub struct ApiError(pub LabelError);

impl From<LabelError> for ApiError {
    fn from(e: LabelError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            warn!(error = %self.0, "rejected label request");
            StatusCode::BAD_REQUEST
        } else {
            error!(error = %self.0, "label request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
