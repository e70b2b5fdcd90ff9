//! Label sheet handlers.
//!
//! | Endpoint | Body | Layout |
//! |----------|------|--------|
//! | `POST /api/labels/sheet` | any batch | requested mode (auto by default) |
//! | `POST /api/labels/layout` | any batch | JSON slots, no PDF |
//! | `POST /api/labels/exhibition` | title + specs | classic card, fixed grid |
//! | `POST /api/labels/stock` | price pair + logo | oval, fixed grid |
//! | `POST /api/labels/price-batch` | cart of price labels | auto |

use axum::{
    Json,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use super::ApiError;
use crate::error::LabelError;
use crate::label::{LabelConfig, LabelContent, opt_string_or_number, string_or_number};
use crate::page::ModeChoice;
use crate::sheet::{Sheet, SheetLayout};

use super::super::state::AppState;

/// A batch of labels with an optional packing mode.
#[derive(Debug, Deserialize)]
pub struct SheetRequest {
    #[serde(alias = "etiquetas")]
    pub labels: Vec<LabelConfig>,
    #[serde(default)]
    pub mode: ModeChoice,
}

/// Exhibition card request.
#[derive(Debug, Deserialize)]
pub struct ExhibitionRequest {
    #[serde(alias = "titulo")]
    pub title: String,
    #[serde(default, alias = "especificaciones")]
    pub specs: Vec<String>,
    #[serde(alias = "cantidad")]
    pub quantity: i64,
}

impl ExhibitionRequest {
    fn into_config(self) -> LabelConfig {
        LabelConfig {
            template: "classic-rect".to_string(),
            quantity: self.quantity,
            content: LabelContent::Display {
                title: self.title,
                bullets: self.specs,
            },
            font: None,
            color: Some("red".to_string()),
            border_color: None,
        }
    }
}

/// Stock label request: original and discounted price with a logo.
#[derive(Debug, Deserialize)]
pub struct StockRequest {
    #[serde(
        default,
        alias = "precioOriginal",
        deserialize_with = "opt_string_or_number"
    )]
    pub original_price: Option<String>,
    #[serde(alias = "precioDescuento", deserialize_with = "string_or_number")]
    pub discount_price: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(alias = "cantidad")]
    pub quantity: i64,
}

impl StockRequest {
    fn into_config(self) -> Result<LabelConfig, LabelError> {
        let logo = self
            .logo
            .filter(|logo| !logo.trim().is_empty())
            .ok_or_else(|| LabelError::Configuration("a logo is required".into()))?;

        Ok(LabelConfig {
            template: "oval".to_string(),
            quantity: self.quantity,
            content: LabelContent::Price {
                price: self.discount_price,
                original_price: self.original_price,
                logo: Some(logo),
            },
            font: None,
            color: Some("green".to_string()),
            border_color: None,
        })
    }
}

/// Cart of price labels from the price-label page.
#[derive(Debug, Deserialize)]
pub struct PriceBatchRequest {
    #[serde(alias = "etiquetas")]
    pub labels: Vec<LabelConfig>,
}

/// Render on a blocking thread and wrap the bytes as a PDF download.
async fn render_pdf(sheet: Sheet, configs: Vec<LabelConfig>, kind: &str) -> Result<Response, ApiError> {
    let labels = configs.len();
    let bytes = tokio::task::spawn_blocking(move || sheet.render_pdf(&configs))
        .await
        .map_err(|e| LabelError::Render(format!("render task failed: {}", e)))??;

    let filename = format!(
        "labels-{}-{}.pdf",
        kind,
        chrono::Utc::now().timestamp_millis()
    );
    info!(kind, labels, bytes = bytes.len(), %filename, "sending label sheet");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", filename),
            ),
        ],
        bytes,
    )
        .into_response())
}

/// Handle POST /api/labels/sheet - render any batch.
pub async fn sheet(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SheetRequest>,
) -> Result<Response, ApiError> {
    render_pdf(state.sheet(request.mode), request.labels, "sheet").await
}

/// Handle POST /api/labels/layout - slot placement as JSON.
pub async fn layout(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SheetRequest>,
) -> Result<Json<SheetLayout>, ApiError> {
    let sheet = state.sheet(request.mode);
    let layout = tokio::task::spawn_blocking(move || sheet.plan(&request.labels))
        .await
        .map_err(|e| LabelError::Render(format!("layout task failed: {}", e)))??;
    Ok(Json(layout))
}

/// Handle POST /api/labels/exhibition - exhibition cards.
pub async fn exhibition(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExhibitionRequest>,
) -> Result<Response, ApiError> {
    let config = request.into_config();
    render_pdf(state.sheet(ModeChoice::Fixed), vec![config], "exhibition").await
}

/// Handle POST /api/labels/stock - oval discount labels.
pub async fn stock(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StockRequest>,
) -> Result<Response, ApiError> {
    let config = request.into_config()?;
    render_pdf(state.sheet(ModeChoice::Fixed), vec![config], "stock").await
}

/// Handle POST /api/labels/price-batch - a cart of price labels.
pub async fn price_batch(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PriceBatchRequest>,
) -> Result<Response, ApiError> {
    render_pdf(state.sheet(ModeChoice::Auto), request.labels, "price").await
}
