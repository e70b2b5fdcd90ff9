//! # Label Configurations
//!
//! The JSON shape of one label design plus its repeat count. Field names from
//! the original Spanish frontend are accepted as aliases, so both of these
//! describe the same label:
//!
//! ```json
//! { "template": "oval", "quantity": 3, "price": "99.00", "color": "green" }
//! { "diseño": "ovalado", "cantidad": 3, "precio": "99.00", "colorPrecio": "verde" }
//! ```
//!
//! The content kind is inferred from the fields present: a `title` makes a
//! display label, a `price` makes a price label.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::LabelError;

fn default_quantity() -> i64 {
    1
}

/// One label design and how many copies of it to place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelConfig {
    /// Template tag or alias (see [`crate::templates`]).
    #[serde(alias = "design", alias = "diseño", alias = "diseno")]
    pub template: String,

    /// Number of copies. Signed so that bad input surfaces as a validation
    /// error rather than a parse error.
    #[serde(default = "default_quantity", alias = "cantidad")]
    pub quantity: i64,

    #[serde(flatten)]
    pub content: LabelContent,

    #[serde(default, skip_serializing_if = "Option::is_none", alias = "fuente")]
    pub font: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "colorPrecio",
        alias = "price_color"
    )]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none", alias = "borderColor")]
    pub border_color: Option<String>,
}

/// What a label shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelContent {
    /// Exhibition label: a title and a list of spec bullets.
    Display {
        #[serde(alias = "titulo")]
        title: String,
        #[serde(default, alias = "especificaciones", alias = "specs")]
        bullets: Vec<String>,
    },

    /// Price label, optionally with a struck-through original price.
    Price {
        #[serde(
            alias = "precio",
            alias = "precioDescuento",
            alias = "discount_price",
            deserialize_with = "string_or_number"
        )]
        price: String,
        #[serde(
            default,
            skip_serializing_if = "Option::is_none",
            alias = "precioOriginal",
            deserialize_with = "opt_string_or_number"
        )]
        original_price: Option<String>,
        /// Data URL or bare base64 image.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        logo: Option<String>,
    },
}

impl LabelContent {
    /// Lines of content, used to size flow-mode labels.
    pub fn line_count(&self) -> usize {
        match self {
            LabelContent::Display { bullets, .. } => 1 + bullets.len(),
            LabelContent::Price {
                original_price: Some(_),
                ..
            } => 2,
            LabelContent::Price { .. } => 1,
        }
    }

    /// Reject content with nothing to print.
    pub fn validate(&self) -> Result<(), LabelError> {
        match self {
            LabelContent::Display { title, .. } if title.trim().is_empty() => Err(
                LabelError::Configuration("display label needs a non-empty title".into()),
            ),
            LabelContent::Price { price, .. } if price.trim().is_empty() => Err(
                LabelError::Configuration("price label needs a non-empty price".into()),
            ),
            _ => Ok(()),
        }
    }
}

/// Prices arrive as strings from forms but as numbers from scripts.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Text(String),
    Integer(i64),
    Decimal(f64),
}

impl From<RawPrice> for String {
    fn from(raw: RawPrice) -> Self {
        match raw {
            RawPrice::Text(s) => s,
            RawPrice::Integer(n) => n.to_string(),
            RawPrice::Decimal(n) => n.to_string(),
        }
    }
}

pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RawPrice::deserialize(deserializer).map(String::from)
}

pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawPrice>::deserialize(deserializer).map(|raw| raw.map(String::from))
}

/// Format a price for printing, adding the currency sign if missing.
pub fn format_price(price: &str) -> String {
    let price = price.trim();
    if price.starts_with('$') {
        price.to_string()
    } else {
        format!("${}", price)
    }
}
