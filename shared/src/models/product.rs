//! Product Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::price;

/// Stock availability derived from the backend's free-text status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductAvailability {
    InStock,
    LowStock,
    OutOfStock,
}

impl ProductAvailability {
    /// Parse a status string such as `"In Stock"` or `"low stock"`.
    ///
    /// Matching is case-insensitive; anything unrecognised is treated as
    /// out of stock.
    pub fn from_status(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "in stock" => Self::InStock,
            "low stock" => Self::LowStock,
            _ => Self::OutOfStock,
        }
    }

    /// Whether the product can currently be ordered
    pub fn is_available(&self) -> bool {
        !matches!(self, Self::OutOfStock)
    }
}

/// Date attached to a review.
///
/// Review dates arrive as strings; one that cannot be parsed is kept as
/// `Invalid` so the presentation can decide how to show it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ReviewDate {
    Parsed(DateTime<Utc>),
    Invalid(String),
}

impl ReviewDate {
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Parsed(dt) => Some(dt),
            Self::Invalid(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Parsed(_))
    }
}

/// Customer review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductReview {
    pub rating: f64,
    pub comment: String,
    pub date: ReviewDate,
    pub reviewer_name: String,
}

/// Package dimensions as reported by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// Shipping and after-sales information shown on the detail screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingDetails {
    pub weight: f64,
    pub dimensions: Dimensions,
    pub warranty_information: String,
    pub shipping_information: String,
    pub return_policy: String,
    pub minimum_order_quantity: u32,
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Category name, as used by the category filter
    pub category: String,
    /// Empty when the backend does not report a brand
    pub brand: String,
    pub sku: String,
    pub tags: Vec<String>,
    /// Price before discount
    pub original_price: f64,
    /// Price after discount, rounded to 2 decimals
    pub final_price: f64,
    /// Discount in percentage (e.g., 25.0 = 25%)
    pub discount_percentage: f64,
    pub has_discount: bool,
    pub rating: f64,
    pub average_rating: f64,
    pub stock: u32,
    pub availability: ProductAvailability,
    pub reviews: Vec<ProductReview>,
    pub thumbnail: String,
    /// Gallery images, in display order
    pub images: Vec<String>,
    pub shipping: ShippingDetails,
}

impl Product {
    /// Amount saved by the discount
    pub fn savings(&self) -> f64 {
        price::round_to_cents(self.original_price - self.final_price)
    }
}
