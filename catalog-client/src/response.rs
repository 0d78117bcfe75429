//! Wire records returned by the catalog API
//!
//! These mirror the backend's JSON one to one. Fields the backend omits for
//! some products default instead of failing the whole page.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReviewResponse {
    pub rating: f64,
    #[serde(default)]
    pub comment: String,
    pub date: String,
    #[serde(default)]
    pub reviewer_name: String,
    #[serde(default)]
    pub reviewer_email: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDimensionsResponse {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductMetaResponse {
    pub created_at: String,
    pub updated_at: String,
    pub barcode: String,
    pub qr_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub price: f64,
    #[serde(default)]
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Missing for unbranded products
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub dimensions: ProductDimensionsResponse,
    #[serde(default)]
    pub warranty_information: String,
    #[serde(default)]
    pub shipping_information: String,
    #[serde(default)]
    pub availability_status: String,
    #[serde(default)]
    pub reviews: Vec<ProductReviewResponse>,
    #[serde(default)]
    pub return_policy: String,
    #[serde(default)]
    pub minimum_order_quantity: u32,
    #[serde(default)]
    pub meta: ProductMetaResponse,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    pub total: u64,
    pub skip: u64,
    pub limit: u32,
}

/// Category entry of `/products/categories`.
///
/// Current backends send objects; older ones send bare names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryResponse {
    Detailed {
        name: String,
        #[serde(default)]
        slug: Option<String>,
        #[serde(default)]
        url: Option<String>,
    },
    Name(String),
}

impl CategoryResponse {
    pub fn name(&self) -> &str {
        match self {
            Self::Detailed { name, .. } => name,
            Self::Name(name) => name,
        }
    }
}
