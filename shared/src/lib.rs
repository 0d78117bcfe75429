//! Shared types for the catalog browser
//!
//! Domain records (products, categories, pages) and the pricing and
//! pagination arithmetic used across the client and view crates.

pub mod models;
pub mod price;

// Re-exports
pub use models::{
    Category, Dimensions, Product, ProductAvailability, ProductPage, ProductReview, ReviewDate,
    ShippingDetails,
};
pub use serde::{Deserialize, Serialize};
