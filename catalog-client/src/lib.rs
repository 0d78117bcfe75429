//! Catalog Client - HTTP client for the product catalog API
//!
//! Provides the transport, the typed endpoints, the wire → domain mappers and
//! the [`ProductRepository`] facade the view layer depends on.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod mapper;
pub mod repository;
pub mod response;

pub use api::ProductApi;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{ApiRequest, HttpClient, NetworkHttpClient};
pub use repository::{ProductRepository, RemoteProductRepository, DEFAULT_PAGE_SIZE};

// Re-export shared types for convenience
pub use shared::models::{Category, Product, ProductAvailability, ProductPage, ProductReview};
