//! Catalog View - view-state controllers for the catalog browser
//!
//! [`ProductListController`] drives the paginated, category-filtered product
//! list; [`ProductDetailController`] drives the single-product screen. Both
//! publish their state through `tokio::sync::watch` channels.

pub mod context;
pub mod detail;
pub mod list;
pub mod logger;
pub mod retry;
pub mod scope;
pub mod state;

pub use context::CatalogContext;
pub use detail::{DetailState, ProductDetailController};
pub use list::{DEFAULT_RETRY_COUNT, ListConfig, ProductListController, ProductListSnapshot};
pub use logger::init_logger;
pub use scope::{QueryScope, ScopeToken};
pub use state::{FetchStatus, PageAccumulator, StaleResponse};

// Re-export client types for convenience
pub use catalog_client::{ClientConfig, ClientError, ClientResult, ProductRepository};
