//! Data models
//!
//! Domain records produced by the catalog client and consumed by the
//! view-state controllers.

pub mod category;
pub mod page;
pub mod product;

// Re-exports
pub use category::*;
pub use page::*;
pub use product::*;
