//! Paged product listings

use serde::{Deserialize, Serialize};

use super::Product;

/// Offset of the first item of a 1-based `page`
///
/// `skip = (page - 1) * limit`; page 0 is treated as page 1.
pub fn skip_for_page(page: u32, limit: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(limit)
}

/// 1-based page number containing the item at offset `skip`
///
/// # Panics
///
/// Panics if `limit` is zero.
pub fn current_page(skip: u64, limit: u32) -> u32 {
    let page = skip / u64::from(limit) + 1;
    u32::try_from(page).unwrap_or(u32::MAX)
}

/// Number of pages needed for `total` items
///
/// # Panics
///
/// Panics if `limit` is zero.
pub fn total_pages(total: u64, limit: u32) -> u32 {
    u32::try_from(total.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
}

/// One page of a product listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    /// Total number of products across all pages
    pub total: u64,
    /// Page size the page was requested with
    pub limit: u32,
    /// 1-based page number
    pub current_page: u32,
    pub total_pages: u32,
}

impl ProductPage {
    /// Build a page from the offsets reported by the backend
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero; callers must substitute a positive page
    /// size before building the page.
    pub fn from_offsets(products: Vec<Product>, total: u64, skip: u64, limit: u32) -> Self {
        Self {
            products,
            total,
            limit,
            current_page: current_page(skip, limit),
            total_pages: total_pages(total, limit),
        }
    }

    /// Whether another page follows this one
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether this page is the last one (or the listing is empty)
    pub fn is_last(&self) -> bool {
        !self.has_next_page()
    }
}
