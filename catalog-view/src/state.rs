//! Fetch status and page accumulation for the product listing

use shared::models::{Product, ProductPage};
use thiserror::Error;

/// Lifecycle of the product listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FetchStatus {
    /// Nothing in flight; more pages may follow
    #[default]
    Idle,
    /// Page 1 of a new scope is in flight
    LoadingFirstPage,
    /// The page after the last accumulated one is in flight
    LoadingNextPage,
    /// Page 1 is being refetched after the pages were discarded
    Refreshing,
    /// The last fetch failed; accumulated pages are kept
    Error,
    /// The last page has been accumulated
    Exhausted,
}

impl FetchStatus {
    /// Whether a page fetch is in flight
    pub fn is_fetching(&self) -> bool {
        matches!(
            self,
            Self::LoadingFirstPage | Self::LoadingNextPage | Self::Refreshing
        )
    }
}

/// A reply that must not touch the listing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StaleResponse {
    /// Issued before the last reset of the listing
    #[error("response issued in generation {issued}, listing is at generation {current}")]
    ScopeChanged { issued: u64, current: u64 },

    /// Page number does not continue the accumulated pages
    #[error("expected page {expected}, received page {received}")]
    OutOfSequence { expected: u32, received: u32 },
}

/// Pages of one scope, in page order
#[derive(Debug, Clone, Default)]
pub struct PageAccumulator {
    pages: Vec<ProductPage>,
}

impl PageAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[ProductPage] {
        &self.pages
    }

    pub fn last(&self) -> Option<&ProductPage> {
        self.pages.last()
    }

    /// Page number of the last accumulated page, 0 when empty
    pub fn current_page(&self) -> u32 {
        self.last().map_or(0, |p| p.current_page)
    }

    /// Page number the next append must carry
    pub fn next_page_number(&self) -> u32 {
        self.current_page() + 1
    }

    pub fn total_pages(&self) -> u32 {
        self.last().map_or(0, |p| p.total_pages)
    }

    pub fn has_next_page(&self) -> bool {
        self.last().is_some_and(ProductPage::has_next_page)
    }

    /// The last page has been reached (an empty listing counts once its
    /// first page arrived)
    pub fn is_exhausted(&self) -> bool {
        self.last().is_some_and(ProductPage::is_last)
    }

    /// Append `page` if it directly follows the last accumulated page
    pub fn try_append(&mut self, page: ProductPage) -> Result<(), StaleResponse> {
        let expected = self.next_page_number();
        if page.current_page != expected {
            return Err(StaleResponse::OutOfSequence {
                expected,
                received: page.current_page,
            });
        }
        self.pages.push(page);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.pages.clear();
    }

    /// All products, in page order
    pub fn products(&self) -> Vec<Product> {
        self.pages
            .iter()
            .flat_map(|p| p.products.iter().cloned())
            .collect()
    }

    pub fn product_count(&self) -> usize {
        self.pages.iter().map(|p| p.products.len()).sum()
    }
}
