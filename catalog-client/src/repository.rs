//! Product repository
//!
//! Translates page/limit/category parameters into API calls and maps the
//! replies into domain records. Failures are logged and propagated as-is;
//! retrying is left to the caller.

use async_trait::async_trait;
use shared::models::{skip_for_page, Category, Product, ProductPage};

use crate::api::ProductApi;
use crate::http::HttpClient;
use crate::mapper::{map_category, map_product, map_product_list};
use crate::{ClientError, ClientResult};

/// Default page size of the product listing
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// Read access to the product catalog
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch one page of products, optionally restricted to a category.
    ///
    /// `page` is 1-based; both `page` and `limit` must be positive.
    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        category: Option<&str>,
    ) -> ClientResult<ProductPage>;

    async fn fetch_categories(&self) -> ClientResult<Vec<Category>>;

    /// Fetch a single product; an unknown id yields [`ClientError::NotFound`]
    async fn fetch_by_id(&self, id: u64) -> ClientResult<Product>;
}

/// Repository backed by the remote catalog API
#[derive(Debug, Clone)]
pub struct RemoteProductRepository<H> {
    api: ProductApi<H>,
}

impl<H: HttpClient> RemoteProductRepository<H> {
    pub fn new(api: ProductApi<H>) -> Self {
        Self { api }
    }

    pub fn from_http(http: H) -> Self {
        Self::new(ProductApi::new(http))
    }
}

#[async_trait]
impl<H: HttpClient> ProductRepository for RemoteProductRepository<H> {
    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        category: Option<&str>,
    ) -> ClientResult<ProductPage> {
        if page == 0 || limit == 0 {
            return Err(ClientError::InvalidRequest(format!(
                "page and limit must be positive (page={page}, limit={limit})"
            )));
        }

        let skip = skip_for_page(page, limit);
        // A blank name is no category filter
        let category = category.filter(|c| !c.trim().is_empty());
        let result = match category {
            Some(category) => self.api.get_products_by_category(category, limit, skip).await,
            None => self.api.get_products(limit, skip).await,
        };
        let mut response = result.inspect_err(|e| {
            tracing::error!(page, limit, category = ?category, error = %e, "Products request error");
        })?;

        // Empty listings come back with limit=0
        if response.limit == 0 {
            tracing::debug!(page, limit, "Backend echoed limit=0, using requested page size");
            response.limit = limit;
        }

        Ok(map_product_list(&response))
    }

    async fn fetch_categories(&self) -> ClientResult<Vec<Category>> {
        let response = self.api.get_categories().await.inspect_err(|e| {
            tracing::error!(error = %e, "Category request error");
        })?;

        Ok(response.iter().map(map_category).collect())
    }

    async fn fetch_by_id(&self, id: u64) -> ClientResult<Product> {
        let response = self.api.get_product_by_id(id).await.inspect_err(|e| {
            tracing::error!(id, error = %e, "Product request failed");
        })?;

        Ok(map_product(&response))
    }
}
