//! Composition root
//!
//! Wires one repository into the list and detail controllers.

use std::sync::Arc;

use catalog_client::{ClientConfig, ClientResult, ProductRepository, RemoteProductRepository};

use crate::detail::ProductDetailController;
use crate::list::{ListConfig, ProductListController};

/// Shared repository plus the controllers built on it
pub struct CatalogContext {
    repository: Arc<dyn ProductRepository>,
    product_list: Arc<ProductListController>,
    product_detail: Arc<ProductDetailController>,
}

impl CatalogContext {
    /// Build a context talking to the backend described by `config`
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let http = config.build_http_client()?;
        tracing::info!(base_url = %config.base_url, timeout = ?config.timeout, "Catalog client ready");
        Ok(Self::with_repository(Arc::new(
            RemoteProductRepository::from_http(http),
        )))
    }

    pub fn with_repository(repository: Arc<dyn ProductRepository>) -> Self {
        Self::with_list_config(repository, ListConfig::default())
    }

    pub fn with_list_config(repository: Arc<dyn ProductRepository>, config: ListConfig) -> Self {
        let product_list = Arc::new(ProductListController::new(repository.clone(), config));
        let product_detail = Arc::new(ProductDetailController::new(
            repository.clone(),
            config.retry_count,
        ));
        Self {
            repository,
            product_list,
            product_detail,
        }
    }

    pub fn repository(&self) -> &Arc<dyn ProductRepository> {
        &self.repository
    }

    pub fn product_list(&self) -> Arc<ProductListController> {
        self.product_list.clone()
    }

    pub fn product_detail(&self) -> Arc<ProductDetailController> {
        self.product_detail.clone()
    }
}

impl std::fmt::Debug for CatalogContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogContext")
            .field("product_list", &self.product_list)
            .field("product_detail", &self.product_detail)
            .finish()
    }
}
