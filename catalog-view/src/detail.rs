//! Product detail controller
//!
//! Loads one product at a time. Products that were loaded once are kept in
//! a per-controller cache so navigating back and forth does not refetch them;
//! `refresh` bypasses the cache.

use std::collections::HashMap;
use std::sync::Arc;

use catalog_client::{ClientError, ProductRepository};
use parking_lot::Mutex;
use shared::models::Product;
use tokio::sync::watch;

use crate::retry::with_retries;

/// What the detail screen shows
#[derive(Debug, Clone, Default)]
pub enum DetailState {
    /// No product selected
    #[default]
    Idle,
    Loading { id: u64 },
    Loaded(Product),
    Failed { id: u64, error: Arc<ClientError> },
}

impl DetailState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            Self::Loaded(product) => Some(product),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            Self::Failed { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct DetailInner {
    selected: Option<u64>,
    generation: u64,
    cache: HashMap<u64, Product>,
}

/// View-state controller of the product detail screen
pub struct ProductDetailController {
    repository: Arc<dyn ProductRepository>,
    retry_count: u32,
    inner: Mutex<DetailInner>,
    states: watch::Sender<DetailState>,
}

impl std::fmt::Debug for ProductDetailController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("ProductDetailController")
            .field("selected", &inner.selected)
            .field("cached", &inner.cache.len())
            .finish()
    }
}

impl ProductDetailController {
    pub fn new(repository: Arc<dyn ProductRepository>, retry_count: u32) -> Self {
        let (states, _) = watch::channel(DetailState::Idle);
        Self {
            repository,
            retry_count,
            inner: Mutex::new(DetailInner::default()),
            states,
        }
    }

    pub fn state(&self) -> DetailState {
        self.states.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<DetailState> {
        self.states.subscribe()
    }

    /// Show product `id`.
    ///
    /// Id 0 never names a product and clears the selection without a
    /// request. A cached product is shown without a request, and a product
    /// that is already loading is not requested twice.
    pub async fn load(&self, id: u64) {
        if id == 0 {
            let mut inner = self.inner.lock();
            inner.selected = None;
            inner.generation += 1;
            self.states.send_replace(DetailState::Idle);
            return;
        }

        let generation = {
            let mut inner = self.inner.lock();
            if inner.selected == Some(id) && self.states.borrow().is_loading() {
                tracing::debug!(id, "Product already loading");
                return;
            }
            inner.selected = Some(id);
            inner.generation += 1;
            if let Some(product) = inner.cache.get(&id) {
                tracing::debug!(id, "Product served from cache");
                self.states.send_replace(DetailState::Loaded(product.clone()));
                return;
            }
            self.states.send_replace(DetailState::Loading { id });
            inner.generation
        };

        self.fetch(id, generation).await;
    }

    /// Refetch the selected product, ignoring the cache
    pub async fn refresh(&self) {
        let (id, generation) = {
            let mut inner = self.inner.lock();
            let Some(id) = inner.selected else {
                return;
            };
            inner.generation += 1;
            self.states.send_replace(DetailState::Loading { id });
            (id, inner.generation)
        };

        self.fetch(id, generation).await;
    }

    async fn fetch(&self, id: u64, generation: u64) {
        let repository = &self.repository;
        let result = with_retries(
            "Product request",
            self.retry_count,
            || self.inner.lock().generation == generation,
            || repository.fetch_by_id(id),
        )
        .await;

        let mut inner = self.inner.lock();
        if inner.generation != generation {
            tracing::debug!(id, "Discarding stale product response");
            return;
        }

        let state = match result {
            Ok(product) => {
                inner.cache.insert(id, product.clone());
                DetailState::Loaded(product)
            }
            Err(e) => {
                tracing::error!(id, error = %e, "Failed to load product");
                DetailState::Failed {
                    id,
                    error: Arc::new(e),
                }
            }
        };
        self.states.send_replace(state);
    }
}
