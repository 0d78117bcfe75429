//! Product list controller
//!
//! Owns the listing's scope (category and page size), the pages accumulated
//! for that scope and the fetch lifecycle. Every request is tagged with a
//! [`ScopeToken`] when it is issued; a reply whose token no longer matches
//! the listing is dropped, which is how a scope switch cancels requests
//! that are still in flight.
//!
//! The state lock is only taken inside the synchronous `begin_*` /
//! `complete_*` steps and never held across an `.await`.

use std::num::NonZeroU32;
use std::sync::Arc;

use catalog_client::{ClientError, ClientResult, ProductRepository, DEFAULT_PAGE_SIZE};
use parking_lot::Mutex;
use shared::models::{Category, Product, ProductPage};
use tokio::sync::watch;

use crate::retry::with_retries;
use crate::scope::{QueryScope, ScopeToken};
use crate::state::{FetchStatus, PageAccumulator, StaleResponse};

/// Retries per fetch before the listing goes to [`FetchStatus::Error`]
pub const DEFAULT_RETRY_COUNT: u32 = 3;

/// List controller settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    /// Page size used until `set_items_per_page` is called
    pub initial_limit: NonZeroU32,
    /// Extra attempts for a failed fetch
    pub retry_count: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            initial_limit: NonZeroU32::new(DEFAULT_PAGE_SIZE).unwrap_or(NonZeroU32::MIN),
            retry_count: DEFAULT_RETRY_COUNT,
        }
    }
}

/// Read-only view of the listing handed to the presentation
#[derive(Debug, Clone)]
pub struct ProductListSnapshot {
    /// Products of all accumulated pages, in page order
    pub products: Vec<Product>,
    /// `None` until the categories have been loaded
    pub categories: Option<Vec<Category>>,
    pub selected_category: Option<String>,
    pub status: FetchStatus,
    /// Page 1 is in flight (first load or refresh)
    pub is_loading: bool,
    pub is_refreshing: bool,
    pub is_fetching_next_page: bool,
    pub is_loading_categories: bool,
    pub error: Option<Arc<ClientError>>,
    pub categories_error: Option<Arc<ClientError>>,
    /// Last accumulated page; 1 (of 1) before the first page arrives
    pub current_page: u32,
    pub total_pages: u32,
    pub items_per_page: u32,
    pub has_next_page: bool,
}

/// A page request that has been issued but not yet applied
#[derive(Debug, Clone)]
struct PageFetch {
    token: ScopeToken,
    page: u32,
}

#[derive(Debug)]
struct ListState {
    scope: QueryScope,
    generation: u64,
    pages: PageAccumulator,
    status: FetchStatus,
    error: Option<Arc<ClientError>>,
    categories: Option<Vec<Category>>,
    categories_loading: bool,
    categories_error: Option<Arc<ClientError>>,
}

impl ListState {
    fn new(limit: NonZeroU32) -> Self {
        Self {
            scope: QueryScope::new(None, limit),
            generation: 0,
            pages: PageAccumulator::new(),
            status: FetchStatus::Idle,
            error: None,
            categories: None,
            categories_loading: false,
            categories_error: None,
        }
    }

    fn token(&self) -> ScopeToken {
        ScopeToken {
            scope: self.scope.clone(),
            generation: self.generation,
        }
    }

    fn is_current(&self, token: &ScopeToken) -> bool {
        token.is_current(&self.scope, self.generation)
    }

    /// Drop every accumulated page and start over at page 1
    fn reset(&mut self, status: FetchStatus) -> PageFetch {
        self.generation += 1;
        self.pages.clear();
        self.error = None;
        self.status = status;
        PageFetch {
            token: self.token(),
            page: 1,
        }
    }

    /// Status once nothing is in flight
    fn settled_status(&self) -> FetchStatus {
        if self.pages.is_exhausted() {
            FetchStatus::Exhausted
        } else {
            FetchStatus::Idle
        }
    }

    fn snapshot(&self) -> ProductListSnapshot {
        // Before the first page arrives the listing reads as page 1 of 1
        let (current_page, total_pages) = self
            .pages
            .last()
            .map_or((1, 1), |p| (p.current_page, p.total_pages));
        ProductListSnapshot {
            products: self.pages.products(),
            categories: self.categories.clone(),
            selected_category: self.scope.category.clone(),
            status: self.status,
            is_loading: matches!(
                self.status,
                FetchStatus::LoadingFirstPage | FetchStatus::Refreshing
            ),
            is_refreshing: self.status == FetchStatus::Refreshing,
            is_fetching_next_page: self.status == FetchStatus::LoadingNextPage,
            is_loading_categories: self.categories_loading,
            error: self.error.clone(),
            categories_error: self.categories_error.clone(),
            current_page,
            total_pages,
            items_per_page: self.scope.limit.get(),
            has_next_page: self.pages.has_next_page(),
        }
    }
}

/// View-state controller of the product list screen
pub struct ProductListController {
    repository: Arc<dyn ProductRepository>,
    config: ListConfig,
    state: Mutex<ListState>,
    snapshots: watch::Sender<ProductListSnapshot>,
}

impl std::fmt::Debug for ProductListController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ProductListController")
            .field("scope", &state.scope)
            .field("generation", &state.generation)
            .field("status", &state.status)
            .field("pages", &state.pages.pages().len())
            .finish()
    }
}

impl ProductListController {
    pub fn new(repository: Arc<dyn ProductRepository>, config: ListConfig) -> Self {
        let state = ListState::new(config.initial_limit);
        let (snapshots, _) = watch::channel(state.snapshot());
        Self {
            repository,
            config,
            state: Mutex::new(state),
            snapshots,
        }
    }

    /// Current view of the listing
    pub fn snapshot(&self) -> ProductListSnapshot {
        self.snapshots.borrow().clone()
    }

    /// Receive a fresh snapshot after every state transition
    pub fn subscribe(&self) -> watch::Receiver<ProductListSnapshot> {
        self.snapshots.subscribe()
    }

    pub fn status(&self) -> FetchStatus {
        self.state.lock().status
    }

    pub fn scope(&self) -> QueryScope {
        self.state.lock().scope.clone()
    }

    // ========== Actions ==========

    /// Switch the category filter and load page 1 of the new scope.
    ///
    /// Pages of the previous scope are discarded immediately; replies still
    /// in flight for it are dropped when they arrive.
    pub async fn select_category(&self, category: Option<String>) {
        let fetch = {
            let mut state = self.state.lock();
            // A blank name is no category filter
            let category = category.filter(|c| !c.trim().is_empty());
            tracing::debug!(from = ?state.scope.category, to = ?category, "Selecting category");
            state.scope.category = category;
            let fetch = state.reset(FetchStatus::LoadingFirstPage);
            self.publish(&state);
            fetch
        };
        self.run_page_fetch(fetch).await;
    }

    /// Load the page after the last accumulated one (page 1 when the
    /// listing is empty).
    ///
    /// Does nothing while a page is already in flight or once the last page
    /// has been reached.
    pub async fn load_next_page(&self) {
        if let Some(fetch) = self.begin_next_page() {
            self.run_page_fetch(fetch).await;
        }
    }

    /// Discard the accumulated pages of the current scope and reload page 1.
    ///
    /// A second refresh while one is in flight does nothing.
    pub async fn refresh(&self) {
        let fetch = {
            let mut state = self.state.lock();
            if state.status == FetchStatus::Refreshing {
                tracing::debug!("Refresh already in flight");
                return;
            }
            let fetch = state.reset(FetchStatus::Refreshing);
            self.publish(&state);
            fetch
        };
        self.run_page_fetch(fetch).await;
    }

    /// Change the page size.
    ///
    /// Pages of different sizes cannot be merged, so this resets the listing
    /// exactly like a category change. Setting the current size does nothing.
    pub async fn set_items_per_page(&self, limit: NonZeroU32) {
        let fetch = {
            let mut state = self.state.lock();
            if state.scope.limit == limit {
                return;
            }
            tracing::debug!(from = state.scope.limit.get(), to = limit.get(), "Changing page size");
            state.scope.limit = limit;
            let fetch = state.reset(FetchStatus::LoadingFirstPage);
            self.publish(&state);
            fetch
        };
        self.run_page_fetch(fetch).await;
    }

    /// Load the category list once.
    ///
    /// Does nothing while loading or after the categories were loaded; a
    /// failed load may be repeated.
    pub async fn load_categories(&self) {
        {
            let mut state = self.state.lock();
            if state.categories_loading || state.categories.is_some() {
                return;
            }
            state.categories_loading = true;
            state.categories_error = None;
            self.publish(&state);
        }

        let repository = &self.repository;
        let result = with_retries(
            "Categories request",
            self.config.retry_count,
            || true,
            || repository.fetch_categories(),
        )
        .await;

        let mut state = self.state.lock();
        state.categories_loading = false;
        match result {
            Ok(categories) => {
                tracing::debug!(count = categories.len(), "Categories loaded");
                state.categories = Some(categories);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load categories");
                state.categories_error = Some(Arc::new(e));
            }
        }
        self.publish(&state);
    }

    // ========== Internals ==========

    fn begin_next_page(&self) -> Option<PageFetch> {
        let mut state = self.state.lock();
        match state.status {
            FetchStatus::LoadingFirstPage
            | FetchStatus::LoadingNextPage
            | FetchStatus::Refreshing
            | FetchStatus::Exhausted => {
                tracing::debug!(status = ?state.status, "Next page not requested");
                return None;
            }
            FetchStatus::Idle | FetchStatus::Error => {}
        }

        if state.pages.is_exhausted() {
            state.status = FetchStatus::Exhausted;
            self.publish(&state);
            return None;
        }

        state.status = if state.pages.is_empty() {
            FetchStatus::LoadingFirstPage
        } else {
            FetchStatus::LoadingNextPage
        };
        state.error = None;
        let fetch = PageFetch {
            token: state.token(),
            page: state.pages.next_page_number(),
        };
        self.publish(&state);
        Some(fetch)
    }

    async fn run_page_fetch(&self, fetch: PageFetch) {
        tracing::debug!(scope = %fetch.token.scope, page = fetch.page, "Fetching page");
        let result = self.fetch_page(&fetch).await;
        self.complete_page(fetch, result);
    }

    async fn fetch_page(&self, fetch: &PageFetch) -> ClientResult<ProductPage> {
        let repository = &self.repository;
        let scope = &fetch.token.scope;
        with_retries(
            "Products request",
            self.config.retry_count,
            || self.state.lock().is_current(&fetch.token),
            || repository.fetch_page(fetch.page, scope.limit.get(), scope.category.as_deref()),
        )
        .await
    }

    fn complete_page(&self, fetch: PageFetch, result: ClientResult<ProductPage>) {
        let mut state = self.state.lock();

        if !state.is_current(&fetch.token) {
            let stale = StaleResponse::ScopeChanged {
                issued: fetch.token.generation,
                current: state.generation,
            };
            tracing::debug!(scope = %fetch.token.scope, page = fetch.page, reason = %stale, "Discarding stale response");
            return;
        }

        match result {
            Ok(page) => {
                let received = page.current_page;
                match state.pages.try_append(page) {
                    Ok(()) => {
                        state.error = None;
                        state.status = state.settled_status();
                        tracing::debug!(
                            scope = %state.scope,
                            page = received,
                            total_pages = state.pages.total_pages(),
                            status = ?state.status,
                            "Page accumulated"
                        );
                    }
                    Err(stale) => {
                        tracing::warn!(scope = %state.scope, reason = %stale, "Rejected stale page");
                        state.status = state.settled_status();
                    }
                }
            }
            Err(e) => {
                tracing::error!(scope = %state.scope, page = fetch.page, error = %e, "Page fetch failed");
                state.error = Some(Arc::new(e));
                state.status = FetchStatus::Error;
            }
        }

        self.publish(&state);
    }

    fn publish(&self, state: &ListState) {
        self.snapshots.send_replace(state.snapshot());
    }
}
