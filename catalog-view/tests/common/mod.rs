// catalog-view/tests/common/mod.rs
// Scripted in-memory repository for controller tests

#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use catalog_view::{ClientError, ClientResult, ProductRepository};
use parking_lot::Mutex;
use shared::models::{Category, Product, ProductAvailability, ProductPage, ShippingDetails, skip_for_page};
use tokio::sync::oneshot;

/// Total products of the unfiltered listing
pub const ALL_TOTAL: u64 = 95;

pub fn product(id: u64, category: &str) -> Product {
    Product {
        id,
        title: format!("{category} #{id}"),
        description: String::new(),
        category: category.to_string(),
        brand: "Acme".to_string(),
        sku: format!("SKU-{id}"),
        tags: Vec::new(),
        original_price: 10.0,
        final_price: 10.0,
        discount_percentage: 0.0,
        has_discount: false,
        rating: 4.0,
        average_rating: 0.0,
        stock: 5,
        availability: ProductAvailability::InStock,
        reviews: Vec::new(),
        thumbnail: String::new(),
        images: Vec::new(),
        shipping: ShippingDetails::default(),
    }
}

/// Request key of a page fetch, e.g. `*/30#2` or `beauty/30#1`
pub fn page_key(category: Option<&str>, limit: u32, page: u32) -> String {
    format!("{}/{limit}#{page}", category.unwrap_or("*"))
}

pub fn product_key(id: u64) -> String {
    format!("product:{id}")
}

pub const CATEGORIES_KEY: &str = "categories";

/// A request held back until the test releases it
pub struct Gate {
    reached: oneshot::Receiver<()>,
    release: oneshot::Sender<()>,
}

impl Gate {
    /// Wait until the repository is serving the held request
    pub async fn reached(&mut self) {
        (&mut self.reached).await.unwrap();
    }

    pub fn release(self) {
        let _ = self.release.send(());
    }
}

struct HeldRequest {
    reached: oneshot::Sender<()>,
    release: oneshot::Receiver<()>,
}

/// Repository serving synthetic pages with scripted failures and delays.
///
/// The unfiltered listing has [`ALL_TOTAL`] products, `beauty` has 12,
/// `laptops` 20 and any other category none.
#[derive(Default)]
pub struct ScriptedRepository {
    calls: Mutex<Vec<String>>,
    failures: Mutex<HashMap<String, u32>>,
    held: Mutex<HashMap<String, HeldRequest>>,
    misnumbered: Mutex<HashMap<String, u32>>,
}

impl ScriptedRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_for(category: Option<&str>) -> u64 {
        match category {
            None => ALL_TOTAL,
            Some("beauty") => 12,
            Some("laptops") => 20,
            Some(_) => 0,
        }
    }

    /// Every request served so far, by key
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, key: &str) -> usize {
        self.calls.lock().iter().filter(|k| *k == key).count()
    }

    /// Fail the next `times` requests for `key` with a 503
    pub fn fail(&self, key: impl Into<String>, times: u32) {
        self.failures.lock().insert(key.into(), times);
    }

    /// Hold the next request for `key` until the returned gate is released
    pub fn hold(&self, key: impl Into<String>) -> Gate {
        let (reached_tx, reached_rx) = oneshot::channel();
        let (release_tx, release_rx) = oneshot::channel();
        self.held.lock().insert(
            key.into(),
            HeldRequest {
                reached: reached_tx,
                release: release_rx,
            },
        );
        Gate {
            reached: reached_rx,
            release: release_tx,
        }
    }

    /// Serve the page for `key` labelled as page `reported`
    pub fn misnumber(&self, key: impl Into<String>, reported: u32) {
        self.misnumbered.lock().insert(key.into(), reported);
    }

    async fn serve(&self, key: &str) -> ClientResult<()> {
        self.calls.lock().push(key.to_string());

        let held = self.held.lock().remove(key);
        if let Some(held) = held {
            let _ = held.reached.send(());
            let _ = held.release.await;
        }

        let mut failures = self.failures.lock();
        if let Some(remaining) = failures.get_mut(key)
            && *remaining > 0
        {
            *remaining -= 1;
            return Err(ClientError::Status {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ProductRepository for ScriptedRepository {
    async fn fetch_page(
        &self,
        page: u32,
        limit: u32,
        category: Option<&str>,
    ) -> ClientResult<ProductPage> {
        let key = page_key(category, limit, page);
        self.serve(&key).await?;

        let total = Self::total_for(category);
        let skip = skip_for_page(page, limit);
        let label = category.unwrap_or("all");
        let products = (skip..(skip + u64::from(limit)).min(total))
            .map(|i| product(i + 1, label))
            .collect();

        let mut result = ProductPage::from_offsets(products, total, skip, limit);
        if let Some(reported) = self.misnumbered.lock().remove(&key) {
            result.current_page = reported;
        }
        Ok(result)
    }

    async fn fetch_categories(&self) -> ClientResult<Vec<Category>> {
        self.serve(CATEGORIES_KEY).await?;
        Ok(vec![
            Category::new("beauty"),
            Category::new("laptops"),
            Category::new("empty"),
        ])
    }

    async fn fetch_by_id(&self, id: u64) -> ClientResult<Product> {
        self.serve(&product_key(id)).await?;
        if id > ALL_TOTAL {
            return Err(ClientError::NotFound(format!(
                "Product with id '{id}' not found"
            )));
        }
        Ok(product(id, "all"))
    }
}
