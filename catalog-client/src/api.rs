//! Catalog API endpoints

use crate::http::{ApiRequest, HttpClient};
use crate::response::{CategoryResponse, ProductListResponse, ProductResponse};
use crate::ClientResult;

/// `GET /products?limit={limit}&skip={skip}`
pub fn products_request(limit: u32, skip: u64) -> ApiRequest {
    ApiRequest::new(["products"])
        .query("limit", limit)
        .query("skip", skip)
}

/// `GET /products/categories`
pub fn categories_request() -> ApiRequest {
    ApiRequest::new(["products", "categories"])
}

/// `GET /products/category/{category}?limit={limit}&skip={skip}`
pub fn category_products_request(category: &str, limit: u32, skip: u64) -> ApiRequest {
    ApiRequest::new(["products", "category", category])
        .query("limit", limit)
        .query("skip", skip)
}

/// `GET /products/{id}`
pub fn product_request(id: u64) -> ApiRequest {
    ApiRequest::new(["products".to_string(), id.to_string()])
}

/// Typed access to the product endpoints of the catalog API
#[derive(Debug, Clone)]
pub struct ProductApi<H> {
    http: H,
}

impl<H: HttpClient> ProductApi<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &H {
        &self.http
    }

    pub async fn get_products(&self, limit: u32, skip: u64) -> ClientResult<ProductListResponse> {
        self.http.get(&products_request(limit, skip)).await
    }

    pub async fn get_categories(&self) -> ClientResult<Vec<CategoryResponse>> {
        self.http.get(&categories_request()).await
    }

    pub async fn get_products_by_category(
        &self,
        category: &str,
        limit: u32,
        skip: u64,
    ) -> ClientResult<ProductListResponse> {
        self.http
            .get(&category_products_request(category, limit, skip))
            .await
    }

    pub async fn get_product_by_id(&self, id: u64) -> ClientResult<ProductResponse> {
        self.http.get(&product_request(id)).await
    }
}
