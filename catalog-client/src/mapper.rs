//! Wire record → domain record mapping
//!
//! All functions here are pure and total on decoded input.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use shared::models::{
    Category, Dimensions, Product, ProductAvailability, ProductPage, ProductReview, ReviewDate,
    ShippingDetails,
};
use shared::price;

use crate::response::{
    CategoryResponse, ProductListResponse, ProductResponse, ProductReviewResponse,
};

/// Map a product record.
///
/// Unknown availability statuses map to [`ProductAvailability::OutOfStock`].
pub fn map_product(res: &ProductResponse) -> Product {
    Product {
        id: res.id,
        title: res.title.clone(),
        description: res.description.clone(),
        category: res.category.clone(),
        brand: res.brand.clone().unwrap_or_default(),
        sku: res.sku.clone(),
        tags: res.tags.clone(),
        original_price: res.price,
        final_price: price::final_price(res.price, res.discount_percentage),
        discount_percentage: res.discount_percentage,
        has_discount: price::has_discount(res.discount_percentage),
        rating: res.rating,
        average_rating: res.rating,
        stock: res.stock,
        availability: ProductAvailability::from_status(&res.availability_status),
        reviews: res.reviews.iter().map(map_review).collect(),
        thumbnail: res.thumbnail.clone(),
        images: res.images.clone(),
        shipping: ShippingDetails {
            weight: res.weight,
            dimensions: Dimensions {
                width: res.dimensions.width,
                height: res.dimensions.height,
                depth: res.dimensions.depth,
            },
            warranty_information: res.warranty_information.clone(),
            shipping_information: res.shipping_information.clone(),
            return_policy: res.return_policy.clone(),
            minimum_order_quantity: res.minimum_order_quantity,
        },
    }
}

/// Map a listing response into a page.
///
/// `current_page` and `total_pages` are derived from `skip`, `limit` and
/// `total` only.
///
/// # Panics
///
/// Panics if `res.limit` is zero. Callers substitute the requested page
/// size when the backend echoes a zero limit.
pub fn map_product_list(res: &ProductListResponse) -> ProductPage {
    ProductPage::from_offsets(
        res.products.iter().map(map_product).collect(),
        res.total,
        res.skip,
        res.limit,
    )
}

/// Map a review; an unparseable date becomes [`ReviewDate::Invalid`].
pub fn map_review(res: &ProductReviewResponse) -> ProductReview {
    let date = match parse_review_date(&res.date) {
        Some(dt) => ReviewDate::Parsed(dt),
        None => {
            tracing::warn!(date = %res.date, reviewer = %res.reviewer_name, "Invalid review date");
            ReviewDate::Invalid(res.date.clone())
        }
    };

    ProductReview {
        rating: res.rating,
        comment: res.comment.clone(),
        date,
        reviewer_name: res.reviewer_name.clone(),
    }
}

pub fn map_category(res: &CategoryResponse) -> Category {
    Category::new(res.name())
}

/// RFC 3339, a naive date-time (UTC assumed) or a bare date (midnight UTC)
fn parse_review_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{ProductDimensionsResponse, ProductMetaResponse};
    use chrono::{Datelike, Timelike};

    fn product_response(price: f64, discount: f64, status: &str) -> ProductResponse {
        ProductResponse {
            id: 1,
            title: "Essence Mascara Lash Princess".into(),
            description: "Popular mascara".into(),
            category: "beauty".into(),
            price,
            discount_percentage: discount,
            rating: 4.94,
            stock: 5,
            tags: vec!["beauty".into(), "mascara".into()],
            brand: Some("Essence".into()),
            sku: "RCH45Q1A".into(),
            weight: 2.0,
            dimensions: ProductDimensionsResponse {
                width: 23.17,
                height: 14.43,
                depth: 28.01,
            },
            warranty_information: "1 month warranty".into(),
            shipping_information: "Ships in 1 month".into(),
            availability_status: status.into(),
            reviews: vec![ProductReviewResponse {
                rating: 2.0,
                comment: "Very unhappy with my purchase!".into(),
                date: "2024-05-23T08:56:21.618Z".into(),
                reviewer_name: "John Doe".into(),
                reviewer_email: "john.doe@x.dummyjson.com".into(),
            }],
            return_policy: "30 days return policy".into(),
            minimum_order_quantity: 24,
            meta: ProductMetaResponse::default(),
            thumbnail: "https://cdn.dummyjson.com/thumb.png".into(),
            images: vec!["https://cdn.dummyjson.com/1.png".into(), "https://cdn.dummyjson.com/2.png".into()],
        }
    }

    #[test]
    fn test_map_product_pricing() {
        let product = map_product(&product_response(100.0, 25.0, "In Stock"));
        assert_eq!(product.original_price, 100.0);
        assert_eq!(product.final_price, 75.0);
        assert!(product.has_discount);
        assert_eq!(product.savings(), 25.0);

        let product = map_product(&product_response(9.99, 0.0, "In Stock"));
        assert_eq!(product.final_price, 9.99);
        assert!(!product.has_discount);
    }

    #[test]
    fn test_map_product_availability() {
        let low = map_product(&product_response(1.0, 0.0, "Low Stock"));
        assert_eq!(low.availability, ProductAvailability::LowStock);

        let weird = map_product(&product_response(1.0, 0.0, "weird"));
        assert_eq!(weird.availability, ProductAvailability::OutOfStock);
    }

    #[test]
    fn test_map_product_fields() {
        let res = product_response(9.99, 7.17, "In Stock");
        let product = map_product(&res);
        assert_eq!(product.id, 1);
        assert_eq!(product.brand, "Essence");
        assert_eq!(product.average_rating, product.rating);
        assert_eq!(product.images, res.images);
        assert_eq!(product.shipping.minimum_order_quantity, 24);
        assert_eq!(product.shipping.dimensions.depth, 28.01);
        assert_eq!(product.reviews.len(), 1);
        assert_eq!(product.reviews[0].reviewer_name, "John Doe");
    }

    #[test]
    fn test_map_product_without_brand() {
        let mut res = product_response(1.0, 0.0, "In Stock");
        res.brand = None;
        assert_eq!(map_product(&res).brand, "");
    }

    #[test]
    fn test_map_product_list() {
        let res = ProductListResponse {
            products: vec![product_response(1.0, 0.0, "In Stock")],
            total: 95,
            skip: 90,
            limit: 30,
        };
        let page = map_product_list(&res);
        assert_eq!(page.current_page, 4);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total, 95);
        assert_eq!(page.limit, 30);
        assert_eq!(page.products.len(), 1);
        assert!(!page.has_next_page());
    }

    #[test]
    fn test_map_review_dates() {
        let mut res = product_response(1.0, 0.0, "In Stock").reviews.remove(0);
        let review = map_review(&res);
        let dt = review.date.as_datetime().unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 5, 23));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (8, 56, 21));

        res.date = "2024-05-23".into();
        let dt = *map_review(&res).date.as_datetime().unwrap();
        assert_eq!((dt.day(), dt.hour()), (23, 0));

        res.date = "2024-05-23T10:00:00".into();
        assert!(map_review(&res).date.is_valid());

        res.date = "yesterday".into();
        assert_eq!(map_review(&res).date, ReviewDate::Invalid("yesterday".into()));
    }

    #[test]
    fn test_map_category() {
        let res = CategoryResponse::Detailed {
            name: "Beauty".into(),
            slug: Some("beauty".into()),
            url: None,
        };
        assert_eq!(map_category(&res), Category::new("Beauty"));
        assert_eq!(map_category(&CategoryResponse::Name("laptops".into())).name, "laptops");
    }
}
