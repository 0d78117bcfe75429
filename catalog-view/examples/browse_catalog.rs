// catalog-view/examples/browse_catalog.rs
// Browse the catalog from the terminal

use catalog_view::{CatalogContext, ClientConfig, FetchStatus, init_logger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_logger("info", false)?;

    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("Usage: {} [category] [max_pages]", args[0]);
        println!("  Example: {} beauty 2", args[0]);
        println!("  Backend: CATALOG_BASE_URL (default https://dummyjson.com)");
        return Ok(());
    }
    let category = args.get(1).cloned();
    let max_pages: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(2);

    let config = ClientConfig::from_env();
    let context = CatalogContext::new(&config)?;
    let list = context.product_list();

    list.load_categories().await;
    let snapshot = list.snapshot();
    match (&snapshot.categories, &snapshot.categories_error) {
        (Some(categories), _) => {
            let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
            tracing::info!("Categories: {}", names.join(", "));
        }
        (None, Some(e)) => tracing::error!("Failed to load categories: {}", e),
        (None, None) => {}
    }

    if category.is_some() {
        list.select_category(category).await;
    } else {
        list.load_next_page().await;
    }

    for _ in 1..max_pages {
        if list.status() != FetchStatus::Idle {
            break;
        }
        list.load_next_page().await;
    }

    let snapshot = list.snapshot();
    if let Some(e) = &snapshot.error {
        tracing::error!("Listing failed: {}", e);
    }
    println!(
        "{} products, page {}/{} ({:?})",
        snapshot.products.len(),
        snapshot.current_page,
        snapshot.total_pages,
        snapshot.status
    );
    for product in &snapshot.products {
        let price = if product.has_discount {
            format!("{:.2} (was {:.2})", product.final_price, product.original_price)
        } else {
            format!("{:.2}", product.final_price)
        };
        println!("  #{:<4} {:<40} {:>20}  {:?}", product.id, product.title, price, product.availability);
    }

    // Show the first product in full
    if let Some(first) = snapshot.products.first() {
        let detail = context.product_detail();
        detail.load(first.id).await;
        match detail.state().product() {
            Some(product) => {
                println!("\n{} by {}", product.title, product.brand);
                println!("  {}", product.description);
                println!(
                    "  rating {:.1} ({} reviews, average {:.1})",
                    product.rating,
                    product.reviews.len(),
                    product.average_rating
                );
                println!("  {}", product.shipping.shipping_information);
            }
            None => {
                if let Some(e) = detail.state().error() {
                    tracing::error!("Failed to load product {}: {}", first.id, e);
                }
            }
        }
    }

    Ok(())
}
