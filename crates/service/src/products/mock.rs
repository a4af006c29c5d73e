use std::collections::HashMap;

use async_trait::async_trait;

use common::Problem;
use models::Product;

use super::ProductLookup;

const INSTANCE: &str = "mock-products";

/// In-memory catalog for tests and demos.
pub struct MockProductLookup {
    products: HashMap<String, Product>,
}

impl MockProductLookup {
    /// Catalog with a small fixed set of products.
    pub fn new() -> Self {
        Self::with_products(vec![
            Product {
                id: "1".to_string(),
                name: "Red T-Shirt".to_string(),
                cost: 9.99,
                description: "Classic red tee".to_string(),
                image: "red-tshirt.jpg".to_string(),
                on_offer: false,
            },
            Product {
                id: "2".to_string(),
                name: "Blue Hoodie".to_string(),
                cost: 24.5,
                description: "Warm zip-up hoodie".to_string(),
                image: "blue-hoodie.jpg".to_string(),
                on_offer: true,
            },
            Product {
                id: "4".to_string(),
                name: "Baseball Cap".to_string(),
                cost: 12.34,
                description: "Adjustable cotton cap".to_string(),
                image: "baseball-cap.jpg".to_string(),
                on_offer: false,
            },
        ])
    }

    /// Catalog seeded with exactly `products`.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }
}

impl Default for MockProductLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductLookup for MockProductLookup {
    async fn get_product(&self, product_id: &str) -> Result<Product, Problem> {
        self.products.get(product_id).cloned().ok_or_else(|| {
            Problem::new(
                "err://not-found",
                "Product not found",
                404,
                &format!("Product: '{product_id}' not found"),
                INSTANCE,
            )
        })
    }
}
