use async_trait::async_trait;

use common::Problem;
use models::Product;

pub mod mock;

pub use mock::MockProductLookup;

/// Collaborator that resolves a product id to a full catalog snapshot.
///
/// Cart submission depends on this to build line items; the production
/// implementation lives with the products service.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Unknown ids are an `err://not-found` problem.
    async fn get_product(&self, product_id: &str) -> Result<Product, Problem>;
}
