use async_trait::async_trait;

use common::Problem;
use models::{Cart, Order};

pub mod checkout;
pub mod mock;
pub mod service;

pub use mock::MockCartService;
pub use service::StateCartService;

/// Operations every cart-service strategy provides.
#[async_trait]
pub trait CartService: Send + Sync {
    /// Fetch the cart for `username`, creating a fresh empty one on first
    /// access. Never fails with not-found.
    async fn get(&self, username: &str) -> Result<Cart, Problem>;

    /// Set the quantity of a product in the cart. Zero removes the entry,
    /// negative counts are rejected. The mutated cart is persisted.
    async fn set_product_count(
        &self,
        cart: &mut Cart,
        product_id: &str,
        count: i32,
    ) -> Result<(), Problem>;

    /// Turn a non-empty cart into an order and reset the cart to empty.
    async fn submit(&self, cart: &mut Cart) -> Result<Order, Problem>;

    /// Reset the cart to empty. No precondition.
    async fn clear(&self, cart: &mut Cart) -> Result<(), Problem>;
}
