use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use common::Problem;
use models::{Cart, Order};

use super::checkout::build_order;
use super::CartService;
use crate::products::ProductLookup;
use crate::users::mock::DEMO_USER;

const INSTANCE: &str = "mock-cart";

/// In-memory cart service seeded with an empty cart for the demo user.
///
/// Carts live in an instance-owned map, so separate mocks never interfere.
/// Validation rules and problem shapes match the store-backed strategy
/// exactly.
pub struct MockCartService {
    carts: Mutex<HashMap<String, Cart>>,
    products: Arc<dyn ProductLookup>,
}

impl MockCartService {
    pub fn new(products: Arc<dyn ProductLookup>) -> Self {
        let mut carts = HashMap::new();
        carts.insert(DEMO_USER.to_string(), Cart::new(DEMO_USER));
        Self {
            carts: Mutex::new(carts),
            products,
        }
    }

    fn remember(&self, cart: &Cart) {
        let mut carts = self.carts.lock().unwrap();
        carts.insert(cart.for_user.clone(), cart.clone());
    }
}

#[async_trait]
impl CartService for MockCartService {
    async fn get(&self, username: &str) -> Result<Cart, Problem> {
        let carts = self.carts.lock().unwrap();
        Ok(carts
            .get(username)
            .cloned()
            .unwrap_or_else(|| Cart::new(username)))
    }

    async fn set_product_count(
        &self,
        cart: &mut Cart,
        product_id: &str,
        count: i32,
    ) -> Result<(), Problem> {
        if count < 0 {
            return Err(Problem::new(
                "err://bad",
                "SetProductCount",
                500,
                "count can not be negative",
                INSTANCE,
            ));
        }
        if count == 0 {
            cart.products.remove(product_id);
        } else {
            cart.products.insert(product_id.to_string(), count);
        }
        self.remember(cart);
        Ok(())
    }

    async fn submit(&self, cart: &mut Cart) -> Result<Order, Problem> {
        if cart.is_empty() {
            return Err(Problem::new(
                "err://bad",
                "Cart empty",
                400,
                "Cart empty",
                INSTANCE,
            ));
        }

        let order = build_order(cart, self.products.as_ref()).await?;
        cart.products.clear();
        self.remember(cart);
        Ok(order)
    }

    async fn clear(&self, cart: &mut Cart) -> Result<(), Problem> {
        cart.products.clear();
        self.remember(cart);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::MockProductLookup;

    fn mock() -> MockCartService {
        MockCartService::new(Arc::new(MockProductLookup::new()))
    }

    #[tokio::test]
    async fn unknown_user_gets_fresh_empty_cart() -> Result<(), anyhow::Error> {
        let svc = mock();
        let cart = svc.get("someone-else@example.net").await?;
        assert_eq!(cart.for_user, "someone-else@example.net");
        assert!(cart.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn mutations_persist_within_an_instance() -> Result<(), anyhow::Error> {
        let svc = mock();
        let mut cart = svc.get(DEMO_USER).await?;
        svc.set_product_count(&mut cart, "1", 3).await?;

        let again = svc.get(DEMO_USER).await?;
        assert_eq!(again.products.get("1"), Some(&3));
        Ok(())
    }
}
