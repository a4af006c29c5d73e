use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use common::Problem;
use models::{Cart, Order};

use super::checkout::build_order;
use super::CartService;
use crate::products::ProductLookup;
use crate::storage::StateStore;

/// Store-backed cart service; carts are keyed by username.
///
/// Mutations write the whole serialized cart back, last writer wins.
pub struct StateCartService {
    store: Arc<dyn StateStore>,
    store_name: String,
    service_name: String,
    products: Arc<dyn ProductLookup>,
}

impl StateCartService {
    pub fn new(
        store: Arc<dyn StateStore>,
        store_name: &str,
        service_name: &str,
        products: Arc<dyn ProductLookup>,
    ) -> Self {
        Self {
            store,
            store_name: store_name.to_string(),
            service_name: service_name.to_string(),
            products,
        }
    }

    async fn save_cart(&self, cart: &Cart) -> Result<(), Problem> {
        let value = serde_json::to_value(cart).map_err(|e| {
            Problem::from_error(
                "err://json-encode",
                "Cart could not be encoded",
                &self.service_name,
                &e,
            )
        })?;
        self.store
            .save_state(&self.store_name, &cart.for_user, value)
            .await
    }
}

#[async_trait]
impl CartService for StateCartService {
    #[instrument(skip(self))]
    async fn get(&self, username: &str) -> Result<Cart, Problem> {
        let data = self.store.get_state(&self.store_name, username).await?;
        if data.is_empty() {
            // First access creates the cart rather than failing.
            return Ok(Cart::new(username));
        }

        serde_json::from_slice(&data).map_err(|_| {
            Problem::new(
                "err://json-decode",
                "Malformed cart JSON",
                500,
                "JSON could not be decoded",
                &self.service_name,
            )
        })
    }

    #[instrument(skip(self, cart), fields(username = %cart.for_user))]
    async fn set_product_count(
        &self,
        cart: &mut Cart,
        product_id: &str,
        count: i32,
    ) -> Result<(), Problem> {
        if count < 0 {
            // Status stays 500 for wire compatibility with existing callers.
            return Err(Problem::new(
                "err://bad",
                "SetProductCount",
                500,
                "count can not be negative",
                &self.service_name,
            ));
        }
        if count == 0 {
            cart.products.remove(product_id);
        } else {
            cart.products.insert(product_id.to_string(), count);
        }
        self.save_cart(cart).await
    }

    #[instrument(skip(self, cart), fields(username = %cart.for_user))]
    async fn submit(&self, cart: &mut Cart) -> Result<Order, Problem> {
        if cart.is_empty() {
            return Err(Problem::new(
                "err://bad",
                "Cart empty",
                400,
                "Cart empty",
                &self.service_name,
            ));
        }

        let order = build_order(cart, self.products.as_ref()).await?;
        cart.products.clear();
        self.save_cart(cart).await?;
        info!(order_id = %order.id, username = %cart.for_user, "cart submitted");
        Ok(order)
    }

    #[instrument(skip(self, cart), fields(username = %cart.for_user))]
    async fn clear(&self, cart: &mut Cart) -> Result<(), Problem> {
        cart.products.clear();
        self.save_cart(cart).await
    }
}
