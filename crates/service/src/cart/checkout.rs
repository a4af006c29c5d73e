//! Cart-to-order transformation, shared by every cart strategy.

use uuid::Uuid;

use common::Problem;
use models::{Cart, LineItem, Order, OrderStatus};

use crate::products::ProductLookup;

/// Build an order snapshot from a non-empty cart.
///
/// Every product id is resolved through `lookup`; any resolution failure
/// aborts the whole submission with that problem. Line items are emitted
/// in product-id order so equal carts produce identical orders apart from
/// the generated id.
pub async fn build_order(cart: &Cart, lookup: &dyn ProductLookup) -> Result<Order, Problem> {
    let mut entries: Vec<(&String, &i32)> = cart.products.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut line_items = Vec::with_capacity(entries.len());
    let mut amount = 0.0;
    for (product_id, &count) in entries {
        let product = lookup.get_product(product_id).await?;
        amount += product.cost * f64::from(count);
        line_items.push(LineItem { count, product });
    }

    Ok(Order {
        id: Uuid::new_v4().to_string(),
        title: format!("Order for {}", cart.for_user),
        for_user: cart.for_user.clone(),
        amount,
        status: OrderStatus::New,
        line_items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::products::MockProductLookup;

    #[tokio::test]
    async fn line_items_are_sorted_and_amount_summed() -> Result<(), anyhow::Error> {
        let lookup = MockProductLookup::new();
        let mut cart = Cart::new("ann@example.net");
        cart.products.insert("4".to_string(), 2);
        cart.products.insert("1".to_string(), 1);

        let order = build_order(&cart, &lookup).await?;
        assert_eq!(order.for_user, "ann@example.net");
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.line_items.len(), 2);
        assert_eq!(order.line_items[0].product.id, "1");
        assert_eq!(order.line_items[1].product.id, "4");
        assert!((order.amount - (9.99 + 2.0 * 12.34)).abs() < 1e-9);
        Ok(())
    }

    #[tokio::test]
    async fn unresolvable_product_fails_the_submission() {
        let lookup = MockProductLookup::with_products(vec![]);
        let mut cart = Cart::new("ann@example.net");
        cart.products.insert("1".to_string(), 1);

        let prob = build_order(&cart, &lookup).await.unwrap_err();
        assert_eq!(prob.type_uri, "err://not-found");
    }
}
