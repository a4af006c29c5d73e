use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Order processing states; orders are created as `New`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    New,
    Received,
    Processing,
    Complete,
}

/// One order entry: a quantity plus a full product snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub count: i32,
    pub product: Product,
}

/// Order produced from a submitted cart.
///
/// A derived value: only ever built from a non-empty cart. Persisting it
/// is the orders service's concern, not this crate's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub title: String,
    pub for_user: String,
    pub amount: f64,
    pub status: OrderStatus,
    pub line_items: Vec<LineItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_names_are_lowercase() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::New).unwrap(),
            "\"new\""
        );
        let status: OrderStatus = serde_json::from_str("\"processing\"").unwrap();
        assert_eq!(status, OrderStatus::Processing);
    }

    #[test]
    fn order_wire_names_are_camel_case() {
        let order = Order {
            id: "order-01".to_string(),
            title: "Order for ann".to_string(),
            for_user: "ann".to_string(),
            amount: 12.34,
            status: OrderStatus::New,
            line_items: vec![],
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["forUser"], "ann");
        assert_eq!(json["lineItems"], serde_json::json!([]));
        assert_eq!(json["status"], "new");
    }
}
