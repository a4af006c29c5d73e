use serde::{Deserialize, Serialize};

/// Catalog product.
///
/// Embedded by value in order line items as a point-in-time snapshot, so
/// later catalog changes never alter past orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub cost: f64,
    pub description: String,
    pub image: String,
    pub on_offer: bool,
}
