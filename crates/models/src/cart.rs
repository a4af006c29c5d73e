use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Shopping cart for a single user, keyed by username.
///
/// `products` maps product id to quantity. Stored quantities are always
/// positive: setting a quantity to zero removes the entry instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub for_user: String,
    #[serde(default)]
    pub products: HashMap<String, i32>,
}

impl Cart {
    /// Fresh empty cart owned by `username`.
    pub fn new(username: &str) -> Self {
        Self {
            for_user: username.to_string(),
            products: HashMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cart_is_empty_and_owned() {
        let cart = Cart::new("ann@example.net");
        assert_eq!(cart.for_user, "ann@example.net");
        assert!(cart.is_empty());
    }

    #[test]
    fn wire_names_are_camel_case() {
        let mut cart = Cart::new("ann@example.net");
        cart.products.insert("p1".to_string(), 2);
        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["forUser"], "ann@example.net");
        assert_eq!(json["products"]["p1"], 2);
    }
}
