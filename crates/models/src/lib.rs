//! Domain entities shared by the storefront services.
//!
//! Plain serializable values with camelCase wire names, kept free of any
//! storage or transport concern; the `service` crate owns persistence.

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::Cart;
pub use order::{LineItem, Order, OrderStatus};
pub use product::Product;
pub use user::User;
