//! Service strategies for the storefront domain entities.
//! - One polymorphic trait per entity family, selected at construction.
//! - Store-backed strategies persist through the state-store client.
//! - Mock strategies serve tests and demos from process-local state.

pub mod cart;
pub mod products;
pub mod storage;
pub mod users;
