//! Key-value state store client.
//!
//! The backing store is addressed by (store name, key) pairs and holds
//! opaque serialized records. "Not found" is a zero-length read, not an
//! error: absence is an expected outcome for existence checks.

use async_trait::async_trait;
use serde_json::Value;

use common::Problem;

pub mod http;
pub mod memory;

pub use http::HttpStateStore;
pub use memory::MemoryStateStore;

/// Capability abstraction over the key-value state store.
/// Implementations can be a remote sidecar or process-local memory.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read the raw bytes stored under `key`. A missing key yields empty
    /// bytes, never an error.
    async fn get_state(&self, store: &str, key: &str) -> Result<Vec<u8>, Problem>;

    /// Write `value` under `key`. Unconditional overwrite, last writer wins.
    async fn save_state(&self, store: &str, key: &str, value: Value) -> Result<(), Problem>;
}
