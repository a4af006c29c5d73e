use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde_json::Value;

use common::Problem;

use super::StateStore;

/// Process-local `StateStore` for tests and demos.
///
/// Same contract as the remote client, including the empty-bytes miss
/// semantics. Records are stored as their JSON encoding.
#[derive(Default)]
pub struct MemoryStateStore {
    entries: RwLock<HashMap<(String, String), Vec<u8>>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn get_state(&self, store: &str, key: &str) -> Result<Vec<u8>, Problem> {
        let entries = self.entries.read().unwrap();
        Ok(entries
            .get(&(store.to_string(), key.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn save_state(&self, store: &str, key: &str, value: Value) -> Result<(), Problem> {
        let mut entries = self.entries.write().unwrap();
        entries.insert((store.to_string(), key.to_string()), value.to_string().into_bytes());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_after_save_returns_bytes() -> Result<(), anyhow::Error> {
        let store = MemoryStateStore::new();
        store
            .save_state("statestore", "k1", serde_json::json!({"a": 1}))
            .await?;
        let data = store.get_state("statestore", "k1").await?;
        let value: Value = serde_json::from_slice(&data)?;
        assert_eq!(value, serde_json::json!({"a": 1}));
        Ok(())
    }

    #[tokio::test]
    async fn missing_key_reads_empty() -> Result<(), anyhow::Error> {
        let store = MemoryStateStore::new();
        assert!(store.get_state("statestore", "nope").await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn save_overwrites_unconditionally() -> Result<(), anyhow::Error> {
        let store = MemoryStateStore::new();
        store.save_state("s", "k", serde_json::json!(1)).await?;
        store.save_state("s", "k", serde_json::json!(2)).await?;
        let data = store.get_state("s", "k").await?;
        assert_eq!(data, b"2");
        Ok(())
    }
}
