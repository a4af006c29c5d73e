use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument};

use common::Problem;
use models::User;

use super::UserService;
use crate::storage::StateStore;

/// Store-backed user service; records are keyed by username.
pub struct StateUserService {
    store: Arc<dyn StateStore>,
    store_name: String,
    service_name: String,
}

impl StateUserService {
    /// `store_name` is the logical partition within the backing store;
    /// `service_name` becomes the `instance` of emitted problems.
    pub fn new(store: Arc<dyn StateStore>, store_name: &str, service_name: &str) -> Self {
        Self {
            store,
            store_name: store_name.to_string(),
            service_name: service_name.to_string(),
        }
    }
}

#[async_trait]
impl UserService for StateUserService {
    #[instrument(skip(self, user), fields(username = %user.username))]
    async fn add_user(&self, user: User) -> Result<(), Problem> {
        // Check-then-write: the existence check and the write are separate
        // store calls, so concurrent registrations of the same username can
        // race. Callers needing stronger guarantees must serialize per key.
        let data = self.store.get_state(&self.store_name, &user.username).await?;
        if !data.is_empty() {
            let detail = format!("{} already registered", user.username);
            return Err(Problem::new(
                "err://user-exists",
                &detail,
                400,
                &detail,
                &self.service_name,
            ));
        }

        let value = serde_json::to_value(&user).map_err(|e| {
            Problem::from_error(
                "err://json-encode",
                "User could not be encoded",
                &self.service_name,
                &e,
            )
        })?;
        self.store
            .save_state(&self.store_name, &user.username, value)
            .await?;
        info!(username = %user.username, "user registered");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_user(&self, username: &str) -> Result<User, Problem> {
        let data = self.store.get_state(&self.store_name, username).await?;
        if data.is_empty() {
            return Err(Problem::new(
                "err://not-found",
                "No data returned",
                404,
                &format!("Username: '{username}' not found"),
                &self.service_name,
            ));
        }

        serde_json::from_slice(&data).map_err(|_| {
            Problem::new(
                "err://json-decode",
                "Malformed user JSON",
                500,
                "JSON could not be decoded",
                &self.service_name,
            )
        })
    }
}
