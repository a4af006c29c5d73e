use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::info;

use common::Problem;

use super::StateStore;

/// HTTP client for the state-store sidecar.
///
/// Speaks the sidecar's state API: `GET /v1.0/state/{store}/{key}` returns
/// the stored record (empty body when the key is absent) and
/// `POST /v1.0/state/{store}` upserts `[{"key": .., "value": ..}]`.
/// `service_name` becomes the `instance` of every problem this client emits.
pub struct HttpStateStore {
    client: Client,
    endpoint: String,
    service_name: String,
}

impl HttpStateStore {
    /// Probe the sidecar health endpoint and build the client.
    ///
    /// Construction fails when the sidecar cannot be reached, so a
    /// misconfigured host refuses to start instead of failing on the
    /// first request.
    pub async fn connect(endpoint: &str, service_name: &str) -> Result<Self, Problem> {
        let endpoint = endpoint.trim_end_matches('/').to_string();
        let client = Client::new();

        let url = format!("{endpoint}/v1.0/healthz");
        let resp = client.get(&url).send().await.map_err(|e| {
            Problem::from_error(
                "err://state-store",
                "State store unreachable",
                service_name,
                &e,
            )
        })?;
        if !resp.status().is_success() {
            return Err(Problem::from_status(
                "err://state-store",
                "State store unhealthy",
                service_name,
                resp.status().as_u16(),
            ));
        }

        info!(%endpoint, "state store connected");
        Ok(Self {
            client,
            endpoint,
            service_name: service_name.to_string(),
        })
    }
}

#[async_trait]
impl StateStore for HttpStateStore {
    async fn get_state(&self, store: &str, key: &str) -> Result<Vec<u8>, Problem> {
        let url = format!("{}/v1.0/state/{}/{}", self.endpoint, store, key);
        let resp = self.client.get(&url).send().await.map_err(|e| {
            Problem::from_error(
                "err://state-get",
                "State fetch failed",
                &self.service_name,
                &e,
            )
        })?;
        if !resp.status().is_success() {
            return Err(Problem::from_status(
                "err://state-get",
                "State fetch failed",
                &self.service_name,
                resp.status().as_u16(),
            ));
        }

        let body = resp.bytes().await.map_err(|e| {
            Problem::from_error(
                "err://state-get",
                "State fetch failed",
                &self.service_name,
                &e,
            )
        })?;
        Ok(body.to_vec())
    }

    async fn save_state(&self, store: &str, key: &str, value: Value) -> Result<(), Problem> {
        let url = format!("{}/v1.0/state/{}", self.endpoint, store);
        let body = json!([{ "key": key, "value": value }]);
        let resp = self.client.post(&url).json(&body).send().await.map_err(|e| {
            Problem::from_error(
                "err://state-save",
                "State save failed",
                &self.service_name,
                &e,
            )
        })?;
        if !resp.status().is_success() {
            return Err(Problem::from_status(
                "err://state-save",
                "State save failed",
                &self.service_name,
                resp.status().as_u16(),
            ));
        }
        Ok(())
    }
}
