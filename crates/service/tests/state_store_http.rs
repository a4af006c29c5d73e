use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;

use models::User;
use service::storage::{HttpStateStore, StateStore};
use service::users::{StateUserService, UserService};

type SidecarState = Arc<Mutex<HashMap<String, serde_json::Value>>>;

async fn healthz() -> &'static str {
    "OK"
}

async fn get_state(
    State(db): State<SidecarState>,
    Path((store, key)): Path<(String, String)>,
) -> axum::response::Response {
    if store == "unstable" {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    let db = db.lock().unwrap();
    match db.get(&format!("{store}/{key}")) {
        Some(value) => Json(value.clone()).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}

async fn save_state(
    State(db): State<SidecarState>,
    Path(store): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    let mut db = db.lock().unwrap();
    for entry in body.as_array().cloned().unwrap_or_default() {
        let key = entry["key"].as_str().unwrap_or_default().to_string();
        db.insert(format!("{store}/{key}"), entry["value"].clone());
    }
    StatusCode::NO_CONTENT
}

/// Bind a fake state-store sidecar to an ephemeral port.
async fn start_sidecar() -> anyhow::Result<String> {
    let db: SidecarState = Arc::new(Mutex::new(HashMap::new()));
    let app = Router::new()
        .route("/v1.0/healthz", get(healthz))
        .route("/v1.0/state/:store/:key", get(get_state))
        .route("/v1.0/state/:store", post(save_state))
        .with_state(db);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("sidecar error: {e}");
        }
    });
    Ok(format!("http://{}:{}", addr.ip(), addr.port()))
}

#[tokio::test]
async fn connect_fails_fast_when_sidecar_is_down() {
    let prob = HttpStateStore::connect("http://127.0.0.1:1", "users")
        .await
        .err()
        .expect("connect must fail");
    assert_eq!(prob.type_uri, "err://state-store");
    assert_eq!(prob.status, 500);
    assert_eq!(prob.instance, "users");
}

#[tokio::test]
async fn save_and_get_round_trip() -> Result<(), anyhow::Error> {
    let endpoint = start_sidecar().await?;
    let store = HttpStateStore::connect(&endpoint, "users").await?;

    store
        .save_state("statestore", "k1", serde_json::json!({"n": 7}))
        .await?;
    let data = store.get_state("statestore", "k1").await?;
    let value: serde_json::Value = serde_json::from_slice(&data)?;
    assert_eq!(value, serde_json::json!({"n": 7}));
    Ok(())
}

#[tokio::test]
async fn missing_key_reads_empty_not_error() -> Result<(), anyhow::Error> {
    let endpoint = start_sidecar().await?;
    let store = HttpStateStore::connect(&endpoint, "users").await?;

    let data = store.get_state("statestore", "no-such-key").await?;
    assert!(data.is_empty());
    Ok(())
}

#[tokio::test]
async fn backend_failure_maps_to_problem() -> Result<(), anyhow::Error> {
    let endpoint = start_sidecar().await?;
    let store = HttpStateStore::connect(&endpoint, "cart").await?;

    let prob = store.get_state("unstable", "k1").await.unwrap_err();
    assert_eq!(prob.type_uri, "err://state-get");
    assert_eq!(prob.status, 500);
    assert_eq!(prob.instance, "cart");
    Ok(())
}

#[tokio::test]
async fn user_service_works_end_to_end_over_http() -> Result<(), anyhow::Error> {
    let endpoint = start_sidecar().await?;
    let store = Arc::new(HttpStateStore::connect(&endpoint, "users").await?);
    let svc = StateUserService::new(store, "statestore", "users");

    let user = User {
        username: "eve@example.net".to_string(),
        display_name: "Eve".to_string(),
        profile_image: "eve.png".to_string(),
    };
    svc.add_user(user.clone()).await?;

    let fetched = svc.get_user("eve@example.net").await?;
    assert_eq!(fetched, user);

    let prob = svc.add_user(user).await.unwrap_err();
    assert_eq!(prob.type_uri, "err://user-exists");
    Ok(())
}
