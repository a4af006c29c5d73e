//! RFC-7807 problem envelope
//!
//! Every fallible operation in the service layer reports failure as a
//! `Problem` so that callers across a network boundary always receive the
//! same structured shape: type URI, title, status, detail, instance.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Structured failure descriptor in RFC-7807 format.
///
/// Constructed at the failure site and never mutated afterward. The wire
/// shape omits `status`/`detail`/`instance` when zero or empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
#[error("Problem: Type: '{type_uri}', Title: '{title}', Status: '{status}', Detail: '{detail}', Instance: '{instance}'")]
pub struct Problem {
    #[serde(rename = "type")]
    pub type_uri: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub status: u16,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detail: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instance: String,
}

fn is_zero(n: &u16) -> bool {
    *n == 0
}

impl Problem {
    /// Create a problem. Pure constructor, never fails.
    pub fn new(type_uri: &str, title: &str, status: u16, detail: &str, instance: &str) -> Self {
        Self {
            type_uri: type_uri.to_string(),
            title: title.to_string(),
            status,
            detail: detail.to_string(),
            instance: instance.to_string(),
        }
    }

    /// Wrap an underlying error as a 500 problem, detail carrying the cause.
    pub fn from_error(
        type_uri: &str,
        title: &str,
        instance: &str,
        err: &dyn std::error::Error,
    ) -> Self {
        Self::new(type_uri, title, 500, &err.to_string(), instance)
    }

    /// Wrap a failed upstream response; the upstream status is carried through.
    pub fn from_status(type_uri: &str, title: &str, instance: &str, status: u16) -> Self {
        let detail = StatusCode::from_u16(status)
            .ok()
            .and_then(|s| s.canonical_reason())
            .unwrap_or("Other error occurred");
        Self::new(type_uri, title, status, detail, instance)
    }
}

impl IntoResponse for Problem {
    /// Report the problem to the caller-facing boundary: trace it, then
    /// respond with the problem's status code and its JSON wire shape.
    fn into_response(self) -> Response {
        error!(problem = %self, "api problem");
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
