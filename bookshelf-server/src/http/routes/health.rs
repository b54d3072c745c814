//! Liveness endpoint
//!
//! Reports the service name and version only; it does not touch the store,
//! so a reachable process answers even while the database is down.

use axum::{routing::get, Json, Router};
use serde::Serialize;

const SERVICE_NAME: &str = "bookshelf";

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    fn ok() -> Self {
        Self {
            status: "ok",
            service: SERVICE_NAME,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Stateless, so it merges into any router
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn reports_service_and_version() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.service, "bookshelf");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }
}
