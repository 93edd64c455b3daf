//! Service routes outside the student resource: home page and probes.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

pub const WELCOME_TEXT: &str = "Welcome to the student service";

#[derive(Serialize)]
struct Status {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

#[derive(Serialize)]
struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

async fn home() -> &'static str {
    WELCOME_TEXT
}

async fn health() -> Json<Status> {
    Json(Status {
        status: "ok",
        database: None,
    })
}

/// 503 while the student store cannot answer a ping.
async fn ready(State(state): State<AppState>) -> (StatusCode, Json<Status>) {
    match state.students.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(Status {
                status: "ok",
                database: Some("ok"),
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Status {
                    status: "degraded",
                    database: Some("unavailable"),
                }),
            )
        }
    }
}

async fn build_info() -> Json<BuildInfo> {
    Json(BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/home", get(home))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(build_info))
        .with_state(state)
}
