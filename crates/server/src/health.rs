use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use serde_json::{Value, json};

use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/", get(home))
        .with_state(state)
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
    service: String,
}

async fn health(State(st): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: st.service_name.to_string(),
    })
}

async fn home() -> Json<Value> {
    Json(json!({
        "message": "CSV Schema Generator API",
        "endpoints": {
            "POST /schema": "Upload compressed or raw CSV data to get JSON schema",
            "GET /health": "Health check endpoint",
            "GET /": "This help message"
        },
        "usage": {
            "compressed": "Send gzip-compressed CSV with Content-Encoding: gzip header",
            "raw": "Send raw CSV data in request body"
        }
    }))
}
