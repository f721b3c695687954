use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::DefaultBodyLimit,
    http::{
        HeaderName, HeaderValue, Method, Request,
        header::{CONTENT_ENCODING, CONTENT_TYPE},
    },
};
use csv_schema_sdk::SchemaGenerator;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub mod config;
mod errors;
mod health;
pub mod logging;
mod schema;

pub use config::{ConfigError, LoggingConfig, ServerConfig};
pub use errors::ApiError;

const REQUEST_ID: &str = "x-request-id";

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<SchemaGenerator>,
    pub service_name: Arc<str>,
}

impl AppState {
    pub fn from_config(cfg: &ServerConfig) -> Self {
        Self {
            generator: Arc::new(cfg.generator()),
            service_name: Arc::from(cfg.service_name.as_str()),
        }
    }
}

/// Build the full application router from configuration.
pub fn app(cfg: &ServerConfig) -> Router {
    router(AppState::from_config(cfg), cfg)
}

/// Build the router with health, help and schema routes plus the HTTP layers.
pub fn router(state: AppState, cfg: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID);

    health::router(state.clone())
        .merge(schema::router(state))
        .layer(DefaultBodyLimit::max(cfg.max_body_bytes))
        .layer(cors_layer(&cfg.allowed_origins))
        .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
            let request_id = request
                .headers()
                .get(REQUEST_ID)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-");
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                request_id = %request_id,
            )
        }))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, CONTENT_ENCODING])
        .expose_headers([HeaderName::from_static(REQUEST_ID)])
        .allow_credentials(true)
}
