use axum::{
    Json, Router,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::{HeaderMap, header::CONTENT_ENCODING},
    routing::post,
};
use csv_schema_sdk::{ContentEncoding, SchemaField};
use tracing::{debug, info};

use crate::{AppState, errors::ApiError};

/// Bytes of the payload echoed at debug level
const HEAD_BYTES: usize = 32;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/schema", post(generate_schema))
        .with_state(state)
}

async fn generate_schema(
    State(st): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Vec<SchemaField>>, ApiError> {
    let body = body?;
    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let encoding =
        ContentEncoding::from_header(headers.get(CONTENT_ENCODING).and_then(|v| v.to_str().ok()));

    info!(
        request_id = %request_id,
        encoding = %encoding,
        content_length = body.len(),
        "schema request received"
    );
    debug!(request_id = %request_id, head = %hex_head(&body, HEAD_BYTES), "payload head");

    // Decoding and inference are CPU-bound
    let generator = st.generator.clone();
    let schema = tokio::task::spawn_blocking(move || generator.generate(&body, encoding)).await??;

    info!(
        request_id = %request_id,
        columns = schema.len(),
        records = schema.record_count,
        skipped = schema.skipped_count,
        "schema generated"
    );

    Ok(Json(schema.to_wire()))
}

fn hex_head(body: &[u8], n: usize) -> String {
    body.iter().take(n).map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_head() {
        assert_eq!(hex_head(&[0x1f, 0x8b, 0x08], 2), "1f8b");
        assert_eq!(hex_head(b"", 4), "");
    }
}
