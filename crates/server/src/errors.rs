use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use csv_schema_sdk::SchemaError;
use serde::Serialize;
use tokio::task::JoinError;
use tracing::{error, warn};

const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    /// Body could not be read (too large, aborted connection)
    #[error("{0}")]
    Body(#[from] BytesRejection),
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        ApiError::Schema(SchemaError::Internal(format!("schema worker failed: {err}")))
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Schema(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Schema(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Body(rejection) => rejection.status(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!(error = ?self, "schema request failed");
            INTERNAL_MESSAGE.to_owned()
        } else {
            warn!(status = status.as_u16(), error = %self, "schema request rejected");
            self.to_string()
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
