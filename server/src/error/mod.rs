use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roledash_frontend::session::SessionError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The `accessToken` cookie is present but its payload cannot be read.
    #[error("malformed session: {0}")]
    MalformedSession(#[from] SessionError),
    #[error(transparent)]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, code) = match self {
            AppError::MalformedSession(err) => {
                tracing::error!(error = %err, "malformed session token");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Session error: {}", err),
                    "MALFORMED_SESSION",
                )
            }
            AppError::InternalServerError(err) => {
                tracing::error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    "INTERNAL_SERVER_ERROR",
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}
