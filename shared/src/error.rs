use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ValidationError(#[from] garde::Report),
    #[error("upstream request failed")]
    UpstreamRequestError(#[source] reqwest::Error),
    #[error("{source_name} answered with status {status}")]
    UpstreamStatusError { source_name: String, status: u16 },
    #[error("{source_name} returned an undecodable payload: {message}")]
    UpstreamDecodeError { source_name: String, message: String },
    #[error("{0}")]
    ConversionEntityError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamRequestError(_)
            | AppError::UpstreamStatusError { .. }
            | AppError::UpstreamDecodeError { .. } => StatusCode::BAD_GATEWAY,
            AppError::ConversionEntityError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        tracing::error!(
            error.cause_chain = ?self,
            error.message = %self,
            "Unexpected error happened"
        );

        (status_code, self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
