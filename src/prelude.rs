use axum::{
    Json,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::QueryRejection,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = core::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("experience range must look like 'min-max', got '{0}'")]
    InvalidExperience(String),
    #[error("No File Provided")]
    NoFileProvided,
    #[error("invalid file name '{0}'")]
    InvalidFileName(String),
    #[error("could not read multipart body: {0}")]
    Multipart(#[from] MultipartError),
    #[error("malformed query string: {}", .0.body_text())]
    Query(#[from] QueryRejection),
    #[error("invalid query parameters: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidExperience(_) => "ERR-SEARCH-001",
            AppError::NoFileProvided => "ERR-UPLOAD-001",
            AppError::InvalidFileName(_) => "ERR-UPLOAD-002",
            AppError::Multipart(_) => "ERR-UPLOAD-003",
            AppError::Query(_) => "ERR-QUERY-000",
            AppError::Validation(_) => "ERR-VALIDATION-000",
            AppError::Database(_) => "ERR-DB-000",
            AppError::Migrate(_) => "ERR-DB-001",
            AppError::Io(_) => "ERR-IO-000",
            AppError::Config(_) => "ERR-CONF-000",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Multipart(e) => e.status(),
            AppError::InvalidExperience(_)
            | AppError::NoFileProvided
            | AppError::InvalidFileName(_)
            | AppError::Query(_)
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text safe to hand back to the caller. Server-side failures never
    /// expose their underlying message.
    pub fn public_message(&self) -> String {
        if self.status().is_server_error() {
            "internal error, please retry later".to_string()
        } else {
            self.to_string()
        }
    }
}

/// A body that is not multipart at all carries no file either.
impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        tracing::debug!("multipart body rejected: {}", rejection.body_text());
        AppError::NoFileProvided
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(code = self.code(), "request failed: {}", &self);
        } else {
            tracing::warn!(code = self.code(), "request rejected: {}", &self);
        }
        let body = json!({
            "success": false,
            "code": self.code(),
            "message": self.public_message(),
        });
        (status, Json(body)).into_response()
    }
}
