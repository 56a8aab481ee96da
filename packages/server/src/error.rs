use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::PhotoError;
use sea_orm::DbErr;
use serde::Serialize;

use crate::catalog::CatalogError;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`, `NOT_FOUND`,
    /// `INVARIANT_VIOLATION`, `DECODE_ERROR`, `STORAGE_UNAVAILABLE`,
    /// `INTERNAL_ERROR`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "Colour code must match #RRGGBB")]
    pub message: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    NotFound(String),
    /// The request would break a catalog invariant, e.g. removing a glaze's last variant.
    InvariantViolation(String),
    /// Uploaded bytes are not a usable image.
    Decode(String),
    StorageUnavailable(String),
    Internal(String),
}

impl AppError {
    fn status_and_body(self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    code: "VALIDATION_ERROR",
                    message: msg,
                },
            ),
            AppError::NotFound(msg) => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    code: "NOT_FOUND",
                    message: msg,
                },
            ),
            AppError::InvariantViolation(msg) => (
                StatusCode::CONFLICT,
                ErrorBody {
                    code: "INVARIANT_VIOLATION",
                    message: msg,
                },
            ),
            AppError::Decode(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    code: "DECODE_ERROR",
                    message: msg,
                },
            ),
            AppError::StorageUnavailable(detail) => {
                tracing::warn!("Storage unavailable: {}", detail);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    ErrorBody {
                        code: "STORAGE_UNAVAILABLE",
                        message: "Storage is temporarily unavailable".into(),
                    },
                )
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        code: "INTERNAL_ERROR",
                        message: "An unexpected error occurred".into(),
                    },
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
                AppError::StorageUnavailable(err.to_string())
            }
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Validation(msg) => AppError::Validation(msg),
            CatalogError::NotFound(msg) => AppError::NotFound(msg),
            CatalogError::InvariantViolation(msg) => AppError::InvariantViolation(msg),
            CatalogError::Storage(e) => e.into(),
        }
    }
}

impl From<PhotoError> for AppError {
    fn from(err: PhotoError) -> Self {
        match err {
            PhotoError::UnsupportedFormat(_) | PhotoError::Decode(_) => {
                tracing::warn!("Rejected photo upload: {err}");
                AppError::Decode(err.to_string())
            }
            PhotoError::Encode(_) => AppError::Internal(err.to_string()),
        }
    }
}
