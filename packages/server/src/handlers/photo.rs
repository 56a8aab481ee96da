use axum::Json;
use axum::body::Body;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use common::photo::{self, PHOTO_CONTENT_TYPE};
use sha2::{Digest, Sha256};
use tracing::instrument;
use uuid::Uuid;

use crate::catalog::GlazeService;
use crate::error::{AppError, ErrorBody};
use crate::extractors::path::AppPath;
use crate::models::shared::SuccessResponse;
use crate::state::AppState;

const PHOTO_CACHE_CONTROL: &str = "public, max-age=31536000, immutable";

pub fn photo_upload_body_limit() -> DefaultBodyLimit {
    DefaultBodyLimit::max(25 * 1024 * 1024) // 25 MiB
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Photos",
    operation_id = "getPhoto",
    summary = "Fetch a variant's photo",
    params(("id" = Uuid, Path, description = "Variant ID")),
    responses(
        (status = 200, description = "JPEG photo bytes"),
        (status = 304, description = "Not modified"),
        (status = 404, description = "No such variant or no photo (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, headers), fields(id = %id))]
pub async fn get_photo(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let bytes = GlazeService::new(&state.db).photo(id).await?;

    let etag_value = format!("\"{}\"", hex::encode(Sha256::digest(&bytes)));
    if let Some(if_none_match) = headers.get(header::IF_NONE_MATCH)
        && let Ok(val) = if_none_match.to_str()
        && (val == etag_value || val == "*")
    {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, PHOTO_CONTENT_TYPE)
        .header(header::CONTENT_LENGTH, bytes.len().to_string())
        .header(header::ETAG, &etag_value)
        .header(header::CACHE_CONTROL, PHOTO_CACHE_CONTROL)
        .body(Body::from(bytes))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {e}")))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Photos",
    operation_id = "uploadPhoto",
    summary = "Attach or replace a variant's photo",
    description = "The `photo` multipart field is required. The image is scaled down to fit \
        the configured box (2000x2000 by default) and stored as JPEG.",
    params(("id" = Uuid, Path, description = "Variant ID")),
    request_body(content_type = "multipart/form-data", description = "Image in the `photo` field"),
    responses(
        (status = 200, description = "Photo stored", body = SuccessResponse),
        (status = 400, description = "Missing or empty photo (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Variant not found (NOT_FOUND)", body = ErrorBody),
        (status = 422, description = "Not a decodable image (DECODE_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, multipart), fields(id = %id))]
pub async fn upload_photo(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<SuccessResponse>, AppError> {
    let mut raw = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Multipart error: {e}")))?
    {
        if field.name() == Some("photo") {
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read photo: {e}")))?;
            raw = Some(bytes);
        }
    }

    let raw = raw
        .filter(|b| !b.is_empty())
        .ok_or_else(|| AppError::Validation("No photo provided".into()))?;

    let settings = state.config.photo.settings();
    let processed = tokio::task::spawn_blocking(move || photo::process_image(&raw, &settings))
        .await
        .map_err(|e| AppError::Internal(format!("Photo task failed: {e}")))??;

    GlazeService::new(&state.db)
        .set_photo(id, Some(processed))
        .await?;

    Ok(Json(SuccessResponse::ok()))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Photos",
    operation_id = "deletePhoto",
    summary = "Remove a variant's photo",
    params(("id" = Uuid, Path, description = "Variant ID")),
    responses(
        (status = 200, description = "Photo removed", body = SuccessResponse),
        (status = 404, description = "Variant not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id = %id))]
pub async fn delete_photo(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<SuccessResponse>, AppError> {
    GlazeService::new(&state.db).set_photo(id, None).await?;
    Ok(Json(SuccessResponse::ok()))
}
