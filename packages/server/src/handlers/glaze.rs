use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::instrument;
use uuid::Uuid;

use crate::catalog::GlazeService;
use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::extractors::path::AppPath;
use crate::models::glaze::{CreateGlazeRequest, CreatedGlazeResponse, GlazeFields, GlazeResponse};
use crate::models::shared::IdResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Glazes",
    operation_id = "listGlazes",
    summary = "List all glazes",
    description = "Returns every glaze ordered by name, each with its variants ordered by `temp_min`. \
        Variants carry a `photo` flag instead of the photo bytes.",
    responses(
        (status = 200, description = "All glazes", body = Vec<GlazeResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_glazes(
    State(state): State<AppState>,
) -> Result<Json<Vec<GlazeResponse>>, AppError> {
    Ok(Json(GlazeService::new(&state.db).list_glazes().await?))
}

#[utoipa::path(
    post,
    path = "/",
    tag = "Glazes",
    operation_id = "createGlaze",
    summary = "Create a glaze with its first variant",
    description = "Creates the glaze and its first variant atomically.",
    request_body = CreateGlazeRequest,
    responses(
        (status = 201, description = "Glaze created", body = CreatedGlazeResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(name = %payload.name))]
pub async fn create_glaze(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateGlazeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (glaze, variant) = payload.into_parts();
    let created = GlazeService::new(&state.db)
        .create_glaze(glaze, variant)
        .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Glazes",
    operation_id = "getGlaze",
    summary = "Get a glaze by ID",
    params(("id" = Uuid, Path, description = "Glaze ID")),
    responses(
        (status = 200, description = "Glaze details", body = GlazeResponse),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Glaze not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id = %id))]
pub async fn get_glaze(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<GlazeResponse>, AppError> {
    GlazeService::new(&state.db)
        .get_glaze(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Glaze {id} not found")))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Glazes",
    operation_id = "updateGlaze",
    summary = "Update a glaze",
    description = "Replaces the glaze's name, foodsafe, watertight and notes fields. Variants are untouched.",
    params(("id" = Uuid, Path, description = "Glaze ID")),
    request_body = GlazeFields,
    responses(
        (status = 200, description = "Glaze updated", body = IdResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Glaze not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id = %id))]
pub async fn update_glaze(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<GlazeFields>,
) -> Result<Json<IdResponse>, AppError> {
    let id = GlazeService::new(&state.db).update_glaze(id, payload).await?;
    Ok(Json(IdResponse { id }))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Glazes",
    operation_id = "deleteGlaze",
    summary = "Delete a glaze",
    description = "Deletes the glaze together with all of its variants and photos. \
        Deleting an unknown glaze succeeds.",
    params(("id" = Uuid, Path, description = "Glaze ID")),
    responses(
        (status = 204, description = "Glaze deleted"),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id = %id))]
pub async fn delete_glaze(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    GlazeService::new(&state.db).delete_glaze(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
