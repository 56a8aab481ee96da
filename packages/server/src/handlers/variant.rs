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
use crate::models::shared::IdResponse;
use crate::models::variant::VariantFields;
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/{id}/variants",
    tag = "Variants",
    operation_id = "addVariant",
    summary = "Add a variant to a glaze",
    params(("id" = Uuid, Path, description = "Glaze ID")),
    request_body = VariantFields,
    responses(
        (status = 201, description = "Variant created", body = IdResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Glaze not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(glaze_id = %glaze_id))]
pub async fn add_variant(
    State(state): State<AppState>,
    AppPath(glaze_id): AppPath<Uuid>,
    AppJson(payload): AppJson<VariantFields>,
) -> Result<impl IntoResponse, AppError> {
    let id = GlazeService::new(&state.db)
        .add_variant(glaze_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(IdResponse { id })))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Variants",
    operation_id = "updateVariant",
    summary = "Update a variant",
    description = "Replaces the variant's colour and firing range. The photo is managed under `/photos/{id}`.",
    params(("id" = Uuid, Path, description = "Variant ID")),
    request_body = VariantFields,
    responses(
        (status = 200, description = "Variant updated", body = IdResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Variant not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(id = %id))]
pub async fn update_variant(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<VariantFields>,
) -> Result<Json<IdResponse>, AppError> {
    let id = GlazeService::new(&state.db)
        .update_variant(id, payload)
        .await?;
    Ok(Json(IdResponse { id }))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Variants",
    operation_id = "deleteVariant",
    summary = "Delete a variant",
    description = "A glaze always keeps at least one variant; deleting the last one is refused. \
        Deleting an unknown variant succeeds.",
    params(("id" = Uuid, Path, description = "Variant ID")),
    responses(
        (status = 204, description = "Variant deleted"),
        (status = 400, description = "Malformed ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 409, description = "Last variant of its glaze (INVARIANT_VIOLATION)", body = ErrorBody),
    ),
)]
#[instrument(skip(state), fields(id = %id))]
pub async fn delete_variant(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    GlazeService::new(&state.db).delete_variant(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
