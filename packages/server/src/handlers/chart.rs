use axum::Json;
use axum::extract::State;
use common::chart::{self, DEFAULT_GRID_STEP};
use common::{ChartGlaze, TempRange};
use tracing::instrument;

use crate::catalog::GlazeService;
use crate::error::AppError;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/",
    tag = "Chart",
    operation_id = "getChartData",
    summary = "Glazes projected for the temperature chart",
    description = "Every glaze with the colour and firing range of each variant. Glazes are ordered by name.",
    responses(
        (status = 200, description = "Chart data", body = Vec<ChartGlaze>),
    ),
)]
#[instrument(skip(state))]
pub async fn chart_data(State(state): State<AppState>) -> Result<Json<Vec<ChartGlaze>>, AppError> {
    Ok(Json(GlazeService::new(&state.db).chart_data().await?))
}

#[utoipa::path(
    get,
    path = "/axis",
    tag = "Chart",
    operation_id = "getChartAxis",
    summary = "Temperature axis for the chart",
    description = "The overall firing range of the catalog widened to the surrounding 50 degree grid lines. \
        An empty catalog yields 800 to 1300.",
    responses(
        (status = 200, description = "Axis bounds", body = TempRange),
    ),
)]
#[instrument(skip(state))]
pub async fn chart_axis(State(state): State<AppState>) -> Result<Json<TempRange>, AppError> {
    let glazes = GlazeService::new(&state.db).chart_data().await?;
    Ok(Json(
        chart::temperature_range(&glazes).padded(DEFAULT_GRID_STEP),
    ))
}
