use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Mutable variant fields. Body of `POST /glazes/{id}/variants` and `PUT /variants/{id}`.
///
/// `colour_code` is stored upper-cased, so `#a1b2c3` reads back as `#A1B2C3`.
#[derive(Clone, Debug, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct VariantFields {
    #[schema(example = "#3A6EA5")]
    pub colour_code: String,
    #[schema(example = 1220)]
    pub temp_min: i32,
    #[schema(example = 1260)]
    pub temp_max: i32,
}

/// A variant as listed. The photo itself is only available from `/photos/{id}`.
#[derive(Clone, Debug, Serialize, FromQueryResult, utoipa::ToSchema)]
pub struct VariantResponse {
    pub id: Uuid,
    pub glaze_id: Uuid,
    pub colour_code: String,
    pub temp_min: i32,
    pub temp_max: i32,
    /// Whether a photo is stored.
    #[serde(rename = "photo")]
    pub has_photo: bool,
    pub created_at: DateTime<Utc>,
}
