use chrono::{DateTime, Utc};
use common::Foodsafe;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::variant::{VariantFields, VariantResponse};
use crate::entity::glaze;

/// Mutable glaze fields. Also the body of `PUT /glazes/{id}`.
#[derive(Clone, Debug, Deserialize, PartialEq, utoipa::ToSchema)]
pub struct GlazeFields {
    #[schema(example = "Floating Blue")]
    pub name: String,
    /// `true`, `false` or `null` for "not known yet".
    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub foodsafe: Foodsafe,
    #[serde(default)]
    pub watertight: bool,
    /// Stored trimmed; blank notes read back as `null`.
    pub notes: Option<String>,
}

/// A new glaze together with its first variant.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateGlazeRequest {
    #[schema(example = "Floating Blue")]
    pub name: String,
    #[serde(default)]
    #[schema(value_type = Option<bool>)]
    pub foodsafe: Foodsafe,
    #[serde(default)]
    pub watertight: bool,
    pub notes: Option<String>,
    #[schema(example = "#3A6EA5")]
    pub colour_code: String,
    #[schema(example = 1220)]
    pub temp_min: i32,
    #[schema(example = 1260)]
    pub temp_max: i32,
}

impl CreateGlazeRequest {
    pub fn into_parts(self) -> (GlazeFields, VariantFields) {
        (
            GlazeFields {
                name: self.name,
                foodsafe: self.foodsafe,
                watertight: self.watertight,
                notes: self.notes,
            },
            VariantFields {
                colour_code: self.colour_code,
                temp_min: self.temp_min,
                temp_max: self.temp_max,
            },
        )
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct GlazeResponse {
    pub id: Uuid,
    pub name: String,
    #[schema(value_type = Option<bool>)]
    pub foodsafe: Foodsafe,
    pub watertight: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Ordered by `temp_min` ascending.
    pub variants: Vec<VariantResponse>,
}

impl GlazeResponse {
    pub fn from_parts(model: glaze::Model, variants: Vec<VariantResponse>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            foodsafe: model.foodsafe.into(),
            watertight: model.watertight,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
            variants,
        }
    }
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct CreatedGlazeResponse {
    pub glaze_id: Uuid,
    pub variant_id: Uuid,
}
