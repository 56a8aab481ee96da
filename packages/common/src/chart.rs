//! Temperature chart projection and axis math.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Axis used when there is nothing to plot (cone 010 to cone 10, roughly).
pub const FALLBACK_RANGE: TempRange = TempRange {
    min: 800,
    max: 1300,
};

/// Grid spacing of the chart's temperature axis, in degrees.
pub const DEFAULT_GRID_STEP: i32 = 50;

/// A glaze as the chart sees it: no notes, no flags, no photos.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChartGlaze {
    pub id: Uuid,
    pub name: String,
    /// Ordered by `temp_min` ascending.
    pub variants: Vec<ChartVariant>,
}

/// One firing range with its colour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ChartVariant {
    #[schema(example = "#3A6EA5")]
    pub colour_code: String,
    #[schema(example = 1220)]
    pub temp_min: i32,
    #[schema(example = 1260)]
    pub temp_max: i32,
}

/// Inclusive temperature extrema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TempRange {
    pub min: i32,
    pub max: i32,
}

impl TempRange {
    /// Widen the range outwards to the nearest grid lines.
    pub fn padded(self, step: i32) -> Self {
        Self {
            min: round_to_grid(self.min, GridRounding::Floor, step),
            max: round_to_grid(self.max, GridRounding::Ceil, step),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridRounding {
    Floor,
    Ceil,
}

/// Overall extrema of every variant's `temp_min` and `temp_max`.
///
/// Falls back to [`FALLBACK_RANGE`] when no glaze has any variant.
pub fn temperature_range(glazes: &[ChartGlaze]) -> TempRange {
    let mut temps = glazes
        .iter()
        .flat_map(|g| g.variants.iter())
        .flat_map(|v| [v.temp_min, v.temp_max]);

    let Some(first) = temps.next() else {
        return FALLBACK_RANGE;
    };

    temps.fold(TempRange { min: first, max: first }, |range, t| TempRange {
        min: range.min.min(t),
        max: range.max.max(t),
    })
}

/// Round `value` down or up to a multiple of `step`.
///
/// A non-positive `step` leaves the value untouched.
pub fn round_to_grid(value: i32, direction: GridRounding, step: i32) -> i32 {
    if step <= 0 {
        return value;
    }
    let floor = value.div_euclid(step) * step;
    match direction {
        GridRounding::Floor => floor,
        GridRounding::Ceil if floor == value => value,
        GridRounding::Ceil => floor.saturating_add(step),
    }
}
