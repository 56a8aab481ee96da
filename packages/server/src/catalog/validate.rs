use common::colour::normalize_colour_code;

use super::CatalogError;
use crate::models::glaze::GlazeFields;
use crate::models::variant::VariantFields;

/// Longest accepted glaze name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Trim and check glaze fields. Blank notes become `None`.
pub(crate) fn validate_glaze(fields: GlazeFields) -> Result<GlazeFields, CatalogError> {
    let GlazeFields {
        name,
        foodsafe,
        watertight,
        notes,
    } = fields;

    let name = name.trim();
    if name.is_empty() {
        return Err(CatalogError::Validation("Name is required".into()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CatalogError::Validation(format!(
            "Name must be at most {MAX_NAME_LEN} characters"
        )));
    }

    let notes = notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    Ok(GlazeFields {
        name: name.to_string(),
        foodsafe,
        watertight,
        notes,
    })
}

/// Check variant fields and canonicalize the colour code.
pub(crate) fn validate_variant(fields: VariantFields) -> Result<VariantFields, CatalogError> {
    let colour_code = normalize_colour_code(&fields.colour_code).ok_or_else(|| {
        CatalogError::Validation(format!(
            "Invalid colour code '{}': expected #RRGGBB",
            fields.colour_code
        ))
    })?;

    if fields.temp_min < 0 {
        return Err(CatalogError::Validation("temp_min must be >= 0".into()));
    }
    if fields.temp_max < 0 {
        return Err(CatalogError::Validation("temp_max must be >= 0".into()));
    }

    Ok(VariantFields {
        colour_code,
        temp_min: fields.temp_min,
        temp_max: fields.temp_max,
    })
}
