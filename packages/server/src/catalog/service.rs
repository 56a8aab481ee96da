use std::collections::HashMap;

use chrono::{DateTime, Utc};
use common::chart::{ChartGlaze, ChartVariant};
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use tracing::{debug, info};
use uuid::Uuid;

use super::CatalogError;
use super::validate::{validate_glaze, validate_variant};
use crate::entity::{glaze, glaze_variant};
use crate::models::glaze::{CreatedGlazeResponse, GlazeFields, GlazeResponse};
use crate::models::variant::{VariantFields, VariantResponse};

pub struct GlazeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GlazeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Cheap round trip used by the health check.
    pub async fn ping(&self) -> Result<u64, CatalogError> {
        Ok(glaze::Entity::find().count(self.db).await?)
    }

    /// All glazes by name, each with its variants.
    pub async fn list_glazes(&self) -> Result<Vec<GlazeResponse>, CatalogError> {
        let glazes = glaze::Entity::find()
            .order_by_asc(glaze::Column::Name)
            .all(self.db)
            .await?;

        let mut variants: HashMap<Uuid, Vec<VariantResponse>> = HashMap::new();
        for variant in variant_summaries(self.db, None).await? {
            variants.entry(variant.glaze_id).or_default().push(variant);
        }

        Ok(glazes
            .into_iter()
            .map(|g| {
                let vs = variants.remove(&g.id).unwrap_or_default();
                GlazeResponse::from_parts(g, vs)
            })
            .collect())
    }

    pub async fn get_glaze(&self, id: Uuid) -> Result<Option<GlazeResponse>, CatalogError> {
        let Some(model) = glaze::Entity::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };
        let variants = variant_summaries(self.db, Some(id)).await?;
        Ok(Some(GlazeResponse::from_parts(model, variants)))
    }

    /// Minimal projection for the temperature chart.
    pub async fn chart_data(&self) -> Result<Vec<ChartGlaze>, CatalogError> {
        let glazes: Vec<(Uuid, String)> = glaze::Entity::find()
            .select_only()
            .column(glaze::Column::Id)
            .column(glaze::Column::Name)
            .order_by_asc(glaze::Column::Name)
            .into_tuple()
            .all(self.db)
            .await?;

        let rows: Vec<(Uuid, String, i32, i32)> = glaze_variant::Entity::find()
            .select_only()
            .column(glaze_variant::Column::GlazeId)
            .column(glaze_variant::Column::ColourCode)
            .column(glaze_variant::Column::TempMin)
            .column(glaze_variant::Column::TempMax)
            .order_by_asc(glaze_variant::Column::TempMin)
            .order_by_asc(glaze_variant::Column::CreatedAt)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut by_glaze: HashMap<Uuid, Vec<ChartVariant>> = HashMap::new();
        for (glaze_id, colour_code, temp_min, temp_max) in rows {
            by_glaze.entry(glaze_id).or_default().push(ChartVariant {
                colour_code,
                temp_min,
                temp_max,
            });
        }

        Ok(glazes
            .into_iter()
            .map(|(id, name)| ChartGlaze {
                variants: by_glaze.remove(&id).unwrap_or_default(),
                id,
                name,
            })
            .collect())
    }

    /// Insert a glaze and its first variant as one unit.
    pub async fn create_glaze(
        &self,
        fields: GlazeFields,
        first_variant: VariantFields,
    ) -> Result<CreatedGlazeResponse, CatalogError> {
        let fields = validate_glaze(fields)?;
        let first_variant = validate_variant(first_variant)?;
        let foodsafe = fields.foodsafe;

        let now = Utc::now();
        let glaze_id = Uuid::now_v7();
        let variant_id = Uuid::now_v7();

        let txn = self.db.begin().await?;

        glaze::ActiveModel {
            id: Set(glaze_id),
            name: Set(fields.name),
            foodsafe: Set(foodsafe.into()),
            watertight: Set(fields.watertight),
            notes: Set(fields.notes),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        new_variant(variant_id, glaze_id, first_variant, now)
            .insert(&txn)
            .await?;

        txn.commit().await?;

        info!(%glaze_id, %variant_id, %foodsafe, "Created glaze");
        Ok(CreatedGlazeResponse {
            glaze_id,
            variant_id,
        })
    }

    pub async fn update_glaze(&self, id: Uuid, fields: GlazeFields) -> Result<Uuid, CatalogError> {
        let fields = validate_glaze(fields)?;
        let flag = fields.foodsafe;
        let foodsafe: Option<bool> = flag.into();

        let result = glaze::Entity::update_many()
            .col_expr(glaze::Column::Name, Expr::value(fields.name))
            .col_expr(glaze::Column::Foodsafe, Expr::value(foodsafe))
            .col_expr(glaze::Column::Watertight, Expr::value(fields.watertight))
            .col_expr(glaze::Column::Notes, Expr::value(fields.notes))
            .col_expr(glaze::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(glaze::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(glaze_not_found(id));
        }

        info!(glaze_id = %id, foodsafe = %flag, "Updated glaze");
        Ok(id)
    }

    pub async fn add_variant(
        &self,
        glaze_id: Uuid,
        fields: VariantFields,
    ) -> Result<Uuid, CatalogError> {
        let fields = validate_variant(fields)?;
        let now = Utc::now();
        let variant_id = Uuid::now_v7();

        let txn = self.db.begin().await?;

        // Touching the parent checks it exists and locks its row until commit.
        if touch_glaze(&txn, glaze_id, now).await? == 0 {
            return Err(glaze_not_found(glaze_id));
        }

        new_variant(variant_id, glaze_id, fields, now)
            .insert(&txn)
            .await?;

        txn.commit().await?;

        info!(%glaze_id, %variant_id, "Added variant");
        Ok(variant_id)
    }

    pub async fn update_variant(
        &self,
        id: Uuid,
        fields: VariantFields,
    ) -> Result<Uuid, CatalogError> {
        let fields = validate_variant(fields)?;
        let now = Utc::now();

        let txn = self.db.begin().await?;

        // Write before any read so concurrent writers queue on the lock
        // instead of failing on a stale snapshot.
        let updated = glaze_variant::Entity::update_many()
            .col_expr(
                glaze_variant::Column::ColourCode,
                Expr::value(fields.colour_code),
            )
            .col_expr(glaze_variant::Column::TempMin, Expr::value(fields.temp_min))
            .col_expr(glaze_variant::Column::TempMax, Expr::value(fields.temp_max))
            .filter(glaze_variant::Column::Id.eq(id))
            .exec(&txn)
            .await?;
        if updated.rows_affected == 0 {
            return Err(variant_not_found(id));
        }

        touch_parent_of(&txn, id, now).await?;
        txn.commit().await?;

        info!(variant_id = %id, "Updated variant");
        Ok(id)
    }

    /// Delete a glaze and all of its variants. Deleting an unknown id is a no-op.
    pub async fn delete_glaze(&self, id: Uuid) -> Result<(), CatalogError> {
        let txn = self.db.begin().await?;

        // Variants first; the cascade is not relied on.
        let variants = glaze_variant::Entity::delete_many()
            .filter(glaze_variant::Column::GlazeId.eq(id))
            .exec(&txn)
            .await?;
        let glazes = glaze::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        if glazes.rows_affected > 0 {
            info!(
                glaze_id = %id,
                variants = variants.rows_affected,
                "Deleted glaze"
            );
        } else {
            debug!(glaze_id = %id, "Delete of unknown glaze ignored");
        }
        Ok(())
    }

    /// Delete one variant. Refuses to remove a glaze's last variant.
    ///
    /// Deleting an unknown id is a no-op.
    pub async fn delete_variant(&self, id: Uuid) -> Result<(), CatalogError> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        // The parent row is written before anything is counted. Concurrent
        // deletes for the same glaze therefore queue behind this transaction
        // and see its committed result when they count.
        let touched = touch_parent_of(&txn, id, now).await?;

        if touched == 0 {
            debug!(variant_id = %id, "Delete of unknown variant ignored");
            return Ok(());
        }

        // Re-read under the lock: a concurrent delete of this same variant may have won.
        let Some(glaze_id) = parent_of(&txn, id).await? else {
            debug!(variant_id = %id, "Variant already deleted");
            return Ok(());
        };

        let remaining = glaze_variant::Entity::find()
            .filter(glaze_variant::Column::GlazeId.eq(glaze_id))
            .count(&txn)
            .await?;
        if remaining <= 1 {
            return Err(CatalogError::InvariantViolation(
                "Cannot delete the only variant. Delete the glaze instead.".into(),
            ));
        }

        glaze_variant::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        info!(variant_id = %id, %glaze_id, "Deleted variant");
        Ok(())
    }

    /// Stored photo bytes for a variant.
    pub async fn photo(&self, id: Uuid) -> Result<Vec<u8>, CatalogError> {
        let photo: Option<Option<Vec<u8>>> = glaze_variant::Entity::find_by_id(id)
            .select_only()
            .column(glaze_variant::Column::Photo)
            .into_tuple()
            .one(self.db)
            .await?;

        photo
            .flatten()
            .ok_or_else(|| CatalogError::NotFound("Photo not found".into()))
    }

    /// Attach, replace (`Some`) or clear (`None`) a variant's photo.
    pub async fn set_photo(&self, id: Uuid, photo: Option<Vec<u8>>) -> Result<(), CatalogError> {
        let now = Utc::now();
        let attached = photo.as_ref().map(Vec::len);

        let txn = self.db.begin().await?;

        let updated = glaze_variant::Entity::update_many()
            .col_expr(glaze_variant::Column::Photo, Expr::value(photo))
            .filter(glaze_variant::Column::Id.eq(id))
            .exec(&txn)
            .await?;
        if updated.rows_affected == 0 {
            return Err(variant_not_found(id));
        }

        touch_parent_of(&txn, id, now).await?;
        txn.commit().await?;

        match attached {
            Some(bytes) => info!(variant_id = %id, bytes, "Stored photo"),
            None => info!(variant_id = %id, "Cleared photo"),
        }
        Ok(())
    }
}

fn glaze_not_found(id: Uuid) -> CatalogError {
    CatalogError::NotFound(format!("Glaze {id} not found"))
}

fn variant_not_found(id: Uuid) -> CatalogError {
    CatalogError::NotFound(format!("Variant {id} not found"))
}

fn new_variant(
    id: Uuid,
    glaze_id: Uuid,
    fields: VariantFields,
    now: DateTime<Utc>,
) -> glaze_variant::ActiveModel {
    glaze_variant::ActiveModel {
        id: Set(id),
        glaze_id: Set(glaze_id),
        colour_code: Set(fields.colour_code),
        temp_min: Set(fields.temp_min),
        temp_max: Set(fields.temp_max),
        photo: Set(None),
        created_at: Set(now),
        ..Default::default()
    }
}

/// Bump a glaze's `updated_at`. Returns the number of rows touched.
async fn touch_glaze<C: ConnectionTrait>(
    conn: &C,
    glaze_id: Uuid,
    now: DateTime<Utc>,
) -> Result<u64, DbErr> {
    let result = glaze::Entity::update_many()
        .col_expr(glaze::Column::UpdatedAt, Expr::value(now))
        .filter(glaze::Column::Id.eq(glaze_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Bump the `updated_at` of the glaze owning `variant_id`, without reading first.
async fn touch_parent_of<C: ConnectionTrait>(
    conn: &C,
    variant_id: Uuid,
    now: DateTime<Utc>,
) -> Result<u64, DbErr> {
    let result = glaze::Entity::update_many()
        .col_expr(glaze::Column::UpdatedAt, Expr::value(now))
        .filter(
            glaze::Column::Id.in_subquery(
                Query::select()
                    .column(glaze_variant::Column::GlazeId)
                    .from(glaze_variant::Entity)
                    .and_where(glaze_variant::Column::Id.eq(variant_id))
                    .to_owned(),
            ),
        )
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

async fn parent_of<C: ConnectionTrait>(conn: &C, variant_id: Uuid) -> Result<Option<Uuid>, DbErr> {
    glaze_variant::Entity::find_by_id(variant_id)
        .select_only()
        .column(glaze_variant::Column::GlazeId)
        .into_tuple()
        .one(conn)
        .await
}

/// Variant rows with a photo-presence flag in place of the photo bytes.
async fn variant_summaries<C: ConnectionTrait>(
    conn: &C,
    glaze_id: Option<Uuid>,
) -> Result<Vec<VariantResponse>, DbErr> {
    let mut select = glaze_variant::Entity::find();
    if let Some(glaze_id) = glaze_id {
        select = select.filter(glaze_variant::Column::GlazeId.eq(glaze_id));
    }

    select
        .select_only()
        .column(glaze_variant::Column::Id)
        .column(glaze_variant::Column::GlazeId)
        .column(glaze_variant::Column::ColourCode)
        .column(glaze_variant::Column::TempMin)
        .column(glaze_variant::Column::TempMax)
        .column(glaze_variant::Column::CreatedAt)
        .column_as(glaze_variant::Column::Photo.is_not_null(), "has_photo")
        .order_by_asc(glaze_variant::Column::TempMin)
        .order_by_asc(glaze_variant::Column::CreatedAt)
        .into_model::<VariantResponse>()
        .all(conn)
        .await
}
