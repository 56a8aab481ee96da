use std::time::Duration;

use sea_orm::sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, Table};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::entity::{glaze, glaze_variant};

pub async fn init_db(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.clone());

    // Set connection pool options
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;
    ensure_schema(&db).await?;

    Ok(db)
}

/// Create the catalog tables and their index if they do not exist yet.
///
/// Variants reference their glaze with `ON DELETE CASCADE`; the index on
/// `glaze_id` backs both the per-glaze variant count and the variant listing.
pub async fn ensure_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    let glazes = Table::create()
        .if_not_exists()
        .table(glaze::Entity)
        .col(ColumnDef::new(glaze::Column::Id).uuid().not_null().primary_key())
        .col(ColumnDef::new(glaze::Column::Name).string_len(255).not_null())
        .col(ColumnDef::new(glaze::Column::Foodsafe).boolean().null())
        .col(
            ColumnDef::new(glaze::Column::Watertight)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(glaze::Column::Notes).text().null())
        .col(
            ColumnDef::new(glaze::Column::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .col(
            ColumnDef::new(glaze::Column::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .to_owned();
    db.execute_raw(backend.build(&glazes)).await?;

    let variants = Table::create()
        .if_not_exists()
        .table(glaze_variant::Entity)
        .col(
            ColumnDef::new(glaze_variant::Column::Id)
                .uuid()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(glaze_variant::Column::GlazeId).uuid().not_null())
        .col(
            ColumnDef::new(glaze_variant::Column::ColourCode)
                .string_len(7)
                .not_null(),
        )
        .col(ColumnDef::new(glaze_variant::Column::TempMin).integer().not_null())
        .col(ColumnDef::new(glaze_variant::Column::TempMax).integer().not_null())
        .col(ColumnDef::new(glaze_variant::Column::Photo).blob().null())
        .col(
            ColumnDef::new(glaze_variant::Column::CreatedAt)
                .timestamp_with_time_zone()
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_glaze_variants_glaze_id")
                .from(glaze_variant::Entity, glaze_variant::Column::GlazeId)
                .to(glaze::Entity, glaze::Column::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned();
    db.execute_raw(backend.build(&variants)).await?;

    let index = Index::create()
        .if_not_exists()
        .name("idx_variants_glaze_id")
        .table(glaze_variant::Entity)
        .col(glaze_variant::Column::GlazeId)
        .to_owned();
    db.execute_raw(backend.build(&index)).await?;

    info!("Ensured catalog schema exists");
    Ok(())
}
