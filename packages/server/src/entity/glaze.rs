use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "glazes")]
pub struct Model {
    /// UUIDv7 primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    /// Tri-state: `NULL` means "unknown", which is not the same as `false`.
    pub foodsafe: Option<bool>,

    pub watertight: bool,

    #[sea_orm(column_type = "Text")]
    pub notes: Option<String>,

    #[sea_orm(has_many)]
    pub variants: HasMany<super::glaze_variant::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
