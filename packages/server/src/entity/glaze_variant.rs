use sea_orm::entity::prelude::*;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "glaze_variants")]
pub struct Model {
    /// UUIDv7 primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub glaze_id: Uuid,
    #[sea_orm(belongs_to, from = "glaze_id", to = "id")]
    pub glaze: HasOne<super::glaze::Entity>,

    /// `#RRGGBB`, stored upper-case.
    pub colour_code: String,

    pub temp_min: i32,
    pub temp_max: i32,

    /// Processed photo bytes. Never selected by list queries.
    pub photo: Option<Vec<u8>>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
