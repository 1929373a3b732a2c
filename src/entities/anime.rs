use sea_orm::entity::prelude::*;

/// Catalog row. Every column besides the key is nullable; nothing beyond
/// the storage schema enforces presence.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "anime")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub categories: Option<String>,
    pub year: Option<String>,
    pub sinopse: Option<String>,
    pub url: Option<String>,
    pub rate: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
