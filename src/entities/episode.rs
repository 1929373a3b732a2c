use sea_orm::entity::prelude::*;

/// Episode row. `number` is a TEXT column: lookups and ordering compare it
/// lexicographically. There is intentionally no foreign key to `anime`;
/// deleting an anime leaves its episodes in place.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "episode")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub anime_id: i32,
    pub number: String,
    pub date: String,
    pub season: i32,
    pub url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
