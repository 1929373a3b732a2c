use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use tracing::info;

use crate::db::StoreError;
use crate::entities::{anime, prelude::*};
use crate::models::anime::AnimeData;

pub struct AnimeRepository {
    conn: DatabaseConnection,
}

impl AnimeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<anime::Model>, StoreError> {
        let rows = Anime::find()
            .order_by_asc(anime::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn get(&self, id: i32) -> Result<Option<anime::Model>, StoreError> {
        let row = Anime::find_by_id(id).one(&self.conn).await?;

        Ok(row)
    }

    pub async fn insert(&self, data: &AnimeData) -> Result<(), StoreError> {
        let active_model = anime::ActiveModel {
            // Storage assigns the id unless the client supplied one.
            id: data.id.map_or(NotSet, Set),
            name: Set(data.name.clone()),
            categories: Set(data.categories.clone()),
            year: Set(data.year.clone()),
            sinopse: Set(data.sinopse.clone()),
            url: Set(data.url.clone()),
            rate: Set(data.rate),
        };

        Anime::insert(active_model).exec(&self.conn).await?;

        info!("Added anime: {}", data.name.as_deref().unwrap_or("(unnamed)"));
        Ok(())
    }

    /// Partial update: only fields present in `data` are written. The row is
    /// matched by id alone and a missing row is not an error.
    pub async fn update(&self, id: i32, data: &AnimeData) -> Result<(), StoreError> {
        let mut active_model = anime::ActiveModel {
            ..Default::default()
        };

        if let Some(name) = &data.name {
            active_model.name = Set(Some(name.clone()));
        }
        if let Some(categories) = &data.categories {
            active_model.categories = Set(Some(categories.clone()));
        }
        if let Some(year) = &data.year {
            active_model.year = Set(Some(year.clone()));
        }
        if let Some(sinopse) = &data.sinopse {
            active_model.sinopse = Set(Some(sinopse.clone()));
        }
        if let Some(url) = &data.url {
            active_model.url = Set(Some(url.clone()));
        }
        if let Some(rate) = data.rate {
            active_model.rate = Set(Some(rate));
        }

        Anime::update_many()
            .set(active_model)
            .filter(anime::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;

        info!("Updated anime {}", id);
        Ok(())
    }

    /// Unconditional delete; removing an absent id is a no-op.
    pub async fn delete(&self, id: i32) -> Result<(), StoreError> {
        Anime::delete_many()
            .filter(anime::Column::Id.eq(id))
            .exec(&self.conn)
            .await?;

        info!("Deleted anime {}", id);
        Ok(())
    }
}
