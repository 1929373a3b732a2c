use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use tracing::info;

use crate::db::StoreError;
use crate::entities::{episode, prelude::*};
use crate::models::episode::{EpisodeData, NewEpisode, SeasonRow};

pub struct EpisodeRepository {
    conn: DatabaseConnection,
}

impl EpisodeRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Episodes of one season, ordered by `(date, number)` ascending.
    /// `number` is TEXT, so the second key sorts lexicographically.
    pub async fn list_for_season(
        &self,
        anime_id: i32,
        season: i32,
    ) -> Result<Vec<episode::Model>, StoreError> {
        let rows = Episode::find()
            .filter(episode::Column::AnimeId.eq(anime_id))
            .filter(episode::Column::Season.eq(season))
            .order_by_asc(episode::Column::Date)
            .order_by_asc(episode::Column::Number)
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn get(
        &self,
        anime_id: i32,
        season: i32,
        number: &str,
    ) -> Result<Option<episode::Model>, StoreError> {
        let row = Episode::find()
            .filter(episode::Column::AnimeId.eq(anime_id))
            .filter(episode::Column::Season.eq(season))
            .filter(episode::Column::Number.eq(number))
            .one(&self.conn)
            .await?;

        Ok(row)
    }

    pub async fn insert(&self, record: &NewEpisode) -> Result<(), StoreError> {
        let active_model = episode::ActiveModel {
            id: Set(record.id),
            anime_id: Set(record.anime_id),
            number: Set(record.number.clone()),
            date: Set(record.date.clone()),
            season: Set(record.season),
            url: Set(record.url.clone()),
        };

        Episode::insert(active_model).exec(&self.conn).await?;

        info!(
            "Added episode {} (anime {}, season {})",
            record.number, record.anime_id, record.season
        );
        Ok(())
    }

    /// Partial update keyed on `(anime_id, season, number)`; only fields
    /// present in `data` are written, and a missing row is not an error.
    pub async fn update(
        &self,
        anime_id: i32,
        season: i32,
        number: &str,
        data: &EpisodeData,
    ) -> Result<(), StoreError> {
        if !data.has_changes() {
            return Ok(());
        }

        let mut active_model = episode::ActiveModel {
            ..Default::default()
        };

        if let Some(id) = data.id {
            active_model.id = Set(id);
        }
        if let Some(aid) = data.anime_id {
            active_model.anime_id = Set(aid);
        }
        if let Some(n) = data.number {
            active_model.number = Set(n.to_string());
        }
        if let Some(date) = &data.date {
            active_model.date = Set(date.clone());
        }
        if let Some(s) = data.season {
            active_model.season = Set(s);
        }
        if let Some(url) = &data.url {
            active_model.url = Set(url.clone());
        }

        Episode::update_many()
            .set(active_model)
            .filter(episode::Column::AnimeId.eq(anime_id))
            .filter(episode::Column::Season.eq(season))
            .filter(episode::Column::Number.eq(number))
            .exec(&self.conn)
            .await?;

        info!("Updated episode {} (anime {}, season {})", number, anime_id, season);
        Ok(())
    }

    pub async fn delete(
        &self,
        anime_id: i32,
        season: i32,
        number: &str,
    ) -> Result<(), StoreError> {
        Episode::delete_many()
            .filter(episode::Column::AnimeId.eq(anime_id))
            .filter(episode::Column::Season.eq(season))
            .filter(episode::Column::Number.eq(number))
            .exec(&self.conn)
            .await?;

        info!("Deleted episode {} (anime {}, season {})", number, anime_id, season);
        Ok(())
    }

    pub async fn seasons(&self, anime_id: i32) -> Result<Vec<SeasonRow>, StoreError> {
        let rows = Episode::find()
            .select_only()
            .column(episode::Column::Season)
            .column_as(episode::Column::Id.count(), "episodes")
            .filter(episode::Column::AnimeId.eq(anime_id))
            .group_by(episode::Column::Season)
            .order_by_asc(episode::Column::Season)
            .into_model::<SeasonRow>()
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn season(
        &self,
        anime_id: i32,
        season: i32,
    ) -> Result<Vec<SeasonRow>, StoreError> {
        let rows = Episode::find()
            .select_only()
            .column(episode::Column::Season)
            .column_as(episode::Column::Id.count(), "episodes")
            .filter(episode::Column::AnimeId.eq(anime_id))
            .filter(episode::Column::Season.eq(season))
            .group_by(episode::Column::Season)
            .into_model::<SeasonRow>()
            .all(&self.conn)
            .await?;

        Ok(rows)
    }
}
