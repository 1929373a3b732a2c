use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

use crate::entities::{anime, episode};
use crate::models::anime::AnimeData;
use crate::models::episode::{EpisodeData, NewEpisode, SeasonRow};

pub mod migrator;
pub mod repositories;

/// Storage failure taxonomy. Handlers translate each category into an HTTP
/// status; the generic `Database` category maps differently per operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Malformed values, failed conversions, or constraint violations.
    #[error("{0}")]
    Data(String),

    /// Connection, execution, or query failures.
    #[error("{0}")]
    Database(String),

    /// Anything the driver reports that fits neither category.
    #[error("{0}")]
    Other(String),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        if let Some(
            SqlErr::UniqueConstraintViolation(msg) | SqlErr::ForeignKeyConstraintViolation(msg),
        ) = err.sql_err()
        {
            return Self::Data(msg);
        }

        match err {
            DbErr::Type(msg) | DbErr::Json(msg) => Self::Data(msg),
            DbErr::TryIntoErr { from, into, source } => {
                Self::Data(format!("cannot convert {from} into {into}: {source}"))
            }
            DbErr::Conn(e) | DbErr::Exec(e) | DbErr::Query(e) => Self::Database(e.to_string()),
            DbErr::ConnectionAcquire(e) => Self::Database(e.to_string()),
            other => Self::Other(other.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let path_str = db_url.trim_start_matches("sqlite:");
        if !path_str.starts_with(":memory:") {
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    fn anime_repo(&self) -> repositories::anime::AnimeRepository {
        repositories::anime::AnimeRepository::new(self.conn.clone())
    }

    fn episode_repo(&self) -> repositories::episode::EpisodeRepository {
        repositories::episode::EpisodeRepository::new(self.conn.clone())
    }

    pub async fn list_animes(&self) -> Result<Vec<anime::Model>, StoreError> {
        self.anime_repo().list().await
    }

    pub async fn get_anime(&self, id: i32) -> Result<Option<anime::Model>, StoreError> {
        self.anime_repo().get(id).await
    }

    pub async fn insert_anime(&self, data: &AnimeData) -> Result<(), StoreError> {
        self.anime_repo().insert(data).await
    }

    pub async fn update_anime(&self, id: i32, data: &AnimeData) -> Result<(), StoreError> {
        self.anime_repo().update(id, data).await
    }

    pub async fn delete_anime(&self, id: i32) -> Result<(), StoreError> {
        self.anime_repo().delete(id).await
    }

    pub async fn list_episodes(
        &self,
        anime_id: i32,
        season: i32,
    ) -> Result<Vec<episode::Model>, StoreError> {
        self.episode_repo().list_for_season(anime_id, season).await
    }

    pub async fn get_episode(
        &self,
        anime_id: i32,
        season: i32,
        number: &str,
    ) -> Result<Option<episode::Model>, StoreError> {
        self.episode_repo().get(anime_id, season, number).await
    }

    pub async fn insert_episode(&self, record: &NewEpisode) -> Result<(), StoreError> {
        self.episode_repo().insert(record).await
    }

    pub async fn update_episode(
        &self,
        anime_id: i32,
        season: i32,
        number: &str,
        data: &EpisodeData,
    ) -> Result<(), StoreError> {
        self.episode_repo()
            .update(anime_id, season, number, data)
            .await
    }

    pub async fn delete_episode(
        &self,
        anime_id: i32,
        season: i32,
        number: &str,
    ) -> Result<(), StoreError> {
        self.episode_repo().delete(anime_id, season, number).await
    }

    pub async fn list_seasons(&self, anime_id: i32) -> Result<Vec<SeasonRow>, StoreError> {
        self.episode_repo().seasons(anime_id).await
    }

    pub async fn get_season(
        &self,
        anime_id: i32,
        season: i32,
    ) -> Result<Vec<SeasonRow>, StoreError> {
        self.episode_repo().season(anime_id, season).await
    }
}
