use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use super::{ApiError, AppState, SeasonDto, Seasons};

/// Seasons are derived, never stored: each row is a `GROUP BY season` over
/// the episode table. There are no mutating season operations.
pub async fn list_seasons(
    State(state): State<Arc<AppState>>,
    Path(anime_id): Path<i32>,
) -> Result<Json<Seasons>, ApiError> {
    let rows = state
        .store
        .list_seasons(anime_id)
        .await
        .map_err(|e| ApiError::from_store(e, StatusCode::BAD_REQUEST))?;

    if rows.is_empty() {
        return Err(ApiError::not_found_info("Não há episódios para exibir"));
    }

    Ok(Json(Seasons {
        seasons: rows
            .into_iter()
            .map(|row| SeasonDto {
                season: row.season,
                episodes: row.episodes,
            })
            .collect(),
    }))
}

pub async fn get_season(
    State(state): State<Arc<AppState>>,
    Path((anime_id, season_num)): Path<(i32, i32)>,
) -> Result<Json<Seasons>, ApiError> {
    let rows = state
        .store
        .get_season(anime_id, season_num)
        .await
        .map_err(|e| ApiError::from_store(e, StatusCode::BAD_REQUEST))?;

    if rows.is_empty() {
        return Err(ApiError::not_found_info("Não há episódio para exibir"));
    }

    Ok(Json(Seasons {
        seasons: rows
            .into_iter()
            .map(|row| SeasonDto {
                season: row.season,
                episodes: row.episodes,
            })
            .collect(),
    }))
}
