use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;

use super::auth::authorize;
use super::validation::validate_episode;
use super::{ApiError, AppState, EpisodeDto, JsonResponseMessage, SeasonEpisodes};

pub async fn list_episodes(
    State(state): State<Arc<AppState>>,
    Path((anime_id, season_num)): Path<(i32, i32)>,
) -> Result<Json<SeasonEpisodes>, ApiError> {
    let rows = state
        .store
        .list_episodes(anime_id, season_num)
        .await
        .map_err(|e| ApiError::from_store(e, StatusCode::NOT_FOUND))?;

    if rows.is_empty() {
        return Err(ApiError::not_found("Não há episódios para exibir"));
    }

    let episodes = rows
        .into_iter()
        .map(EpisodeDto::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(SeasonEpisodes {
        season: season_num,
        episodes,
    }))
}

pub async fn get_episode(
    State(state): State<Arc<AppState>>,
    Path((anime_id, season_num, ep_num)): Path<(i32, i32, i64)>,
) -> Result<Json<EpisodeDto>, ApiError> {
    let row = state
        .store
        .get_episode(anime_id, season_num, &ep_num.to_string())
        .await
        .map_err(|e| ApiError::from_store(e, StatusCode::BAD_REQUEST))?;

    let Some(episode) = row else {
        return Err(ApiError::not_found_info("Não há episódios para exibir"));
    };

    Ok(Json(EpisodeDto::try_from(episode)?))
}

pub async fn add_episode(
    State(state): State<Arc<AppState>>,
    Path((_anime_id, season_num)): Path<(i32, i32)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<JsonResponseMessage, ApiError> {
    if !authorize(&headers, state.config.auth.secret_token.as_deref()) {
        return Err(ApiError::forbidden());
    }

    // A missing field and a body/path season mismatch are the same rejection.
    let payload = validate_episode(body)?;
    let record = payload
        .into_new()
        .filter(|record| record.season == season_num)
        .ok_or_else(|| ApiError::bad_request("Dados inválidos"))?;

    state
        .store
        .insert_episode(&record)
        .await
        .map_err(|e| ApiError::from_store(e, StatusCode::NOT_FOUND))?;

    Ok(JsonResponseMessage::success(
        StatusCode::CREATED,
        "Episódio adicionado com sucesso",
    ))
}

/// Partial update keyed by the path triple; no field-presence or existence
/// check, so an empty body and a missing row both report success.
pub async fn modify_episode(
    State(state): State<Arc<AppState>>,
    Path((anime_id, season_num, ep_num)): Path<(i32, i32, i64)>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<JsonResponseMessage, ApiError> {
    if !authorize(&headers, state.config.auth.secret_token.as_deref()) {
        return Err(ApiError::forbidden());
    }

    let payload = validate_episode(body)?;

    state
        .store
        .update_episode(anime_id, season_num, &ep_num.to_string(), &payload)
        .await
        .map_err(|e| ApiError::from_store(e, StatusCode::NOT_FOUND))?;

    Ok(JsonResponseMessage::success(
        StatusCode::OK,
        "Episódio modificado com sucesso",
    ))
}

pub async fn delete_episode(
    State(state): State<Arc<AppState>>,
    Path((anime_id, season_num, ep_num)): Path<(i32, i32, i64)>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    if !authorize(&headers, state.config.auth.secret_token.as_deref()) {
        return Err(ApiError::forbidden());
    }

    state
        .store
        .delete_episode(anime_id, season_num, &ep_num.to_string())
        .await
        .map_err(|e| ApiError::from_store(e, StatusCode::NOT_FOUND))?;

    Ok(StatusCode::NO_CONTENT)
}
