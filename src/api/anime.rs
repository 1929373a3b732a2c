use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;

use super::auth::authorize;
use super::validation::validate_anime;
use super::{AnimeDto, Animes, ApiError, AppState, JsonResponseMessage};

pub async fn list_animes(State(state): State<Arc<AppState>>) -> Result<Json<Animes>, ApiError> {
    let rows = state
        .store
        .list_animes()
        .await
        .map_err(|e| ApiError::from_store(e, StatusCode::BAD_REQUEST))?;

    if rows.is_empty() {
        return Err(ApiError::not_found("Não há animes para exibir"));
    }

    Ok(Json(Animes {
        animes: rows.into_iter().map(AnimeDto::from).collect(),
    }))
}

pub async fn get_anime(
    State(state): State<Arc<AppState>>,
    Path(anime_id): Path<i32>,
) -> Result<Json<AnimeDto>, ApiError> {
    let row = state
        .store
        .get_anime(anime_id)
        .await
        .map_err(|e| ApiError::from_store(e, StatusCode::NOT_FOUND))?;

    row.map_or_else(
        || Err(ApiError::not_found_info("Anime não encontrado")),
        |anime| Ok(Json(AnimeDto::from(anime))),
    )
}

pub async fn add_anime(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<JsonResponseMessage, ApiError> {
    if !authorize(&headers, state.config.auth.secret_token.as_deref()) {
        return Err(ApiError::forbidden());
    }

    let payload = validate_anime(body)?;
    if payload.is_empty() {
        return Err(ApiError::not_found("Dados inválidos"));
    }

    state
        .store
        .insert_anime(&payload)
        .await
        .map_err(|e| ApiError::from_store(e, StatusCode::BAD_REQUEST))?;

    Ok(JsonResponseMessage::success(
        StatusCode::CREATED,
        "Anime adicionado com sucesso",
    ))
}

pub async fn modify_anime(
    State(state): State<Arc<AppState>>,
    Path(anime_id): Path<i32>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<JsonResponseMessage, ApiError> {
    if !authorize(&headers, state.config.auth.secret_token.as_deref()) {
        return Err(ApiError::forbidden());
    }

    let mut payload = validate_anime(body)?;
    // The id comes from the path; one supplied in the body is discarded.
    payload.id = None;

    if payload.is_empty() {
        return Err(ApiError::not_found("Dados inválidos"));
    }

    state
        .store
        .update_anime(anime_id, &payload)
        .await
        .map_err(|e| ApiError::from_store(e, StatusCode::NOT_FOUND))?;

    Ok(JsonResponseMessage::success(
        StatusCode::OK,
        "Anime alterado com sucesso",
    ))
}

/// No existence check: deleting an absent id succeeds with the same 204.
pub async fn delete_anime(
    State(state): State<Arc<AppState>>,
    Path(anime_id): Path<i32>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    if !authorize(&headers, state.config.auth.secret_token.as_deref()) {
        return Err(ApiError::forbidden());
    }

    state
        .store
        .delete_anime(anime_id)
        .await
        .map_err(|e| ApiError::from_store(e, StatusCode::BAD_REQUEST))?;

    Ok(StatusCode::NO_CONTENT)
}
