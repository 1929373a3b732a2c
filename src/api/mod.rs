use axum::{
    Router,
    http::HeaderValue,
    routing::{delete, get, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Store;

mod anime;
pub mod auth;
mod episodes;
mod error;
mod seasons;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,

    pub store: Store,
}

pub async fn create_app_state(config: Config) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;

    Ok(Arc::new(AppState { config, store }))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let cors_layer = if cors_origins.contains(&"*".to_string()) {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .route("/anime", get(anime::list_animes))
        .route("/anime", post(anime::add_anime))
        .route("/anime/{anime_id}", get(anime::get_anime))
        .route("/anime/{anime_id}", put(anime::modify_anime))
        .route("/anime/{anime_id}", delete(anime::delete_anime))
        .route("/anime/{anime_id}/season", get(seasons::list_seasons))
        .route(
            "/anime/{anime_id}/season/{season_num}",
            get(seasons::get_season),
        )
        .route(
            "/anime/{anime_id}/season/{season_num}/episode",
            get(episodes::list_episodes),
        )
        .route(
            "/anime/{anime_id}/season/{season_num}/episode",
            post(episodes::add_episode),
        )
        .route(
            "/anime/{anime_id}/season/{season_num}/episode/{ep_num}",
            get(episodes::get_episode),
        )
        .route(
            "/anime/{anime_id}/season/{season_num}/episode/{ep_num}",
            put(episodes::modify_episode),
        )
        .route(
            "/anime/{anime_id}/season/{season_num}/episode/{ep_num}",
            delete(episodes::delete_episode),
        )
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
