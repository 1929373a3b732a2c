use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::entities::{anime, episode};

use super::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Info,
    Error,
    Success,
}

/// Uniform envelope for every response that carries no entity payload.
/// `status_code` mirrors the HTTP status of the response itself.
#[derive(Debug, Serialize)]
pub struct JsonResponseMessage {
    pub status_code: u16,
    pub message_type: MessageType,
    pub message: String,
}

impl JsonResponseMessage {
    pub fn new(status: StatusCode, message_type: MessageType, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message_type,
            message: message.into(),
        }
    }

    pub fn info(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, MessageType::Info, message)
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, MessageType::Error, message)
    }

    pub fn success(status: StatusCode, message: impl Into<String>) -> Self {
        Self::new(status, MessageType::Success, message)
    }
}

impl IntoResponse for JsonResponseMessage {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct AnimeDto {
    pub id: i32,
    pub name: Option<String>,
    pub categories: Option<String>,
    pub year: Option<String>,
    pub sinopse: Option<String>,
    pub url: Option<String>,
    pub rate: Option<f64>,
}

impl From<anime::Model> for AnimeDto {
    fn from(model: anime::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            categories: model.categories,
            year: model.year,
            sinopse: model.sinopse,
            url: model.url,
            rate: model.rate,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Animes {
    pub animes: Vec<AnimeDto>,
}

#[derive(Debug, Serialize)]
pub struct EpisodeDto {
    pub id: i32,
    pub anime_id: i32,
    pub number: i64,
    pub date: String,
    pub season: i32,
    pub url: String,
}

impl TryFrom<episode::Model> for EpisodeDto {
    type Error = ApiError;

    /// `number` is stored as text; a row that cannot be read back as an
    /// integer surfaces as a data error.
    fn try_from(model: episode::Model) -> Result<Self, Self::Error> {
        let number = model.number.parse::<i64>().map_err(|e| {
            ApiError::unprocessable(format!("invalid episode number '{}': {e}", model.number))
        })?;

        Ok(Self {
            id: model.id,
            anime_id: model.anime_id,
            number,
            date: model.date,
            season: model.season,
            url: model.url,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct SeasonEpisodes {
    pub season: i32,
    pub episodes: Vec<EpisodeDto>,
}

#[derive(Debug, Serialize)]
pub struct SeasonDto {
    pub season: i32,
    pub episodes: i64,
}

#[derive(Debug, Serialize)]
pub struct Seasons {
    pub seasons: Vec<SeasonDto>,
}
