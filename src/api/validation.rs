use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

use crate::models::anime::AnimeData;
use crate::models::episode::EpisodeData;

use super::ApiError;

/// Anime bodies are passthrough-typed: serde enforces field shapes, nothing
/// is normalized.
pub fn validate_anime(body: Value) -> Result<AnimeData, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::unprocessable(e.to_string()))
}

#[derive(Debug, Default, Deserialize)]
struct EpisodeBody {
    id: Option<i32>,
    anime_id: Option<i32>,
    number: Option<i64>,
    date: Option<String>,
    season: Option<Value>,
    url: Option<String>,
}

/// Episode bodies get two normalizations: `date` values in date/datetime
/// form are reformatted to `YYYY-MM-DD`, and `season` is coerced to an
/// integer from whatever the body carried.
pub fn validate_episode(body: Value) -> Result<EpisodeData, ApiError> {
    let body: EpisodeBody =
        serde_json::from_value(body).map_err(|e| ApiError::unprocessable(e.to_string()))?;

    let season = body.season.as_ref().map(coerce_season).transpose()?;

    Ok(EpisodeData {
        id: body.id,
        anime_id: body.anime_id,
        number: body.number,
        date: body.date.map(|d| normalize_date(&d)),
        season,
        url: body.url,
    })
}

/// Reformats date and datetime inputs to `YYYY-MM-DD`. Strings in any other
/// form pass through unchanged; only structured date values are normalized.
fn normalize_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.date().format("%Y-%m-%d").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

/// Integer coercion for the season field; the failure message names the
/// rejected value.
fn coerce_season(value: &Value) -> Result<i32, ApiError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| ApiError::unprocessable(format!("invalid literal for season: {value}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_date_from_datetime() {
        assert_eq!(normalize_date("2021-01-05T20:30:00"), "2021-01-05");
        assert_eq!(normalize_date("2021-01-05T20:30:00+02:00"), "2021-01-05");
        assert_eq!(normalize_date("2021-01-05"), "2021-01-05");
    }

    #[test]
    fn test_normalize_date_passes_other_strings_through() {
        assert_eq!(normalize_date("05/01/2021"), "05/01/2021");
        assert_eq!(normalize_date("soon"), "soon");
    }

    #[test]
    fn test_coerce_season_accepts_integers_and_strings() {
        assert_eq!(coerce_season(&json!(2)).unwrap(), 2);
        assert_eq!(coerce_season(&json!("3")).unwrap(), 3);
        assert_eq!(coerce_season(&json!(4.0)).unwrap(), 4);
    }

    #[test]
    fn test_coerce_season_rejects_non_integers() {
        assert!(coerce_season(&json!("two")).is_err());
        assert!(coerce_season(&json!(2.5)).is_err());
        assert!(coerce_season(&json!([1])).is_err());
    }

    #[test]
    fn test_validate_episode_normalizes_fields() {
        let data = validate_episode(json!({
            "id": 1,
            "anime_id": 5,
            "number": 3,
            "date": "2021-01-05T20:30:00",
            "season": "2",
            "url": "http://example.com/ep3"
        }))
        .unwrap();

        assert_eq!(data.date.as_deref(), Some("2021-01-05"));
        assert_eq!(data.season, Some(2));
        assert!(data.has_changes());
        assert!(data.into_new().is_some());
    }

    #[test]
    fn test_validate_episode_incomplete_body() {
        let data = validate_episode(json!({"number": 3})).unwrap();
        assert!(data.has_changes());
        assert!(data.into_new().is_none());

        let empty = validate_episode(json!({})).unwrap();
        assert!(!empty.has_changes());
    }

    #[test]
    fn test_validate_anime_rejects_wrong_types() {
        assert!(validate_anime(json!({"rate": "not a number"})).is_err());
        assert!(validate_anime(json!({"name": "Bleach", "rate": 8.2})).is_ok());
    }

    #[test]
    fn test_validate_anime_empty_body() {
        let data = validate_anime(json!({})).unwrap();
        assert!(data.is_empty());
    }
}
