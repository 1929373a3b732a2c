use sea_orm::FromQueryResult;

/// Episode field set after validation. Used both for create (where every
/// field must be present) and for partial update (any subset).
#[derive(Debug, Default, Clone)]
pub struct EpisodeData {
    pub id: Option<i32>,
    pub anime_id: Option<i32>,
    pub number: Option<i64>,
    pub date: Option<String>,
    pub season: Option<i32>,
    pub url: Option<String>,
}

impl EpisodeData {
    pub const fn has_changes(&self) -> bool {
        self.id.is_some()
            || self.anime_id.is_some()
            || self.number.is_some()
            || self.date.is_some()
            || self.season.is_some()
            || self.url.is_some()
    }

    /// Converts into a full insert record, `None` when any field is missing.
    /// `number` becomes its text representation here; storage never sees the
    /// integer form.
    pub fn into_new(self) -> Option<NewEpisode> {
        Some(NewEpisode {
            id: self.id?,
            anime_id: self.anime_id?,
            number: self.number?.to_string(),
            date: self.date?,
            season: self.season?,
            url: self.url?,
        })
    }
}

/// Fully-validated episode record ready for insertion.
#[derive(Debug, Clone)]
pub struct NewEpisode {
    pub id: i32,
    pub anime_id: i32,
    pub number: String,
    pub date: String,
    pub season: i32,
    pub url: String,
}

/// Aggregated season row derived from the episode table.
#[derive(Debug, Clone, FromQueryResult)]
pub struct SeasonRow {
    pub season: i32,
    pub episodes: i64,
}
