use serde::Deserialize;

/// Anime field set for create and partial update. A `None` field was absent
/// from the request body and is left untouched in storage.
///
/// Typing is passthrough: serde rejects values of the wrong shape, nothing
/// else is normalized.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AnimeData {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub categories: Option<String>,
    pub year: Option<String>,
    pub sinopse: Option<String>,
    pub url: Option<String>,
    pub rate: Option<f64>,
}

impl AnimeData {
    pub const fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.name.is_none()
            && self.categories.is_none()
            && self.year.is_none()
            && self.sinopse.is_none()
            && self.url.is_none()
            && self.rate.is_none()
    }
}
