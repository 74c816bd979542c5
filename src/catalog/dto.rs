use serde::{Deserialize, Serialize};

// ---- upstream payloads ----

/// One page of a paginated catalog listing or search.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    #[serde(default)]
    pub results: Vec<CatalogMovie>,
}

/// A movie as the catalog reports it. Only the fields we project are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogMovie {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub overview: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoList {
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Video {
    pub key: String,
    #[serde(default)]
    pub site: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageList {
    #[serde(default)]
    pub backdrops: Vec<ImageRecord>,
}

/// Backdrop image metadata, passed through unchanged to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub file_path: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub aspect_ratio: f64,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u32,
    #[serde(default)]
    pub iso_639_1: Option<String>,
}

// ---- public shapes ----

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    pub rating: f64,
    pub description: String,
    pub trailer_url: Option<String>,
    pub images: Vec<ImageRecord>,
}
