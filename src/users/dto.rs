use serde::{de, Deserialize, Deserializer, Serialize};

/// Body of the favorite add/remove routes.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    #[serde(deserialize_with = "movie_id")]
    pub movie_id: i64,
}

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub favoritos: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub existe: bool,
}

/// Movie ids arrive as JSON numbers or numeric strings; both compare as `i64`.
fn movie_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::custom(format!("movieId is not numeric: {s}"))),
    }
}
