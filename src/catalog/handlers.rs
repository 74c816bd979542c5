use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use tracing::instrument;

use super::dto::{MovieDetail, MovieSummary};
use super::services::Listing;
use crate::{error::AppError, extract::ApiPath, state::AppState};

pub fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/movies/random", get(random_movies))
        .route("/movies/popular", get(popular))
        .route("/movies/top", get(top_rated))
        .route("/movies/upcoming", get(upcoming))
        .route("/movies/playing", get(now_playing))
        .route("/movies/:id", get(movie_by_id))
        .route("/movie/:name", get(movie_by_name))
}

#[instrument(skip(state))]
pub async fn random_movies(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieSummary>>, AppError> {
    Ok(Json(state.catalog.random_movies().await?))
}

async fn listing(state: &AppState, kind: Listing) -> Result<Json<Vec<MovieSummary>>, AppError> {
    Ok(Json(state.catalog.listing(kind).await?))
}

pub async fn popular(State(state): State<AppState>) -> Result<Json<Vec<MovieSummary>>, AppError> {
    listing(&state, Listing::Popular).await
}

pub async fn top_rated(State(state): State<AppState>) -> Result<Json<Vec<MovieSummary>>, AppError> {
    listing(&state, Listing::TopRated).await
}

pub async fn upcoming(State(state): State<AppState>) -> Result<Json<Vec<MovieSummary>>, AppError> {
    listing(&state, Listing::Upcoming).await
}

pub async fn now_playing(
    State(state): State<AppState>,
) -> Result<Json<Vec<MovieSummary>>, AppError> {
    listing(&state, Listing::NowPlaying).await
}

#[instrument(skip(state))]
pub async fn movie_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<MovieDetail>, AppError> {
    Ok(Json(state.catalog.movie_detail(id).await?))
}

#[instrument(skip(state))]
pub async fn movie_by_name(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> Result<Json<MovieDetail>, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest("Nombre de película requerido".into()));
    }
    Ok(Json(state.catalog.movie_detail_by_name(name).await?))
}
