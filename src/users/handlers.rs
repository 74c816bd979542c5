use axum::{
    extract::State,
    routing::{get, put},
    Json, Router,
};
use tracing::instrument;

use super::dto::{ExistsResponse, FavoriteRequest, FavoritesResponse};
use super::favorites;
use crate::{
    auth::jwt::AuthUser,
    error::AppError,
    extract::{ApiJson, ApiPath},
    state::AppState,
};

pub fn favorites_routes() -> Router<AppState> {
    Router::new()
        .route("/user/favoritos", put(add_favorite).delete(remove_favorite))
        .route("/user/verificar/:movie_id", get(has_favorite))
}

#[instrument(skip(state))]
pub async fn add_favorite(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(body): ApiJson<FavoriteRequest>,
) -> Result<Json<FavoritesResponse>, AppError> {
    let favoritos = favorites::add_favorite(state.users.as_ref(), user_id, body.movie_id).await?;
    Ok(Json(FavoritesResponse { favoritos }))
}

#[instrument(skip(state))]
pub async fn remove_favorite(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiJson(body): ApiJson<FavoriteRequest>,
) -> Result<Json<FavoritesResponse>, AppError> {
    let favoritos =
        favorites::remove_favorite(state.users.as_ref(), user_id, body.movie_id).await?;
    Ok(Json(FavoritesResponse { favoritos }))
}

#[instrument(skip(state))]
pub async fn has_favorite(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    ApiPath(movie_id): ApiPath<i64>,
) -> Result<Json<ExistsResponse>, AppError> {
    let existe = favorites::has_favorite(state.users.as_ref(), user_id, movie_id).await?;
    Ok(Json(ExistsResponse { existe }))
}
