use tracing::{debug, instrument, warn};
use uuid::Uuid;

use super::repo::UserStore;
use super::repo_types::User;
use crate::error::AppError;

/// Appends `movie_id` unless already present. Returns whether the list changed.
pub(crate) fn insert_unique(favorites: &mut Vec<i64>, movie_id: i64) -> bool {
    if favorites.contains(&movie_id) {
        return false;
    }
    favorites.push(movie_id);
    true
}

/// Drops every occurrence of `movie_id`. Returns whether the list changed.
pub(crate) fn remove_all(favorites: &mut Vec<i64>, movie_id: i64) -> bool {
    let before = favorites.len();
    favorites.retain(|id| *id != movie_id);
    favorites.len() != before
}

async fn load_user(store: &dyn UserStore, user_id: Uuid) -> Result<User, AppError> {
    match store.find_by_id(user_id).await? {
        Some(user) => Ok(user),
        None => {
            warn!(%user_id, "user not found");
            Err(AppError::NotFound("Usuario no encontrado".into()))
        }
    }
}

#[instrument(skip(store))]
pub async fn add_favorite(
    store: &dyn UserStore,
    user_id: Uuid,
    movie_id: i64,
) -> Result<Vec<i64>, AppError> {
    let mut user = load_user(store, user_id).await?;
    if insert_unique(&mut user.favorites, movie_id) {
        store.save_favorites(user_id, &user.favorites).await?;
        debug!(%user_id, movie_id, "favorite added");
    }
    Ok(user.favorites)
}

#[instrument(skip(store))]
pub async fn remove_favorite(
    store: &dyn UserStore,
    user_id: Uuid,
    movie_id: i64,
) -> Result<Vec<i64>, AppError> {
    let mut user = load_user(store, user_id).await?;
    if remove_all(&mut user.favorites, movie_id) {
        store.save_favorites(user_id, &user.favorites).await?;
        debug!(%user_id, movie_id, "favorite removed");
    }
    Ok(user.favorites)
}

#[instrument(skip(store))]
pub async fn has_favorite(
    store: &dyn UserStore,
    user_id: Uuid,
    movie_id: i64,
) -> Result<bool, AppError> {
    let user = load_user(store, user_id).await?;
    Ok(user.favorites.contains(&movie_id))
}
