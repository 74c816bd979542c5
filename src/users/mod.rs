use crate::state::AppState;
use axum::Router;

pub mod dto;
pub mod favorites;
pub mod handlers;
#[cfg(test)]
pub(crate) mod memory;
pub mod repo;
pub mod repo_types;

pub use repo::{PgUserStore, UserStore};

pub fn router() -> Router<AppState> {
    handlers::favorites_routes()
}
