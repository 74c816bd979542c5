use crate::state::AppState;
use axum::Router;

pub mod client;
pub mod dto;
pub mod handlers;
mod projector;
pub mod services;
#[cfg(test)]
pub(crate) mod fake;

pub use client::{CatalogSource, TmdbClient, UpstreamError};
pub use services::{Catalog, CatalogError};

pub fn router() -> Router<AppState> {
    handlers::movie_routes()
}
