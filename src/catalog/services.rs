use std::sync::Arc;

use rand::{seq::SliceRandom, Rng};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use super::client::{CatalogRequest, CatalogSource, UpstreamError};
use super::dto::{CatalogMovie, ImageList, MovieDetail, MovieSummary, PageResponse, VideoList};
use super::projector;

/// Pages of the popular listing the random pick draws from.
pub(crate) const RANDOM_PAGE_SPAN: u32 = 10;
pub(crate) const RANDOM_COUNT: usize = 10;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("{0}")]
    NotFound(String),
}

/// Fixed upstream listings exposed as summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Popular,
    TopRated,
    Upcoming,
    NowPlaying,
}

impl Listing {
    pub fn path(self) -> &'static str {
        match self {
            Listing::Popular => "movie/popular",
            Listing::TopRated => "movie/top_rated",
            Listing::Upcoming => "movie/upcoming",
            Listing::NowPlaying => "movie/now_playing",
        }
    }
}

/// Typed access to the catalog plus the projections served to clients.
#[derive(Clone)]
pub struct Catalog {
    source: Arc<dyn CatalogSource>,
    image_base_url: String,
}

impl Catalog {
    pub fn new(source: Arc<dyn CatalogSource>, image_base_url: impl Into<String>) -> Self {
        Self {
            source,
            image_base_url: image_base_url.into(),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, request: CatalogRequest) -> Result<T, UpstreamError> {
        let path = request.path.clone();
        let raw = self.source.fetch(request).await?;
        serde_json::from_value(raw).map_err(|e| {
            warn!(error = %e, %path, "unexpected catalog payload");
            UpstreamError::Decode(e)
        })
    }

    fn project_all(&self, movies: Vec<CatalogMovie>) -> Vec<MovieSummary> {
        movies
            .into_iter()
            .map(|m| projector::summary(m, &self.image_base_url))
            .collect()
    }

    /// Up to ten movies from a random popular page, in random order.
    #[instrument(skip(self))]
    pub async fn random_movies(&self) -> Result<Vec<MovieSummary>, CatalogError> {
        let page = rand::thread_rng().gen_range(1..=RANDOM_PAGE_SPAN);
        debug!(page, "random page chosen");

        let listing: PageResponse = self
            .fetch(CatalogRequest::new(Listing::Popular.path()).param("page", page))
            .await?;

        let mut movies = listing.results;
        movies.shuffle(&mut rand::thread_rng());
        movies.truncate(RANDOM_COUNT);
        Ok(self.project_all(movies))
    }

    #[instrument(skip(self))]
    pub async fn listing(&self, kind: Listing) -> Result<Vec<MovieSummary>, CatalogError> {
        let listing: PageResponse = self.fetch(CatalogRequest::new(kind.path())).await?;
        Ok(self.project_all(listing.results))
    }

    /// Details, videos and images are fetched concurrently; any failure fails
    /// the whole lookup.
    #[instrument(skip(self))]
    pub async fn movie_detail(&self, id: i64) -> Result<MovieDetail, CatalogError> {
        let (details, videos, images) = tokio::try_join!(
            self.fetch::<CatalogMovie>(CatalogRequest::new(format!("movie/{id}"))),
            self.fetch::<VideoList>(CatalogRequest::new(format!("movie/{id}/videos"))),
            self.fetch::<ImageList>(CatalogRequest::new(format!("movie/{id}/images")).without_language()),
        )?;
        Ok(projector::detail(details, &videos, images))
    }

    /// Resolves `name` to the catalog's top search hit, then loads its detail.
    #[instrument(skip(self))]
    pub async fn movie_detail_by_name(&self, name: &str) -> Result<MovieDetail, CatalogError> {
        let found: PageResponse = self
            .fetch(CatalogRequest::new("search/movie").param("query", name))
            .await?;

        let Some(first) = found.results.into_iter().next() else {
            debug!(%name, "search returned no results");
            return Err(CatalogError::NotFound("Película no encontrada".into()));
        };
        self.movie_detail(first.id).await
    }
}
