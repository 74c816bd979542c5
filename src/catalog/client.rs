use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::TmdbConfig;

/// Failure talking to the upstream catalog. No variant is retried.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("catalog request to {path} returned status {status}")]
    Status { path: String, status: u16 },

    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("catalog payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}

/// How the `language` query parameter is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Language {
    Default,
    Override(String),
    Omit,
}

/// A single GET against the catalog, relative to its base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRequest {
    pub path: String,
    pub params: Vec<(&'static str, String)>,
    pub language: Language,
}

impl CatalogRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
            language: Language::Default,
        }
    }

    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    pub fn without_language(mut self) -> Self {
        self.language = Language::Omit;
        self
    }

    #[cfg(test)]
    pub fn with_language(mut self, lang: impl Into<String>) -> Self {
        self.language = Language::Override(lang.into());
        self
    }

    /// Query string pairs with the API key and language applied.
    pub fn query(&self, api_key: &str, default_language: &str) -> Vec<(&'static str, String)> {
        let mut query = vec![("api_key", api_key.to_string())];
        match &self.language {
            Language::Default => query.push(("language", default_language.to_string())),
            Language::Override(lang) => query.push(("language", lang.clone())),
            Language::Omit => {}
        }
        query.extend(self.params.iter().cloned());
        query
    }
}

#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self, request: CatalogRequest) -> Result<Value, UpstreamError>;
}

/// HTTP client for The Movie Database v3 API.
#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl TmdbClient {
    pub fn new(cfg: &TmdbConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .context("build catalog http client")?;
        Ok(Self {
            http,
            base_url: cfg.base_url.trim_end_matches('/').to_string(),
            api_key: cfg.api_key.clone(),
            language: cfg.language.clone(),
        })
    }
}

#[async_trait]
impl CatalogSource for TmdbClient {
    async fn fetch(&self, request: CatalogRequest) -> Result<Value, UpstreamError> {
        let url = format!("{}/{}", self.base_url, request.path.trim_start_matches('/'));
        let query = request.query(&self.api_key, &self.language);

        let res = self.http.get(&url).query(&query).send().await.map_err(|e| {
            warn!(error = %e, path = %request.path, "catalog request failed");
            UpstreamError::Transport(e)
        })?;

        let status = res.status();
        if !status.is_success() {
            warn!(path = %request.path, status = status.as_u16(), "catalog returned error status");
            return Err(UpstreamError::Status {
                path: request.path,
                status: status.as_u16(),
            });
        }

        let body = res.json::<Value>().await?;
        debug!(path = %request.path, "catalog response received");
        Ok(body)
    }
}
