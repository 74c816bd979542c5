use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_days: i64,
}

/// Settings for the third-party movie catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
    pub image_base_url: String,
    pub language: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt: JwtConfig,
    pub tmdb: TmdbConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Only presence of the
    /// required keys is checked; values are taken as-is.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).with_context(|| format!("{key} must be set"));
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.into());
        let parsed_or = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(default)
        };

        let jwt = JwtConfig {
            secret: required("JWT_SECRET")?,
            issuer: or_default("JWT_ISSUER", "cartelera"),
            audience: or_default("JWT_AUDIENCE", "cartelera-users"),
            ttl_days: lookup("JWT_TTL_DAYS")
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(7),
        };
        let tmdb = TmdbConfig {
            api_key: required("TMDB_API_KEY")?,
            base_url: or_default("TMDB_BASE_URL", "https://api.themoviedb.org/3"),
            image_base_url: or_default("TMDB_IMAGE_BASE_URL", "https://image.tmdb.org/t/p/w500"),
            language: or_default("TMDB_LANGUAGE", "es-MX"),
            timeout_secs: parsed_or("UPSTREAM_TIMEOUT_SECS", 30),
        };

        Ok(Self {
            host: or_default("APP_HOST", "0.0.0.0"),
            port: lookup("PORT")
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(3001),
            database_url: required("DATABASE_URL")?,
            jwt,
            tmdb,
        })
    }
}
