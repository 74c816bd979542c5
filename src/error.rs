use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::catalog::{CatalogError, UpstreamError};
use crate::users::repo::StoreError;

const GENERIC_FAILURE: &str = "Error interno del servidor";

/// Every failure a route can surface. Status codes are decided in one place,
/// `IntoResponse` below.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("missing bearer credential")]
    MissingCredential,

    #[error("invalid or expired token")]
    InvalidToken,

    #[error("password mismatch")]
    InvalidCredentials,

    #[error("{0}")]
    NotFound(String),

    #[error("email already registered")]
    DuplicateEmail,

    #[error("upstream catalog failure: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MissingCredential | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DuplicateEmail => StatusCode::CONFLICT,
            AppError::Upstream(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn public_message(&self) -> String {
        match self {
            AppError::BadRequest(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::MissingCredential => "Token requerido".into(),
            AppError::InvalidToken => "Token inválido o expirado".into(),
            AppError::InvalidCredentials => "Contraseña incorrecta".into(),
            AppError::DuplicateEmail => "El correo ya está registrado".into(),
            AppError::Upstream(_) | AppError::Internal(_) => GENERIC_FAILURE.into(),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Upstream(inner) => AppError::Upstream(inner),
            CatalogError::NotFound(msg) => AppError::NotFound(msg),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::DuplicateEmail => AppError::DuplicateEmail,
            StoreError::Database(inner) => AppError::Internal(anyhow::Error::new(inner)),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "rejected request body");
        AppError::BadRequest("Cuerpo de la petición inválido".into())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        warn!(error = %rejection.body_text(), "rejected path parameter");
        AppError::BadRequest("Parámetro de ruta inválido".into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}
