use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::instrument;

use super::{
    dto::{Credentials, LoginResponse, RegisteredUser, VerifyResponse},
    jwt::{AuthUser, JwtKeys},
    services,
};
use crate::{error::AppError, extract::ApiJson, state::AppState};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/verify", get(verify))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Credentials>,
) -> Result<(StatusCode, Json<RegisteredUser>), AppError> {
    let user = services::register(state.users.as_ref(), &payload.email, &payload.password).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<Credentials>,
) -> Result<Json<LoginResponse>, AppError> {
    let keys = JwtKeys::from_ref(&state);
    let session =
        services::login(state.users.as_ref(), &keys, &payload.email, &payload.password).await?;
    Ok(Json(session))
}

pub async fn verify(AuthUser(user_id): AuthUser) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        logged_in: true,
        user_id,
    })
}
