use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use super::dto::LoginResponse;
use super::jwt::JwtKeys;
use super::password::{hash_password, verify_password};
use crate::error::AppError;
use crate::users::{repo_types::User, UserStore};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();
    if !is_valid_email(&email) {
        warn!(%email, "invalid email");
        return Err(AppError::BadRequest("Correo inválido".into()));
    }
    Ok(email)
}

#[instrument(skip(store, password))]
pub async fn register(store: &dyn UserStore, email: &str, password: &str) -> Result<User, AppError> {
    let email = normalize_email(email)?;
    if password.is_empty() {
        return Err(AppError::BadRequest("Contraseña requerida".into()));
    }

    if store.find_by_email(&email).await?.is_some() {
        warn!(%email, "email already registered");
        return Err(AppError::DuplicateEmail);
    }

    let hash = hash_password(password)?;
    let user = store.create(&email, &hash).await?;
    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(user)
}

#[instrument(skip(store, keys, password))]
pub async fn login(
    store: &dyn UserStore,
    keys: &JwtKeys,
    email: &str,
    password: &str,
) -> Result<LoginResponse, AppError> {
    // Unknown addresses, well-formed or not, are a plain lookup miss.
    let email = email.trim().to_lowercase();

    let Some(user) = store.find_by_email(&email).await? else {
        warn!(%email, "login unknown email");
        return Err(AppError::NotFound("Usuario no encontrado".into()));
    };

    if !verify_password(password, &user.password_hash)? {
        warn!(%email, user_id = %user.id, "login invalid password");
        return Err(AppError::InvalidCredentials);
    }

    let token = keys.sign(user.id)?;
    info!(user_id = %user.id, "user logged in");
    Ok(LoginResponse {
        token,
        email: user.email,
        favorites: user.favorites,
    })
}

/// Resolves a session token to its user id.
pub fn verify_session(keys: &JwtKeys, token: &str) -> Result<Uuid, AppError> {
    keys.verify(token).map(|claims| claims.sub).map_err(|e| {
        warn!(error = %e, "invalid or expired token");
        AppError::InvalidToken
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JwtConfig;
    use crate::users::{favorites, memory::MemoryUserStore};

    fn keys() -> JwtKeys {
        JwtKeys::new(&JwtConfig {
            secret: "test".into(),
            issuer: "test".into(),
            audience: "test".into(),
            ttl_days: 7,
        })
    }

    #[test]
    fn email_validation() {
        assert!(is_valid_email("a@x.com"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("no-at.com"));
        assert!(!is_valid_email("a b@x.com"));
    }

    #[tokio::test]
    async fn register_then_login_then_favorite() {
        let store = MemoryUserStore::default();
        let keys = keys();

        let user = register(&store, "a@x.com", "secret").await.unwrap();
        assert!(user.favorites.is_empty());
        assert_ne!(user.password_hash, "secret");

        let session = login(&store, &keys, "a@x.com", "secret").await.unwrap();
        assert!(session.favorites.is_empty());
        assert_eq!(session.email, "a@x.com");

        let user_id = verify_session(&keys, &session.token).unwrap();
        assert_eq!(user_id, user.id);

        favorites::add_favorite(&store, user_id, 42).await.unwrap();
        assert!(favorites::has_favorite(&store, user_id, 42).await.unwrap());
    }

    #[tokio::test]
    async fn register_normalizes_email() {
        let store = MemoryUserStore::default();
        let user = register(&store, "  A@X.com ", "secret").await.unwrap();
        assert_eq!(user.email, "a@x.com");
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected() {
        let store = MemoryUserStore::default();
        register(&store, "a@x.com", "secret").await.unwrap();
        let err = register(&store, "A@x.com", "other").await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateEmail));
    }

    #[tokio::test]
    async fn register_validates_input() {
        let store = MemoryUserStore::default();
        assert!(matches!(
            register(&store, "bad", "secret").await.unwrap_err(),
            AppError::BadRequest(_)
        ));
        assert!(matches!(
            register(&store, "a@x.com", "").await.unwrap_err(),
            AppError::BadRequest(_)
        ));
    }

    #[tokio::test]
    async fn login_failures_leave_record_untouched() {
        let store = MemoryUserStore::default();
        let user = register(&store, "a@x.com", "secret").await.unwrap();
        let before = store.snapshot(user.id).await.unwrap();

        let err = login(&store, &keys(), "nobody@x.com", "secret").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = login(&store, &keys(), "a@x.com", "wrong").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidCredentials));

        assert_eq!(store.snapshot(user.id).await.unwrap(), before);
    }

    #[tokio::test]
    async fn login_with_malformed_unknown_email_is_not_found() {
        let store = MemoryUserStore::default();
        let err = login(&store, &keys(), "bob", "x").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn garbage_token_is_invalid() {
        assert!(matches!(
            verify_session(&keys(), "not.a.jwt").unwrap_err(),
            AppError::InvalidToken
        ));
    }
}
