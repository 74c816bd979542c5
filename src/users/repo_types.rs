use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,      // Argon2 hash, never exposed in JSON
    pub favorites: Vec<i64>,        // movie ids, no duplicates
    pub created_at: OffsetDateTime,
}
