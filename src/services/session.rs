//! Session management.
//!
//! ARCHITECTURE
//! ============
//! HTTP auth uses long-lived session tokens delivered as HttpOnly cookies.
//! Validation joins the session row to the profile so handlers get the
//! caller's role in one query.

use std::fmt::Write;

use rand::Rng;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::services::profile::{ProfileRow, Role};

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Create a session for the given user, returning the token.
pub async fn create_session(pool: &PgPool, user_id: Uuid) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, user_id) VALUES ($1, $2)")
        .bind(&token)
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token and return the associated profile.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<ProfileRow>, sqlx::Error> {
    let row = sqlx::query(
        r"SELECT p.id, p.email, p.full_name, p.role
          FROM sessions s
          JOIN profiles p ON p.id = s.user_id
          WHERE s.token = $1 AND s.expires_at > now()",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|r| ProfileRow {
        id: r.get("id"),
        email: r.get("email"),
        full_name: r.get("full_name"),
        role: Role::from_str(r.get::<String, _>("role").as_str()).unwrap_or(Role::Gardener),
    }))
}

/// Delete a session by token.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
