use async_trait::async_trait;
use sha2::{Digest, Sha256};
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::shared::constants::ROLE_ADMIN;

/// A verified admin identity
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub username: String,
    pub role: String,
}

/// Credential verification seam.
///
/// Any backing store can implement this: the env-backed store serves a
/// single configured pair, the Postgres store reads the `admins` table.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns the admin identity when the pair matches, `None` otherwise.
    async fn verify(&self, username: &str, password: &str) -> Result<Option<AdminUser>>;
}

pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

/// Single admin credential pair taken from the environment.
///
/// Only the digest of the configured password is retained.
pub struct EnvCredentialStore {
    username: String,
    password_digest: String,
}

impl EnvCredentialStore {
    pub fn new(username: String, password: &str) -> Self {
        Self {
            username,
            password_digest: sha256_hex(password),
        }
    }
}

#[async_trait]
impl CredentialStore for EnvCredentialStore {
    async fn verify(&self, username: &str, password: &str) -> Result<Option<AdminUser>> {
        if username == self.username && sha256_hex(password) == self.password_digest {
            Ok(Some(AdminUser {
                username: self.username.clone(),
                role: ROLE_ADMIN.to_string(),
            }))
        } else {
            Ok(None)
        }
    }
}

#[derive(sqlx::FromRow)]
struct AdminRow {
    username: String,
    password_sha256: String,
    role: String,
}

/// Admin credentials backed by the `admins` table
pub struct PgCredentialStore {
    pool: PgPool,
}

impl PgCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for PgCredentialStore {
    async fn verify(&self, username: &str, password: &str) -> Result<Option<AdminUser>> {
        let row = sqlx::query_as::<_, AdminRow>(
            "SELECT username, password_sha256, role FROM admins WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to look up admin: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(row
            .filter(|r| r.password_sha256 == sha256_hex(password))
            .map(|r| AdminUser {
                username: r.username,
                role: r.role,
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex_known_digest() {
        // echo -n "admin123" | sha256sum
        assert_eq!(
            sha256_hex("admin123"),
            "240be518fabd2724ddb6f04eeb1da5967448d7e831c08c8fa822809f74c720a9"
        );
    }

    #[tokio::test]
    async fn test_env_store_accepts_configured_pair() {
        let store = EnvCredentialStore::new("admin".to_string(), "admin123");

        let user = store.verify("admin", "admin123").await.unwrap();
        let user = user.expect("configured pair should verify");
        assert_eq!(user.username, "admin");
        assert_eq!(user.role, ROLE_ADMIN);
    }

    #[tokio::test]
    async fn test_env_store_rejects_bad_password() {
        let store = EnvCredentialStore::new("admin".to_string(), "admin123");
        assert!(store.verify("admin", "wrong").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_env_store_rejects_unknown_username() {
        let store = EnvCredentialStore::new("admin".to_string(), "admin123");
        assert!(store.verify("root", "admin123").await.unwrap().is_none());
    }
}
