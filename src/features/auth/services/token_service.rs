use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::model::{AuthenticatedAdmin, Claims};
use crate::features::auth::services::credential_store::AdminUser;

/// A freshly signed admin token and its lifetime
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: u64,
}

/// Issues and verifies signed, expiring admin tokens (HS256).
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    token_ttl_secs: u64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            issuer: config.issuer.clone(),
            token_ttl_secs: config.token_ttl_secs,
        }
    }

    /// Sign a token for a verified admin
    pub fn issue(&self, user: &AdminUser) -> Result<IssuedToken> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user.username.clone(),
            role: user.role.clone(),
            iss: self.issuer.clone(),
            iat: now,
            exp: now + self.token_ttl_secs as i64,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))?;

        Ok(IssuedToken {
            token,
            expires_in: self.token_ttl_secs,
        })
    }

    /// Verify signature, expiry, and issuer of a bearer token
    pub fn verify(&self, token: &str) -> Result<AuthenticatedAdmin> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);

        let data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        Ok(AuthenticatedAdmin {
            username: data.claims.sub,
            role: data.claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::ROLE_ADMIN;

    fn test_config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret-at-least-16-chars".to_string(),
            issuer: "envwatch-core".to_string(),
            token_ttl_secs: 3600,
            admin_username: None,
            admin_password: None,
        }
    }

    fn test_user() -> AdminUser {
        AdminUser {
            username: "admin".to_string(),
            role: ROLE_ADMIN.to_string(),
        }
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let service = TokenService::new(&test_config());

        let issued = service.issue(&test_user()).unwrap();
        assert_eq!(issued.expires_in, 3600);

        let admin = service.verify(&issued.token).unwrap();
        assert_eq!(admin.username, "admin");
        assert_eq!(admin.role, ROLE_ADMIN);
        assert!(admin.is_admin());
    }

    #[test]
    fn test_verify_rejects_garbage_token() {
        let service = TokenService::new(&test_config());
        assert!(service.verify("not-a-jwt").is_err());
    }

    #[test]
    fn test_verify_rejects_token_from_other_secret() {
        let service = TokenService::new(&test_config());

        let other = TokenService::new(&AuthConfig {
            jwt_secret: "another-secret-16-chars-long".to_string(),
            ..test_config()
        });
        let issued = other.issue(&test_user()).unwrap();

        assert!(service.verify(&issued.token).is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_issuer() {
        let issuing = TokenService::new(&AuthConfig {
            issuer: "someone-else".to_string(),
            ..test_config()
        });
        let verifying = TokenService::new(&test_config());

        let issued = issuing.issue(&test_user()).unwrap();
        assert!(verifying.verify(&issued.token).is_err());
    }
}
