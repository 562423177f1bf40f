use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{AdminUserDto, LoginRequestDto, LoginResponseDto};
use crate::features::auth::services::credential_store::CredentialStore;
use crate::features::auth::services::token_service::TokenService;

/// Service for admin login: verifies credentials against the configured
/// store and issues a signed, expiring token.
pub struct AuthService {
    store: Arc<dyn CredentialStore>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(store: Arc<dyn CredentialStore>, tokens: Arc<TokenService>) -> Self {
        Self { store, tokens }
    }

    pub async fn login(&self, dto: LoginRequestDto) -> Result<LoginResponseDto> {
        let user = self
            .store
            .verify(&dto.username, &dto.password)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

        let issued = self.tokens.issue(&user)?;

        tracing::info!("Admin '{}' logged in", user.username);

        Ok(LoginResponseDto {
            success: true,
            token: issued.token,
            expires_in: issued.expires_in,
            user: AdminUserDto {
                username: user.username,
                role: user.role,
            },
        })
    }
}
