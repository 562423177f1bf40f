use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::validation::USERNAME_REGEX;

/// Admin login request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginRequestDto {
    #[validate(
        length(min = 1, max = 64, message = "Username must be 1-64 characters"),
        regex(
            path = *USERNAME_REGEX,
            message = "Username may only contain letters, digits, and underscores"
        )
    )]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Admin identity as exposed on the wire
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminUserDto {
    pub username: String,
    pub role: String,
}

/// Successful login response: a signed, expiring bearer token plus the
/// authenticated identity.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    pub success: bool,
    pub token: String,
    pub expires_in: u64,
    pub user: AdminUserDto,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_login_dto_accepts_valid_input() {
        let dto = LoginRequestDto {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_login_dto_rejects_bad_username() {
        let dto = LoginRequestDto {
            username: "not a username".to_string(),
            password: "admin123".to_string(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_login_dto_rejects_empty_password() {
        let dto = LoginRequestDto {
            username: "admin".to_string(),
            password: String::new(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_login_response_wire_field_names() {
        let dto = LoginResponseDto {
            success: true,
            token: "jwt".to_string(),
            expires_in: 3600,
            user: AdminUserDto {
                username: "admin".to_string(),
                role: "admin".to_string(),
            },
        };
        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["success"], serde_json::json!(true));
        assert_eq!(value["expiresIn"], serde_json::json!(3600));
        assert_eq!(value["user"]["username"], serde_json::json!("admin"));
    }
}
