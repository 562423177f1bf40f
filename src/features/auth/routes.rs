use axum::{routing::post, Router};
use std::sync::Arc;

use crate::features::auth::handlers::login;
use crate::features::auth::services::AuthService;

/// Create routes for the auth feature (public, no token required)
pub fn routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/admin/login", post(login))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AuthConfig;
    use crate::features::auth::services::{EnvCredentialStore, TokenService};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn test_router() -> Router {
        let config = AuthConfig {
            jwt_secret: "test-secret-at-least-16-chars".to_string(),
            issuer: "envwatch-core".to_string(),
            token_ttl_secs: 3600,
            admin_username: Some("admin".to_string()),
            admin_password: Some("admin123".to_string()),
        };
        let tokens = Arc::new(TokenService::new(&config));
        let store = Arc::new(EnvCredentialStore::new("admin".to_string(), "admin123"));
        routes(Arc::new(AuthService::new(store, tokens)))
    }

    #[tokio::test]
    async fn test_login_success_issues_token() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server
            .post("/api/admin/login")
            .json(&json!({ "username": "admin", "password": "admin123" }))
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], json!(true));
        assert_eq!(body["user"]["username"], json!("admin"));
        assert_eq!(body["expiresIn"], json!(3600));
        assert!(!body["token"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server
            .post("/api/admin/login")
            .json(&json!({ "username": "admin", "password": "nope" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], json!(false));
    }

    #[tokio::test]
    async fn test_login_malformed_username_is_rejected() {
        let server = TestServer::new(test_router()).unwrap();

        let response = server
            .post("/api/admin/login")
            .json(&json!({ "username": "not a username", "password": "admin123" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
