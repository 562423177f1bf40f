pub mod auth_service;
pub mod credential_store;
pub mod token_service;

pub use auth_service::AuthService;
pub use credential_store::{CredentialStore, EnvCredentialStore, PgCredentialStore};
pub use token_service::TokenService;
