pub mod auth_handler;

pub use auth_handler::login;
