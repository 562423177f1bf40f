//! Storage module for report images
//!
//! Provides a MinIO/S3-compatible image store with a mock fallback for
//! unconfigured environments.

mod image_store;

pub use image_store::ImageStorage;
