//! Greeting Core Library
//!
//! This crate provides the domain model, error types, constants and host configuration
//! shared by the storage, processing and service crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{AssetRef, Background, BackgroundPreset, Configuration};
