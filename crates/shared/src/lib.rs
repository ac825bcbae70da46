//! Shared errors, configuration, and decimal helpers for Coinsplit.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error types
//! - Configuration management
//! - Decimal parsing for untrusted numeric strings

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
