//! Common types used across the application.

pub mod decimal;

pub use decimal::parse_decimal;
