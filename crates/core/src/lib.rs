//! Core logic for Coinsplit.
//!
//! This crate holds the rate-fetch-and-split pipeline. It knows nothing about
//! the HTTP server that exposes it.
//!
//! # Modules
//!
//! - `rates` - Exchange rate sets and the upstream price-quote client
//! - `split` - The fixed 70/30 allocation between two assets

pub mod rates;
pub mod split;
