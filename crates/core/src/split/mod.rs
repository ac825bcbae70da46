//! Two-leg allocation of an amount across assets.

pub mod calculator;
pub mod error;
pub mod types;

#[cfg(test)]
mod props;

pub use calculator::SplitCalculator;
pub use error::SplitError;
pub use types::{AssetAllocation, SplitConfig, SplitLeg, SplitRequest, SplitResult};
