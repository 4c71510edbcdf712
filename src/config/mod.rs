//! Configuration module for unipolar-drive.
//!
//! Provides types for loading and validating drive configuration from TOML
//! files (with `std` feature) or pre-parsed data. The only tunables are the
//! inter-step delay and, rarely, a custom half-step cycle.

mod drive;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use drive::DriveConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
