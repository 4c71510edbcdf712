//! Configuration validation.

use crate::error::{ConfigError, Error, Result};
use crate::sequence::StepTable;

use super::DriveConfig;

/// Validate a drive configuration.
///
/// Checks:
/// - Step delay is non-zero
/// - A custom sequence, if present, satisfies the half-step invariants
///
/// The sequence check is already enforced during deserialization; it is
/// repeated here so hand-constructed configurations get the same guarantee.
pub fn validate_config(config: &DriveConfig) -> Result<()> {
    if config.step_delay_us == 0 {
        return Err(Error::Config(ConfigError::InvalidStepDelay(0)));
    }

    if let Some(ref table) = config.sequence {
        StepTable::new(*table.entries())?;
    }

    Ok(())
}
