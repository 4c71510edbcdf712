//! Builder pattern for StepperDriver.

use embedded_hal::delay::DelayNs;

use crate::config::DriveConfig;
use crate::control::ControlFlags;
use crate::error::{ConfigError, Error, Result};
use crate::sequence::StepTable;

use super::driver::{StepperDriver, DEFAULT_STEP_DELAY_US};
use super::output::CoilOutput;

/// Builder for creating StepperDriver instances.
pub struct StepperDriverBuilder<'a, OUT, DELAY>
where
    OUT: CoilOutput,
    DELAY: DelayNs,
{
    output: Option<OUT>,
    delay: Option<DELAY>,
    flags: Option<&'a ControlFlags>,
    table: StepTable,
    step_delay_us: u32,
    name: Option<heapless::String<32>>,
}

impl<'a, OUT, DELAY> Default for StepperDriverBuilder<'a, OUT, DELAY>
where
    OUT: CoilOutput,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, OUT, DELAY> StepperDriverBuilder<'a, OUT, DELAY>
where
    OUT: CoilOutput,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            output: None,
            delay: None,
            flags: None,
            table: StepTable::HALF_STEP,
            step_delay_us: DEFAULT_STEP_DELAY_US,
            name: None,
        }
    }

    /// Set the coil output.
    pub fn output(mut self, output: OUT) -> Self {
        self.output = Some(output);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the shared control flags.
    pub fn flags(mut self, flags: &'a ControlFlags) -> Self {
        self.flags = Some(flags);
        self
    }

    /// Set the half-step table (defaults to [`StepTable::HALF_STEP`]).
    pub fn table(mut self, table: StepTable) -> Self {
        self.table = table;
        self
    }

    /// Set the inter-step delay in microseconds.
    pub fn step_delay_us(mut self, delay_us: u32) -> Self {
        self.step_delay_us = delay_us;
        self
    }

    /// Set the drive name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = heapless::String::try_from(name).ok();
        self
    }

    /// Configure from a DriveConfig.
    pub fn from_config(mut self, config: &DriveConfig) -> Self {
        self.name = Some(config.name.clone());
        self.step_delay_us = config.step_delay_us;
        if let Some(table) = config.sequence {
            self.table = table;
        }
        self
    }

    /// Build the StepperDriver.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing or the step delay is
    /// zero.
    pub fn build(self) -> Result<StepperDriver<'a, OUT, DELAY>> {
        let output = self.output.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("output is required").unwrap(),
            ))
        })?;

        let delay = self.delay.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("delay is required").unwrap(),
            ))
        })?;

        let flags = self.flags.ok_or_else(|| {
            Error::Config(ConfigError::ParseError(
                heapless::String::try_from("flags is required").unwrap(),
            ))
        })?;

        if self.step_delay_us == 0 {
            return Err(Error::Config(ConfigError::InvalidStepDelay(0)));
        }

        let name = self
            .name
            .unwrap_or_else(|| heapless::String::try_from("drive").unwrap());

        Ok(StepperDriver::new(
            output,
            delay,
            flags,
            self.table,
            self.step_delay_us,
            name,
        ))
    }
}
