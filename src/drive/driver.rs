//! Stepper drive control loop.
//!
//! Generic over the coil output and an embedded-hal 1.0 delay provider, with
//! control state shared through [`ControlFlags`].

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;

use crate::control::ControlFlags;
use crate::error::{DriveError, Result};
use crate::sequence::{StepIndex, StepTable};

use super::output::CoilOutput;

/// Default inter-step delay in microseconds.
///
/// Directly sets angular velocity; 1200 us is a safe rate for a 5 V 28BYJ-48.
pub const DEFAULT_STEP_DELAY_US: u32 = 1200;

/// Logical state of one control-loop iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LoopState {
    /// Motor held de-energized; the step index does not advance.
    Holding,
    /// Motor stepping through the half-step cycle.
    Stepping,
}

/// Unipolar stepper drive.
///
/// Owns the half-step table and the step index; reads the enable and
/// direction flags each iteration. Generic over:
/// - `OUT`: coil output (must implement [`CoilOutput`](crate::CoilOutput))
/// - `DELAY`: delay provider (must implement `DelayNs`)
///
/// Built with [`StepperDriverBuilder`](crate::StepperDriverBuilder).
pub struct StepperDriver<'a, OUT, DELAY>
where
    OUT: CoilOutput,
    DELAY: DelayNs,
{
    /// Coil output (4 owned lines).
    output: OUT,

    /// Delay provider for step timing.
    delay: DELAY,

    /// Shared control plane written by the interrupt context.
    flags: &'a ControlFlags,

    /// Half-step energization table.
    table: StepTable,

    /// Current position in the cycle. Private to the loop.
    index: StepIndex,

    /// Inter-step delay in microseconds (the sole speed control).
    step_delay_us: u32,

    /// Loop state as of the last poll.
    state: LoopState,

    /// Drive name for logging/debugging.
    name: heapless::String<32>,
}

impl<'a, OUT, DELAY> StepperDriver<'a, OUT, DELAY>
where
    OUT: CoilOutput,
    DELAY: DelayNs,
{
    pub(crate) fn new(
        output: OUT,
        delay: DELAY,
        flags: &'a ControlFlags,
        table: StepTable,
        step_delay_us: u32,
        name: heapless::String<32>,
    ) -> Self {
        Self {
            output,
            delay,
            flags,
            table,
            index: StepIndex::ZERO,
            step_delay_us,
            state: LoopState::Holding,
            name,
        }
    }

    /// Get the drive name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the current position in the half-step cycle.
    #[inline]
    pub fn index(&self) -> StepIndex {
        self.index
    }

    /// Get the loop state as of the last poll.
    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Get the inter-step delay in microseconds.
    #[inline]
    pub fn step_delay_us(&self) -> u32 {
        self.step_delay_us
    }

    /// Get the half-step table.
    #[inline]
    pub fn table(&self) -> &StepTable {
        &self.table
    }

    /// Run one control-loop iteration.
    ///
    /// Enabled: advance the index in the current direction, energize the
    /// pattern for the new index, then block for the inter-step delay.
    /// Disabled: release the coils and return immediately; the index is left
    /// where it was so stepping resumes from the same cycle position.
    ///
    /// Button presses latched by the interrupt during the delay are observed
    /// on the next iteration.
    ///
    /// # Errors
    ///
    /// Returns [`DriveError::PinError`] if the coil output fails.
    pub fn poll(&mut self) -> Result<LoopState> {
        if self.flags.is_enabled() {
            let direction = self.flags.direction();
            self.index = self.index.stepped(direction);
            let pattern = self.table.pattern(self.index);
            self.output
                .energize(pattern)
                .map_err(|_| DriveError::PinError)?;

            self.transition(LoopState::Stepping);
            self.delay.delay_us(self.step_delay_us);
        } else {
            self.output.release().map_err(|_| DriveError::PinError)?;
            self.transition(LoopState::Holding);
        }

        Ok(self.state)
    }

    /// Run the control loop indefinitely.
    ///
    /// Never returns during normal operation; the only exit is a coil output
    /// failure.
    pub fn run(&mut self) -> Result<Infallible> {
        #[cfg(feature = "defmt")]
        defmt::info!("drive {=str}: control loop started", self.name.as_str());

        loop {
            self.poll()?;
        }
    }

    /// Release the underlying output and delay provider.
    pub fn free(self) -> (OUT, DELAY) {
        (self.output, self.delay)
    }

    fn transition(&mut self, next: LoopState) {
        if self.state != next {
            #[cfg(feature = "defmt")]
            defmt::debug!("drive {=str}: {} -> {}", self.name.as_str(), self.state, next);
            self.state = next;
        }
    }
}
