//! Drive configuration from TOML.

use heapless::String;
use serde::Deserialize;

use crate::drive::DEFAULT_STEP_DELAY_US;
use crate::sequence::StepTable;

/// Complete drive configuration from TOML.
///
/// # Example
///
/// ```toml
/// name = "feeder"
/// step_delay_us = 1200
/// # Optional custom cycle; must satisfy the half-step invariants.
/// sequence = [0x01, 0x03, 0x02, 0x06, 0x04, 0x0C, 0x08, 0x09]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct DriveConfig {
    /// Human-readable name (max 32 chars).
    pub name: String<32>,

    /// Inter-step delay in microseconds. Sets the step rate directly.
    #[serde(default = "default_step_delay_us")]
    pub step_delay_us: u32,

    /// Optional custom half-step cycle; validated during deserialization.
    #[serde(default)]
    pub sequence: Option<StepTable>,
}

fn default_step_delay_us() -> u32 {
    DEFAULT_STEP_DELAY_US
}

impl DriveConfig {
    /// Steps per second at the configured delay.
    pub fn steps_per_sec(&self) -> f32 {
        if self.step_delay_us == 0 {
            0.0
        } else {
            1_000_000.0 / self.step_delay_us as f32
        }
    }
}
