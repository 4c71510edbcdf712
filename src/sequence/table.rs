//! Half-step energization table.
//!
//! The table is a closed cycle of 8 four-bit patterns for the coil-driver
//! lines of a unipolar stepper (ULN2003 topology). Adjacent entries differ in
//! exactly one activated line, which is what makes it a half-step sequence.

use serde::Deserialize;

use crate::error::ConfigError;

use super::index::StepIndex;

/// Number of entries in the half-step cycle.
pub const SEQUENCE_LEN: usize = 8;

/// Bitmask of the coil lines owned by this driver (low nibble of the port).
pub const COIL_MASK: u8 = 0x0F;

/// Immutable 8-entry half-step energization table.
///
/// Construct with [`StepTable::new`] to validate a custom cycle, or use
/// [`StepTable::HALF_STEP`] for the canonical 28BYJ-48 sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepTable {
    entries: [u8; SEQUENCE_LEN],
}

impl StepTable {
    /// Canonical half-step sequence for the ULN2003 driver topology.
    ///
    /// This exact cycle and ordering is required for hardware compatibility.
    pub const HALF_STEP: Self = Self {
        entries: [0x01, 0x03, 0x02, 0x06, 0x04, 0x0C, 0x08, 0x09],
    };

    /// Create a table from a custom cycle, validating the half-step invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PatternOutOfRange`] if an entry sets bits outside
    /// the low nibble, or [`ConfigError::BrokenHalfStep`] if an adjacent pair
    /// (including the 7→0 wrap) does not differ in exactly one line.
    pub fn new(entries: [u8; SEQUENCE_LEN]) -> Result<Self, ConfigError> {
        for (index, &pattern) in entries.iter().enumerate() {
            if pattern & !COIL_MASK != 0 {
                return Err(ConfigError::PatternOutOfRange { index, pattern });
            }
        }

        for index in 0..SEQUENCE_LEN {
            let next = (index + 1) % SEQUENCE_LEN;
            let changed = entries[index] ^ entries[next];
            if changed.count_ones() != 1 {
                return Err(ConfigError::BrokenHalfStep { index });
            }
        }

        Ok(Self { entries })
    }

    /// Get the pattern for a step index.
    ///
    /// Infallible: [`StepIndex`] is confined to the table range by construction.
    #[inline]
    pub const fn pattern(&self, index: StepIndex) -> u8 {
        self.entries[index.value() as usize]
    }

    /// Get the raw entries of the cycle.
    #[inline]
    pub const fn entries(&self) -> &[u8; SEQUENCE_LEN] {
        &self.entries
    }
}

impl Default for StepTable {
    fn default() -> Self {
        Self::HALF_STEP
    }
}

impl<'de> Deserialize<'de> for StepTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let entries = <[u8; SEQUENCE_LEN]>::deserialize(deserializer)?;
        StepTable::new(entries).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}
