//! Bounded step index and traversal direction.
//!
//! `StepIndex` confines the cycle position to [0, 8) by construction, so the
//! half-step table can be looked up without range checks and the wraparound
//! arithmetic lives in exactly one place.

use super::table::SEQUENCE_LEN;

/// Traversal direction through the half-step cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Forward through the cycle (clockwise rotation).
    #[default]
    Forward,
    /// Backward through the cycle (counter-clockwise rotation).
    Backward,
}

impl Direction {
    /// Get the opposite direction.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Decode from a raw flag value (false = forward, true = backward).
    #[inline]
    pub const fn from_flag(reversed: bool) -> Self {
        if reversed {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    /// Encode as a raw flag value.
    #[inline]
    pub const fn as_flag(self) -> bool {
        matches!(self, Direction::Backward)
    }
}

/// Position within the half-step cycle, confined to [0, 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepIndex(u8);

impl StepIndex {
    /// The reset position (entry 0 of the cycle).
    pub const ZERO: Self = Self(0);

    /// Create from a raw value, normalizing out-of-range values to 0.
    ///
    /// Guards against corruption sneaking in through an external value; a
    /// `StepIndex` produced by [`stepped`](Self::stepped) never needs it.
    #[inline]
    pub const fn from_raw(raw: u8) -> Self {
        if raw >= SEQUENCE_LEN as u8 {
            Self(0)
        } else {
            Self(raw)
        }
    }

    /// Get the raw index value.
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Compute the next position in the given direction.
    ///
    /// Forward wraps 7 → 0, backward wraps 0 → 7.
    #[inline]
    pub const fn stepped(self, direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self((self.0 + 1) % SEQUENCE_LEN as u8),
            Direction::Backward => {
                if self.0 == 0 {
                    Self(SEQUENCE_LEN as u8 - 1)
                } else {
                    Self(self.0 - 1)
                }
            }
        }
    }
}
