//! Half-step sequence module for unipolar-drive.
//!
//! Provides the coil energization table and the bounded step index.

mod index;
mod table;

pub use index::{Direction, StepIndex};
pub use table::{StepTable, COIL_MASK, SEQUENCE_LEN};
