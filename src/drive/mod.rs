//! Drive module for unipolar-drive.
//!
//! Provides the coil output abstraction and the stepping control loop.

mod builder;
mod driver;
mod output;

pub use builder::StepperDriverBuilder;
pub use driver::{LoopState, StepperDriver, DEFAULT_STEP_DELAY_US};
pub use output::{merge, CoilOutput, CoilPins};
