//! # unipolar-drive
//!
//! Interrupt-driven unipolar stepper motor control with embedded-hal 1.0 support.
//!
//! Drives a 28BYJ-48 class motor through a ULN2003 driver: a cyclic 8-entry
//! half-step sequence, advanced or retreated by a direction flag and gated by
//! an enable flag, both written from button interrupts and read by a
//! busy-wait control loop.
//!
//! ## Features
//!
//! - **embedded-hal 1.0**: `OutputPin` for the coil lines, `DelayNs` for timing
//! - **no_std compatible**: Core library works without standard library
//! - **Structurally enforced invariants**: the step index cannot leave the
//!   cycle range, and a step table cannot be built that breaks the half-step
//!   property
//! - **Lock-free control plane**: enable/direction flags are atomics under a
//!   single-writer (interrupt) / single-reader (loop) discipline
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use unipolar_drive::{ControlFlags, CoilPins, StepperDriverBuilder};
//!
//! static FLAGS: ControlFlags = ControlFlags::new();
//!
//! // Route button status codes into the shared flags
//! buttons.register(|status| FLAGS.on_status(status))?;
//!
//! // Build the drive with embedded-hal pins and delay
//! let mut drive = StepperDriverBuilder::new()
//!     .output(CoilPins::new(in1, in2, in3, in4))
//!     .delay(delay)
//!     .flags(&FLAGS)
//!     .build()?;
//!
//! // Runs forever; BTN0 starts, BTN1 stops, BTN2 reverses
//! drive.run()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod control;
pub mod drive;
pub mod error;
pub mod input;
pub mod sequence;

// Re-exports for ergonomic API
pub use config::{validate_config, DriveConfig};
pub use control::ControlFlags;
pub use drive::{
    merge, CoilOutput, CoilPins, LoopState, StepperDriver, StepperDriverBuilder,
    DEFAULT_STEP_DELAY_US,
};
pub use error::{Error, Result};
pub use input::{ButtonEvent, ButtonStatus, InputEventSource};
pub use sequence::{Direction, StepIndex, StepTable, COIL_MASK};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;
