//! Shared control flags between interrupt context and the control loop.
//!
//! `ControlFlags` is the whole control plane: an enable flag gating whether
//! the motor steps, and a direction flag selecting the traversal direction.
//! The interrupt context is the exclusive writer of both; the control loop is
//! the exclusive reader. Under that single-writer/single-reader discipline on
//! independent booleans, relaxed atomic ordering is sufficient: each flag is
//! last-write-wins and no ordering between the two flags is relied upon.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::input::ButtonEvent;
use crate::sequence::Direction;

/// Control plane shared between the button interrupt and the drive loop.
///
/// `const`-constructible so it can live in a `static` and be borrowed by both
/// the registered event handler and the [`StepperDriver`](crate::StepperDriver).
///
/// # Example
///
/// ```rust
/// use unipolar_drive::{ControlFlags, Direction};
///
/// static FLAGS: ControlFlags = ControlFlags::new();
///
/// FLAGS.set_enabled(true);
/// assert!(FLAGS.is_enabled());
/// assert_eq!(FLAGS.direction(), Direction::Forward);
/// ```
#[derive(Debug)]
pub struct ControlFlags {
    /// Whether the motor is actively stepping or held de-energized.
    enabled: AtomicBool,
    /// Traversal direction (false = forward, true = backward).
    reversed: AtomicBool,
}

impl ControlFlags {
    /// Create flags in the reset state: disabled, forward.
    pub const fn new() -> Self {
        Self {
            enabled: AtomicBool::new(false),
            reversed: AtomicBool::new(false),
        }
    }

    /// Check whether stepping is enabled.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Set the enable flag.
    #[inline]
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Get the current traversal direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::from_flag(self.reversed.load(Ordering::Relaxed))
    }

    /// Set the traversal direction.
    #[inline]
    pub fn set_direction(&self, direction: Direction) {
        self.reversed.store(direction.as_flag(), Ordering::Relaxed);
    }

    /// Toggle the traversal direction.
    ///
    /// Plain load-then-store: the interrupt context is the only writer, so a
    /// compare-and-swap loop is not needed.
    #[inline]
    pub fn toggle_direction(&self) {
        let reversed = self.reversed.load(Ordering::Relaxed);
        self.reversed.store(!reversed, Ordering::Relaxed);
    }

    /// Apply a decoded button event to the flags.
    ///
    /// Flag assignment only; safe to call from interrupt context.
    pub fn apply(&self, event: ButtonEvent) {
        match event {
            ButtonEvent::Enable => self.set_enabled(true),
            ButtonEvent::Disable => self.set_enabled(false),
            ButtonEvent::ToggleDirection => self.toggle_direction(),
            // BTN3 has no assigned function
            ButtonEvent::Reserved => {}
        }
    }

    /// Decode a raw button status code and apply it.
    ///
    /// Unrecognized status codes are silently ignored. This is the intended
    /// handler body for [`InputEventSource::register`](crate::InputEventSource::register).
    pub fn on_status(&self, status: u8) {
        if let Some(event) = ButtonEvent::from_status(status) {
            self.apply(event);
        }
    }
}

impl Default for ControlFlags {
    fn default() -> Self {
        Self::new()
    }
}
