//! Button input event protocol.
//!
//! The event source (a PMOD BTN module behind an edge-triggered interrupt
//! controller) is owned externally. This module defines the status-code
//! protocol it delivers and the subscription seam the core registers on.

/// Raw status code delivered by the event source (one bit per button line).
pub type ButtonStatus = u8;

/// Bit assigned to BTN0 (enable) in the status code.
pub const BTN0: ButtonStatus = 1 << 2;
/// Bit assigned to BTN1 (disable) in the status code.
pub const BTN1: ButtonStatus = 1 << 3;
/// Bit assigned to BTN2 (direction toggle) in the status code.
pub const BTN2: ButtonStatus = 1 << 4;
/// Bit assigned to BTN3 (reserved) in the status code.
pub const BTN3: ButtonStatus = 1 << 5;

/// Decoded button event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// BTN0: start stepping.
    Enable,
    /// BTN1: hold the motor de-energized.
    Disable,
    /// BTN2: reverse the traversal direction.
    ToggleDirection,
    /// BTN3: reserved, no assigned function.
    Reserved,
}

impl ButtonEvent {
    /// Decode a raw status code into an event.
    ///
    /// One status code per physical edge, exactly one button bit set.
    /// Anything else (including multi-bit codes) decodes to `None` and is
    /// ignored by the caller.
    pub fn from_status(status: ButtonStatus) -> Option<Self> {
        match status {
            BTN0 => Some(ButtonEvent::Enable),
            BTN1 => Some(ButtonEvent::Disable),
            BTN2 => Some(ButtonEvent::ToggleDirection),
            BTN3 => Some(ButtonEvent::Reserved),
            _ => None,
        }
    }
}

/// Subscription interface for button event sources.
///
/// Implementations own the pin configuration and interrupt controller setup;
/// the core only supplies the handler. The handler is invoked from interrupt
/// context with one status code per edge event and must not block, so it
/// should do nothing beyond forwarding to
/// [`ControlFlags::on_status`](crate::ControlFlags::on_status).
///
/// # Example
///
/// ```rust,ignore
/// static FLAGS: ControlFlags = ControlFlags::new();
///
/// source.register(|status| FLAGS.on_status(status))?;
/// ```
pub trait InputEventSource {
    /// Error produced when registration fails (pin or interrupt setup).
    type Error;

    /// Register the status-code handler.
    ///
    /// # Errors
    ///
    /// Returns an implementation-defined error if the underlying pin or
    /// interrupt configuration fails.
    fn register<F>(&mut self, handler: F) -> Result<(), Self::Error>
    where
        F: FnMut(ButtonStatus) + Send + 'static;
}
