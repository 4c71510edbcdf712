//! Integration tests for unipolar-drive.
//!
//! These tests verify the complete workflow from button status codes through
//! the shared control flags to the emitted coil patterns, using mock hardware.

use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::{
    Mock as PinMock, State as PinState, Transaction as PinTransaction,
};

use unipolar_drive::{
    ButtonEvent, CoilOutput, CoilPins, ControlFlags, Direction, InputEventSource, LoopState,
    StepTable, StepperDriver, StepperDriverBuilder,
};

// =============================================================================
// Test doubles
// =============================================================================

/// Coil output that records every pattern written to the owned lines.
#[derive(Default)]
struct RecordingOutput {
    writes: std::rc::Rc<std::cell::RefCell<Vec<u8>>>,
}

impl RecordingOutput {
    fn new() -> (Self, std::rc::Rc<std::cell::RefCell<Vec<u8>>>) {
        let writes = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        (
            Self {
                writes: writes.clone(),
            },
            writes,
        )
    }
}

impl CoilOutput for RecordingOutput {
    type Error = core::convert::Infallible;

    fn energize(&mut self, pattern: u8) -> Result<(), Self::Error> {
        self.writes.borrow_mut().push(pattern);
        Ok(())
    }
}

/// In-process event source standing in for the PMOD BTN interrupt machinery.
///
/// `press` plays the role of the edge-triggered interrupt: it invokes the
/// registered handler with one status code, asynchronously with respect to
/// the drive loop.
#[derive(Default)]
struct TestButtons {
    handler: Option<Box<dyn FnMut(u8) + Send>>,
}

impl TestButtons {
    fn press(&mut self, status: u8) {
        if let Some(handler) = self.handler.as_mut() {
            handler(status);
        }
    }
}

impl InputEventSource for TestButtons {
    type Error = core::convert::Infallible;

    fn register<F>(&mut self, handler: F) -> Result<(), Self::Error>
    where
        F: FnMut(u8) + Send + 'static,
    {
        self.handler = Some(Box::new(handler));
        Ok(())
    }
}

fn leaked_flags() -> &'static ControlFlags {
    Box::leak(Box::new(ControlFlags::new()))
}

fn build_driver(
    flags: &ControlFlags,
) -> (
    StepperDriver<'_, RecordingOutput, NoopDelay>,
    std::rc::Rc<std::cell::RefCell<Vec<u8>>>,
) {
    let (output, writes) = RecordingOutput::new();
    let driver = StepperDriverBuilder::new()
        .output(output)
        .delay(NoopDelay)
        .flags(flags)
        .name("feeder")
        .build()
        .expect("driver should build");
    (driver, writes)
}

// =============================================================================
// Button protocol through the registered handler
// =============================================================================

#[test]
fn button_events_drive_the_shared_flags() {
    let flags = leaked_flags();
    let mut buttons = TestButtons::default();
    buttons
        .register(move |status| flags.on_status(status))
        .expect("registration should succeed");

    assert!(!flags.is_enabled());

    buttons.press(0x04); // BTN0
    assert!(flags.is_enabled());
    assert_eq!(flags.direction(), Direction::Forward);

    buttons.press(0x10); // BTN2
    assert_eq!(flags.direction(), Direction::Backward);

    buttons.press(0x08); // BTN1
    assert!(!flags.is_enabled());
    // Direction survives a disable
    assert_eq!(flags.direction(), Direction::Backward);
}

#[test]
fn reserved_and_unrecognized_codes_change_nothing() {
    let flags = leaked_flags();
    let mut buttons = TestButtons::default();
    buttons
        .register(move |status| flags.on_status(status))
        .expect("registration should succeed");

    buttons.press(0x04);
    assert!(flags.is_enabled());

    buttons.press(0x20); // BTN3 reserved
    buttons.press(0xFF);
    buttons.press(0x00);

    assert!(flags.is_enabled());
    assert_eq!(flags.direction(), Direction::Forward);
}

// =============================================================================
// Control loop scenarios
// =============================================================================

#[test]
fn enable_then_full_forward_revolution_of_the_cycle() {
    let flags = leaked_flags();
    let (mut driver, writes) = build_driver(flags);

    // Motor starts held
    assert_eq!(driver.poll().unwrap(), LoopState::Holding);
    assert_eq!(writes.borrow().as_slice(), &[0x00]);

    flags.on_status(0x04); // BTN0

    for _ in 0..8 {
        assert_eq!(driver.poll().unwrap(), LoopState::Stepping);
    }

    assert_eq!(
        &writes.borrow()[1..],
        &[0x03, 0x02, 0x06, 0x04, 0x0C, 0x08, 0x09, 0x01]
    );
    assert_eq!(driver.index().value(), 0);
}

#[test]
fn direction_toggle_steps_backward_from_reset() {
    let flags = leaked_flags();
    let (mut driver, writes) = build_driver(flags);

    flags.on_status(0x04); // BTN0
    flags.on_status(0x10); // BTN2

    driver.poll().unwrap();

    assert_eq!(driver.index().value(), 7);
    assert_eq!(writes.borrow().as_slice(), &[0x09]);
}

#[test]
fn disable_holds_coils_released_and_index_frozen() {
    let flags = leaked_flags();
    let (mut driver, writes) = build_driver(flags);

    flags.on_status(0x04);
    driver.poll().unwrap();
    driver.poll().unwrap();
    let held_index = driver.index();

    flags.on_status(0x08); // BTN1

    for _ in 0..3 {
        assert_eq!(driver.poll().unwrap(), LoopState::Holding);
    }

    assert_eq!(driver.index(), held_index);
    assert_eq!(&writes.borrow()[2..], &[0x00, 0x00, 0x00]);
}

#[test]
fn held_output_is_zero_regardless_of_direction() {
    let flags = leaked_flags();
    let (mut driver, writes) = build_driver(flags);

    flags.on_status(0x10); // reversed but still disabled
    driver.poll().unwrap();
    flags.on_status(0x10); // forward again
    driver.poll().unwrap();

    assert_eq!(writes.borrow().as_slice(), &[0x00, 0x00]);
    assert_eq!(driver.index().value(), 0);
}

#[test]
fn reversing_mid_run_retraces_the_cycle() {
    let flags = leaked_flags();
    let (mut driver, writes) = build_driver(flags);

    flags.on_status(0x04);
    for _ in 0..3 {
        driver.poll().unwrap();
    }
    assert_eq!(driver.index().value(), 3);

    flags.on_status(0x10); // BTN2
    for _ in 0..3 {
        driver.poll().unwrap();
    }

    assert_eq!(driver.index().value(), 0);
    assert_eq!(
        writes.borrow().as_slice(),
        &[0x03, 0x02, 0x06, 0x02, 0x03, 0x01]
    );
}

#[test]
fn last_press_within_an_iteration_wins() {
    let flags = leaked_flags();
    let (mut driver, _writes) = build_driver(flags);

    // Both edges latched before the loop reads the flags once
    flags.on_status(0x04);
    flags.on_status(0x08);

    assert_eq!(driver.poll().unwrap(), LoopState::Holding);
}

// =============================================================================
// Coil output over embedded-hal pins
// =============================================================================

#[test]
fn coil_pins_match_pattern_bits() {
    // 0x06: IN2 and IN3 high, IN1 and IN4 low
    let in1 = PinMock::new(&[PinTransaction::set(PinState::Low)]);
    let in2 = PinMock::new(&[PinTransaction::set(PinState::High)]);
    let in3 = PinMock::new(&[PinTransaction::set(PinState::High)]);
    let in4 = PinMock::new(&[PinTransaction::set(PinState::Low)]);

    let mut coils = CoilPins::new(in1, in2, in3, in4);
    coils.energize(0x06).unwrap();

    let (mut in1, mut in2, mut in3, mut in4) = coils.free();
    in1.done();
    in2.done();
    in3.done();
    in4.done();
}

#[test]
fn coil_pins_release_drops_all_lines() {
    let low = || PinMock::new(&[PinTransaction::set(PinState::Low)]);
    let mut coils = CoilPins::new(low(), low(), low(), low());

    coils.release().unwrap();

    let (mut in1, mut in2, mut in3, mut in4) = coils.free();
    in1.done();
    in2.done();
    in3.done();
    in4.done();
}

// =============================================================================
// Configuration workflow
// =============================================================================

#[test]
fn config_driven_driver_build() {
    let toml = r#"
name = "feeder"
step_delay_us = 2000
"#;

    let config = unipolar_drive::config::parse_config(toml).expect("config should parse");
    let flags = leaked_flags();
    let (output, _writes) = RecordingOutput::new();

    let driver = StepperDriverBuilder::new()
        .output(output)
        .delay(NoopDelay)
        .flags(flags)
        .from_config(&config)
        .build()
        .expect("driver should build from config");

    assert_eq!(driver.name(), "feeder");
    assert_eq!(driver.step_delay_us(), 2000);
    assert_eq!(driver.table(), &StepTable::HALF_STEP);
}

#[test]
fn apply_maps_every_event() {
    let flags = ControlFlags::new();

    flags.apply(ButtonEvent::Enable);
    assert!(flags.is_enabled());

    flags.apply(ButtonEvent::ToggleDirection);
    assert_eq!(flags.direction(), Direction::Backward);

    flags.apply(ButtonEvent::Reserved);
    assert!(flags.is_enabled());
    assert_eq!(flags.direction(), Direction::Backward);

    flags.apply(ButtonEvent::Disable);
    assert!(!flags.is_enabled());
}
