//! Basic drive example.
//!
//! Demonstrates wiring the shared control flags between a button event source
//! and the drive loop, then stepping through the half-step cycle.
//!
//! Uses mock hardware so it runs on the host without a real motor.

use unipolar_drive::{
    config, CoilOutput, ControlFlags, InputEventSource, StepperDriverBuilder,
};

/// Mock delay provider for demonstration.
struct MockDelay;

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        // In real code, this would use a hardware timer
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }
}

/// Mock coil output that prints each emitted pattern.
struct PrintingCoils;

impl CoilOutput for PrintingCoils {
    type Error = core::convert::Infallible;

    fn energize(&mut self, pattern: u8) -> Result<(), Self::Error> {
        println!("coils <- {:#06b}", pattern);
        Ok(())
    }
}

/// In-process stand-in for the PMOD BTN interrupt source.
#[derive(Default)]
struct MockButtons {
    handler: Option<Box<dyn FnMut(u8) + Send>>,
}

impl MockButtons {
    fn press(&mut self, status: u8) {
        if let Some(handler) = self.handler.as_mut() {
            handler(status);
        }
    }
}

impl InputEventSource for MockButtons {
    type Error = core::convert::Infallible;

    fn register<F>(&mut self, handler: F) -> Result<(), Self::Error>
    where
        F: FnMut(u8) + Send + 'static,
    {
        self.handler = Some(Box::new(handler));
        Ok(())
    }
}

static FLAGS: ControlFlags = ControlFlags::new();

fn main() {
    println!("=== Basic Drive Example ===\n");

    // Load configuration from TOML
    let toml_content = r#"
name = "demo_drive"
step_delay_us = 1200
"#;

    let config = config::parse_config(toml_content).expect("Failed to parse config");
    println!(
        "Drive '{}': {} us/step (~{:.0} steps/sec)",
        config.name,
        config.step_delay_us,
        config.steps_per_sec()
    );

    // Register the button handler; in firmware this runs in interrupt context
    let mut buttons = MockButtons::default();
    buttons
        .register(|status| FLAGS.on_status(status))
        .expect("Failed to register handler");

    // Build the drive
    let mut drive = StepperDriverBuilder::new()
        .output(PrintingCoils)
        .delay(MockDelay)
        .flags(&FLAGS)
        .from_config(&config)
        .build()
        .expect("Failed to build drive");

    println!("\n--- BTN0: enable, step forward one full cycle ---");
    buttons.press(0x04);
    for _ in 0..8 {
        drive.poll().expect("poll failed");
    }

    println!("\n--- BTN2: reverse, step back half a cycle ---");
    buttons.press(0x10);
    for _ in 0..4 {
        drive.poll().expect("poll failed");
    }

    println!("\n--- BTN1: disable, coils released ---");
    buttons.press(0x08);
    drive.poll().expect("poll failed");

    println!(
        "\nFinal cycle position: {} ({:?})",
        drive.index().value(),
        drive.state()
    );
    println!("\n=== Example Complete ===");
    println!("In firmware, call drive.run() and let the buttons do the rest.");
}
