//! Bridge configuration parameters
//!
//! Everything here is fixed at build time. The struct only exists so the
//! constants from [`pins`](crate::pins) travel together and can be checked
//! once at startup; there is no file, flag, or environment override.

use core::time::Duration;

use crate::drivers::edge_watcher::Polarity;
use crate::error::{Error, Result};
use crate::pins;

/// Internal bias applied to the button input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPull {
    /// No internal resistor; the board provides one.
    #[default]
    Off,
    Up,
    Down,
}

/// Core bridge configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    // --- GPIO ---
    /// BCM number of the mirrored output line
    pub output_gpio: u8,
    /// BCM number of the button input line
    pub button_gpio: u8,
    pub input_pull: InputPull,
    /// Which edge means "pressed" (depends on pull-up vs pull-down wiring)
    pub polarity: Polarity,
    /// Quiet period after each accepted edge (milliseconds)
    pub debounce_ms: u32,

    // --- Serial ---
    pub serial_device: &'static str,
    pub baud_rate: u32,
    /// Read slice used to poll for shutdown (milliseconds)
    pub serial_poll_ms: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            output_gpio: pins::OUTPUT_GPIO,
            button_gpio: pins::BUTTON_GPIO,
            input_pull: InputPull::Off,
            polarity: Polarity::RisingIsPress,
            debounce_ms: pins::DEBOUNCE_MS,

            serial_device: pins::SERIAL_DEVICE,
            baud_rate: pins::SERIAL_BAUD,
            serial_poll_ms: pins::SERIAL_POLL_MS,
        }
    }
}

impl BridgeConfig {
    /// Reject values that cannot drive real hardware.
    pub fn validate(&self) -> Result<()> {
        if self.output_gpio == self.button_gpio {
            return Err(Error::Config("output and button share a GPIO"));
        }
        if self.debounce_ms == 0 {
            return Err(Error::Config("debounce_ms must be non-zero"));
        }
        if self.baud_rate == 0 {
            return Err(Error::Config("baud_rate must be non-zero"));
        }
        if self.serial_poll_ms == 0 {
            return Err(Error::Config("serial_poll_ms must be non-zero"));
        }
        if self.serial_device.is_empty() {
            return Err(Error::Config("serial_device is empty"));
        }
        Ok(())
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.debounce_ms))
    }

    pub fn serial_poll(&self) -> Duration {
        Duration::from_millis(u64::from(self.serial_poll_ms))
    }
}
