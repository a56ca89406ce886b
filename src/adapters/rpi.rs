//! Raspberry Pi GPIO adapter (`rppal`).
//!
//! - [`RpiEdgeSource`] implements [`EdgeSource`] with `rppal` async
//!   interrupts. The kernel applies the debounce window; the callback runs
//!   on rppal's interrupt thread.
//! - [`open_pins`] claims both lines and returns the edge source plus a
//!   [`PinActuator`] for the output.
//!
//! rppal resets pin modes when the pins drop, which restores the board to
//! its power-on state after teardown.

use core::time::Duration;

use log::{error, info};
use rppal::gpio::{Event, Gpio, InputPin, OutputPin, Trigger};

use crate::adapters::hardware::PinActuator;
use crate::app::ports::{EdgeCallback, EdgeSource};
use crate::config::{BridgeConfig, InputPull};
use crate::error::GpioError;
use crate::events::{Edge, EdgeEvent};

pub struct RpiEdgeSource {
    pin: InputPin,
}

impl RpiEdgeSource {
    pub fn new(pin: InputPin) -> Self {
        Self { pin }
    }
}

fn trigger_for(edge: Edge) -> Trigger {
    match edge {
        Edge::Rising => Trigger::RisingEdge,
        Edge::Falling => Trigger::FallingEdge,
    }
}

impl EdgeSource for RpiEdgeSource {
    fn watch(
        &mut self,
        edge: Edge,
        quiet: Duration,
        mut callback: EdgeCallback,
    ) -> Result<(), GpioError> {
        self.pin
            .set_async_interrupt(trigger_for(edge), Some(quiet), move |event: Event| {
                callback(EdgeEvent::new(edge, event.timestamp));
            })
            .map_err(|e| {
                error!("GPIO{} arm {:?} failed: {}", self.pin.pin(), edge, e);
                GpioError::ArmFailed
            })
    }

    fn cancel(&mut self) -> Result<(), GpioError> {
        self.pin.clear_async_interrupt().map_err(|e| {
            error!("GPIO{} cancel failed: {}", self.pin.pin(), e);
            GpioError::CancelFailed
        })
    }
}

/// Claim the button and output lines described by `config`.
pub fn open_pins(
    config: &BridgeConfig,
) -> Result<(RpiEdgeSource, PinActuator<OutputPin>), GpioError> {
    let gpio = Gpio::new().map_err(|e| {
        error!("GPIO init failed: {}", e);
        GpioError::PinUnavailable
    })?;

    let claim = |bcm: u8| {
        gpio.get(bcm).map_err(|e| {
            error!("GPIO{} unavailable: {}", bcm, e);
            GpioError::PinUnavailable
        })
    };

    let button = claim(config.button_gpio)?;
    let input = match config.input_pull {
        InputPull::Off => button.into_input(),
        InputPull::Up => button.into_input_pullup(),
        InputPull::Down => button.into_input_pulldown(),
    };
    let output = claim(config.output_gpio)?.into_output_low();

    info!(
        "GPIO: button={} ({:?}), output={}",
        config.button_gpio, config.input_pull, config.output_gpio
    );
    Ok((RpiEdgeSource::new(input), PinActuator::new(output)))
}
