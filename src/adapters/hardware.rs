//! Hardware adapter — bridges an embedded-hal output pin to [`ActuatorPort`].
//!
//! Generic over any [`OutputPin`], so the same adapter drives an `rppal` pin
//! on the Pi and a simulated pin in tests.

use embedded_hal::digital::{OutputPin, PinState};
use log::error;

use crate::app::ports::ActuatorPort;
use crate::error::GpioError;

pub struct PinActuator<P> {
    pin: P,
}

impl<P: OutputPin> PinActuator<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> ActuatorPort for PinActuator<P> {
    fn set_output(&mut self, on: bool) -> Result<(), GpioError> {
        self.pin.set_state(PinState::from(on)).map_err(|e| {
            error!("Output write failed: {:?}", e);
            GpioError::WriteFailed
        })
    }

    fn release(&mut self) -> Result<(), GpioError> {
        self.pin.set_low().map_err(|e| {
            error!("Output release failed: {:?}", e);
            GpioError::WriteFailed
        })
    }
}
