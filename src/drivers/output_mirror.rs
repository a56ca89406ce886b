//! Output mirror — one byte in, one bit out.
//!
//! Reads the serial link one byte at a time and drives the actuator to
//! `byte == '1'`. Every byte produces an unconditional write; no previous
//! level is consulted.
//!
//! The read is sliced by the link's poll interval so a shutdown request is
//! observed between slices. A transport error ends the loop immediately and
//! leaves the output at its last level.

use log::{debug, info};

use crate::app::events::BridgeEvent;
use crate::app::ports::{ActuatorPort, EventSink};
use crate::error::Result;
use crate::link::transport::SerialLink;
use crate::protocol;
use crate::shutdown::Shutdown;

pub struct OutputMirror<A> {
    actuator: A,
    level: Option<bool>,
    mirrored: u32,
}

impl<A: ActuatorPort> OutputMirror<A> {
    pub fn new(actuator: A) -> Self {
        Self {
            actuator,
            level: None,
            mirrored: 0,
        }
    }

    /// Last level written, `None` before the first byte.
    pub fn level(&self) -> Option<bool> {
        self.level
    }

    /// Total bytes applied. Wraps on overflow.
    pub fn mirrored(&self) -> u32 {
        self.mirrored
    }

    /// Drive the output from one received byte.
    pub fn apply(&mut self, byte: u8) -> Result<bool> {
        let on = protocol::output_level(byte);
        self.actuator.set_output(on)?;
        self.level = Some(on);
        self.mirrored = self.mirrored.wrapping_add(1);
        Ok(on)
    }

    /// Mirror bytes until shutdown is requested. Returns the number of
    /// bytes mirrored during this call, modulo 2^32.
    pub fn run<L, E>(&mut self, link: &mut L, shutdown: &Shutdown, sink: &mut E) -> Result<u32>
    where
        L: SerialLink,
        E: EventSink,
    {
        let start = self.mirrored;
        info!("Output mirror running");

        while !shutdown.is_requested() {
            let Some(byte) = link.read_byte()? else {
                continue;
            };
            let on = self.apply(byte)?;
            debug!("Mirror 0x{:02x} -> {}", byte, if on { "ON" } else { "OFF" });
            sink.emit(&BridgeEvent::OutputSet { byte, on });
        }

        info!("Output mirror stopped");
        Ok(self.mirrored.wrapping_sub(start))
    }

    /// Teardown: drive the output to its safe default. Consumes the mirror
    /// so nothing can write afterwards.
    pub fn release(mut self) -> Result<()> {
        self.actuator.release()?;
        Ok(())
    }
}
