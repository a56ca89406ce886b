//! Transport abstraction — any byte-oriented serial channel.
//!
//! Concrete implementations:
//! - USB-UART adapter via `serialport` ([`SerialPortLink`](crate::adapters::serial::SerialPortLink))
//! - in-memory loopback in the integration tests
//!
//! Each bridge context owns its own handle; the reader and the writer never
//! share one.

use crate::error::LinkError;

pub trait SerialLink {
    /// Wait up to the link's poll slice for one byte.
    /// Returns `Ok(None)` if nothing arrived in that slice.
    fn read_byte(&mut self) -> Result<Option<u8>, LinkError>;

    /// Write one byte and flush it to the wire.
    fn write_byte(&mut self, byte: u8) -> Result<(), LinkError>;
}
