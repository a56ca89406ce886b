//! `serialport` implementation of [`SerialLink`].
//!
//! The port is opened with the poll slice as its read timeout, so a read
//! with no traffic returns `Ok(None)` instead of blocking forever. The
//! writer half is a [`try_clone`](SerialPortLink::try_clone) of the reader.

use std::io::{ErrorKind, Read, Write};

use log::{error, info};
use serialport::SerialPort;

use crate::config::BridgeConfig;
use crate::error::LinkError;
use crate::link::transport::SerialLink;

pub struct SerialPortLink {
    port: Box<dyn SerialPort>,
}

impl SerialPortLink {
    /// Open the configured device at 8N1, no flow control.
    pub fn open(config: &BridgeConfig) -> Result<Self, LinkError> {
        let port = serialport::new(config.serial_device, config.baud_rate)
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .flow_control(serialport::FlowControl::None)
            .timeout(config.serial_poll())
            .open()
            .map_err(|e| {
                error!("Serial open {} failed: {}", config.serial_device, e);
                LinkError::OpenFailed
            })?;
        info!(
            "Serial {} open @ {} baud",
            config.serial_device, config.baud_rate
        );
        Ok(Self { port })
    }

    /// Second handle to the same device, for the other bridge context.
    pub fn try_clone(&self) -> Result<Self, LinkError> {
        let port = self.port.try_clone().map_err(|e| {
            error!("Serial clone failed: {}", e);
            LinkError::OpenFailed
        })?;
        Ok(Self { port })
    }
}

impl SerialLink for SerialPortLink {
    fn read_byte(&mut self) -> Result<Option<u8>, LinkError> {
        let mut buf = [0u8; 1];
        match self.port.read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::Interrupted) => {
                Ok(None)
            }
            Err(e) => {
                error!("Serial read failed: {}", e);
                Err(LinkError::ReadFailed)
            }
        }
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), LinkError> {
        self.port
            .write_all(&[byte])
            .and_then(|()| self.port.flush())
            .map_err(|e| {
                error!("Serial write failed: {}", e);
                LinkError::WriteFailed
            })
    }
}
