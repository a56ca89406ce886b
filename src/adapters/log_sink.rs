//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured bridge events to the
//! `log` facade. Button and shutdown events log at `info`; per-byte mirror
//! traffic logs at `debug`.

use log::{debug, info};

use crate::app::events::BridgeEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`BridgeEvent`]. Zero-sized, cloned into each
/// bridge thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &BridgeEvent) {
        match event {
            BridgeEvent::Started { armed } => {
                info!("START | armed={:?}", armed);
            }
            BridgeEvent::ButtonChanged { action, byte } => {
                info!("BUTTON | {:?} | sent '{}'", action, *byte as char);
            }
            BridgeEvent::EdgeIgnored { edge, reason } => {
                debug!("EDGE | {:?} ignored ({:?})", edge, reason);
            }
            BridgeEvent::OutputSet { byte, on } => {
                debug!(
                    "OUTPUT | rx=0x{:02x} | {}",
                    byte,
                    if *on { "ON" } else { "OFF" }
                );
            }
            BridgeEvent::Stopped(r) => {
                info!(
                    "STOP | presses={} releases={} ignored={} mirrored={}",
                    r.presses, r.releases, r.ignored_edges, r.bytes_mirrored
                );
            }
        }
    }
}
