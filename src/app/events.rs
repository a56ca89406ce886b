//! Outbound bridge events.
//!
//! Emitted through the [`EventSink`](super::ports::EventSink) port. Adapters
//! on the other side decide what to do with them.

use crate::drivers::edge_watcher::{ButtonAction, EdgeStats, IgnoreReason};
use crate::events::Edge;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeEvent {
    /// Edge detection armed for the first time.
    Started { armed: Edge },

    /// A button transition was accepted and sent to the peer.
    ButtonChanged { action: ButtonAction, byte: u8 },

    /// An edge was seen but not forwarded.
    EdgeIgnored { edge: Edge, reason: IgnoreReason },

    /// A byte from the peer was mirrored onto the output.
    OutputSet { byte: u8, on: bool },

    /// Graceful shutdown finished; carries the session totals.
    Stopped(BridgeReport),
}

/// Session totals reported on graceful shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BridgeReport {
    pub presses: u32,
    pub releases: u32,
    pub ignored_edges: u32,
    pub bytes_mirrored: u32,
}

impl BridgeReport {
    pub fn new(edges: EdgeStats, bytes_mirrored: u32) -> Self {
        Self {
            presses: edges.presses,
            releases: edges.releases,
            ignored_edges: edges.ignored,
            bytes_mirrored,
        }
    }
}
