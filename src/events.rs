//! Interrupt-driven edge events.
//!
//! Edge events are produced by the GPIO interrupt callback and consumed by
//! the edge task, which owns the edge source and the serial writer.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ GPIO ISR    │────▶│  Edge Queue  │────▶│  Edge Task   │──▶ serial
//! │ (callback)  │     │  (bounded)   │     │  (thread)    │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! The callback only ever calls [`EdgeQueue::push`], which never blocks.

use core::time::Duration;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use log::warn;

/// Maximum number of pending edge events.
pub const EDGE_QUEUE_CAP: usize = 8;

/// Direction of a digital transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Low → high.
    Rising,
    /// High → low.
    Falling,
}

impl Edge {
    pub const fn opposite(self) -> Self {
        match self {
            Self::Rising => Self::Falling,
            Self::Falling => Self::Rising,
        }
    }
}

/// One transition reported by the edge source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeEvent {
    pub edge: Edge,
    /// Monotonic timestamp of the transition.
    pub at: Duration,
}

impl EdgeEvent {
    pub const fn new(edge: Edge, at: Duration) -> Self {
        Self { edge, at }
    }
}

/// Bounded queue between the interrupt callback and the edge task.
pub struct EdgeQueue {
    channel: Channel<CriticalSectionRawMutex, EdgeEvent, EDGE_QUEUE_CAP>,
}

impl EdgeQueue {
    pub const fn new() -> Self {
        Self {
            channel: Channel::new(),
        }
    }

    /// Push an event. Safe to call from interrupt context.
    /// Returns `false` if the queue is full (event dropped).
    pub fn push(&self, event: EdgeEvent) -> bool {
        if self.channel.try_send(event).is_err() {
            warn!("Edge queue full, dropping {:?}", event.edge);
            return false;
        }
        true
    }

    /// Pop the next event without waiting.
    pub fn try_pop(&self) -> Option<EdgeEvent> {
        self.channel.try_receive().ok()
    }

    /// Wait for the next event.
    pub async fn next(&self) -> EdgeEvent {
        self.channel.receive().await
    }

    pub fn len(&self) -> usize {
        self.channel.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channel.is_empty()
    }
}

impl Default for EdgeQueue {
    fn default() -> Self {
        Self::new()
    }
}
