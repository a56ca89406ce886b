//! Bridge service — the hexagonal core.
//!
//! [`Bridge`] wires the edge task and the output mirror to their ports and
//! owns the lifecycle: arm, run, teardown.
//!
//! ```text
//!  EdgeSource ──▶ ┌─────────────────────────┐ ──▶ SerialLink (writer)
//!                 │         Bridge          │
//!  SerialLink ──▶ │  EdgeTask · OutputMirror│ ──▶ ActuatorPort
//!   (reader)      └─────────────────────────┘ ──▶ EventSink
//! ```
//!
//! Teardown runs once, only on a graceful exit. A transport or GPIO error
//! stops the bridge and leaves the output at its last level.

use std::sync::Arc;

use log::{info, warn};

use crate::config::BridgeConfig;
use crate::drivers::edge_watcher::EdgeWatcher;
use crate::drivers::output_mirror::OutputMirror;
use crate::error::{Error, Result};
use crate::link::edge_task::EdgeTask;
use crate::link::transport::SerialLink;
use crate::shutdown::Shutdown;

use super::events::{BridgeEvent, BridgeReport};
use super::ports::{ActuatorPort, EdgeSource, EventSink};

pub struct Bridge<S, L, A, E> {
    config: BridgeConfig,
    source: S,
    reader: L,
    writer: L,
    actuator: A,
    sink: E,
    shutdown: Arc<Shutdown>,
}

impl<S, L, A, E> Bridge<S, L, A, E>
where
    S: EdgeSource + Send + 'static,
    L: SerialLink + Send + 'static,
    A: ActuatorPort,
    E: EventSink + Clone + Send + 'static,
{
    /// `reader` and `writer` are two handles to the same serial device.
    pub fn new(
        config: BridgeConfig,
        source: S,
        reader: L,
        writer: L,
        actuator: A,
        sink: E,
        shutdown: Arc<Shutdown>,
    ) -> Self {
        Self {
            config,
            source,
            reader,
            writer,
            actuator,
            sink,
            shutdown,
        }
    }

    /// Arm edge detection, mirror until shutdown, then tear down.
    pub fn run(self) -> Result<BridgeReport> {
        let Self {
            config,
            source,
            mut reader,
            writer,
            actuator,
            mut sink,
            shutdown,
        } = self;

        config.validate()?;

        // ── Startup: arm before entering the read loop ────────
        let watcher = EdgeWatcher::new(config.polarity, config.debounce());
        let mut edge_task = EdgeTask::new(source, writer, sink.clone(), watcher);
        edge_task.start()?;
        let edge_handle = edge_task.spawn(Arc::clone(&shutdown))?;

        // ── Main loop ─────────────────────────────────────────
        let mut mirror = OutputMirror::new(actuator);
        let mirror_result = mirror.run(&mut reader, &shutdown, &mut sink);

        // Whatever ended the loop, the edge task must stop too.
        shutdown.request();
        let edge_result = edge_handle.join().map_err(|_| Error::TaskPanicked)?;

        let mirrored = mirror_result.inspect_err(|e| warn!("Output mirror failed: {}", e))?;
        let edge_stats = edge_result?;

        // ── Teardown ──────────────────────────────────────────
        mirror.release()?;
        let report = BridgeReport::new(edge_stats, mirrored);
        sink.emit(&BridgeEvent::Stopped(report));
        info!("Bridge stopped cleanly");
        Ok(report)
    }
}
