//! Edge task — turns debounced button edges into outbound serial bytes.
//!
//! Runs in a dedicated thread that owns the edge source and the serial
//! writer. The interrupt callback only pushes into the [`EdgeQueue`]; all
//! transport writes and re-arming happen here.
//!
//! ```text
//!  ┌──────────────────────────────────────────────────────┐
//!  │  edge-watch thread                                   │
//!  │  futures_lite::block_on(or(queue.next, shutdown))    │
//!  │     │                                                │
//!  │     ├─ Edge ─▶ EdgeWatcher ─▶ write byte             │
//!  │     │                        ─▶ cancel + re-arm      │
//!  │     └─ Stop ─▶ cancel, return stats                  │
//!  └──────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use std::thread::JoinHandle;

use futures_lite::future;
use log::{debug, info, warn};

use crate::app::events::BridgeEvent;
use crate::app::ports::{EdgeSource, EventSink};
use crate::drivers::edge_watcher::{ButtonAction, EdgeStats, EdgeVerdict, EdgeWatcher};
use crate::error::{Error, Result};
use crate::events::{Edge, EdgeEvent, EdgeQueue};
use crate::protocol;
use crate::shutdown::Shutdown;

use super::transport::SerialLink;

enum Wake {
    Edge(EdgeEvent),
    Stop,
}

pub struct EdgeTask<S, L, E> {
    source: S,
    link: L,
    sink: E,
    watcher: EdgeWatcher,
    queue: Arc<EdgeQueue>,
}

impl<S: EdgeSource, L: SerialLink, E: EventSink> EdgeTask<S, L, E> {
    pub fn new(source: S, link: L, sink: E, watcher: EdgeWatcher) -> Self {
        Self {
            source,
            link,
            sink,
            watcher,
            queue: Arc::new(EdgeQueue::new()),
        }
    }

    /// Arm the initial edge. Call before the mirror loop starts.
    pub fn start(&mut self) -> Result<()> {
        let armed = self.watcher.armed();
        self.arm(armed)?;
        info!("Edge watch armed for {:?} ({:?} quiet)", armed, self.watcher.quiet());
        self.sink.emit(&BridgeEvent::Started { armed });
        Ok(())
    }

    pub fn armed(&self) -> Edge {
        self.watcher.armed()
    }

    pub fn stats(&self) -> EdgeStats {
        self.watcher.stats()
    }

    /// Queue the interrupt callback feeds.
    pub fn queue(&self) -> &Arc<EdgeQueue> {
        &self.queue
    }

    fn arm(&mut self, edge: Edge) -> Result<()> {
        let queue = Arc::clone(&self.queue);
        self.source.watch(
            edge,
            self.watcher.quiet(),
            Box::new(move |event| {
                queue.push(event);
            }),
        )?;
        Ok(())
    }

    /// Process one edge: send exactly one byte if accepted, then re-arm for
    /// the opposite direction.
    pub fn handle(&mut self, event: EdgeEvent) -> Result<Option<ButtonAction>> {
        match self.watcher.on_edge(event) {
            EdgeVerdict::Accepted(action) => {
                let byte = protocol::encode(action);
                self.link.write_byte(byte)?;
                self.source.cancel()?;
                self.arm(self.watcher.armed())?;
                debug!("Button {:?} -> '{}'", action, byte as char);
                self.sink.emit(&BridgeEvent::ButtonChanged { action, byte });
                Ok(Some(action))
            }
            EdgeVerdict::Ignored(reason) => {
                debug!("Edge {:?} ignored: {:?}", event.edge, reason);
                self.sink.emit(&BridgeEvent::EdgeIgnored {
                    edge: event.edge,
                    reason,
                });
                Ok(None)
            }
        }
    }

    /// Drain every queued edge without waiting. Returns how many were handled.
    pub fn poll(&mut self) -> Result<usize> {
        let mut handled = 0;
        while let Some(event) = self.queue.try_pop() {
            self.handle(event)?;
            handled += 1;
        }
        Ok(handled)
    }

    /// Handle edges until shutdown is requested, then drop the registration.
    pub fn run(&mut self, shutdown: &Shutdown) -> Result<EdgeStats> {
        while !shutdown.is_requested() {
            let queue = Arc::clone(&self.queue);
            let wake = future::block_on(future::or(
                async { Wake::Edge(queue.next().await) },
                async {
                    shutdown.wait().await;
                    Wake::Stop
                },
            ));
            match wake {
                Wake::Edge(event) => {
                    self.handle(event)?;
                }
                Wake::Stop => break,
            }
        }

        self.source.cancel()?;
        info!("Edge watch stopped");
        Ok(self.watcher.stats())
    }
}

impl<S, L, E> EdgeTask<S, L, E>
where
    S: EdgeSource + Send + 'static,
    L: SerialLink + Send + 'static,
    E: EventSink + Send + 'static,
{
    /// Move the task onto its own thread. A task that fails requests
    /// shutdown so the mirror loop stops too.
    pub fn spawn(mut self, shutdown: Arc<Shutdown>) -> Result<JoinHandle<Result<EdgeStats>>> {
        std::thread::Builder::new()
            .name("edge-watch".into())
            .spawn(move || {
                let result = self.run(&shutdown);
                if let Err(e) = &result {
                    warn!("Edge task failed: {}", e);
                    shutdown.request();
                }
                result
            })
            .map_err(|_| Error::Init("edge task spawn failed"))
    }
}
