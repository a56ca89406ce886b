//! Port traits — the hexagonal boundary between bridge logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Bridge (domain)
//! ```
//!
//! Driven adapters (GPIO, serial, event sinks) implement these traits. The
//! [`Bridge`](super::service::Bridge) consumes them via generics, so the
//! domain core never touches hardware directly.
//!
//! The serial transport port lives in [`link::transport`](crate::link::transport).

use core::time::Duration;

use crate::error::GpioError;
use crate::events::{Edge, EdgeEvent};

// ───────────────────────────────────────────────────────────────
// Edge source port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Callback invoked from the platform's interrupt context.
/// Must not block.
pub type EdgeCallback = Box<dyn FnMut(EdgeEvent) + Send + 'static>;

/// A single owned handle to edge detection on one input line.
///
/// At most one registration is active; `watch` replaces nothing implicitly,
/// callers [`cancel`](Self::cancel) before re-arming.
pub trait EdgeSource {
    /// Watch for `edge`, suppressing transitions within `quiet` of the
    /// previous one, and invoke `callback` for each transition seen.
    fn watch(&mut self, edge: Edge, quiet: Duration, callback: EdgeCallback)
    -> Result<(), GpioError>;

    /// Remove the active registration. `Ok(())` if none was active.
    fn cancel(&mut self) -> Result<(), GpioError>;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

pub trait ActuatorPort {
    /// Drive the output line. `true` = energised.
    fn set_output(&mut self, on: bool) -> Result<(), GpioError>;

    /// Return the line to its safe default (off) during teardown.
    fn release(&mut self) -> Result<(), GpioError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`BridgeEvent`](super::events::BridgeEvent)s
/// through this port. Both bridge threads hold a clone.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::BridgeEvent);
}
