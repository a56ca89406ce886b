//! Mock hardware for integration tests.
//!
//! Every mock is a cheap `Clone` over shared state, so a test keeps one
//! handle while the bridge owns (and may move to another thread) the other.

use core::time::Duration;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use ledbridge::app::events::BridgeEvent;
use ledbridge::app::ports::{ActuatorPort, EdgeCallback, EdgeSource, EventSink};
use ledbridge::error::{GpioError, LinkError};
use ledbridge::events::{Edge, EdgeEvent};
use ledbridge::link::transport::SerialLink;

// ── MockEdgeSource ────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceCall {
    Watch { edge: Edge, quiet: Duration },
    Cancel,
}

#[derive(Default)]
struct SourceState {
    armed: Option<Edge>,
    callback: Option<EdgeCallback>,
    calls: Vec<SourceCall>,
}

#[derive(Clone, Default)]
pub struct MockEdgeSource {
    state: Arc<Mutex<SourceState>>,
}

#[allow(dead_code)]
impl MockEdgeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn armed(&self) -> Option<Edge> {
        self.state.lock().unwrap().armed
    }

    pub fn calls(&self) -> Vec<SourceCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Simulate a hardware transition. Like a real edge detector, only the
    /// armed direction reaches the callback. Returns whether it fired.
    pub fn trigger(&self, edge: Edge, at_ms: u64) -> bool {
        let mut state = self.state.lock().unwrap();
        if state.armed != Some(edge) {
            return false;
        }
        match state.callback.as_mut() {
            Some(cb) => {
                cb(EdgeEvent::new(edge, Duration::from_millis(at_ms)));
                true
            }
            None => false,
        }
    }

    /// Invoke the callback regardless of the armed direction (a late
    /// interrupt racing a re-arm).
    pub fn trigger_raw(&self, edge: Edge, at_ms: u64) -> bool {
        let mut state = self.state.lock().unwrap();
        match state.callback.as_mut() {
            Some(cb) => {
                cb(EdgeEvent::new(edge, Duration::from_millis(at_ms)));
                true
            }
            None => false,
        }
    }
}

impl EdgeSource for MockEdgeSource {
    fn watch(
        &mut self,
        edge: Edge,
        quiet: Duration,
        callback: EdgeCallback,
    ) -> Result<(), GpioError> {
        let mut state = self.state.lock().unwrap();
        state.armed = Some(edge);
        state.callback = Some(callback);
        state.calls.push(SourceCall::Watch { edge, quiet });
        Ok(())
    }

    fn cancel(&mut self) -> Result<(), GpioError> {
        let mut state = self.state.lock().unwrap();
        state.armed = None;
        state.callback = None;
        state.calls.push(SourceCall::Cancel);
        Ok(())
    }
}

// ── MockLink (loopback buffers) ───────────────────────────────

#[derive(Default)]
struct LinkState {
    inbound: VecDeque<u8>,
    outbound: Vec<u8>,
    fail_reads: bool,
    fail_writes: bool,
}

#[derive(Clone, Default)]
pub struct MockLink {
    state: Arc<Mutex<LinkState>>,
}

#[allow(dead_code)]
impl MockLink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a byte as if the peer had sent it.
    pub fn inject(&self, byte: u8) {
        self.state.lock().unwrap().inbound.push_back(byte);
    }

    pub fn outbound(&self) -> Vec<u8> {
        self.state.lock().unwrap().outbound.clone()
    }

    pub fn fail_reads(&self) {
        self.state.lock().unwrap().fail_reads = true;
    }

    pub fn fail_writes(&self) {
        self.state.lock().unwrap().fail_writes = true;
    }
}

impl SerialLink for MockLink {
    fn read_byte(&mut self) -> Result<Option<u8>, LinkError> {
        {
            let mut state = self.state.lock().unwrap();
            if state.fail_reads {
                return Err(LinkError::ReadFailed);
            }
            if let Some(b) = state.inbound.pop_front() {
                return Ok(Some(b));
            }
        }
        // Empty poll slice.
        std::thread::sleep(Duration::from_millis(1));
        Ok(None)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), LinkError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(LinkError::WriteFailed);
        }
        state.outbound.push(byte);
        Ok(())
    }
}

// ── MockActuator ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    SetOutput(bool),
    Release,
}

#[derive(Clone, Default)]
pub struct MockActuator {
    calls: Arc<Mutex<Vec<ActuatorCall>>>,
}

#[allow(dead_code)]
impl MockActuator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ActuatorCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Level of the most recent `SetOutput`, ignoring teardown.
    pub fn level(&self) -> Option<bool> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|c| match c {
                ActuatorCall::SetOutput(on) => Some(*on),
                ActuatorCall::Release => None,
            })
    }

    pub fn set_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, ActuatorCall::SetOutput(_)))
            .count()
    }
}

impl ActuatorPort for MockActuator {
    fn set_output(&mut self, on: bool) -> Result<(), GpioError> {
        self.calls.lock().unwrap().push(ActuatorCall::SetOutput(on));
        Ok(())
    }

    fn release(&mut self) -> Result<(), GpioError> {
        self.calls.lock().unwrap().push(ActuatorCall::Release);
        Ok(())
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<BridgeEvent>>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<BridgeEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &BridgeEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

/// Poll `cond` until it holds or two seconds pass.
#[allow(dead_code)]
pub fn wait_until(mut cond: impl FnMut() -> bool) -> bool {
    let deadline = std::time::Instant::now() + Duration::from_secs(2);
    while std::time::Instant::now() < deadline {
        if cond() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(2));
    }
    cond()
}
