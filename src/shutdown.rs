//! Cooperative shutdown token.
//!
//! Set once from the signal handler (or from a failing task). The mirror
//! loop polls [`Shutdown::is_requested`] between read slices; the edge task
//! awaits [`Shutdown::wait`] alongside its event queue.

use core::sync::atomic::{AtomicBool, Ordering};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

pub struct Shutdown {
    requested: AtomicBool,
    /// Wakes the single async waiter (the edge task).
    notify: Signal<CriticalSectionRawMutex, ()>,
}

impl Shutdown {
    pub const fn new() -> Self {
        Self {
            requested: AtomicBool::new(false),
            notify: Signal::new(),
        }
    }

    /// Request shutdown. Idempotent, safe from a signal handler thread.
    pub fn request(&self) {
        if !self.requested.swap(true, Ordering::AcqRel) {
            self.notify.signal(());
        }
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }

    /// Resolve once shutdown has been requested.
    pub async fn wait(&self) {
        if self.is_requested() {
            return;
        }
        self.notify.wait().await;
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
