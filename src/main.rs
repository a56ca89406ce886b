//! LedBridge — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  RpiEdgeSource   PinActuator   SerialPortLink ×2         │
//! │  (EdgeSource)    (Actuator)    (reader / writer)         │
//! │  LogEventSink    signal::install                         │
//! │                                                          │
//! │  ──────────────── Port Trait Boundary ─────────────      │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │  Bridge: EdgeTask (thread) · OutputMirror (main)   │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use ledbridge::adapters::log_sink::LogEventSink;
use ledbridge::adapters::serial::SerialPortLink;
use ledbridge::adapters::{rpi, signal};
use ledbridge::app::service::Bridge;
use ledbridge::config::BridgeConfig;
use ledbridge::shutdown::Shutdown;

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("LedBridge v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Fixed configuration ────────────────────────────────
    let config = BridgeConfig::default();
    config.validate()?;

    // ── 3. Peripherals ────────────────────────────────────────
    let (source, actuator) = rpi::open_pins(&config).context("GPIO setup")?;
    let reader = SerialPortLink::open(&config).context("serial open")?;
    let writer = reader.try_clone().context("serial clone")?;

    // ── 4. Termination signal ─────────────────────────────────
    let shutdown = Arc::new(Shutdown::new());
    signal::install(&shutdown)?;

    // ── 5. Run until SIGINT / SIGTERM ─────────────────────────
    info!("System ready. Press Ctrl-C to stop.");
    let report = Bridge::new(
        config,
        source,
        reader,
        writer,
        actuator,
        LogEventSink::new(),
        shutdown,
    )
    .run()?;

    info!(
        "Session: {} presses, {} releases, {} bytes mirrored",
        report.presses, report.releases, report.bytes_mirrored
    );
    Ok(())
}
