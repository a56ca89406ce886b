//! GPIO / serial assignments for the LedBridge board.
//!
//! Single source of truth — the default [`BridgeConfig`](crate::config::BridgeConfig)
//! is built from these constants rather than hard-coding numbers elsewhere.
//!
//! Pin numbers use Broadcom (BCM) numbering, not physical header positions.

// ---------------------------------------------------------------------------
// Actuator
// ---------------------------------------------------------------------------

/// Digital output: LED (or relay) mirrored from the serial peer. HIGH = on.
pub const OUTPUT_GPIO: u8 = 17;

// ---------------------------------------------------------------------------
// User button
// ---------------------------------------------------------------------------

/// Momentary push-button. Wired so the line rises on press.
pub const BUTTON_GPIO: u8 = 27;

/// Quiet period after each accepted edge (milliseconds).
pub const DEBOUNCE_MS: u32 = 50;

// ---------------------------------------------------------------------------
// Serial link (USB-UART adapter)
// ---------------------------------------------------------------------------

pub const SERIAL_DEVICE: &str = "/dev/ttyUSB0";
pub const SERIAL_BAUD: u32 = 9600;

/// Read slice for the mirror loop. A read returns empty after this long so the
/// loop can observe a shutdown request; it is not a protocol timeout.
pub const SERIAL_POLL_MS: u32 = 100;
