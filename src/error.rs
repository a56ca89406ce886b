//! Unified error types for the bridge.
//!
//! A single `Error` enum that every subsystem converts into. All variants are
//! `Copy`; adapters log the underlying driver error where it happens and
//! return the typed variant.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The serial link failed.
    Link(LinkError),
    /// A GPIO operation failed.
    Gpio(GpioError),
    /// Startup could not complete.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
    /// The edge task thread panicked.
    TaskPanicked,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link(e) => write!(f, "serial: {e}"),
            Self::Gpio(e) => write!(f, "gpio: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::TaskPanicked => write!(f, "edge task panicked"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Serial link errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// The device could not be opened or cloned.
    OpenFailed,
    ReadFailed,
    WriteFailed,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenFailed => write!(f, "open failed"),
            Self::ReadFailed => write!(f, "read failed"),
            Self::WriteFailed => write!(f, "write failed"),
        }
    }
}

impl std::error::Error for LinkError {}

impl From<LinkError> for Error {
    fn from(e: LinkError) -> Self {
        Self::Link(e)
    }
}

// ---------------------------------------------------------------------------
// GPIO errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioError {
    /// The pin is missing or already claimed.
    PinUnavailable,
    /// Edge detection could not be registered.
    ArmFailed,
    /// Edge detection could not be removed.
    CancelFailed,
    /// Output level could not be set.
    WriteFailed,
}

impl fmt::Display for GpioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PinUnavailable => write!(f, "pin unavailable"),
            Self::ArmFailed => write!(f, "edge arm failed"),
            Self::CancelFailed => write!(f, "edge cancel failed"),
            Self::WriteFailed => write!(f, "output write failed"),
        }
    }
}

impl std::error::Error for GpioError {}

impl From<GpioError> for Error {
    fn from(e: GpioError) -> Self {
        Self::Gpio(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

pub type Result<T> = core::result::Result<T, Error>;
