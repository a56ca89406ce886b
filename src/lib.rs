//! LedBridge library.
//!
//! Exposes the pure-logic modules for integration testing. Raspberry Pi
//! specific code is guarded by the `rpi` feature inside [`adapters`].

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod events;
pub mod link;
pub mod protocol;
pub mod shutdown;

pub mod adapters;
pub mod pins;
