//! Serial link plumbing.
//!
//! - [`transport`] — byte-oriented transport trait
//! - [`edge_task`] — edge queue consumer that writes the outbound bytes

pub mod edge_task;
pub mod transport;
