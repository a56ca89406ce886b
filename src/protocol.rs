//! Single-byte wire alphabet.
//!
//! | Byte  | Outbound (button)  | Inbound (output)   |
//! |-------|--------------------|--------------------|
//! | `'1'` | pressed            | drive output on    |
//! | `'0'` | released           | drive output off   |
//! | other | never sent         | drive output off   |
//!
//! No framing, checksum, or handshake.

use crate::drivers::edge_watcher::ButtonAction;

pub const PRESSED: u8 = b'1';
pub const RELEASED: u8 = b'0';

/// Byte sent to the peer for a button transition.
pub const fn encode(action: ButtonAction) -> u8 {
    match action {
        ButtonAction::Pressed => PRESSED,
        ButtonAction::Released => RELEASED,
    }
}

/// Output level for a byte received from the peer.
pub const fn output_level(byte: u8) -> bool {
    byte == PRESSED
}
